// SPDX-License-Identifier: Apache-2.0

//! Feed categories and the API paths that serve them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::messages::Language;

/// One category of timeline records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// Hacking incidents.
    Hacking,
    /// Fund transfers.
    Transfers,
}

impl FeedKind {
    /// All feeds, in tab order.
    pub const ALL: [FeedKind; 2] = [FeedKind::Hacking, FeedKind::Transfers];

    /// API path prefix shared by this feed's endpoints.
    #[must_use]
    pub fn api_prefix(self) -> &'static str {
        match self {
            FeedKind::Hacking => "/v1/hacking",
            FeedKind::Transfers => "/v1/transfer",
        }
    }

    /// Path of the tag catalog endpoint.
    #[must_use]
    pub fn tags_path(self) -> String {
        format!("{}/tags", self.api_prefix())
    }

    /// Path of the newest-page endpoint.
    #[must_use]
    pub fn latest_path(self) -> String {
        format!("{}/latest-infos", self.api_prefix())
    }

    /// Path of the older-page endpoint.
    #[must_use]
    pub fn previous_path(self) -> String {
        format!("{}/prev-infos", self.api_prefix())
    }

    /// Tab label.
    #[must_use]
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (FeedKind::Hacking, Language::En) => "Hacking incidents",
            (FeedKind::Hacking, Language::Ja) => "ハッキング情報",
            (FeedKind::Transfers, Language::En) => "Transfers",
            (FeedKind::Transfers, Language::Ja) => "送金情報",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Hacking => f.write_str("hacking"),
            FeedKind::Transfers => f.write_str("transfers"),
        }
    }
}

impl FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hacking" | "hacks" => Ok(FeedKind::Hacking),
            "transfers" | "transfer" => Ok(FeedKind::Transfers),
            other => Err(format!(
                "unknown feed '{other}' (expected hacking or transfers)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hacking_paths() {
        assert_eq!(FeedKind::Hacking.tags_path(), "/v1/hacking/tags");
        assert_eq!(FeedKind::Hacking.latest_path(), "/v1/hacking/latest-infos");
        assert_eq!(FeedKind::Hacking.previous_path(), "/v1/hacking/prev-infos");
    }

    #[test]
    fn transfer_paths_use_own_prefix() {
        assert_eq!(FeedKind::Transfers.tags_path(), "/v1/transfer/tags");
    }

    #[test]
    fn parse_round_trips_display() {
        for feed in FeedKind::ALL {
            assert_eq!(feed.to_string().parse::<FeedKind>(), Ok(feed));
        }
        assert!("scams".parse::<FeedKind>().is_err());
    }
}
