// SPDX-License-Identifier: Apache-2.0

//! Card view model for a single record.
//!
//! [`Card::build`] is a pure function of one record plus the current tag
//! selection: it formats the report timestamp, turns tags into pills and
//! derives the outbound verification links. Front ends only decide how to
//! draw the result.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::config::{ExplorerConfig, UiConfig};
use crate::messages::{Language, Message};
use crate::model::{HackingInfo, Incident, Record, TransferInfo};

/// Length of a hex account address including the `0x` prefix.
pub const ADDRESS_LEN: usize = 42;

/// Settings a card needs from configuration.
#[derive(Debug, Clone)]
pub struct CardOptions {
    /// Language of labels and the default date pattern.
    pub language: Language,
    /// strftime pattern for report timestamps.
    pub date_pattern: String,
    /// Explorer base URLs.
    pub explorer: ExplorerConfig,
}

impl CardOptions {
    /// Builds options from the loaded configuration.
    #[must_use]
    pub fn from_config(ui: &UiConfig, explorer: &ExplorerConfig) -> Self {
        Self {
            language: ui.language,
            date_pattern: ui.date_pattern().to_string(),
            explorer: explorer.clone(),
        }
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self::from_config(&UiConfig::default(), &ExplorerConfig::default())
    }
}

/// A tag rendered on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pill {
    /// Tag name.
    pub name: String,
    /// Whether the tag is part of the active selection.
    pub selected: bool,
}

/// Tag area of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pills")]
pub enum TagPills {
    /// At least one tag.
    Pills(Vec<Pill>),
    /// Explicit placeholder for records without tags.
    NoTags,
}

/// An outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Short label ("Details", "From", "To").
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Presentation of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Record identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Report timestamp as sent by the server.
    pub report_time: String,
    /// Report timestamp formatted for display.
    pub timestamp: String,
    /// Label/value detail rows.
    pub fields: Vec<(String, String)>,
    /// Tag pills or the placeholder.
    pub tags: TagPills,
    /// Outbound links.
    pub links: Vec<Link>,
}

impl Card {
    /// Builds the card of `record` in the viewer's local timezone.
    #[must_use]
    pub fn build(record: &Record, selected: &[String], options: &CardOptions) -> Self {
        Self::build_in(record, selected, options, &Local)
    }

    /// Builds the card of `record` with timestamps shown in `tz`.
    #[must_use]
    pub fn build_in<Tz>(
        record: &Record,
        selected: &[String],
        options: &CardOptions,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let (title, fields, links) = match record {
            Record::Hacking(info) => hacking_parts(info, options),
            Record::Transfer(info) => transfer_parts(info, options),
            Record::Incident(info) => incident_parts(info, options),
        };

        Self {
            id: record.id().to_string(),
            title,
            report_time: record.report_time().to_string(),
            timestamp: format_report_time(record.report_time(), &options.date_pattern, tz),
            fields,
            tags: tag_pills(record, selected),
            links,
        }
    }
}

type Parts = (String, Vec<(String, String)>, Vec<Link>);

fn hacking_parts(info: &HackingInfo, options: &CardOptions) -> Parts {
    let fields = vec![
        ("Network".to_string(), info.network.clone()),
        ("Amount".to_string(), info.amount.clone()),
    ];
    let links = vec![Link {
        label: Message::Details.text(options.language).to_string(),
        url: explorer_link(&options.explorer.blockscan_url, &info.tx_hash),
    }];
    (info.protocol.clone(), fields, links)
}

fn transfer_parts(info: &TransferInfo, options: &CardOptions) -> Parts {
    let fields = vec![
        ("From".to_string(), info.from.clone()),
        ("To".to_string(), info.to.clone()),
    ];
    let links = vec![
        Link {
            label: "From".to_string(),
            url: address_link(&options.explorer.etherscan_url, &info.from),
        },
        Link {
            label: "To".to_string(),
            url: address_link(&options.explorer.etherscan_url, &info.to),
        },
    ];
    (format!("{} {}", info.token, info.amount), fields, links)
}

fn incident_parts(info: &Incident, options: &CardOptions) -> Parts {
    let mut fields = Vec::new();
    if !info.summary.is_empty() {
        fields.push(("Summary".to_string(), info.summary.clone()));
    }
    let links = vec![Link {
        label: Message::Details.text(options.language).to_string(),
        url: info.source_url.clone(),
    }];
    (info.title.clone(), fields, links)
}

fn tag_pills(record: &Record, selected: &[String]) -> TagPills {
    let tags = record.tags();
    if tags.is_empty() {
        return TagPills::NoTags;
    }
    TagPills::Pills(
        tags.iter()
            .map(|tag| Pill {
                name: tag.name.clone(),
                selected: selected.contains(&tag.name),
            })
            .collect(),
    )
}

/// Whether `pattern` only contains strftime specifiers chrono understands.
#[must_use]
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats an RFC 3339 timestamp in `tz` with `pattern`.
///
/// Timestamps that do not parse, or a pattern chrono cannot apply, yield the
/// raw timestamp unchanged.
#[must_use]
pub fn format_report_time<Tz>(raw: &str, pattern: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) else {
        return raw.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", dt.with_timezone(tz).format(pattern)) {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}

/// Explorer link for a hash-or-address value.
///
/// A 42-character value is an account address; anything else is treated as
/// a transaction hash.
#[must_use]
pub fn explorer_link(base: &str, value: &str) -> String {
    let kind = if value.chars().count() == ADDRESS_LEN {
        "address"
    } else {
        "tx"
    };
    format!(
        "{}/{kind}/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(value, NON_ALPHANUMERIC)
    )
}

/// Explorer link for an account address.
#[must_use]
pub fn address_link(base: &str, address: &str) -> String {
    format!(
        "{}/address/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}
