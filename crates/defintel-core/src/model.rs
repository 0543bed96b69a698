// SPDX-License-Identifier: Apache-2.0

//! Record types returned by the feed API.
//!
//! The API is serving more than one response shape. Field names follow the
//! wire format exactly (`PascalCase` for the feed-specific shapes, `snake_case`
//! for the generic incident shape), and [`Record`] decodes whichever shape
//! arrives.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A user-selectable category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name, also used as the filter value.
    #[serde(rename = "Name")]
    pub name: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A reported hack or exploit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HackingInfo {
    /// Opaque identifier (numeric in practice).
    #[serde(rename = "ID")]
    pub id: String,
    /// Affected protocol.
    pub protocol: String,
    /// Chain the incident happened on.
    pub network: String,
    /// Amount lost, as reported.
    pub amount: String,
    /// Transaction hash, or the attacker address.
    pub tx_hash: String,
    /// RFC 3339 report timestamp.
    pub report_time: String,
    /// Attached tags; the server sends `null` for none.
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// A reported fund transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferInfo {
    /// Opaque identifier (numeric in practice).
    #[serde(rename = "ID")]
    pub id: String,
    /// Token symbol.
    pub token: String,
    /// Amount transferred, as reported.
    pub amount: String,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// RFC 3339 report timestamp.
    pub report_time: String,
    /// Attached tags; the server sends `null` for none.
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// A generic narrative incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Opaque identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub summary: String,
    /// Where the incident was reported.
    pub source_url: String,
    /// RFC 3339 report timestamp.
    pub reported_at: String,
    /// Attached tags.
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// One feed entry, whichever shape the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// Hacking incident with protocol/network/hash.
    Hacking(HackingInfo),
    /// Fund transfer between two addresses.
    Transfer(TransferInfo),
    /// Narrative incident with a source link.
    Incident(Incident),
}

impl Record {
    /// Opaque identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Record::Hacking(r) => &r.id,
            Record::Transfer(r) => &r.id,
            Record::Incident(r) => &r.id,
        }
    }

    /// Identifier as a number, if it is one.
    #[must_use]
    pub fn numeric_id(&self) -> Option<i64> {
        self.id().trim().parse().ok()
    }

    /// Raw report timestamp as sent by the server.
    #[must_use]
    pub fn report_time(&self) -> &str {
        match self {
            Record::Hacking(r) => &r.report_time,
            Record::Transfer(r) => &r.report_time,
            Record::Incident(r) => &r.reported_at,
        }
    }

    /// Report timestamp parsed as RFC 3339.
    #[must_use]
    pub fn parsed_report_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.report_time()).ok()
    }

    /// Attached tags; empty when the server sent none or `null`.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        let tags = match self {
            Record::Hacking(r) => &r.tags,
            Record::Transfer(r) => &r.tags,
            Record::Incident(r) => &r.tags,
        };
        tags.as_deref().unwrap_or_default()
    }
}

/// Minimum numeric identifier in a page, rendered back as a cursor string.
///
/// Identifiers that are not numbers are skipped.
#[must_use]
pub fn min_cursor(records: &[Record]) -> Option<String> {
    records
        .iter()
        .filter_map(Record::numeric_id)
        .min()
        .map(|id| id.to_string())
}

/// Sorts records by report time, newest first.
///
/// The sort is stable; records whose timestamp does not parse go last.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.parsed_report_time().cmp(&a.parsed_report_time()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hacking(id: &str, time: &str) -> Record {
        Record::Hacking(HackingInfo {
            id: id.to_string(),
            protocol: "Proto".to_string(),
            network: "Ethereum".to_string(),
            amount: "$1M".to_string(),
            tx_hash: "0xabc".to_string(),
            report_time: time.to_string(),
            tags: None,
        })
    }

    #[test]
    fn decodes_hacking_shape() {
        let json = r#"{"ID":"7","Protocol":"Bridge","Network":"BSC","Amount":"$3M",
            "TxHash":"0xdead","ReportTime":"2024-05-01T10:00:00Z",
            "Tags":[{"ID":"1","Name":"rug-pull"}]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(matches!(record, Record::Hacking(_)));
        assert_eq!(record.id(), "7");
        assert_eq!(record.tags(), &[Tag::new("1", "rug-pull")]);
    }

    #[test]
    fn decodes_transfer_shape_with_null_tags() {
        let json = r#"{"ID":"8","Token":"USDC","Amount":"1000","From":"0x1","To":"0x2",
            "ReportTime":"2024-05-01T10:00:00Z","Tags":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(matches!(record, Record::Transfer(_)));
        assert!(record.tags().is_empty());
    }

    #[test]
    fn decodes_incident_shape() {
        let json = r#"{"id":"9","title":"Exploit","summary":"Oracle manipulation",
            "source_url":"https://news.example/9","reported_at":"2024-05-01T10:00:00+09:00"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(matches!(record, Record::Incident(_)));
        assert_eq!(record.report_time(), "2024-05-01T10:00:00+09:00");
        assert!(record.tags().is_empty());
    }

    #[test]
    fn min_cursor_ignores_non_numeric_ids() {
        let records = vec![
            hacking("100", "2024-01-01T00:00:00Z"),
            hacking("abc", "2024-01-01T00:00:00Z"),
            hacking("81", "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(min_cursor(&records), Some("81".to_string()));
        assert_eq!(min_cursor(&[hacking("x", "")]), None);
        assert_eq!(min_cursor(&[]), None);
    }

    #[test]
    fn min_cursor_compares_numerically() {
        let records = vec![
            hacking("9", "2024-01-01T00:00:00Z"),
            hacking("10", "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(min_cursor(&records), Some("9".to_string()));
    }

    #[test]
    fn sort_puts_newest_first_and_unparseable_last() {
        let mut records = vec![
            hacking("1", "2024-01-01T00:00:00Z"),
            hacking("2", "not a date"),
            hacking("3", "2024-03-01T00:00:00Z"),
            hacking("4", "2024-02-01T09:00:00+09:00"),
        ];
        sort_newest_first(&mut records);
        let ids: Vec<&str> = records.iter().map(Record::id).collect();
        assert_eq!(ids, vec!["3", "4", "1", "2"]);
    }
}
