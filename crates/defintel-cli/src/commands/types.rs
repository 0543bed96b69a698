// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use defintel_core::{Card, FeedKind, Language, Tag};
use serde::Serialize;

/// Result from the tags command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TagsResult {
    /// Feed the catalog belongs to.
    pub feed: FeedKind,
    /// Size of the whole catalog.
    pub total: usize,
    /// Tags matching the search term.
    pub matching: usize,
    /// Tags shown (the collapsed preview unless `--all`).
    pub tags: Vec<Tag>,
    /// Label of the expand/collapse toggle, when matches exceed the preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_hint: Option<String>,
    /// Language for text rendering.
    #[serde(skip)]
    pub language: Language,
}

/// Result from the feed command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FeedResult {
    /// Feed the page came from.
    pub feed: FeedKind,
    /// Tag filter that was applied.
    pub tags: Vec<String>,
    /// One card per record, in display order.
    pub cards: Vec<Card>,
    /// Cursor for `--before` to fetch the next older page.
    pub next_cursor: Option<String>,
    /// Whether an older page may exist.
    pub has_more: bool,
    /// Language for text rendering.
    #[serde(skip)]
    pub language: Language,
}
