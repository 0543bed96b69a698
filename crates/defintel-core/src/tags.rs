// SPDX-License-Identifier: Apache-2.0

//! Tag catalog display: local search and the collapsed preview.

use serde::Serialize;

use crate::config::DEFAULT_TAG_PREVIEW_LIMIT;
use crate::messages::{Language, Message, show_all_tags_label};
use crate::model::Tag;

/// Tags whose name contains `search`, ignoring case. An empty search matches all.
#[must_use]
pub fn filter_tags<'a>(tags: &'a [Tag], search: &str) -> Vec<&'a Tag> {
    let needle = search.to_lowercase();
    tags.iter()
        .filter(|tag| tag.name.to_lowercase().contains(&needle))
        .collect()
}

/// Search term and expand/collapse state of the tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagListView {
    /// Current search term.
    pub search: String,
    /// Whether every match is shown.
    pub expanded: bool,
    /// Matches shown while collapsed.
    pub limit: usize,
}

impl Default for TagListView {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_PREVIEW_LIMIT)
    }
}

impl TagListView {
    /// Collapsed view with no search term.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            search: String::new(),
            expanded: false,
            limit,
        }
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Flips between the preview and the full list.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// All tags matching the search term.
    #[must_use]
    pub fn matching<'a>(&self, tags: &'a [Tag]) -> Vec<&'a Tag> {
        filter_tags(tags, &self.search)
    }

    /// Tags to display: every match when expanded, otherwise the first `limit`.
    #[must_use]
    pub fn visible<'a>(&self, tags: &'a [Tag]) -> Vec<&'a Tag> {
        let mut matches = self.matching(tags);
        if !self.expanded {
            matches.truncate(self.limit);
        }
        matches
    }

    /// Whether the expand/collapse toggle should be offered.
    #[must_use]
    pub fn shows_toggle(&self, tags: &[Tag]) -> bool {
        self.matching(tags).len() > self.limit
    }

    /// Label of the expand/collapse toggle.
    #[must_use]
    pub fn toggle_label(&self, tags: &[Tag], lang: Language) -> String {
        if self.expanded {
            Message::ShowFewerTags.text(lang).to_string()
        } else {
            show_all_tags_label(lang, self.matching(tags).len())
        }
    }
}
