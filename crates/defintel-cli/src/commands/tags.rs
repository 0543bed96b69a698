// SPDX-License-Identifier: Apache-2.0

//! Tag catalog listing.

use anyhow::Result;
use defintel_core::{AppConfig, FeedApi, FeedKind, TagListView, fetch_tags};
use tracing::debug;

use super::types::TagsResult;

/// Fetches the catalog of `feed` and applies search and preview rules.
pub async fn run(
    api: &dyn FeedApi,
    feed: FeedKind,
    search: Option<&str>,
    all: bool,
    config: &AppConfig,
) -> Result<TagsResult> {
    let catalog = fetch_tags(api, feed).await?;
    debug!(feed = %feed, count = catalog.len(), "Fetched tag catalog");

    let mut view = TagListView::new(config.ui.tag_preview_limit);
    if let Some(search) = search {
        view.set_search(search);
    }
    view.expanded = all;

    let language = config.ui.language;
    let toggle_hint = (!all && view.shows_toggle(&catalog))
        .then(|| view.toggle_label(&catalog, language));

    Ok(TagsResult {
        feed,
        total: catalog.len(),
        matching: view.matching(&catalog).len(),
        tags: view.visible(&catalog).into_iter().cloned().collect(),
        toggle_hint,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use defintel_core::{Record, Tag};

    struct Catalog(Vec<Tag>);

    #[async_trait]
    impl FeedApi for Catalog {
        async fn fetch_tags(&self, _feed: FeedKind) -> defintel_core::Result<Vec<Tag>> {
            Ok(self.0.clone())
        }

        async fn fetch_latest(
            &self,
            _feed: FeedKind,
            _tags: &[String],
            _page_size: usize,
        ) -> defintel_core::Result<Vec<Record>> {
            Ok(Vec::new())
        }

        async fn fetch_previous(
            &self,
            _feed: FeedKind,
            _tags: &[String],
            _cursor: &str,
            _page_size: usize,
        ) -> defintel_core::Result<Vec<Record>> {
            Ok(Vec::new())
        }
    }

    fn catalog() -> Catalog {
        Catalog(
            (0..12)
                .map(|i| Tag::new(i.to_string(), format!("Tag-{i}")))
                .collect(),
        )
    }

    #[tokio::test]
    async fn collapsed_listing_offers_toggle() {
        let result = run(&catalog(), FeedKind::Hacking, None, false, &AppConfig::default())
            .await
            .unwrap();
        assert_eq!(result.total, 12);
        assert_eq!(result.matching, 12);
        assert_eq!(result.tags.len(), 8);
        assert_eq!(result.toggle_hint.as_deref(), Some("Show all tags (12)"));
    }

    #[tokio::test]
    async fn all_lists_every_match_without_hint() {
        let result = run(&catalog(), FeedKind::Hacking, None, true, &AppConfig::default())
            .await
            .unwrap();
        assert_eq!(result.tags.len(), 12);
        assert!(result.toggle_hint.is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let result = run(
            &catalog(),
            FeedKind::Transfers,
            Some("tag-1"),
            false,
            &AppConfig::default(),
        )
        .await
        .unwrap();
        // Tag-1, Tag-10, Tag-11
        assert_eq!(result.matching, 3);
        assert!(result.toggle_hint.is_none());
    }
}
