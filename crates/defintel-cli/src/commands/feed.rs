// SPDX-License-Identifier: Apache-2.0

//! One-shot page fetch.

use anyhow::{Result, bail};
use defintel_core::{AppConfig, Card, CardOptions, FeedApi, FeedKind, fetch_page};
use tracing::debug;

use super::types::FeedResult;

/// Fetches one page of `feed` and turns every record into a card.
pub async fn run(
    api: &dyn FeedApi,
    feed: FeedKind,
    tags: Vec<String>,
    before: Option<&str>,
    limit: Option<usize>,
    config: &AppConfig,
) -> Result<FeedResult> {
    let page_size = limit.unwrap_or(config.api.page_size);
    if page_size == 0 {
        bail!("--limit must be at least 1");
    }

    let page = fetch_page(api, feed, &tags, before, page_size).await?;
    debug!(
        feed = %feed,
        count = page.records.len(),
        next_cursor = ?page.next_cursor,
        "Fetched page"
    );

    let options = CardOptions::from_config(&config.ui, &config.explorer);
    let cards = page
        .records
        .iter()
        .map(|record| Card::build(record, &tags, &options))
        .collect();

    Ok(FeedResult {
        feed,
        tags,
        cards,
        next_cursor: page.next_cursor,
        has_more: page.has_more,
        language: config.ui.language,
    })
}
