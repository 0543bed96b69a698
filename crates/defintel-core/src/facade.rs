// SPDX-License-Identifier: Apache-2.0

//! One-shot helpers for front ends that do not keep a controller around.
//!
//! The interactive shell drives a [`TimelineController`](crate::TimelineController);
//! scripts and the non-interactive CLI commands fetch a single page at a time
//! through these functions and get the same ordering and cursor rules.

use serde::Serialize;
use tracing::instrument;

use crate::api::FeedApi;
use crate::feed::FeedKind;
use crate::model::{Record, Tag, min_cursor, sort_newest_first};

/// One fetched page plus what is needed to ask for the next one.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    /// Feed the page came from.
    pub feed: FeedKind,
    /// Records in display order.
    pub records: Vec<Record>,
    /// Cursor to pass as `before` for the next page.
    pub next_cursor: Option<String>,
    /// Whether the page was full, so an older page may exist.
    pub has_more: bool,
}

/// Fetches the tag catalog of `feed`.
#[instrument(skip(api))]
pub async fn fetch_tags(api: &dyn FeedApi, feed: FeedKind) -> crate::Result<Vec<Tag>> {
    api.fetch_tags(feed).await
}

/// Fetches one page of `feed`.
///
/// Without `before` this is the newest page, sorted newest first. With
/// `before` it is the page strictly older than that identifier, in server
/// order.
#[instrument(skip(api))]
pub async fn fetch_page(
    api: &dyn FeedApi,
    feed: FeedKind,
    tags: &[String],
    before: Option<&str>,
    page_size: usize,
) -> crate::Result<FeedPage> {
    let records = match before {
        None => {
            let mut records = api.fetch_latest(feed, tags, page_size).await?;
            sort_newest_first(&mut records);
            records
        }
        Some(cursor) => api.fetch_previous(feed, tags, cursor, page_size).await?,
    };

    Ok(FeedPage {
        feed,
        next_cursor: min_cursor(&records),
        has_more: records.len() == page_size,
        records,
    })
}
