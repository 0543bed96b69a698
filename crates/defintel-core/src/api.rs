// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the feed API.
//!
//! [`FeedApi`] is the seam the timeline controller talks to. The production
//! implementation, [`HttpFeedClient`], is a thin `reqwest` wrapper around a
//! base URL: plain GETs with query parameters, JSON bodies, no retry and no
//! caching.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::DefIntelError;
use crate::feed::FeedKind;
use crate::model::{Record, Tag};

/// Read-only operations offered by the feed API.
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Fetches the tag catalog of a feed.
    async fn fetch_tags(&self, feed: FeedKind) -> crate::Result<Vec<Tag>>;

    /// Fetches the newest page of a feed.
    async fn fetch_latest(
        &self,
        feed: FeedKind,
        tags: &[String],
        page_size: usize,
    ) -> crate::Result<Vec<Record>>;

    /// Fetches the page of records strictly older than `cursor`.
    async fn fetch_previous(
        &self,
        feed: FeedKind,
        tags: &[String],
        cursor: &str,
        page_size: usize,
    ) -> crate::Result<Vec<Record>>;
}

/// Builds the query pairs of a page request.
///
/// `tags` is omitted when no tag is selected.
#[must_use]
pub fn page_query(
    tags: &[String],
    cursor: Option<&str>,
    page_size: usize,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(3);
    if !tags.is_empty() {
        query.push(("tags", tags.join(",")));
    }
    if let Some(cursor) = cursor {
        query.push(("prevInfoID", cursor.to_string()));
    }
    query.push(("infoNumber", page_size.to_string()));
    query
}

/// `reqwest`-backed [`FeedApi`] implementation.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    http: Client,
    base_url: String,
}

impl HttpFeedClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `DefIntelError::InvalidUrl` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> crate::Result<Self> {
        Url::parse(base_url).map_err(|e| DefIntelError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> crate::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DefIntelError::Http {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| DefIntelError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Like [`get_json`](Self::get_json) for list endpoints; `null` decodes as empty.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> crate::Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get_json(path, query).await?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait]
impl FeedApi for HttpFeedClient {
    #[instrument(skip(self))]
    async fn fetch_tags(&self, feed: FeedKind) -> crate::Result<Vec<Tag>> {
        let tags: Vec<Tag> = self.get_list(&feed.tags_path(), &[]).await?;
        debug!(count = tags.len(), "Fetched tag catalog");
        Ok(tags)
    }

    #[instrument(skip(self))]
    async fn fetch_latest(
        &self,
        feed: FeedKind,
        tags: &[String],
        page_size: usize,
    ) -> crate::Result<Vec<Record>> {
        let query = page_query(tags, None, page_size);
        let records: Vec<Record> = self.get_list(&feed.latest_path(), &query).await?;
        debug!(count = records.len(), "Fetched latest page");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn fetch_previous(
        &self,
        feed: FeedKind,
        tags: &[String],
        cursor: &str,
        page_size: usize,
    ) -> crate::Result<Vec<Record>> {
        let query = page_query(tags, Some(cursor), page_size);
        let records: Vec<Record> = self.get_list(&feed.previous_path(), &query).await?;
        debug!(count = records.len(), "Fetched previous page");
        Ok(records)
    }
}
