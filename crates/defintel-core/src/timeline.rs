// SPDX-License-Identifier: Apache-2.0

//! Timeline controller for one feed.
//!
//! A [`TimelineController`] owns everything one feed view needs: the tag
//! catalog, the selected tags, the records on screen, the pagination cursor
//! and the loading/error flags. It never shares state with other feeds.
//!
//! Fetches are split in two steps so a front end can run the request however
//! it likes: `begin_*` updates the flags and returns a [`PageRequest`], and
//! [`complete`](TimelineController::complete) folds the response back in.
//! Every apply bumps a generation counter; responses to requests issued
//! before the latest apply are discarded instead of overwriting the newer
//! list.

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::FeedApi;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::feed::FeedKind;
use crate::messages::{Language, Message};
use crate::model::{Record, Tag, min_cursor, sort_newest_first};
use crate::tags::TagListView;

/// Where a feed view currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedPhase {
    /// Tag catalog not loaded yet.
    Uninitialized,
    /// Tags loaded, nothing queried yet.
    IdleNoQuery,
    /// First page of an apply in flight.
    Loading,
    /// Showing at least one record.
    Ready,
    /// The query matched nothing.
    ReadyEmpty,
    /// The last fetch failed.
    Error,
}

/// Which fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStage {
    /// Tag catalog.
    Tags,
    /// First page of an apply.
    Latest,
    /// Load-more page.
    More,
}

/// A failed fetch, kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedError {
    /// Which fetch failed.
    pub stage: FetchStage,
    /// Underlying error text, for logs and verbose output.
    pub detail: String,
}

impl FeedError {
    /// Localized banner text.
    #[must_use]
    pub fn message(&self, lang: Language) -> &'static str {
        match self.stage {
            FetchStage::Tags => Message::TagLoadFailed.text(lang),
            FetchStage::Latest => Message::FetchFailed.text(lang),
            FetchStage::More => Message::LoadMoreFailed.text(lang),
        }
    }
}

/// Which page a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// Newest page; replaces the list.
    Latest,
    /// Page older than `cursor`; appended to the list.
    Previous {
        /// Exclusive upper bound identifier.
        cursor: String,
    },
}

/// A page request issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Feed the request belongs to.
    pub feed: FeedKind,
    /// Latest or previous page.
    pub kind: PageKind,
    /// Tag filter at the time the request was issued.
    pub tags: Vec<String>,
    /// Requested page length.
    pub page_size: usize,
    /// Apply generation the request belongs to.
    pub generation: u64,
}

impl PageRequest {
    /// Runs the request against `api`.
    pub async fn send(&self, api: &dyn FeedApi) -> crate::Result<Vec<Record>> {
        match &self.kind {
            PageKind::Latest => api.fetch_latest(self.feed, &self.tags, self.page_size).await,
            PageKind::Previous { cursor } => {
                api.fetch_previous(self.feed, &self.tags, cursor, self.page_size)
                    .await
            }
        }
    }
}

/// What a completed request did to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The list was replaced by a fresh first page.
    Replaced {
        /// Records now shown.
        count: usize,
    },
    /// Records were appended.
    Appended {
        /// Records added.
        count: usize,
    },
    /// A load-more page came back empty.
    Exhausted,
    /// The fetch failed; the error banner is set.
    Failed,
    /// The response belonged to an older apply and was dropped.
    Stale,
}

/// State and actions of one feed view.
#[derive(Debug, Clone)]
pub struct TimelineController {
    feed: FeedKind,
    page_size: usize,
    tags: Vec<Tag>,
    tags_loaded: bool,
    tag_error: Option<FeedError>,
    selected: Vec<String>,
    records: Vec<Record>,
    cursor: Option<String>,
    has_more: bool,
    loading: bool,
    loading_more: bool,
    error: Option<FeedError>,
    queried: bool,
    generation: u64,
    /// Search and expand state of the tag list.
    pub tag_view: TagListView,
}

impl TimelineController {
    /// Creates an uninitialized controller for `feed`.
    #[must_use]
    pub fn new(feed: FeedKind, page_size: usize) -> Self {
        Self {
            feed,
            page_size: page_size.max(1),
            tags: Vec::new(),
            tags_loaded: false,
            tag_error: None,
            selected: Vec::new(),
            records: Vec::new(),
            cursor: None,
            has_more: false,
            loading: false,
            loading_more: false,
            error: None,
            queried: false,
            generation: 0,
            tag_view: TagListView::default(),
        }
    }

    /// Creates a controller with the default page size.
    #[must_use]
    pub fn with_defaults(feed: FeedKind) -> Self {
        Self::new(feed, DEFAULT_PAGE_SIZE)
    }

    /// Feed this controller shows.
    #[must_use]
    pub fn feed(&self) -> FeedKind {
        self.feed
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FeedPhase {
        if self.loading {
            FeedPhase::Loading
        } else if self.error.is_some() {
            FeedPhase::Error
        } else if self.queried {
            if self.records.is_empty() {
                FeedPhase::ReadyEmpty
            } else {
                FeedPhase::Ready
            }
        } else if self.tags_loaded {
            FeedPhase::IdleNoQuery
        } else {
            FeedPhase::Uninitialized
        }
    }

    /// Tag catalog (empty if loading it failed).
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tags the tag list currently displays.
    #[must_use]
    pub fn visible_tags(&self) -> Vec<&Tag> {
        self.tag_view.visible(&self.tags)
    }

    /// Non-fatal tag catalog error, if any.
    #[must_use]
    pub fn tag_error(&self) -> Option<&FeedError> {
        self.tag_error.as_ref()
    }

    /// Selected tag names, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Records on screen.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Cursor for the next load-more.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Whether the last page was full.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a load-more is in flight.
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    /// Banner error of the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    /// Whether "load more" should be offered.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.has_more && self.cursor.is_some() && !self.loading && !self.loading_more
    }

    /// Adds `name` to the selection, or removes it if already selected.
    ///
    /// Never fetches; the user re-applies explicitly.
    pub fn toggle_tag(&mut self, name: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(name.to_string());
        }
    }

    /// Empties the selection. Records stay until the next apply.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Stores the outcome of a tag catalog fetch.
    pub fn set_tags(&mut self, result: crate::Result<Vec<Tag>>) {
        match result {
            Ok(tags) => {
                debug!(feed = %self.feed, count = tags.len(), "Tag catalog loaded");
                self.tags = tags;
                self.tag_error = None;
            }
            Err(e) => {
                warn!(feed = %self.feed, error = %e, "Failed to load tag catalog");
                self.tags.clear();
                self.tag_error = Some(FeedError {
                    stage: FetchStage::Tags,
                    detail: e.to_string(),
                });
            }
        }
        self.tags_loaded = true;
    }

    /// Starts an apply: the newest page for the current selection.
    ///
    /// Any load-more still in flight becomes stale.
    pub fn begin_apply(&mut self) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        self.loading_more = false;
        self.error = None;
        self.queried = true;

        PageRequest {
            feed: self.feed,
            kind: PageKind::Latest,
            tags: self.selected.clone(),
            page_size: self.page_size,
            generation: self.generation,
        }
    }

    /// Starts a load-more, or returns `None` if one cannot run right now.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.loading_more = true;
        self.error = None;

        Some(PageRequest {
            feed: self.feed,
            kind: PageKind::Previous { cursor },
            tags: self.selected.clone(),
            page_size: self.page_size,
            generation: self.generation,
        })
    }

    /// Folds the response to `request` into the feed state.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: crate::Result<Vec<Record>>,
    ) -> PageOutcome {
        if request.generation != self.generation {
            warn!(
                feed = %self.feed,
                request_generation = request.generation,
                current_generation = self.generation,
                "Discarding response to a superseded request"
            );
            return PageOutcome::Stale;
        }

        match &request.kind {
            PageKind::Latest => {
                self.loading = false;
                self.complete_latest(request, result)
            }
            PageKind::Previous { .. } => {
                self.loading_more = false;
                self.complete_previous(request, result)
            }
        }
    }

    fn complete_latest(
        &mut self,
        request: &PageRequest,
        result: crate::Result<Vec<Record>>,
    ) -> PageOutcome {
        match result {
            Ok(mut records) => {
                sort_newest_first(&mut records);
                self.cursor = min_cursor(&records);
                self.has_more = records.len() == request.page_size;
                self.records = records;
                debug!(
                    feed = %self.feed,
                    count = self.records.len(),
                    cursor = ?self.cursor,
                    has_more = self.has_more,
                    "Feed replaced"
                );
                PageOutcome::Replaced {
                    count: self.records.len(),
                }
            }
            Err(e) => {
                warn!(feed = %self.feed, error = %e, "Failed to fetch latest page");
                self.error = Some(FeedError {
                    stage: FetchStage::Latest,
                    detail: e.to_string(),
                });
                PageOutcome::Failed
            }
        }
    }

    fn complete_previous(
        &mut self,
        request: &PageRequest,
        result: crate::Result<Vec<Record>>,
    ) -> PageOutcome {
        match result {
            Ok(records) if records.is_empty() => {
                debug!(feed = %self.feed, "No older records");
                self.has_more = false;
                PageOutcome::Exhausted
            }
            Ok(records) => {
                let count = records.len();
                self.cursor = min_cursor(&records);
                self.has_more = count == request.page_size;
                self.records.extend(records);
                debug!(
                    feed = %self.feed,
                    count,
                    cursor = ?self.cursor,
                    has_more = self.has_more,
                    "Feed extended"
                );
                PageOutcome::Appended { count }
            }
            Err(e) => {
                warn!(feed = %self.feed, error = %e, "Failed to fetch previous page");
                self.error = Some(FeedError {
                    stage: FetchStage::More,
                    detail: e.to_string(),
                });
                PageOutcome::Failed
            }
        }
    }

    /// Fetches the tag catalog.
    pub async fn load_tags(&mut self, api: &dyn FeedApi) {
        let result = api.fetch_tags(self.feed).await;
        self.set_tags(result);
    }

    /// Applies the current selection: fetches and shows the newest page.
    pub async fn apply(&mut self, api: &dyn FeedApi) -> PageOutcome {
        let request = self.begin_apply();
        let result = request.send(api).await;
        self.complete(&request, result)
    }

    /// Fetches and appends the next older page, if one can be loaded.
    pub async fn load_more(&mut self, api: &dyn FeedApi) -> Option<PageOutcome> {
        let request = self.begin_load_more()?;
        let result = request.send(api).await;
        Some(self.complete(&request, result))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::DefIntelError;
    use crate::model::HackingInfo;

    /// Scripted API: pops one canned response per call and records queries.
    #[derive(Default)]
    struct FakeApi {
        tags: Mutex<Option<Result<Vec<Tag>, u16>>>,
        pages: Mutex<VecDeque<Result<Vec<Record>, u16>>>,
        calls: Mutex<Vec<(Vec<String>, Option<String>, usize)>>,
    }

    impl FakeApi {
        fn with_pages(pages: Vec<Result<Vec<Record>, u16>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                ..Self::default()
            }
        }

        fn next_page(&self) -> crate::Result<Vec<Record>> {
            match self.pages.lock().unwrap().pop_front() {
                Some(Ok(records)) => Ok(records),
                Some(Err(status)) => Err(http_error(status)),
                None => Ok(Vec::new()),
            }
        }
    }

    fn http_error(status: u16) -> DefIntelError {
        DefIntelError::Http {
            status,
            path: "/test".to_string(),
        }
    }

    #[async_trait]
    impl FeedApi for FakeApi {
        async fn fetch_tags(&self, _feed: FeedKind) -> crate::Result<Vec<Tag>> {
            match self.tags.lock().unwrap().take() {
                Some(Ok(tags)) => Ok(tags),
                Some(Err(status)) => Err(http_error(status)),
                None => Ok(Vec::new()),
            }
        }

        async fn fetch_latest(
            &self,
            _feed: FeedKind,
            tags: &[String],
            page_size: usize,
        ) -> crate::Result<Vec<Record>> {
            self.calls
                .lock()
                .unwrap()
                .push((tags.to_vec(), None, page_size));
            self.next_page()
        }

        async fn fetch_previous(
            &self,
            _feed: FeedKind,
            tags: &[String],
            cursor: &str,
            page_size: usize,
        ) -> crate::Result<Vec<Record>> {
            self.calls
                .lock()
                .unwrap()
                .push((tags.to_vec(), Some(cursor.to_string()), page_size));
            self.next_page()
        }
    }

    fn record(id: i64, time: &str, tag: Option<&str>) -> Record {
        Record::Hacking(HackingInfo {
            id: id.to_string(),
            protocol: format!("proto-{id}"),
            network: "Ethereum".to_string(),
            amount: "$1M".to_string(),
            tx_hash: "0xabc".to_string(),
            report_time: time.to_string(),
            tags: tag.map(|name| vec![Tag::new("1", name)]),
        })
    }

    /// Records with ids `from` down to `to`, newest first.
    fn descending(from: i64, to: i64, tag: Option<&str>) -> Vec<Record> {
        (to..=from)
            .rev()
            .map(|id| {
                let time = format!("2024-01-01T00:{:02}:00Z", id % 60);
                record(id, &time, tag)
            })
            .collect()
    }

    fn ids(controller: &TimelineController) -> Vec<String> {
        controller
            .records()
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    #[tokio::test]
    async fn rug_pull_scenario_pages_through_feed() {
        let first: Vec<Record> = (81..=100)
            .rev()
            .map(|id| {
                let time = format!("2024-02-01T{:02}:00:00Z", id - 80);
                record(id, &time, Some("rug-pull"))
            })
            .collect();
        let second = [61, 65, 62, 64, 63]
            .into_iter()
            .map(|id| record(id, "2024-01-01T00:00:00Z", Some("rug-pull")))
            .collect();
        let api = FakeApi::with_pages(vec![Ok(first), Ok(second)]);
        *api.tags.lock().unwrap() = Some(Ok(vec![Tag::new("1", "rug-pull")]));

        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        assert_eq!(timeline.phase(), FeedPhase::Uninitialized);

        timeline.load_tags(&api).await;
        assert_eq!(timeline.tags(), &[Tag::new("1", "rug-pull")]);
        assert_eq!(timeline.phase(), FeedPhase::IdleNoQuery);

        timeline.toggle_tag("rug-pull");
        assert_eq!(
            timeline.apply(&api).await,
            PageOutcome::Replaced { count: 20 }
        );
        assert_eq!(timeline.phase(), FeedPhase::Ready);
        assert_eq!(timeline.cursor(), Some("81"));
        assert!(timeline.has_more());

        assert_eq!(
            timeline.load_more(&api).await,
            Some(PageOutcome::Appended { count: 5 })
        );
        assert!(!timeline.has_more());
        assert_eq!(timeline.records().len(), 25);
        // Appended page keeps server order
        assert_eq!(&ids(&timeline)[20..], &["61", "65", "62", "64", "63"]);

        let calls = api.calls.lock().unwrap();
        assert_eq!(calls[0], (vec!["rug-pull".to_string()], None, 20));
        assert_eq!(
            calls[1],
            (vec!["rug-pull".to_string()], Some("81".to_string()), 20)
        );
    }

    #[tokio::test]
    async fn apply_sorts_newest_first() {
        let page = vec![
            record(1, "2024-01-01T00:00:00Z", None),
            record(2, "2024-03-01T00:00:00Z", None),
            record(3, "2024-02-01T00:00:00Z", None),
        ];
        let api = FakeApi::with_pages(vec![Ok(page)]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.apply(&api).await;
        assert_eq!(ids(&timeline), vec!["2", "3", "1"]);
        assert_eq!(timeline.cursor(), Some("1"));
        assert!(!timeline.has_more());
    }

    #[tokio::test]
    async fn empty_result_is_distinct_from_idle() {
        let api = FakeApi::with_pages(vec![Ok(Vec::new())]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        timeline.load_tags(&api).await;
        assert_eq!(timeline.phase(), FeedPhase::IdleNoQuery);

        timeline.apply(&api).await;
        assert_eq!(timeline.phase(), FeedPhase::ReadyEmpty);
        assert_eq!(timeline.cursor(), None);
        assert!(!timeline.has_more());
        assert!(timeline.begin_load_more().is_none());
    }

    #[tokio::test]
    async fn clearing_selection_keeps_results() {
        let api = FakeApi::with_pages(vec![Ok(descending(10, 8, Some("bridge")))]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.toggle_tag("bridge");
        timeline.toggle_tag("oracle");
        timeline.apply(&api).await;
        let before = ids(&timeline);

        timeline.clear_selection();
        assert!(timeline.selected().is_empty());
        assert_eq!(ids(&timeline), before);
        assert_eq!(timeline.phase(), FeedPhase::Ready);
        assert_eq!(api.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        timeline.toggle_tag("b");
        timeline.toggle_tag("a");
        timeline.toggle_tag("c");
        timeline.toggle_tag("a");
        assert_eq!(timeline.selected(), &["b".to_string(), "c".to_string()]);
    }

    #[tokio::test]
    async fn tag_failure_is_non_fatal() {
        let api = FakeApi::with_pages(vec![Ok(descending(5, 4, None))]);
        *api.tags.lock().unwrap() = Some(Err(503));
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.load_tags(&api).await;
        assert!(timeline.tags().is_empty());
        assert_eq!(
            timeline.tag_error().map(|e| e.stage),
            Some(FetchStage::Tags)
        );
        assert_eq!(timeline.phase(), FeedPhase::IdleNoQuery);

        timeline.apply(&api).await;
        assert_eq!(timeline.phase(), FeedPhase::Ready);
    }

    #[tokio::test]
    async fn initial_failure_shows_error_and_retry_recovers() {
        let api = FakeApi::with_pages(vec![Err(500), Ok(descending(3, 1, None))]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        assert_eq!(timeline.apply(&api).await, PageOutcome::Failed);
        assert_eq!(timeline.phase(), FeedPhase::Error);
        let error = timeline.error().unwrap();
        assert_eq!(error.message(Language::En), "Failed to fetch the feed.");

        timeline.apply(&api).await;
        assert_eq!(timeline.phase(), FeedPhase::Ready);
        assert!(timeline.error().is_none());
    }

    #[tokio::test]
    async fn load_more_failure_keeps_list_and_has_more() {
        let api = FakeApi::with_pages(vec![Ok(descending(100, 81, None)), Err(502)]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.apply(&api).await;
        let before = ids(&timeline);

        assert_eq!(timeline.load_more(&api).await, Some(PageOutcome::Failed));
        assert_eq!(ids(&timeline), before);
        assert!(timeline.has_more());
        assert_eq!(timeline.cursor(), Some("81"));
        assert_eq!(timeline.error().map(|e| e.stage), Some(FetchStage::More));
        // The user may retry
        assert!(timeline.can_load_more());
    }

    #[tokio::test]
    async fn empty_load_more_page_stops_paging() {
        let api = FakeApi::with_pages(vec![Ok(descending(100, 81, None)), Ok(Vec::new())]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.apply(&api).await;
        assert_eq!(timeline.load_more(&api).await, Some(PageOutcome::Exhausted));
        assert!(!timeline.has_more());
        assert_eq!(timeline.records().len(), 20);
        assert_eq!(timeline.load_more(&api).await, None);
    }

    #[tokio::test]
    async fn reentrant_load_more_is_ignored() {
        let api = FakeApi::with_pages(vec![Ok(descending(100, 81, None))]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        timeline.apply(&api).await;

        let first = timeline.begin_load_more();
        assert!(first.is_some());
        assert!(timeline.is_loading_more());
        assert!(timeline.begin_load_more().is_none());
    }

    #[tokio::test]
    async fn stale_load_more_is_discarded_after_new_apply() {
        let api = FakeApi::with_pages(vec![Ok(descending(100, 81, None))]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        timeline.apply(&api).await;

        let stale = timeline.begin_load_more().unwrap();
        let fresh = timeline.begin_apply();
        let outcome = timeline.complete(&fresh, Ok(descending(50, 48, None)));
        assert_eq!(outcome, PageOutcome::Replaced { count: 3 });

        let outcome = timeline.complete(&stale, Ok(descending(80, 61, None)));
        assert_eq!(outcome, PageOutcome::Stale);
        assert_eq!(ids(&timeline), vec!["50", "49", "48"]);
        assert_eq!(timeline.cursor(), Some("48"));
    }

    #[test]
    fn overlapping_applies_keep_the_latest_result() {
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);
        let first = timeline.begin_apply();
        timeline.toggle_tag("rug-pull");
        let second = timeline.begin_apply();

        let outcome = timeline.complete(&second, Ok(descending(50, 48, None)));
        assert_eq!(outcome, PageOutcome::Replaced { count: 3 });

        let outcome = timeline.complete(&first, Ok(descending(100, 81, None)));
        assert_eq!(outcome, PageOutcome::Stale);
        assert_eq!(ids(&timeline), vec!["50", "49", "48"]);
        assert_eq!(timeline.cursor(), Some("48"));
        assert!(!timeline.has_more());
        assert_eq!(timeline.phase(), FeedPhase::Ready);
    }

    #[tokio::test]
    async fn appended_pages_never_reorder_existing_records() {
        let api = FakeApi::with_pages(vec![
            Ok(descending(100, 81, None)),
            Ok(descending(80, 61, None)),
            Ok(descending(60, 58, None)),
        ]);
        let mut timeline = TimelineController::with_defaults(FeedKind::Hacking);

        timeline.apply(&api).await;
        let first = ids(&timeline);
        timeline.load_more(&api).await;
        assert_eq!(&ids(&timeline)[..20], first.as_slice());
        assert_eq!(timeline.cursor(), Some("61"));
        assert!(timeline.has_more());

        let second = ids(&timeline);
        timeline.load_more(&api).await;
        assert_eq!(&ids(&timeline)[..40], second.as_slice());
        assert!(!timeline.has_more());
    }

    #[test]
    fn page_size_of_zero_is_clamped() {
        let mut timeline = TimelineController::new(FeedKind::Transfers, 0);
        assert_eq!(timeline.begin_apply().page_size, 1);
    }
}
