// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # DeFi Intel Timeline Core
//!
//! Core library for the DeFi Intel Timeline client: a chronological feed of
//! security incidents and fund transfers, filtered by tag and paged by cursor.
//!
//! This crate provides reusable components for:
//! - Feed API access (tag catalog, newest page, older pages)
//! - Record model covering every response shape the API serves
//! - Per-feed timeline state (selection, pagination, loading and errors)
//! - Pure card and tag-list presentation helpers
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use defintel_core::{FeedKind, HttpFeedClient, TimelineController, load_config};
//!
//! # async fn example() -> defintel_core::Result<()> {
//! let config = load_config()?;
//! let api = HttpFeedClient::new(&config.api.base_url)?;
//!
//! let mut timeline = TimelineController::new(FeedKind::Hacking, config.api.page_size);
//! timeline.load_tags(&api).await;
//! timeline.toggle_tag("rug-pull");
//! timeline.apply(&api).await;
//!
//! for record in timeline.records() {
//!     println!("{} {}", record.id(), record.report_time());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP client and the `FeedApi` seam
//! - [`card`] - Card view model for one record
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`feed`] - Feed kinds and endpoint paths
//! - [`messages`] - Localized user-facing text
//! - [`model`] - Tags and records
//! - [`tags`] - Tag search and collapsed preview
//! - [`timeline`] - Per-feed controller

// ============================================================================
// Error Handling
// ============================================================================

pub use error::DefIntelError;

/// Convenience Result type for DeFi Intel operations.
///
/// This is equivalent to `std::result::Result<T, DefIntelError>`.
pub type Result<T> = std::result::Result<T, DefIntelError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    ApiConfig, AppConfig, ExplorerConfig, UiConfig, config_dir, config_file_path, load_config,
    load_config_from,
};

// ============================================================================
// API Access
// ============================================================================

pub use api::{FeedApi, HttpFeedClient};
pub use feed::FeedKind;
pub use model::{HackingInfo, Incident, Record, Tag, TransferInfo};

// ============================================================================
// Presentation
// ============================================================================

pub use card::{Card, CardOptions, Link, Pill, TagPills};
pub use messages::{Language, Message};
pub use tags::{TagListView, filter_tags};

// ============================================================================
// Timeline
// ============================================================================

pub use timeline::{
    FeedError, FeedPhase, FetchStage, PageKind, PageOutcome, PageRequest, TimelineController,
};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{FeedPage, fetch_page, fetch_tags};

// ============================================================================
// Modules
// ============================================================================

pub mod api;
pub mod card;
pub mod config;
pub mod error;
pub mod facade;
pub mod feed;
pub mod messages;
pub mod model;
pub mod tags;
pub mod timeline;
