// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the defintel CLI.

pub mod browse;
pub mod completion;
pub mod feed;
pub mod tags;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use defintel_core::{AppConfig, HttpFeedClient};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Commands, CompletionCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive and enabled).
pub(crate) fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.shows_spinners() {
        return None;
    }
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .ok()?;
    let s = ProgressBar::new_spinner();
    s.set_style(style);
    s.set_message(message.to_string());
    s.enable_steady_tick(Duration::from_millis(100));
    Some(s)
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Browse { feed } => {
            let api = HttpFeedClient::new(&config.api.base_url)?;
            debug!(base_url = api.base_url(), "Starting interactive session");
            browse::run(&api, feed, &ctx, config).await
        }

        Commands::Tags { feed, search, all } => {
            let api = HttpFeedClient::new(&config.api.base_url)?;
            let spinner = maybe_spinner(&ctx, "Fetching tags...");
            let result = tags::run(&api, feed, search.as_deref(), all, config).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result?, &ctx)
        }

        Commands::Feed {
            feed,
            tags,
            before,
            limit,
        } => {
            let api = HttpFeedClient::new(&config.api.base_url)?;
            let spinner = maybe_spinner(&ctx, "Fetching feed...");
            let result = feed::run(&api, feed, tags, before.as_deref(), limit, config).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result?, &ctx)
        }

        Commands::Completion(cmd) => match cmd {
            CompletionCommand::Generate { shell } => completion::run_generate(shell),
            CompletionCommand::Install { shell, dry_run } => {
                completion::run_install(shell, dry_run)
            }
        },
    }
}
