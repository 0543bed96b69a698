// SPDX-License-Identifier: Apache-2.0

//! defintel - DeFi security incidents and fund transfers in your terminal.
//!
//! A client for the DeFi Intel Timeline API: browse the hacking and transfer
//! feeds, filter them by tag and page back through older entries.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use defintel_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

async fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if let Some(url) = cli.api_url {
        debug!(%url, "Overriding API base URL");
        config.api.base_url = url;
    }
    if let Some(language) = cli.language {
        debug!(%language, "Overriding display language");
        config.ui.language = language;
    }
    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let ctx = OutputContext::from_cli(cli.output, cli.quiet, config.ui.progress_bars);
    commands::run(cli.command, ctx, &config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            ExitCode::FAILURE
        }
    }
}
