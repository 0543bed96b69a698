// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for defintel.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use defintel_core::{FeedKind, Language};

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(defintel completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      defintel completion generate zsh > ~/.zsh/completions/_defintel

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      defintel completion generate fish > ~/.config/fish/completions/defintel.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for reports
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
    /// Whether spinners are enabled in configuration
    pub progress_bars: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, progress_bars: bool) -> Self {
        Self {
            format,
            quiet,
            is_tty: std::io::stdout().is_terminal(),
            progress_bars,
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }

    /// Returns true if spinners should be drawn.
    pub fn shows_spinners(&self) -> bool {
        self.is_interactive() && self.progress_bars
    }
}

/// defintel - DeFi security incidents and fund transfers in your terminal.
///
/// Browse a chronological feed of hacks and transfers, filter it by tag
/// and page back through older entries.
#[derive(Parser)]
#[command(name = "defintel")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the configured display language (en, ja)
    #[arg(long, global = true, value_name = "LANG")]
    pub language: Option<Language>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse feeds interactively (tabs, tag filter, load more)
    Browse {
        /// Feed to open first (hacking, transfers)
        #[arg(value_name = "FEED")]
        feed: Option<FeedKind>,
    },

    /// List the tag catalog of a feed
    Tags {
        /// Feed to list tags for (hacking, transfers)
        #[arg(value_name = "FEED")]
        feed: FeedKind,

        /// Only tags whose name contains this text (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Show every match instead of the collapsed preview
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Fetch one page of a feed
    Feed {
        /// Feed to fetch (hacking, transfers)
        #[arg(value_name = "FEED")]
        feed: FeedKind,

        /// Filter by tag (repeatable or comma-separated)
        #[arg(long = "tag", short = 't', value_delimiter = ',')]
        tags: Vec<String>,

        /// Fetch the page older than this identifier (the previous page's cursor)
        #[arg(long, value_name = "ID")]
        before: Option<String>,

        /// Records per page (defaults to the configured page size)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Generate or install shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Install completion script to standard location
    Install {
        /// Shell to install completions for (auto-detected from $SHELL if not provided)
        #[arg(long, value_enum)]
        shell: Option<Shell>,

        /// Preview installation without writing files
        #[arg(long)]
        dry_run: bool,
    },
}
