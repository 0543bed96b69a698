// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the defintel CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! defintel browse
//!
//! # Request-level debugging (paths, queries, record counts)
//! RUST_LOG=defintel=debug defintel feed hacking
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "defintel=warn,reqwest=error";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "defintel=debug,reqwest=warn";

/// Initialize the logging subsystem.
///
/// Logs go to stderr so structured stdout output stays parseable.
/// `RUST_LOG` always wins over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
