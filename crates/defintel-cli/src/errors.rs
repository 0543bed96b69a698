// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `DefIntelError` and appends a hint that
//! points at the setting or condition most likely responsible.

use anyhow::Error;
use defintel_core::error::DefIntelError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `DefIntelError`, returns the original error chain.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<DefIntelError>() else {
        return format!("{error:#}");
    };

    match err {
        DefIntelError::Network(_) => {
            format!(
                "{err}\n\nTip: Check that the API is reachable (set api.base_url or pass --api-url)."
            )
        }
        DefIntelError::Http { status, .. } if *status == 404 => {
            format!("{err}\n\nTip: The API does not serve this feed. Check api.base_url.")
        }
        DefIntelError::Http { status, .. } if *status >= 500 => {
            format!("{err}\n\nTip: The API is having trouble. Try again in a moment.")
        }
        DefIntelError::Http { .. } => err.to_string(),
        DefIntelError::Decode { .. } => {
            format!(
                "{err}\n\nTip: The API answered with an unexpected shape. Is api.base_url pointing at the feed API?"
            )
        }
        DefIntelError::InvalidUrl { .. } => {
            format!("{err}\n\nTip: Use an absolute URL such as http://localhost:8080")
        }
        DefIntelError::Config { .. } => {
            format!(
                "{err}\n\nTip: Check your config file at {}",
                defintel_core::config::config_file_path().display()
            )
        }
    }
}
