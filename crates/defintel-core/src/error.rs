// SPDX-License-Identifier: Apache-2.0

//! Error types for DeFi Intel Timeline.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while talking to the feed API or loading settings.
#[derive(Error, Debug)]
pub enum DefIntelError {
    /// Network/HTTP transport error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error (HTTP {status}) for {path}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Request path (without the base URL).
        path: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Invalid JSON response from {path}")]
    Decode {
        /// Request path (without the base URL).
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for DefIntelError {
    fn from(err: config::ConfigError) -> Self {
        DefIntelError::Config {
            message: err.to_string(),
        }
    }
}
