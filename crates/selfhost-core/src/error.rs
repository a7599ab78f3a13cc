// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the selfhost workspace.

use thiserror::Error;

/// The primary error type used across the chat stream seam and the CLI.
///
/// The catalog, cost and suggestion functions never return this type: unknown
/// models and out-of-range token counts are handled by defaulting.
#[derive(Debug, Error)]
pub enum SelfhostError {
    /// Configuration errors (invalid TOML, unreadable settings file, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat provider errors (HTTP failure, rejected API key, malformed stream).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A model identifier outside the supported catalog.
    #[error("unknown model `{model}`{}", did_you_mean(.suggestion.as_deref()))]
    UnknownModel {
        model: String,
        /// Closest supported id, if any.
        suggestion: Option<String>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion
        .map(|s| format!(", did you mean `{s}`?"))
        .unwrap_or_default()
}

impl SelfhostError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}
