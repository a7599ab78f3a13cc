// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as the accepted log levels and a well-formed API key.

use crate::diagnostic::ConfigError;
use crate::model::SelfhostConfig;

/// Log levels accepted by `app.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SelfhostConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.app.title.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "app.title must not be empty".to_string(),
        });
    }

    // Empty means "no key"; anything else must be a single token.
    if let Some(key) = &config.settings.api_key
        && key.chars().any(char::is_whitespace)
    {
        errors.push(ConfigError::Validation {
            message: "settings.api_key must not contain whitespace".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
