// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost calculation and context-limit checks.
//!
//! Both functions accept raw model strings. They treat unknown models
//! differently: cost lookups warn and return `None`, while the context check
//! is fail-open and reports "not over limit" without logging.

use tracing::warn;

use crate::catalog::{lookup_max_tokens, lookup_pricing};

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Calculate the USD cost of a request/response cycle.
///
/// Formula: `(input / 1M) * input_rate + (output / 1M) * output_rate`.
/// Negative token counts are clamped to zero. The result is not rounded.
/// Returns `None` (and logs a warning) when the model has no pricing entry.
pub fn calculate_cost(model: &str, input_tokens: i64, output_tokens: i64) -> Option<f64> {
    let Some(pricing) = lookup_pricing(model) else {
        warn!(model, "pricing info not found for model");
        return None;
    };

    let input_tokens = input_tokens.max(0) as f64;
    let output_tokens = output_tokens.max(0) as f64;

    let input = (input_tokens / TOKENS_PER_MILLION) * pricing.input_per_mtok;
    let output = (output_tokens / TOKENS_PER_MILLION) * pricing.output_per_mtok;
    Some(input + output)
}

/// Whether `token_count` exceeds the model's context window.
///
/// A count equal to the limit is not over. Unknown models are assumed
/// unconstrained and always return `false`, which masks real overflow for
/// identifiers outside the catalog.
pub fn is_over_context_limit(model: &str, token_count: i64) -> bool {
    match lookup_max_tokens(model) {
        Some(max) => token_count > i64::from(max),
        None => false,
    }
}
