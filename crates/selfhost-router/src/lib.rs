// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task complexity analysis and model suggestion for selfhost.
//!
//! This crate provides:
//! - [`analyze_task_complexity`]: Keyword heuristics (zero-cost, zero-latency)
//! - [`suggest_model`]: Fixed decision tree over task flags and content length
//!
//! Suggestions are advisory: the caller passes the chosen model to the chat
//! adapter, which also reports cost and context overflow afterwards.

pub mod classifier;
pub mod suggester;

pub use classifier::{analyze_task_complexity, word_count, TaskComplexity};
pub use suggester::{
    suggest_model, suggest_model_from_message, SuggestionParams, LONG_CONTENT_WORDS,
};
