// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based task complexity analysis.
//!
//! Classifies a message as needing reasoning and/or being a simple task
//! using case-insensitive substring matches. No LLM pre-call, no network.

/// Keywords that indicate the message needs careful reasoning.
const REASONING_KEYWORDS: &[&str] = &[
    "explain",
    "analyze",
    "compare",
    "evaluate",
    "synthesize",
    "complex",
    "detailed",
    "thorough",
    "comprehensive",
    "algorithm",
    "logic",
    "math",
    "mathematics",
    "proof",
];

/// Keywords that indicate a simple, low-effort task.
const SIMPLE_TASK_KEYWORDS: &[&str] = &[
    "summarize",
    "list",
    "simple",
    "brief",
    "short",
    "quick",
    "help",
    "find",
    "define",
    "meaning",
];

/// Estimated properties of a task, derived from its message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskComplexity {
    pub requires_reasoning: bool,
    /// Never true together with `requires_reasoning`.
    pub is_simple_task: bool,
}

/// Analyze message content for reasoning and simple-task keywords.
///
/// Reasoning keywords take precedence: a message matching both sets is
/// classified as requiring reasoning and not as a simple task.
pub fn analyze_task_complexity(message_content: &str) -> TaskComplexity {
    let content = message_content.to_lowercase();

    let has_reasoning = REASONING_KEYWORDS.iter().any(|k| content.contains(k));
    let has_simple = SIMPLE_TASK_KEYWORDS.iter().any(|k| content.contains(k));

    TaskComplexity {
        requires_reasoning: has_reasoning,
        is_simple_task: has_simple && !has_reasoning,
    }
}

/// Number of whitespace-delimited words. Empty or blank content has zero.
pub fn word_count(message_content: &str) -> usize {
    message_content.split_whitespace().count()
}
