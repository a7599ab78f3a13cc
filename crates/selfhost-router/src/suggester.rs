// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model suggestion from task flags and content length.
//!
//! Priority order, first match wins:
//! vision > reasoning > simple task > long content > default.
//! Cost sensitivity picks the cheaper option within each branch.

use selfhost_core::ModelId;
use tracing::debug;

use crate::classifier::{analyze_task_complexity, word_count};

/// Content longer than this many words counts as long content.
pub const LONG_CONTENT_WORDS: usize = 1000;

/// Inputs to [`suggest_model`]. All flags default to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionParams {
    pub message_content: String,
    pub requires_vision: bool,
    pub requires_reasoning: bool,
    pub is_simple_task: bool,
    pub is_cost_sensitive: bool,
}

impl SuggestionParams {
    /// Params for the given content with every flag unset.
    pub fn new(message_content: impl Into<String>) -> Self {
        Self {
            message_content: message_content.into(),
            ..Self::default()
        }
    }
}

/// Suggest a model for the given task.
pub fn suggest_model(params: &SuggestionParams) -> ModelId {
    let words = word_count(&params.message_content);
    let is_long_content = words > LONG_CONTENT_WORDS;
    let cost_sensitive = params.is_cost_sensitive;

    let (model, reason) = if params.requires_vision {
        // Only GPT-4o accepts image input.
        (ModelId::Gpt4o, "vision")
    } else if params.requires_reasoning {
        if cost_sensitive {
            (ModelId::Gpt41Mini, "reasoning, cost sensitive")
        } else if is_long_content {
            (ModelId::Gpt41, "reasoning, long content")
        } else {
            (ModelId::O1, "reasoning")
        }
    } else if params.is_simple_task {
        if cost_sensitive {
            (ModelId::Gpt35Turbo, "simple task, cost sensitive")
        } else {
            (ModelId::Gpt41Nano, "simple task")
        }
    } else if is_long_content {
        if cost_sensitive {
            (ModelId::Gpt41Mini, "long content, cost sensitive")
        } else {
            (ModelId::Gpt41, "long content")
        }
    } else if cost_sensitive {
        (ModelId::Gpt41Nano, "default, cost sensitive")
    } else {
        (ModelId::Gpt41Mini, "default")
    };

    debug!(model = model.as_str(), words, reason, "model suggested");
    model
}

/// Suggest a model from message text alone.
///
/// Derives the reasoning and simple-task flags with
/// [`analyze_task_complexity`]; vision is never requested on this path.
pub fn suggest_model_from_message(message_content: &str, is_cost_sensitive: bool) -> ModelId {
    let complexity = analyze_task_complexity(message_content);

    suggest_model(&SuggestionParams {
        message_content: message_content.to_string(),
        requires_vision: false,
        requires_reasoning: complexity.requires_reasoning,
        is_simple_task: complexity.is_simple_task,
        is_cost_sensitive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn vision_wins_regardless_of_other_flags() {
        let params = SuggestionParams {
            message_content: String::new(),
            requires_vision: true,
            ..SuggestionParams::default()
        };
        assert_eq!(suggest_model(&params), ModelId::Gpt4o);

        let params = SuggestionParams {
            message_content: words(2000),
            requires_vision: true,
            requires_reasoning: true,
            is_simple_task: true,
            is_cost_sensitive: true,
        };
        assert_eq!(suggest_model(&params), ModelId::Gpt4o);
    }

    #[test]
    fn reasoning_long_content_uses_flagship() {
        let params = SuggestionParams {
            message_content: words(1001),
            requires_reasoning: true,
            ..SuggestionParams::default()
        };
        assert_eq!(suggest_model(&params), ModelId::Gpt41);
    }

    #[test]
    fn reasoning_short_content_uses_o1() {
        let params = SuggestionParams {
            message_content: words(1000),
            requires_reasoning: true,
            ..SuggestionParams::default()
        };
        assert_eq!(suggest_model(&params), ModelId::O1);
    }

    #[test]
    fn reasoning_cost_sensitive_uses_mini() {
        for n in [0, 10, 5000] {
            let params = SuggestionParams {
                message_content: words(n),
                requires_reasoning: true,
                is_cost_sensitive: true,
                ..SuggestionParams::default()
            };
            assert_eq!(suggest_model(&params), ModelId::Gpt41Mini, "{n} words");
        }
    }

    #[test]
    fn reasoning_beats_simple_task() {
        let params = SuggestionParams {
            message_content: "x".into(),
            requires_reasoning: true,
            is_simple_task: true,
            ..SuggestionParams::default()
        };
        assert_eq!(suggest_model(&params), ModelId::O1);
    }

    #[test]
    fn simple_task_branches() {
        let mut params = SuggestionParams {
            message_content: words(5000),
            is_simple_task: true,
            ..SuggestionParams::default()
        };
        assert_eq!(suggest_model(&params), ModelId::Gpt41Nano);
        params.is_cost_sensitive = true;
        assert_eq!(suggest_model(&params), ModelId::Gpt35Turbo);
    }

    #[test]
    fn long_content_branches() {
        let mut params = SuggestionParams::new(words(1001));
        assert_eq!(suggest_model(&params), ModelId::Gpt41);
        params.is_cost_sensitive = true;
        assert_eq!(suggest_model(&params), ModelId::Gpt41Mini);
    }

    #[test]
    fn default_branches() {
        let mut params = SuggestionParams::new(words(1000));
        assert_eq!(suggest_model(&params), ModelId::Gpt41Mini);
        params.is_cost_sensitive = true;
        assert_eq!(suggest_model(&params), ModelId::Gpt41Nano);
    }

    #[test]
    fn empty_content_is_not_long() {
        let params = SuggestionParams::new("");
        assert_eq!(suggest_model(&params), ModelId::Gpt41Mini);
    }

    #[test]
    fn from_message_simple_cost_sensitive() {
        assert_eq!(
            suggest_model_from_message("summarize this", true),
            ModelId::Gpt35Turbo
        );
        assert_eq!(
            suggest_model_from_message("summarize this", false),
            ModelId::Gpt41Nano
        );
    }

    #[test]
    fn from_message_reasoning() {
        assert_eq!(
            suggest_model_from_message("Explain the proof step by step", false),
            ModelId::O1
        );
        assert_eq!(
            suggest_model_from_message("Explain the proof step by step", true),
            ModelId::Gpt41Mini
        );
    }

    #[test]
    fn from_message_neutral() {
        assert_eq!(
            suggest_model_from_message("hello there", false),
            ModelId::Gpt41Mini
        );
        assert_eq!(
            suggest_model_from_message("hello there", true),
            ModelId::Gpt41Nano
        );
    }

    #[test]
    fn from_message_long_neutral_content() {
        assert_eq!(suggest_model_from_message(&words(1500), false), ModelId::Gpt41);
    }
}
