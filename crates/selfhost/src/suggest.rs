// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `selfhost suggest` command implementation.

use selfhost_core::{ModelId, SelfhostError};
use selfhost_cost::option_label;
use selfhost_router::{analyze_task_complexity, suggest_model, word_count, SuggestionParams};
use serde::Serialize;

/// Flags given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestFlags {
    pub cost_sensitive: bool,
    pub vision: bool,
    pub reasoning: bool,
    pub simple: bool,
}

/// Structured output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct SuggestionOutput {
    pub model: ModelId,
    pub label: String,
    pub words: usize,
    pub requires_vision: bool,
    pub requires_reasoning: bool,
    pub is_simple_task: bool,
    pub is_cost_sensitive: bool,
}

/// Build the suggestion params for a message.
///
/// When neither `--reasoning` nor `--simple` is given, both flags come from
/// keyword analysis of the message.
fn params_for(message: &str, flags: SuggestFlags) -> SuggestionParams {
    let (requires_reasoning, is_simple_task) = if flags.reasoning || flags.simple {
        (flags.reasoning, flags.simple)
    } else {
        let complexity = analyze_task_complexity(message);
        (complexity.requires_reasoning, complexity.is_simple_task)
    };

    SuggestionParams {
        message_content: message.to_string(),
        requires_vision: flags.vision,
        requires_reasoning,
        is_simple_task,
        is_cost_sensitive: flags.cost_sensitive,
    }
}

fn suggestion_for(message: &str, flags: SuggestFlags) -> SuggestionOutput {
    let params = params_for(message, flags);
    let model = suggest_model(&params);
    SuggestionOutput {
        model,
        label: option_label(model),
        words: word_count(message),
        requires_vision: params.requires_vision,
        requires_reasoning: params.requires_reasoning,
        is_simple_task: params.is_simple_task,
        is_cost_sensitive: params.is_cost_sensitive,
    }
}

/// Run the `selfhost suggest` command.
pub fn run_suggest(
    message: &str,
    flags: SuggestFlags,
    json: bool,
    use_color: bool,
) -> Result<(), SelfhostError> {
    let out = suggestion_for(message, flags);

    if json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|e| SelfhostError::Internal(format!("failed to serialize suggestion: {e}")))?;
        println!("{s}");
        return Ok(());
    }

    if use_color {
        use colored::Colorize;
        println!("{} {}", "→".cyan(), out.model.as_str().bold());
    } else {
        println!("-> {}", out.model.as_str());
    }
    println!("   {}", out.label);
    println!(
        "   words: {}  vision: {}  reasoning: {}  simple: {}  cost-sensitive: {}",
        out.words,
        out.requires_vision,
        out.requires_reasoning,
        out.is_simple_task,
        out.is_cost_sensitive
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_flags_when_not_forced() {
        let out = suggestion_for("Explain why this proof works", SuggestFlags::default());
        assert!(out.requires_reasoning);
        assert_eq!(out.model, ModelId::O1);
    }

    #[test]
    fn forced_flags_replace_detection() {
        let flags = SuggestFlags {
            simple: true,
            ..SuggestFlags::default()
        };
        let out = suggestion_for("Explain why this proof works", flags);
        assert!(!out.requires_reasoning);
        assert!(out.is_simple_task);
        assert_eq!(out.model, ModelId::Gpt41Nano);
    }

    #[test]
    fn vision_flag_wins() {
        let flags = SuggestFlags {
            vision: true,
            cost_sensitive: true,
            ..SuggestFlags::default()
        };
        assert_eq!(suggestion_for("summarize", flags).model, ModelId::Gpt4o);
    }

    #[test]
    fn json_output_uses_model_id_string() {
        let out = suggestion_for("summarize this", SuggestFlags {
            cost_sensitive: true,
            ..SuggestFlags::default()
        });
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"model\":\"gpt-3.5-turbo\""), "got: {json}");
        assert!(json.contains("\"words\":2"), "got: {json}");
    }
}
