// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `selfhost cost`, `selfhost limit` and `selfhost tokens` command implementations.
//!
//! These accept any model string. Unknown models print a notice instead of
//! failing, matching how the adapter treats them.

use selfhost_core::token::{count_tokens, Encoding};
use selfhost_cost::{calculate_cost, format_usd, is_over_context_limit, lookup_max_tokens};

/// Run the `selfhost cost` command.
pub fn run_cost(model: &str, input_tokens: i64, output_tokens: i64) {
    println!("{}", cost_line(model, input_tokens, output_tokens));
}

fn cost_line(model: &str, input_tokens: i64, output_tokens: i64) -> String {
    match calculate_cost(model, input_tokens, output_tokens) {
        Some(cost) => format!(
            "{model}: {} ({} in, {} out)",
            format_usd(cost),
            input_tokens.max(0),
            output_tokens.max(0)
        ),
        None => format!("{model}: pricing unknown"),
    }
}

/// Run the `selfhost limit` command.
pub fn run_limit(model: &str, tokens: i64, use_color: bool) {
    let Some(max) = lookup_max_tokens(model) else {
        println!("{model}: context window unknown, no limit enforced");
        return;
    };

    let over = is_over_context_limit(model, tokens);
    if use_color {
        use colored::Colorize;
        let verdict = if over {
            "over limit".red()
        } else {
            "within limit".green()
        };
        println!("{model}: {tokens} / {max} tokens, {verdict}");
    } else {
        println!("{}", limit_line(model, tokens, max, over));
    }
}

fn limit_line(model: &str, tokens: i64, max: u32, over: bool) -> String {
    let verdict = if over { "over limit" } else { "within limit" };
    format!("{model}: {tokens} / {max} tokens, {verdict}")
}

/// Run the `selfhost tokens` command.
pub fn run_tokens(model: &str, text: &str) {
    let encoding = Encoding::for_model(model);
    println!("{} tokens ({})", count_tokens(model, text), encoding.name());
}
