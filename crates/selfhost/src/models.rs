// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `selfhost models` command implementation.
//!
//! Lists the catalog grouped by family, the way the settings panel shows it.

use selfhost_core::{ModelFamily, SelfhostError};
use selfhost_cost::{format_usd, model_summaries, option_label, ModelSummary};
use strum::IntoEnumIterator;

/// Run the `selfhost models` command.
///
/// With `--json`, prints every [`ModelSummary`] as a JSON array.
pub fn run_models(json: bool, use_color: bool) -> Result<(), SelfhostError> {
    let summaries = model_summaries();

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| SelfhostError::Internal(format!("failed to serialize models: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    println!();
    for family in ModelFamily::iter() {
        print_family(family, &summaries, use_color);
    }
    Ok(())
}

fn print_family(family: ModelFamily, summaries: &[ModelSummary], use_color: bool) {
    if use_color {
        use colored::Colorize;
        println!("  {}  {}", family.to_string().bold(), family.summary().dimmed());
    } else {
        println!("  {family}  {}", family.summary());
    }
    println!("  {}", "-".repeat(60));

    for summary in summaries.iter().filter(|s| s.family == family) {
        println!("    {}", model_line(summary));
    }
    println!();
}

/// One catalog line: id, picker label, rates and context window.
fn model_line(summary: &ModelSummary) -> String {
    format!(
        "{:<14} {:<40} in {}/M  out {}/M  ctx {}",
        summary.id.as_str(),
        option_label(summary.id),
        format_usd(summary.pricing.input_per_mtok),
        format_usd(summary.pricing.output_per_mtok),
        summary.max_tokens
    )
}

#[cfg(test)]
mod tests {
    use selfhost_core::ModelId;

    use super::*;

    #[test]
    fn model_line_includes_rates_and_context() {
        let line = model_line(&ModelSummary::new(ModelId::Gpt4));
        assert!(line.starts_with("gpt-4 "), "got: {line}");
        assert!(line.contains("$30.0000/M"), "got: {line}");
        assert!(line.contains("$60.0000/M"), "got: {line}");
        assert!(line.contains("ctx 8192"), "got: {line}");
    }

    #[test]
    fn every_model_belongs_to_a_listed_family() {
        let summaries = model_summaries();
        let listed: usize = ModelFamily::iter()
            .map(|f| summaries.iter().filter(|s| s.family == f).count())
            .sum();
        assert_eq!(listed, summaries.len());
    }
}
