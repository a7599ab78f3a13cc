// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation helpers for model pickers and spend reporting.

use selfhost_core::{ModelFamily, ModelId};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::{CapabilityEntry, ModelCatalog, PricingEntry};

/// Relative price tier: `$` (cheap) through `$$$$$` (expensive).
///
/// Based on the sum of input and output rates per million tokens.
pub fn cost_symbol(model: ModelId) -> &'static str {
    let p = model.pricing();
    let total = p.input_per_mtok + p.output_per_mtok;

    if total < 5.0 {
        "$"
    } else if total < 15.0 {
        "$$"
    } else if total < 30.0 {
        "$$$"
    } else if total < 60.0 {
        "$$$$"
    } else {
        "$$$$$"
    }
}

/// Render a 1-5 rating as stars.
pub fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

/// Picker label, e.g. `GPT-4.1 Mini - $ | Reasoning: ★★★★`.
pub fn option_label(model: ModelId) -> String {
    format!(
        "{} - {} | Reasoning: {}",
        model.display_name(),
        cost_symbol(model),
        stars(model.capability().reasoning)
    )
}

/// Format a USD amount for display. Rounding is a display concern only.
pub fn format_usd(cost: f64) -> String {
    format!("${cost:.4}")
}

/// Everything a settings panel shows about one model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub id: ModelId,
    pub name: &'static str,
    pub family: ModelFamily,
    pub cost_symbol: &'static str,
    pub pricing: PricingEntry,
    pub capability: CapabilityEntry,
    pub max_tokens: u32,
}

impl ModelSummary {
    pub fn new(model: ModelId) -> Self {
        Self {
            id: model,
            name: model.display_name(),
            family: model.family(),
            cost_symbol: cost_symbol(model),
            pricing: model.pricing(),
            capability: model.capability(),
            max_tokens: model.max_tokens(),
        }
    }

    /// Multi-line detail text shown when hovering a model.
    pub fn tooltip(&self) -> String {
        format!(
            "{id}\nDescription: {desc}\nReasoning: {reasoning}\nCost Efficiency: {cost}\n\
             Pricing: ${input}/1M input tokens, ${output}/1M output tokens",
            id = self.id,
            desc = self.capability.description,
            reasoning = stars(self.capability.reasoning),
            cost = stars(self.capability.cost_efficiency),
            input = self.pricing.input_per_mtok,
            output = self.pricing.output_per_mtok,
        )
    }
}

/// Summaries for every model, in picker order.
pub fn model_summaries() -> Vec<ModelSummary> {
    ModelId::iter().map(ModelSummary::new).collect()
}
