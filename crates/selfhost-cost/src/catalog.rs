// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static model catalog: pricing, capability ratings and context limits.
//!
//! Pricing from <https://openai.com/api/pricing>, in USD per million tokens.
//! Ratings are on a 1-5 scale (5 is best) and only feed display helpers.
//!
//! Every [`ModelId`] variant is covered by each table through exhaustive
//! matching, so a new model cannot be added without pricing and limits.

use std::str::FromStr;

use selfhost_core::ModelId;
use serde::Serialize;

/// Per-model pricing in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingEntry {
    /// Cost per million input (prompt) tokens.
    pub input_per_mtok: f64,
    /// Cost per million output (completion) tokens.
    pub output_per_mtok: f64,
}

/// Qualitative model ratings shown next to the model picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry {
    /// Reasoning ability, 1-5.
    pub reasoning: u8,
    /// Cost efficiency, 1-5.
    pub cost_efficiency: u8,
    pub description: &'static str,
}

const fn pricing(input_per_mtok: f64, output_per_mtok: f64) -> PricingEntry {
    PricingEntry {
        input_per_mtok,
        output_per_mtok,
    }
}

const fn capability(
    reasoning: u8,
    cost_efficiency: u8,
    description: &'static str,
) -> CapabilityEntry {
    CapabilityEntry {
        reasoning,
        cost_efficiency,
        description,
    }
}

/// Catalog accessors on the model identifier itself.
pub trait ModelCatalog {
    fn pricing(self) -> PricingEntry;
    fn capability(self) -> CapabilityEntry;
    /// Maximum context length in tokens.
    fn max_tokens(self) -> u32;
}

impl ModelCatalog for ModelId {
    fn pricing(self) -> PricingEntry {
        match self {
            ModelId::Gpt35Turbo => pricing(0.50, 1.50),
            ModelId::Gpt4 => pricing(30.00, 60.00),
            ModelId::Gpt4Turbo => pricing(10.00, 30.00),
            ModelId::Gpt4o => pricing(2.50, 10.00),
            ModelId::Gpt41 => pricing(2.00, 8.00),
            ModelId::Gpt41Mini => pricing(0.40, 1.60),
            ModelId::Gpt41Nano => pricing(0.10, 0.40),
            ModelId::O1 => pricing(15.00, 60.00),
            ModelId::O1Mini => pricing(1.10, 4.40),
            ModelId::O3 => pricing(10.00, 40.00),
            ModelId::O3Mini => pricing(1.10, 4.40),
            ModelId::O4Mini => pricing(1.10, 4.40),
        }
    }

    fn capability(self) -> CapabilityEntry {
        match self {
            ModelId::Gpt35Turbo => capability(
                3,
                5,
                "Good balance of capability and cost for simple tasks",
            ),
            ModelId::Gpt4 => capability(4, 1, "Strong overall capabilities, but expensive"),
            ModelId::Gpt4Turbo => capability(4, 2, "Similar to GPT-4 with larger context window"),
            ModelId::Gpt4o => capability(
                5,
                3,
                "Excellent capabilities with better cost efficiency than GPT-4",
            ),
            ModelId::Gpt41 => capability(
                5,
                3,
                "Latest flagship model for complex reasoning and creative tasks",
            ),
            ModelId::Gpt41Mini => capability(
                4,
                4,
                "Good balance of performance and cost for everyday tasks",
            ),
            ModelId::Gpt41Nano => capability(
                3,
                5,
                "Most affordable GPT-4.1 variant for simple tasks",
            ),
            ModelId::O1 => capability(
                5,
                1,
                "Superior reasoning for advanced mathematical and logical tasks",
            ),
            ModelId::O1Mini => capability(
                4,
                3,
                "Strong reasoning with better cost efficiency than O1",
            ),
            ModelId::O3 => capability(
                5,
                1,
                "Specialized high-performance model for diverse complex tasks",
            ),
            ModelId::O3Mini => {
                capability(4, 3, "Balance of performance and cost for various tasks")
            }
            ModelId::O4Mini => capability(4, 3, "Latest mini model with strong capabilities"),
        }
    }

    fn max_tokens(self) -> u32 {
        match self {
            ModelId::Gpt35Turbo => 4_096,
            ModelId::Gpt4 => 8_192,
            ModelId::Gpt4Turbo
            | ModelId::Gpt4o
            | ModelId::Gpt41
            | ModelId::Gpt41Mini
            | ModelId::Gpt41Nano
            | ModelId::O1
            | ModelId::O1Mini
            | ModelId::O3
            | ModelId::O3Mini
            | ModelId::O4Mini => 128_000,
        }
    }
}

/// Look up pricing for a model string. `None` for models outside the catalog.
pub fn lookup_pricing(model: &str) -> Option<PricingEntry> {
    ModelId::from_str(model).ok().map(ModelCatalog::pricing)
}

/// Look up capability ratings for a model string.
pub fn lookup_capability(model: &str) -> Option<CapabilityEntry> {
    ModelId::from_str(model).ok().map(ModelCatalog::capability)
}

/// Look up the maximum context length for a model string.
pub fn lookup_max_tokens(model: &str) -> Option<u32> {
    ModelId::from_str(model).ok().map(ModelCatalog::max_tokens)
}
