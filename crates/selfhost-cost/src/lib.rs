// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model catalog, pricing and context-limit accounting for selfhost.
//!
//! This crate provides:
//! - **Catalog**: Static pricing, capability ratings and context limits per model
//! - **Pricing**: USD cost calculation and context-limit checks over model strings
//! - **Display**: Cost tiers, rating stars and model summaries for pickers

pub mod catalog;
pub mod display;
pub mod pricing;

pub use catalog::{
    lookup_capability, lookup_max_tokens, lookup_pricing, CapabilityEntry, ModelCatalog,
    PricingEntry,
};
pub use display::{cost_symbol, format_usd, model_summaries, option_label, stars, ModelSummary};
pub use pricing::{calculate_cost, is_over_context_limit};
