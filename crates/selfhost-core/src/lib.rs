// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for selfhost.
//!
//! Holds the closed set of supported model identifiers, chat message types,
//! token estimation, the error type and the [`ChatStream`] seam behind which
//! the streaming HTTP transport lives.

pub mod error;
pub mod token;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SelfhostError;
pub use traits::{ChatStream, ChunkCallback};
pub use types::{
    ChatCompletion, ChatMessage, ChatRequest, ChatResponse, ChatRole, ChatStatus, ModelFamily,
    ModelId, TokenUsage,
};
