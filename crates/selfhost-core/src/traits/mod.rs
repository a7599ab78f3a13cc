// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for external collaborators.

pub mod chat_stream;

pub use chat_stream::{ChatStream, ChunkCallback};
