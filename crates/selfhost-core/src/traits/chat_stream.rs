// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Streaming chat transport trait.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::SelfhostError;
use crate::types::{ChatCompletion, ChatRequest};

/// Callback invoked with each text delta as it arrives.
pub type ChunkCallback<'a> = &'a mut (dyn FnMut(&str) + Send);

/// Transport that performs a streaming Chat Completions call.
///
/// Implementations own the HTTP/SSE details. They push every text delta
/// through `on_chunk` (when given) and return the concatenated reply once
/// the stream ends.
#[async_trait]
pub trait ChatStream: Send + Sync {
    async fn send_chat_stream(
        &self,
        api_key: &SecretString,
        request: &ChatRequest,
        on_chunk: Option<ChunkCallback<'_>>,
    ) -> Result<ChatCompletion, SelfhostError>;
}
