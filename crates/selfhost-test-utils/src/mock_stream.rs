// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat stream for deterministic testing.
//!
//! `MockChatStream` implements `ChatStream` with pre-configured outcomes,
//! enabling fast, CI-runnable tests without calling the OpenAI API.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use selfhost_core::{
    ChatCompletion, ChatRequest, ChatStream, ChunkCallback, SelfhostError, TokenUsage,
};

/// One queued outcome of a streaming call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Stream `chunks` in order, then finish with the optional usage report.
    Reply {
        chunks: Vec<String>,
        usage: Option<TokenUsage>,
    },
    /// Fail the call with a provider error carrying this message.
    Fail(String),
}

impl MockOutcome {
    /// A reply streamed word by word, without a usage report.
    pub fn words(text: &str) -> Self {
        let chunks = text
            .split_inclusive(' ')
            .map(str::to_string)
            .collect::<Vec<_>>();
        Self::Reply {
            chunks,
            usage: None,
        }
    }
}

/// A request observed by the mock, with the key it was sent with.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: ChatRequest,
}

/// A mock chat stream that plays back pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// a single "mock response" chunk is streamed.
#[derive(Clone, Default)]
pub struct MockChatStream {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockChatStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: Arc::default(),
        }
    }

    /// Add an outcome to the end of the queue.
    pub async fn push(&self, outcome: MockOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Every call made so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Reply {
                chunks: vec!["mock response".to_string()],
                usage: None,
            })
    }
}

#[async_trait]
impl ChatStream for MockChatStream {
    async fn send_chat_stream(
        &self,
        api_key: &SecretString,
        request: &ChatRequest,
        mut on_chunk: Option<ChunkCallback<'_>>,
    ) -> Result<ChatCompletion, SelfhostError> {
        self.calls.lock().await.push(RecordedCall {
            api_key: api_key.expose_secret().to_string(),
            request: request.clone(),
        });

        match self.next_outcome().await {
            MockOutcome::Fail(message) => Err(SelfhostError::provider(message)),
            MockOutcome::Reply { chunks, usage } => {
                let mut content = String::new();
                for chunk in &chunks {
                    if let Some(cb) = on_chunk.as_mut() {
                        cb(chunk.as_str());
                    }
                    content.push_str(chunk);
                }
                Ok(ChatCompletion { content, usage })
            }
        }
    }
}
