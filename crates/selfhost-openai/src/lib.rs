// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat adapter for selfhost.
//!
//! Wraps a [`ChatStream`] transport with the API key, turns transport failures
//! into displayable [`ChatResponse`] errors, and reports usage, cost and
//! context overflow for completed requests.

use secrecy::{ExposeSecret, SecretString};
use selfhost_config::{CostConfig, SelfhostConfig};
use selfhost_core::token::{count_conversation_tokens, count_tokens};
use selfhost_core::{
    ChatCompletion, ChatMessage, ChatRequest, ChatResponse, ChatStream, ChunkCallback,
    SelfhostError, TokenUsage,
};
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Returned when a failed request carries no error message.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to communicate with OpenAI API.";

/// Outcome of a chat request together with what it cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub response: ChatResponse,
    /// Reported by the transport, or estimated locally when it reports none.
    /// `None` when the request failed.
    pub usage: Option<TokenUsage>,
    /// `None` when the request failed, the model has no pricing entry or
    /// `cost.show_cost` is off.
    pub cost_usd: Option<f64>,
    pub over_context_limit: bool,
    /// Whether `usage` came from a local estimate instead of the API.
    pub estimated: bool,
}

/// OpenAI chat adapter over a streaming transport.
pub struct OpenAiAdapter<S> {
    api_key: SecretString,
    cost: CostConfig,
    stream: S,
}

impl<S: ChatStream> OpenAiAdapter<S> {
    /// Creates an adapter. A missing or empty key is logged and kept empty;
    /// requests will then fail at the transport.
    pub fn new(api_key: Option<String>, stream: S) -> Self {
        let api_key = match api_key.filter(|k| !k.is_empty()) {
            Some(key) => SecretString::from(key),
            None => {
                error!("API key is missing for the OpenAI adapter");
                SecretString::from(String::new())
            }
        };
        Self {
            api_key,
            cost: CostConfig::default(),
            stream,
        }
    }

    /// Creates an adapter using `settings.api_key` and the `cost` switches
    /// from the loaded config.
    pub fn from_config(config: &SelfhostConfig, stream: S) -> Self {
        let adapter = Self::new(config.settings.api_key.clone(), stream)
            .with_cost_config(config.cost.clone());
        info!(
            model = config.settings.model.as_str(),
            show_cost = config.cost.show_cost,
            "OpenAI adapter initialized"
        );
        adapter
    }

    /// Replaces the cost reporting switches.
    pub fn with_cost_config(mut self, cost: CostConfig) -> Self {
        self.cost = cost;
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// USD cost of a request, or `None` for a model without pricing.
    pub fn calculate_cost(
        &self,
        model: &str,
        input_tokens: i64,
        output_tokens: i64,
    ) -> Option<f64> {
        selfhost_cost::calculate_cost(model, input_tokens, output_tokens)
    }

    /// Context window of `model`, or `None` when unknown.
    pub fn model_max_tokens(&self, model: &str) -> Option<u32> {
        selfhost_cost::lookup_max_tokens(model)
    }

    pub fn is_over_context_limit(&self, model: &str, token_count: i64) -> bool {
        selfhost_cost::is_over_context_limit(model, token_count)
    }

    /// Sends a chat request, streaming deltas to `on_chunk`.
    ///
    /// Never fails: transport errors come back as an `Error` response
    /// carrying the error message.
    pub async fn send_chat_request(
        &self,
        model: &str,
        messages: &[ChatMessage],
        on_chunk: Option<ChunkCallback<'_>>,
    ) -> ChatResponse {
        match self.complete(model, messages, on_chunk).await {
            Ok(completion) => ChatResponse::ok(completion.content),
            Err(e) => error_response(&e),
        }
    }

    /// Like [`send_chat_request`](Self::send_chat_request), and also reports
    /// token usage, cost and whether the conversation overflowed the model's
    /// context window.
    pub async fn send_chat_request_with_report(
        &self,
        model: &str,
        messages: &[ChatMessage],
        on_chunk: Option<ChunkCallback<'_>>,
    ) -> ChatReport {
        let completion = match self.complete(model, messages, on_chunk).await {
            Ok(completion) => completion,
            Err(e) => {
                return ChatReport {
                    response: error_response(&e),
                    usage: None,
                    cost_usd: None,
                    over_context_limit: false,
                    estimated: false,
                };
            }
        };

        let (usage, estimated) = match completion.usage {
            Some(usage) => (usage, false),
            None => (estimate_usage(model, messages, &completion), true),
        };

        let cost_usd = if self.cost.show_cost {
            self.calculate_cost(
                model,
                i64::from(usage.input_tokens),
                i64::from(usage.output_tokens),
            )
        } else {
            None
        };

        let total = i64::from(usage.total());
        let over_context_limit = self.is_over_context_limit(model, total);
        if over_context_limit && self.cost.warn_on_context_overflow {
            warn!(
                model,
                tokens = total,
                max_tokens = ?self.model_max_tokens(model),
                "conversation exceeds the model context window"
            );
        }

        debug!(
            model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            estimated,
            "chat request completed"
        );

        ChatReport {
            response: ChatResponse::ok(completion.content),
            usage: Some(usage),
            cost_usd,
            over_context_limit,
            estimated,
        }
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        on_chunk: Option<ChunkCallback<'_>>,
    ) -> Result<ChatCompletion, SelfhostError> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
        };
        self.stream
            .send_chat_stream(&self.api_key, &request, on_chunk)
            .await
    }
}

fn error_response(e: &SelfhostError) -> ChatResponse {
    error!(error = %e, "OpenAI API request failed");
    let message = match e {
        SelfhostError::Provider { message, .. } => message.clone(),
        other => other.to_string(),
    };
    if message.trim().is_empty() {
        ChatResponse::error(TRANSPORT_ERROR_MESSAGE)
    } else {
        ChatResponse::error(message)
    }
}

fn estimate_usage(
    model: &str,
    messages: &[ChatMessage],
    completion: &ChatCompletion,
) -> TokenUsage {
    let input = count_conversation_tokens(model, messages);
    let output = count_tokens(model, &completion.content);
    TokenUsage {
        input_tokens: u32::try_from(input).unwrap_or(u32::MAX),
        output_tokens: u32::try_from(output).unwrap_or(u32::MAX),
    }
}
