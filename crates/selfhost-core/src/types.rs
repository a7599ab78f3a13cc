// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the catalog, the suggester and the chat adapter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Supported OpenAI chat models.
///
/// The set is closed: every variant has a pricing entry, a capability entry
/// and a context limit in the catalog, enforced by exhaustive matching.
/// Parses from and formats as the identifier the OpenAI API expects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum ModelId {
    #[strum(serialize = "gpt-3.5-turbo")]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[strum(serialize = "gpt-4")]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[strum(serialize = "gpt-4-turbo")]
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[strum(serialize = "gpt-4o")]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[strum(serialize = "gpt-4.1")]
    #[serde(rename = "gpt-4.1")]
    Gpt41,
    #[strum(serialize = "gpt-4.1-mini")]
    #[serde(rename = "gpt-4.1-mini")]
    Gpt41Mini,
    #[strum(serialize = "gpt-4.1-nano")]
    #[serde(rename = "gpt-4.1-nano")]
    Gpt41Nano,
    #[strum(serialize = "o1")]
    #[serde(rename = "o1")]
    O1,
    #[strum(serialize = "o1-mini")]
    #[serde(rename = "o1-mini")]
    O1Mini,
    #[strum(serialize = "o3")]
    #[serde(rename = "o3")]
    O3,
    #[strum(serialize = "o3-mini")]
    #[serde(rename = "o3-mini")]
    O3Mini,
    #[strum(serialize = "o4-mini")]
    #[serde(rename = "o4-mini")]
    O4Mini,
}

impl ModelId {
    /// The API identifier, e.g. `"gpt-4.1-mini"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Human-readable name shown in model pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelId::Gpt35Turbo => "GPT-3.5-Turbo",
            ModelId::Gpt4 => "GPT-4",
            ModelId::Gpt4Turbo => "GPT-4-Turbo",
            ModelId::Gpt4o => "GPT-4o",
            ModelId::Gpt41 => "GPT-4.1",
            ModelId::Gpt41Mini => "GPT-4.1 Mini",
            ModelId::Gpt41Nano => "GPT-4.1 Nano",
            ModelId::O1 => "o1",
            ModelId::O1Mini => "o1 Mini",
            ModelId::O3 => "o3",
            ModelId::O3Mini => "o3 Mini",
            ModelId::O4Mini => "o4 Mini",
        }
    }

    /// The product family the model belongs to.
    pub fn family(self) -> ModelFamily {
        match self {
            ModelId::Gpt35Turbo => ModelFamily::Gpt35,
            ModelId::Gpt4 | ModelId::Gpt4Turbo | ModelId::Gpt4o => ModelFamily::Gpt4,
            ModelId::Gpt41 | ModelId::Gpt41Mini | ModelId::Gpt41Nano => ModelFamily::Gpt41,
            ModelId::O1 | ModelId::O1Mini | ModelId::O3 | ModelId::O3Mini | ModelId::O4Mini => {
                ModelFamily::OSeries
            }
        }
    }
}

/// Model families, used to group models in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum ModelFamily {
    #[strum(serialize = "GPT-3.5")]
    Gpt35,
    #[strum(serialize = "GPT-4")]
    Gpt4,
    #[strum(serialize = "GPT-4.1 Family")]
    Gpt41,
    #[strum(serialize = "o-Series")]
    OSeries,
}

impl ModelFamily {
    /// One-line summary of what the family is good for.
    pub fn summary(self) -> &'static str {
        match self {
            ModelFamily::Gpt35 => "Basic model, best for simple tasks and cost-efficiency",
            ModelFamily::Gpt4 => "Advanced model with strong reasoning capabilities",
            ModelFamily::Gpt41 => "Latest generation with excellent performance/cost balance",
            ModelFamily::OSeries => "Specialized models for complex reasoning tasks",
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Token counts for one request/response cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens (system message plus conversation history).
    pub input_tokens: u32,
    /// Completion tokens produced by the model.
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Combined input and output tokens, the figure compared to the context limit.
    pub fn total(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// A chat request handed to the streaming transport.
///
/// `model` stays a plain string so callers can pass identifiers the catalog
/// does not know; cost and limit accounting degrade gracefully for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// What the transport returns once the stream has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    /// The full assistant reply, concatenated from all chunks.
    pub content: String,
    /// Usage reported by the API, when the stream included it.
    pub usage: Option<TokenUsage>,
}

/// Outcome status of a chat request as seen by the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ChatStatus {
    Ok,
    Error,
}

/// Result of a chat request: the reply on success, an error message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: ChatStatus,
    pub data: String,
}

impl ChatResponse {
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            status: ChatStatus::Ok,
            data: data.into(),
        }
    }

    pub fn error(data: impl Into<String>) -> Self {
        Self {
            status: ChatStatus::Error,
            data: data.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ChatStatus::Ok
    }
}
