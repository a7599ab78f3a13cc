// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token estimation for context-limit and cost accounting.
//!
//! Used when the streaming API does not report usage. Newer models (GPT-4o,
//! the GPT-4.1 family and the o-series) use the `o200k_base` encoding; older
//! ones use `cl100k_base`. Unknown model strings are counted with
//! `cl100k_base`.

use std::str::FromStr;
use std::sync::LazyLock;

use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};
use tracing::warn;

use crate::types::{ChatMessage, ModelId};

/// Tokens added per message for role and separator markers.
const MESSAGE_OVERHEAD: usize = 4;

/// Tokens that prime every assistant reply.
const REPLY_OVERHEAD: usize = 3;

static CL100K: LazyLock<Option<CoreBPE>> = LazyLock::new(|| match cl100k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        warn!(error = %e, "cl100k_base encoding unavailable, using character estimate");
        None
    }
});

static O200K: LazyLock<Option<CoreBPE>> = LazyLock::new(|| match o200k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        warn!(error = %e, "o200k_base encoding unavailable, using character estimate");
        None
    }
});

/// BPE encodings used by the supported models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Cl100kBase,
    O200kBase,
}

impl Encoding {
    /// Encoding for a model string, defaulting to `cl100k_base`.
    pub fn for_model(model: &str) -> Self {
        ModelId::from_str(model)
            .map(Self::for_model_id)
            .unwrap_or(Encoding::Cl100kBase)
    }

    pub fn for_model_id(model: ModelId) -> Self {
        match model {
            ModelId::Gpt35Turbo | ModelId::Gpt4 | ModelId::Gpt4Turbo => Encoding::Cl100kBase,
            _ => Encoding::O200kBase,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
        }
    }

    fn bpe(self) -> Option<&'static CoreBPE> {
        match self {
            Encoding::Cl100kBase => CL100K.as_ref(),
            Encoding::O200kBase => O200K.as_ref(),
        }
    }
}

/// Count tokens in `text` as `model` would see them.
pub fn count_tokens(model: &str, text: &str) -> usize {
    match Encoding::for_model(model).bpe() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        // Rough fallback: one token per four characters.
        None => text.chars().count().div_ceil(4),
    }
}

/// Count prompt tokens for a whole conversation, including message framing.
pub fn count_conversation_tokens(model: &str, messages: &[ChatMessage]) -> usize {
    messages
        .iter()
        .map(|m| count_tokens(model, &m.content) + MESSAGE_OVERHEAD)
        .sum::<usize>()
        + REPLY_OVERHEAD
}
