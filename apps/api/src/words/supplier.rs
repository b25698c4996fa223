//! Word supplier — pluggable source of `(word, description)` pairs for a theme.
//!
//! Default: `LlmWordSupplier`, backed by the shared `LlmClient`.
//! `AppState` holds an `Arc<dyn WordSupplier>` so handlers never depend on the
//! concrete backend (tests swap in a canned supplier).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::crossword::WordClue;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::words::prompts::{
    NEW_WORDS_ALLOWED, NEW_WORDS_FORBIDDEN, NO_KNOWN_WORDS, WORDS_PROMPT_TEMPLATE, WORDS_SYSTEM,
};

/// What the supplier is asked for.
#[derive(Debug, Clone)]
pub struct SupplyRequest {
    pub theme: String,
    /// Words the user gave without a clue.
    pub needs_description: Vec<String>,
    /// Whether the supplier may add words of its own.
    pub allow_new_words: bool,
}

impl SupplyRequest {
    /// True when there is nothing for the supplier to do.
    pub fn is_noop(&self) -> bool {
        !self.allow_new_words && self.needs_description.is_empty()
    }
}

#[async_trait]
pub trait WordSupplier: Send + Sync {
    async fn supply(&self, request: &SupplyRequest) -> Result<Vec<WordClue>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmWordSupplier
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SuppliedWords {
    #[serde(default)]
    words: Vec<WordClue>,
}

pub struct LlmWordSupplier {
    llm: LlmClient,
}

impl LlmWordSupplier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl WordSupplier for LlmWordSupplier {
    async fn supply(&self, request: &SupplyRequest) -> Result<Vec<WordClue>, AppError> {
        let prompt = build_words_prompt(request);
        let system = format!("{WORDS_SYSTEM} {JSON_ONLY_SYSTEM}");

        let reply: SuppliedWords = self
            .llm
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Word generation failed: {e}")))?;

        info!(
            theme = %request.theme,
            supplied = reply.words.len(),
            "Word supplier returned candidates"
        );
        Ok(reply.words)
    }
}

pub(crate) fn build_words_prompt(request: &SupplyRequest) -> String {
    let new_words_instruction = if request.allow_new_words {
        NEW_WORDS_ALLOWED
    } else {
        NEW_WORDS_FORBIDDEN
    };
    let known_words = if request.needs_description.is_empty() {
        NO_KNOWN_WORDS.to_string()
    } else {
        request
            .needs_description
            .iter()
            .map(|w| format!("- {w}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    WORDS_PROMPT_TEMPLATE
        .replace("{theme}", request.theme.trim())
        .replace("{new_words_instruction}", new_words_instruction)
        .replace("{known_words}", &known_words)
}
