//! Test doubles shared by the words and routes tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::crossword::{ScoringPolicy, WordClue};
use crate::errors::AppError;
use crate::state::AppState;
use crate::words::supplier::{SupplyRequest, WordSupplier};

/// Returns the same words for every request and counts calls.
pub struct CannedSupplier {
    words: Vec<WordClue>,
    calls: AtomicUsize,
}

impl CannedSupplier {
    pub fn new(words: Vec<WordClue>) -> Self {
        Self {
            words,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordSupplier for CannedSupplier {
    async fn supply(&self, _request: &SupplyRequest) -> Result<Vec<WordClue>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.words.clone())
    }
}

/// Always fails the way a dead LLM backend would.
pub struct FailingSupplier;

#[async_trait]
impl WordSupplier for FailingSupplier {
    async fn supply(&self, _request: &SupplyRequest) -> Result<Vec<WordClue>, AppError> {
        Err(AppError::Llm("upstream unavailable".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        anthropic_api_key: "sk-test".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        max_words: 30,
        max_word_len: 24,
        layout_seed: Some(7),
        scoring: ScoringPolicy::Adjacency,
    }
}

pub fn test_state(supplier: Arc<dyn WordSupplier>) -> AppState {
    AppState {
        config: test_config(),
        supplier,
    }
}
