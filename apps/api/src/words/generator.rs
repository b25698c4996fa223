//! Crossword generation — orchestrates the full request pipeline.
//!
//! Flow: validate theme/words → supplier (LLM) → merge/normalize →
//!       placement engine (spawn_blocking) → response.
//!
//! The engine never sees anything but clean, unique, uppercase words.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::crossword::{build_layout, PlacedWord, ScoringPolicy, WordClue};
use crate::errors::AppError;
use crate::words::normalize::{merge_word_clues, validate_user_words, UserWord};
use crate::words::supplier::{SupplyRequest, WordSupplier};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

fn default_allow_new_words() -> bool {
    true
}

/// Request for a themed crossword.
#[derive(Debug, Clone, Deserialize)]
pub struct CrosswordRequest {
    pub theme: String,
    #[serde(default)]
    pub words: Vec<UserWord>,
    #[serde(default = "default_allow_new_words")]
    pub allow_new_words: bool,
    /// Fixes the layout RNG for this request.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scoring: Option<ScoringPolicy>,
}

/// Request to lay out known words without calling the supplier.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub words: Vec<UserWord>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scoring: Option<ScoringPolicy>,
}

/// Response body shared by every crossword route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosswordResponse {
    pub id: Uuid,
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub words: Vec<PlacedWord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipelines
// ────────────────────────────────────────────────────────────────────────────

/// Runs the themed pipeline: supplier, merge, layout.
pub async fn generate_crossword(
    supplier: &dyn WordSupplier,
    config: &Config,
    request: CrosswordRequest,
) -> Result<CrosswordResponse, AppError> {
    let theme = request.theme.trim().to_string();
    if theme.is_empty() {
        return Err(AppError::Validation("The theme must be nonempty.".to_string()));
    }

    let user_words = validate_user_words(request.words, config.max_word_len)?;
    if !request.allow_new_words && user_words.is_empty() {
        return Err(AppError::Validation(
            "At least one word is required when new words are disabled.".to_string(),
        ));
    }

    let supply = SupplyRequest {
        theme: theme.clone(),
        needs_description: user_words
            .iter()
            .filter(|w| w.needs_description())
            .map(|w| w.word.clone())
            .collect(),
        allow_new_words: request.allow_new_words,
    };

    let supplied = if supply.is_noop() {
        Vec::new()
    } else {
        info!(
            theme = %theme,
            user_words = user_words.len(),
            allow_new_words = supply.allow_new_words,
            "Requesting words from supplier"
        );
        supplier.supply(&supply).await?
    };

    let clues = merge_word_clues(
        &user_words,
        supplied,
        request.allow_new_words,
        config.max_words,
        config.max_word_len,
    );
    if clues.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The word supplier produced no usable words.".to_string(),
        ));
    }

    let policy = request.scoring.unwrap_or(config.scoring);
    let seed = request.seed.or(config.layout_seed);
    let words = run_layout(clues, policy, seed).await?;

    info!(
        theme = %theme,
        words = words.len(),
        %policy,
        "Generated crossword"
    );

    Ok(CrosswordResponse {
        id: Uuid::new_v4(),
        name: theme,
        generated_at: Utc::now(),
        words,
    })
}

/// Lays out caller-supplied words only. Words without a clue keep an empty one.
pub async fn layout_crossword(
    config: &Config,
    request: LayoutRequest,
) -> Result<CrosswordResponse, AppError> {
    let user_words = validate_user_words(request.words, config.max_word_len)?;
    let clues = merge_word_clues(
        &user_words,
        Vec::new(),
        false,
        config.max_words,
        config.max_word_len,
    );

    let policy = request.scoring.unwrap_or(config.scoring);
    let seed = request.seed.or(config.layout_seed);
    let words = run_layout(clues, policy, seed).await?;

    Ok(CrosswordResponse {
        id: Uuid::new_v4(),
        name: request.name.unwrap_or_default(),
        generated_at: Utc::now(),
        words,
    })
}

/// Runs the CPU-bound engine off the async executor.
async fn run_layout(
    clues: Vec<WordClue>,
    policy: ScoringPolicy,
    seed: Option<u64>,
) -> Result<Vec<PlacedWord>, AppError> {
    let placed = tokio::task::spawn_blocking(move || {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        build_layout(&clues, policy, &mut rng)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))??;

    Ok(placed)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
