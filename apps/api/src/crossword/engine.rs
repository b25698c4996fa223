//! Placement engine — the greedy outer loop that turns an ordered word list into
//! a connected 3-axis crossword.
//!
//! # Loop
//! 1. The first word is placed at the origin along `X` before the loop starts.
//! 2. Each iteration rebuilds the occupancy map, draws one preference per axis,
//!    searches candidates for every pending word and appends the best one.
//! 3. With no candidate, the first pending word is fallback-placed instead.
//!
//! Exactly one word is placed per iteration, so `N` words take `N - 1` iterations.
//! The engine is synchronous; callers on an async executor run it inside
//! `tokio::task::spawn_blocking`.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::crossword::fallback::place_fallback;
use crate::crossword::lattice::{Axis, Cell, Placement};
use crate::crossword::occupancy::OccupancyMap;
use crate::crossword::scoring::{select_best, AxisPreference, ScoringPolicy};
use crate::crossword::search::find_candidates;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Precondition violations. A run either completes or is never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no words supplied")]
    EmptyInput,

    #[error("word '{word}' must be non-empty and contain only letters A-Z")]
    InvalidWordCharacters { word: String },

    #[error("word '{word}' appears more than once")]
    DuplicateWord { word: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Input / output records
// ────────────────────────────────────────────────────────────────────────────

/// A word and the clue it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClue {
    pub word: String,
    #[serde(default)]
    pub description: String,
}

impl WordClue {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
        }
    }
}

/// One entry of the response body: `{word, direction, start, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub direction: Axis,
    pub start: Cell,
    pub description: String,
}

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Placements in the order they were appended.
    pub placements: Vec<Placement>,
    /// Indices into `placements` that were made by the fallback placer.
    pub fallbacks: Vec<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Places every word and returns the layout.
///
/// Words must be unique, non-empty and uppercase `A-Z`. A single word is a valid
/// input and yields a one-placement layout.
pub fn place_words<S, R>(
    words: &[S],
    policy: ScoringPolicy,
    rng: &mut R,
) -> Result<Layout, PlacementError>
where
    S: AsRef<str>,
    R: Rng,
{
    check_words(words)?;

    let (first, rest) = words.split_first().ok_or(PlacementError::EmptyInput)?;
    let mut crossword = vec![Placement::new(first.as_ref(), Cell::ORIGIN, Axis::X)];
    let mut pending: Vec<&str> = rest.iter().map(|w| w.as_ref()).collect();
    let mut fallbacks = Vec::new();

    while !pending.is_empty() {
        let map = OccupancyMap::build(&crossword);
        let preference = AxisPreference::draw(rng);
        let candidates = find_candidates(&pending, &map);
        trace!(
            pending = pending.len(),
            candidates = candidates.len(),
            "Placement iteration"
        );

        match select_best(&candidates, &pending, &map, policy, &preference) {
            Some((best, score)) => {
                let word = pending.remove(best.word_index);
                debug!(
                    word,
                    axis = ?best.axis,
                    start = ?best.start,
                    primary = score.primary,
                    "Placed word at intersection"
                );
                crossword.push(Placement::new(word, best.start, best.axis));
            }
            None => {
                let word = pending.remove(0);
                let placement = place_fallback(word, &map);
                debug!(word, start = ?placement.start, "No intersection found, fallback placement");
                fallbacks.push(crossword.len());
                crossword.push(placement);
            }
        }
    }

    Ok(Layout {
        placements: crossword,
        fallbacks,
    })
}

/// Lays out word/clue pairs and carries each description through to its placement.
pub fn build_layout<R: Rng>(
    clues: &[WordClue],
    policy: ScoringPolicy,
    rng: &mut R,
) -> Result<Vec<PlacedWord>, PlacementError> {
    let words: Vec<&str> = clues.iter().map(|c| c.word.as_str()).collect();
    let layout = place_words(&words, policy, rng)?;

    let descriptions: HashMap<&str, &str> = clues
        .iter()
        .map(|c| (c.word.as_str(), c.description.as_str()))
        .collect();

    Ok(layout
        .placements
        .into_iter()
        .map(|p| {
            let description = descriptions
                .get(p.word.as_str())
                .copied()
                .unwrap_or_default()
                .to_string();
            PlacedWord {
                word: p.word,
                direction: p.axis,
                start: p.start,
                description,
            }
        })
        .collect())
}

fn check_words<S: AsRef<str>>(words: &[S]) -> Result<(), PlacementError> {
    if words.is_empty() {
        return Err(PlacementError::EmptyInput);
    }

    let mut seen = HashSet::new();
    for word in words {
        let word = word.as_ref();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PlacementError::InvalidWordCharacters {
                word: word.to_string(),
            });
        }
        if !seen.insert(word) {
            return Err(PlacementError::DuplicateWord {
                word: word.to_string(),
            });
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
