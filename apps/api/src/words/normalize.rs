//! Caller-side normalization and validation of words before they reach the engine.
//!
//! The engine only accepts unique, uppercase `A-Z` words. User-typed words are
//! validated strictly (letters only); supplier output is cleaned instead, since
//! models occasionally add digits, hyphens or spaces.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::crossword::WordClue;
use crate::errors::AppError;

/// A word typed by the user, with an optional clue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserWord {
    pub word: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl UserWord {
    /// True when the user left the clue empty.
    pub fn needs_description(&self) -> bool {
        self.description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
    }
}

/// Uppercases and drops everything that is not an ASCII letter.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validates user words: non-empty, letters only, at most `max_word_len` letters.
/// Returns them uppercased.
pub fn validate_user_words(
    words: Vec<UserWord>,
    max_word_len: usize,
) -> Result<Vec<UserWord>, AppError> {
    words
        .into_iter()
        .map(|w| {
            let trimmed = w.word.trim();
            if trimmed.is_empty() {
                return Err(AppError::Validation("Words must be nonempty.".to_string()));
            }
            if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AppError::Validation(format!(
                    "The word '{trimmed}' should only contain letters."
                )));
            }
            if trimmed.len() > max_word_len {
                return Err(AppError::Validation(format!(
                    "The word '{trimmed}' is longer than {max_word_len} letters."
                )));
            }
            Ok(UserWord {
                word: trimmed.to_ascii_uppercase(),
                description: w.description.map(|d| d.trim().to_string()),
            })
        })
        .collect()
}

/// Merges user words with supplier output into the engine's input list.
///
/// - user words come first, in their given order, then supplied words
/// - words empty after normalization are dropped; duplicates keep their first slot
/// - supplied words longer than `max_word_len` are dropped
/// - a non-blank user clue always wins, else the first non-blank supplied clue
/// - with `allow_new_words == false`, supplied words the user did not give are ignored
/// - the result is capped at `max_words`
pub fn merge_word_clues(
    user_words: &[UserWord],
    supplied: Vec<WordClue>,
    allow_new_words: bool,
    max_words: usize,
    max_word_len: usize,
) -> Vec<WordClue> {
    let mut merged: Vec<WordClue> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for user in user_words {
        let word = normalize_word(&user.word);
        if word.is_empty() || slots.contains_key(&word) {
            continue;
        }
        let description = user.description.clone().unwrap_or_default();
        slots.insert(word.clone(), merged.len());
        merged.push(WordClue::new(word, description.trim()));
    }

    for clue in supplied {
        let word = normalize_word(&clue.word);
        if word.is_empty() {
            continue;
        }
        if word.len() > max_word_len {
            warn!(word = %word, max_word_len, "Supplied word too long, dropping");
            continue;
        }
        let description = clue.description.trim();
        match slots.get(&word) {
            // A blank clue (user or supplied) is the only thing ever overwritten.
            Some(&slot) => {
                if merged[slot].description.is_empty() {
                    merged[slot].description = description.to_string();
                }
            }
            None if allow_new_words => {
                slots.insert(word.clone(), merged.len());
                merged.push(WordClue::new(word, description));
            }
            None => {}
        }
    }

    if merged.len() > max_words {
        warn!(
            total = merged.len(),
            max_words, "Too many words for one crossword, truncating"
        );
        merged.truncate(max_words);
    }

    for clue in merged.iter().filter(|c| c.description.is_empty()) {
        warn!(word = %clue.word, "No description available for word");
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(word: &str, description: Option<&str>) -> UserWord {
        UserWord {
            word: word.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(normalize_word("1. Sea-shell"), "SEASHELL");
        assert_eq!(normalize_word("Café"), "CAF");
        assert_eq!(normalize_word("42"), "");
    }

    #[test]
    fn test_validate_rejects_empty_word() {
        let result = validate_user_words(vec![user("   ", None)], 24);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_non_letters() {
        let result = validate_user_words(vec![user("ok", None), user("r2d2", None)], 24);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("r2d2")));
    }

    #[test]
    fn test_validate_uppercases() {
        let words = validate_user_words(vec![user(" wave ", Some(" Ripple "))], 24).unwrap();
        assert_eq!(words, vec![user("WAVE", Some("Ripple"))]);
    }

    #[test]
    fn test_merge_user_words_come_first() {
        let merged = merge_word_clues(
            &[user("TIDE", Some("Ebb and flow"))],
            vec![WordClue::new("ocean", "Big water"), WordClue::new("Reef", "Coral ridge")],
            true,
            30,
            24,
        );
        let words: Vec<&str> = merged.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["TIDE", "OCEAN", "REEF"]);
    }

    #[test]
    fn test_merge_user_description_wins() {
        let merged = merge_word_clues(
            &[user("TIDE", Some("Ebb and flow"))],
            vec![WordClue::new("TIDE", "Moon-driven water")],
            true,
            30,
            24,
        );
        assert_eq!(merged, vec![WordClue::new("TIDE", "Ebb and flow")]);
    }

    #[test]
    fn test_merge_fills_missing_user_description() {
        let merged = merge_word_clues(
            &[user("TIDE", None)],
            vec![WordClue::new("tide", "Moon-driven water")],
            false,
            30,
            24,
        );
        assert_eq!(merged, vec![WordClue::new("TIDE", "Moon-driven water")]);
    }

    #[test]
    fn test_merge_without_new_words_ignores_extras() {
        let merged = merge_word_clues(
            &[user("TIDE", None)],
            vec![
                WordClue::new("TIDE", "Moon-driven water"),
                WordClue::new("OCEAN", "Big water"),
            ],
            false,
            30,
            24,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].word, "TIDE");
    }

    #[test]
    fn test_merge_drops_duplicates_and_empties() {
        let merged = merge_word_clues(
            &[],
            vec![
                WordClue::new("Wave", ""),
                WordClue::new("WAVE", "Ripple"),
                WordClue::new("123", "Numbers"),
                WordClue::new("wave!", "Hand gesture"),
            ],
            true,
            30,
            24,
        );
        // First blank clue gets filled by the first non-blank one.
        assert_eq!(merged, vec![WordClue::new("WAVE", "Ripple")]);
    }

    #[test]
    fn test_merge_caps_word_count() {
        let supplied = ["ONE", "TWO", "THREE", "FOUR"]
            .iter()
            .map(|w| WordClue::new(*w, "number"))
            .collect();
        let merged = merge_word_clues(&[], supplied, true, 2, 24);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].word, "TWO");
    }

    #[test]
    fn test_validate_rejects_overlong_word() {
        let long = "A".repeat(25);
        let result = validate_user_words(vec![user("sea", None), user(&long, None)], 24);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("longer than 24")));

        let at_limit = "B".repeat(24);
        assert!(validate_user_words(vec![user(&at_limit, None)], 24).is_ok());
    }

    #[test]
    fn test_merge_drops_overlong_supplied_words() {
        let merged = merge_word_clues(
            &[],
            vec![
                WordClue::new("A".repeat(2000), "Scream"),
                WordClue::new("Reef", "Coral ridge"),
            ],
            true,
            30,
            24,
        );
        assert_eq!(merged, vec![WordClue::new("REEF", "Coral ridge")]);
    }

    #[test]
    fn test_needs_description() {
        assert!(user("A", None).needs_description());
        assert!(user("A", Some("  ")).needs_description());
        assert!(!user("A", Some("Letter")).needs_description());
    }
}
