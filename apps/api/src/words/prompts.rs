//! LLM prompt constants for word and clue generation.
//!
//! The model replies with `{"words": [{"word": "...", "description": "..."}]}`.
//! Callers deserialize via `llm.call_json::<SuppliedWords>()`.

/// System prompt for the crossword word supplier.
pub const WORDS_SYSTEM: &str = "You are a crossword compiler. You pick single words that fit a \
    theme and write a short, fair clue for each one. Words are single English words made of \
    letters only: no spaces, digits, hyphens or apostrophes.";

/// Prompt template. Replace: {theme}, {new_words_instruction}, {known_words}
pub const WORDS_PROMPT_TEMPLATE: &str = r#"Build material for a crossword with the theme: {theme}

{new_words_instruction}

WORDS THAT STILL NEED A CLUE (write one for each, keep the word as given):
{known_words}

Return a JSON object with this EXACT schema (no extra fields):
{
  "words": [
    {"word": "Hello", "description": "Greeting"},
    {"word": "World", "description": "Universe"}
  ]
}

RULES:
1. Every entry is ONE word made of letters only
2. Every description is a short clue (under 12 words) that does not contain the word itself
3. Never repeat a word"#;

/// Inserted when the supplier may invent words of its own.
pub const NEW_WORDS_ALLOWED: &str =
    "Add between 8 and 15 new words that fit the theme, each with a clue.";

/// Inserted when only the given words may appear.
pub const NEW_WORDS_FORBIDDEN: &str =
    "Do NOT add any new words. Only write clues for the words listed below.";

/// Placeholder when no given word lacks a clue.
pub const NO_KNOWN_WORDS: &str = "(none)";
