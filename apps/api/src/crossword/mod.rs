// Placement engine: lattice model, occupancy map, candidate search, scoring, fallback.
// Pure and synchronous; handlers run it inside tokio::task::spawn_blocking.

pub mod engine;
pub mod fallback;
pub mod lattice;
pub mod occupancy;
pub mod scoring;
pub mod search;

// Re-export the public API consumed by the handlers.
pub use engine::{build_layout, PlacedWord, PlacementError, WordClue};
pub use scoring::ScoringPolicy;
