//! Enumerates every legal intersecting placement of the
//! pending words against the current occupancy map.
//!
//! Every candidate is anchored on at least one observed matching letter, so an
//! accepted candidate is always connected to the existing structure.

use crate::crossword::lattice::{Axis, Cell};
use crate::crossword::occupancy::OccupancyMap;

/// A legal placement for one pending word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Index into the pending-word slice passed to [`find_candidates`].
    pub word_index: usize,
    pub start: Cell,
    pub axis: Axis,
    /// Cells this placement shares with already-placed words.
    pub intersections: usize,
}

/// Searches all pending words in one pass.
///
/// Order: word, letter index, occupied cell (first-covered order), axis `X, Y, Z`.
/// The same placement may be reached through several anchors; duplicates are
/// harmless to selection.
pub fn find_candidates<S: AsRef<str>>(pending: &[S], map: &OccupancyMap) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (word_index, word) in pending.iter().enumerate() {
        let letters = word.as_ref().as_bytes();
        for (letter_index, &letter) in letters.iter().enumerate() {
            for (cell, occupant) in map.iter() {
                if occupant.letter != letter {
                    continue;
                }
                for axis in Axis::ALL {
                    let start = axis.step(-(letter_index as i32), cell);
                    if let Some(intersections) = validate(letters, start, axis, map) {
                        candidates.push(Candidate {
                            word_index,
                            start,
                            axis,
                            intersections,
                        });
                    }
                }
            }
        }
    }

    candidates
}

/// Checks a whole word at `start` along `axis`.
///
/// Returns the number of shared cells when valid. Every shared cell must hold the
/// same letter, must not already be a crossing point, and must not already be
/// covered along `axis`.
pub fn validate(letters: &[u8], start: Cell, axis: Axis, map: &OccupancyMap) -> Option<usize> {
    let mut intersections = 0;
    for (i, &letter) in letters.iter().enumerate() {
        let cell = axis.step(i as i32, start);
        let Some(occupant) = map.get(&cell) else {
            continue;
        };
        if occupant.letter != letter || occupant.axes.len() >= 2 || occupant.axes.contains(axis) {
            return None;
        }
        intersections += 1;
    }
    Some(intersections)
}
