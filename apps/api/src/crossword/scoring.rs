//! Scorer & Selector — ranks candidates and picks the best one.
//!
//! A score is `(primary, secondary)` compared lexicographically:
//! - primary depends on the run's [`ScoringPolicy`]
//! - secondary is the per-axis preference drawn once per iteration
//!
//! On exact ties the first maximal candidate in search order wins.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::crossword::lattice::{Axis, Placement};
use crate::crossword::occupancy::OccupancyMap;
use crate::crossword::search::Candidate;

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

/// How the primary score component is computed. One policy per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Fewer occupied neighbour cells is better (negative touch count).
    #[default]
    Adjacency,
    /// More genuine letter intersections is better.
    Intersections,
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adjacency" => Ok(ScoringPolicy::Adjacency),
            "intersections" => Ok(ScoringPolicy::Intersections),
            other => Err(format!(
                "unknown scoring policy '{other}' (expected 'adjacency' or 'intersections')"
            )),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Adjacency => f.write_str("adjacency"),
            ScoringPolicy::Intersections => f.write_str("intersections"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Axis preference
// ────────────────────────────────────────────────────────────────────────────

/// Per-axis tie-break values, uniform in `[0, 1)`, fixed for one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPreference([f64; 3]);

impl AxisPreference {
    /// Draws one value per axis, in order `X, Y, Z`.
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        AxisPreference([rng.random(), rng.random(), rng.random()])
    }

    #[cfg(test)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        AxisPreference([x, y, z])
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.0[0],
            Axis::Y => self.0[1],
            Axis::Z => self.0[2],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub primary: i64,
    pub secondary: f64,
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.total_cmp(&other.secondary))
    }
}

/// Counts occupied cells that would touch the placement without being part of it:
/// the caps before the start and after the end along its own axis, plus one step
/// either side of every letter along both perpendicular axes.
pub fn adjacency_count(placement: &Placement, map: &OccupancyMap) -> usize {
    let mut touches = [placement.start_cap(), placement.end_cap()]
        .iter()
        .filter(|cell| map.is_occupied(cell))
        .count();

    for (cell, _) in placement.cells() {
        for axis in placement.axis.others() {
            for offset in [-1, 1] {
                if map.is_occupied(&axis.step(offset, cell)) {
                    touches += 1;
                }
            }
        }
    }

    touches
}

pub fn score_candidate<S: AsRef<str>>(
    candidate: &Candidate,
    pending: &[S],
    map: &OccupancyMap,
    policy: ScoringPolicy,
    preference: &AxisPreference,
) -> Score {
    let primary = match policy {
        ScoringPolicy::Adjacency => {
            let placement = Placement::new(
                pending[candidate.word_index].as_ref(),
                candidate.start,
                candidate.axis,
            );
            -(adjacency_count(&placement, map) as i64)
        }
        ScoringPolicy::Intersections => candidate.intersections as i64,
    };

    Score {
        primary,
        secondary: preference.get(candidate.axis),
    }
}

/// Returns the highest-scoring candidate, or `None` when the set is empty.
pub fn select_best<S: AsRef<str>>(
    candidates: &[Candidate],
    pending: &[S],
    map: &OccupancyMap,
    policy: ScoringPolicy,
    preference: &AxisPreference,
) -> Option<(Candidate, Score)> {
    let mut best: Option<(Candidate, Score)> = None;
    for candidate in candidates {
        let score = score_candidate(candidate, pending, map, policy, preference);
        // Strictly greater: the earliest maximal candidate is kept.
        if best.as_ref().map_or(true, |(_, b)| score > *b) {
            best = Some((*candidate, score));
        }
    }
    best
}
