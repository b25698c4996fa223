//! Fallback placement, used only when no intersecting candidate exists.
//!
//! Places a word along `X` two cells to the right of the rightmost occupied cell.
//! Every covered cell then has `x > max_x`, so the placement cannot collide.

use crate::crossword::lattice::{Axis, Cell, Placement};
use crate::crossword::occupancy::OccupancyMap;

/// Gap between the rightmost occupied cell and the fallback word's start.
pub const FALLBACK_GAP: i32 = 2;

/// Start cell for a fallback placement. An empty map falls back to the origin.
pub fn fallback_start(map: &OccupancyMap) -> Cell {
    match map.rightmost() {
        Some(cell) => Cell::new(cell.x + FALLBACK_GAP, cell.y, cell.z),
        None => Cell::ORIGIN,
    }
}

/// Builds the fallback placement for `word`. Always succeeds.
pub fn place_fallback(word: &str, map: &OccupancyMap) -> Placement {
    Placement::new(word, fallback_start(map), Axis::X)
}
