//! Derived `cell → (letter, axes)` lookup for the current crossword.
//!
//! Rebuilt from scratch once per outer-loop iteration so it always reflects the
//! placements exactly. Cells are remembered in first-covered order, which keeps
//! candidate enumeration (and therefore seeded runs) reproducible.

use std::collections::HashMap;

use crate::crossword::lattice::{Axis, Cell, Placement};

// ────────────────────────────────────────────────────────────────────────────
// AxisSet
// ────────────────────────────────────────────────────────────────────────────

/// The set of axes along which some placed word covers a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisSet(u8);

impl AxisSet {
    fn bit(axis: Axis) -> u8 {
        match axis {
            Axis::X => 0b001,
            Axis::Y => 0b010,
            Axis::Z => 0b100,
        }
    }

    pub fn single(axis: Axis) -> Self {
        AxisSet(Self::bit(axis))
    }

    /// Adds `axis`; no-op if already present.
    pub fn insert(&mut self, axis: Axis) {
        self.0 |= Self::bit(axis);
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Occupancy map
// ────────────────────────────────────────────────────────────────────────────

/// What a placed word left behind in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub letter: u8,
    pub axes: AxisSet,
}

#[derive(Debug, Default)]
pub struct OccupancyMap {
    cells: HashMap<Cell, Occupant>,
    order: Vec<Cell>,
}

impl OccupancyMap {
    /// Replays every placement's letters into a fresh map.
    ///
    /// When two placements cover the same cell the first letter is kept. Candidate
    /// validation never admits a disagreeing letter, so for engine-built crosswords
    /// the letters always match.
    pub fn build(crossword: &[Placement]) -> Self {
        let mut map = OccupancyMap::default();
        for placement in crossword {
            for (cell, letter) in placement.cells() {
                match map.cells.get_mut(&cell) {
                    Some(occupant) => occupant.axes.insert(placement.axis),
                    None => {
                        map.cells.insert(
                            cell,
                            Occupant {
                                letter,
                                axes: AxisSet::single(placement.axis),
                            },
                        );
                        map.order.push(cell);
                    }
                }
            }
        }
        map
    }

    pub fn get(&self, cell: &Cell) -> Option<&Occupant> {
        self.cells.get(cell)
    }

    pub fn is_occupied(&self, cell: &Cell) -> bool {
        self.cells.contains_key(cell)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Occupied cells in first-covered order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Occupant)> + '_ {
        self.order.iter().map(|cell| (*cell, &self.cells[cell]))
    }

    /// The first-covered cell with the greatest `x`, if any.
    pub fn rightmost(&self) -> Option<Cell> {
        let mut best: Option<Cell> = None;
        for cell in &self.order {
            if best.map_or(true, |b| cell.x > b.x) {
                best = Some(*cell);
            }
        }
        best
    }
}
