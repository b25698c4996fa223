//! Lattice Model — coordinate arithmetic for the three placement axes.
//!
//! Stepping `+1` along an axis maps to a fixed unit vector:
//! - `X`: `(x+1, y, z)`
//! - `Y`: `(x, y-1, z)` (increasing index moves "up" in row-major screen space)
//! - `Z`: `(x, y, z+1)`
//!
//! The `Y` sign convention is part of the wire format consumed by the frontend.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Axis
// ────────────────────────────────────────────────────────────────────────────

/// One of the three placement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in search order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit step for this axis.
    pub fn unit(self) -> (i32, i32, i32) {
        match self {
            Axis::X => (1, 0, 0),
            Axis::Y => (0, -1, 0),
            Axis::Z => (0, 0, 1),
        }
    }

    /// Returns the cell reached by stepping `index` times from `start` along this axis.
    /// Any offset is valid, including zero and negative ones.
    pub fn step(self, index: i32, start: Cell) -> Cell {
        let (dx, dy, dz) = self.unit();
        Cell {
            x: start.x + dx * index,
            y: start.y + dy * index,
            z: start.z + dz * index,
        }
    }

    /// The two axes perpendicular to this one.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cell
// ────────────────────────────────────────────────────────────────────────────

/// A lattice cell. Serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl From<[i32; 3]> for Cell {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Cell { x, y, z }
    }
}

impl From<Cell> for [i32; 3] {
    fn from(cell: Cell) -> Self {
        [cell.x, cell.y, cell.z]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Placement
// ────────────────────────────────────────────────────────────────────────────

/// A word bound to a start cell and an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub axis: Axis,
}

impl Placement {
    pub fn new(word: impl Into<String>, start: Cell, axis: Axis) -> Self {
        Self {
            word: word.into(),
            start,
            axis,
        }
    }

    /// Yields `(cell, letter)` for every letter of the word, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.word
            .bytes()
            .enumerate()
            .map(move |(i, letter)| (self.axis.step(i as i32, self.start), letter))
    }

    /// One step past the last letter along the placement's own axis.
    pub fn end_cap(&self) -> Cell {
        self.axis.step(self.word.len() as i32, self.start)
    }

    /// One step before the first letter along the placement's own axis.
    pub fn start_cap(&self) -> Cell {
        self.axis.step(-1, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_x_moves_right() {
        assert_eq!(Axis::X.step(3, Cell::ORIGIN), Cell::new(3, 0, 0));
    }

    #[test]
    fn test_step_y_moves_down_in_y() {
        // Y keeps its inverted sign: +1 index is y - 1.
        assert_eq!(Axis::Y.step(2, Cell::new(1, 1, 1)), Cell::new(1, -1, 1));
    }

    #[test]
    fn test_step_z_moves_forward() {
        assert_eq!(Axis::Z.step(1, Cell::new(4, 5, 6)), Cell::new(4, 5, 7));
    }

    #[test]
    fn test_negative_offset_inverts_step() {
        let start = Cell::new(2, 0, 0);
        for axis in Axis::ALL {
            let forward = axis.step(5, start);
            assert_eq!(axis.step(-5, forward), start);
        }
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let start = Cell::new(-7, 3, 9);
        for axis in Axis::ALL {
            assert_eq!(axis.step(0, start), start);
        }
    }

    #[test]
    fn test_others_excludes_self() {
        for axis in Axis::ALL {
            assert!(!axis.others().contains(&axis));
        }
    }

    #[test]
    fn test_placement_cells_follow_axis() {
        let placement = Placement::new("TAR", Cell::new(2, 0, 0), Axis::Y);
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Cell::new(2, 0, 0), b'T'),
                (Cell::new(2, -1, 0), b'A'),
                (Cell::new(2, -2, 0), b'R'),
            ]
        );
        assert_eq!(placement.start_cap(), Cell::new(2, 1, 0));
        assert_eq!(placement.end_cap(), Cell::new(2, -3, 0));
    }

    #[test]
    fn test_cell_serializes_as_array() {
        let json = serde_json::to_string(&Cell::new(1, -2, 3)).unwrap();
        assert_eq!(json, "[1,-2,3]");
        let back: Cell = serde_json::from_str("[5,0,0]").unwrap();
        assert_eq!(back, Cell::new(5, 0, 0));
    }

    #[test]
    fn test_axis_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), "\"Y\"");
    }
}
