//! Grid cell addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` address into a maze grid.
///
/// Row 0 is the first layout line of a definition file and column 0 its
/// leftmost token. Coordinates are signed so that neighbour arithmetic can
/// step off the grid and be rejected by a bounds check instead of wrapping.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index, increasing downward.
    pub row: i32,
    /// Column index, increasing rightward.
    pub col: i32,
}

impl Cell {
    /// Create a cell address.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan (L1) distance, the geodesic on an unobstructed 4-connected grid.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_and_adjacency() {
        let a = Cell::new(0, 0);
        assert_eq!(a.manhattan(Cell::new(4, 4)), 8);
        assert!(a.is_adjacent(Cell::new(1, 0)));
        assert!(!a.is_adjacent(Cell::new(1, 1)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn offset_can_leave_the_grid() {
        assert_eq!(Cell::new(0, 0).offset(-1, 0), Cell::new(-1, 0));
    }

    #[test]
    fn display_is_row_then_col() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }

    fn cell() -> impl Strategy<Value = Cell> {
        (-1000i32..1000, -1000i32..1000).prop_map(Cell::from)
    }

    proptest! {
        #[test]
        fn offset_is_undone_by_its_inverse(c in cell(), dr in -50i32..50, dc in -50i32..50) {
            prop_assert_eq!(c.offset(dr, dc).offset(-dr, -dc), c);
            prop_assert_eq!(c.manhattan(c.offset(dr, dc)), dr.unsigned_abs() + dc.unsigned_abs());
        }

        #[test]
        fn distance_is_a_metric(a in cell(), b in cell(), c in cell()) {
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }

        #[test]
        fn unit_steps_are_adjacent(c in cell(), step in 0usize..4) {
            let (dr, dc) = [(-1, 0), (1, 0), (0, -1), (0, 1)][step];
            prop_assert!(c.is_adjacent(c.offset(dr, dc)));
            prop_assert!(!c.is_adjacent(c.offset(dr + dc, dc - dr)));
        }
    }
}
