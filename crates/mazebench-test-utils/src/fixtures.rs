//! Reusable maze fixtures.
//!
//! - [`SMALL_MAZE`]: a 7x7 definition with a unique 13-cell solution
//! - [`RAGGED_MAZE`]: a definition whose fourth layout row is short
//! - [`open_grid`]: an all-open layout of any size
//! - [`walled_off`]: a layout whose end is unreachable

use mazebench_core::Cell;
use mazebench_grid::{parse_definition, Layout};

pub const SMALL_MAZE: &str = "\
START: 1, 1
END: 5, 5
LAYOUT:
1 1 1 1 1 1 1
1 0 0 0 1 0 1
1 1 1 0 1 0 1
1 0 0 0 0 0 1
1 0 1 1 1 1 1
1 0 0 0 0 0 1
1 1 1 1 1 1 1
";

/// Cells on the only shortest path through [`SMALL_MAZE`].
pub const SMALL_MAZE_PATH_LEN: usize = 13;

pub const RAGGED_MAZE: &str = "\
START: 0, 0
END: 2, 2
LAYOUT:
0 0 0
0 0 0
0 0
";

/// [`SMALL_MAZE`] parsed.
pub fn small_maze() -> Layout {
    parse_definition(SMALL_MAZE).expect("SMALL_MAZE fixture must parse")
}

/// All-open `rows x cols` layout from the top-left to the bottom-right corner.
pub fn open_grid(rows: usize, cols: usize) -> Layout {
    let bits = vec![vec![0u8; cols]; rows];
    Layout::from_bits(
        &bits,
        Cell::new(0, 0),
        Cell::new(rows as i32 - 1, cols as i32 - 1),
    )
    .expect("open grid fixture must be valid")
}

/// 3x3 layout with a wall column separating start from end.
pub fn walled_off() -> Layout {
    Layout::from_bits(
        &[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]],
        Cell::new(0, 0),
        Cell::new(2, 2),
    )
    .expect("walled-off fixture must be valid")
}
