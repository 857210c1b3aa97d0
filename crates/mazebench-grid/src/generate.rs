//! Seeded perfect-maze generation.
//!
//! An iterative recursive backtracker over the odd-indexed cells. The
//! result is a perfect maze (exactly one path between any two open cells)
//! surrounded by a solid border, so the start and end are always
//! connected. Same `(rows, cols, seed)` always gives the same layout.

use crate::layout::{CellKind, Layout};
use mazebench_core::{Cell, ConfigError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// Generate a `rows x cols` maze with start `(1, 1)` and end at
/// `(rows - 2, cols - 2)`.
///
/// Both dimensions must be odd and at least 3.
///
/// # Examples
///
/// ```
/// use mazebench_grid::{generate_layout, solve};
///
/// let layout = generate_layout(15, 15, 7).unwrap();
/// assert!(solve(&layout).is_ok());
/// ```
pub fn generate_layout(rows: u32, cols: u32, seed: u64) -> Result<Layout, ConfigError> {
    if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(ConfigError::InvalidDimensions {
            rows,
            cols,
            reason: "generated mazes need odd dimensions of at least 3".into(),
        });
    }

    let (r, c) = (rows as usize, cols as usize);
    let mut grid = vec![vec![CellKind::Wall; c]; r];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    grid[1][1] = CellKind::Open;
    let mut stack = vec![(1usize, 1usize)];
    while let Some(&(row, col)) = stack.last() {
        let mut candidates: SmallVec<[(usize, usize); 4]> = SmallVec::new();
        if row >= 3 && grid[row - 2][col] == CellKind::Wall {
            candidates.push((row - 2, col));
        }
        if row + 2 < r && grid[row + 2][col] == CellKind::Wall {
            candidates.push((row + 2, col));
        }
        if col >= 3 && grid[row][col - 2] == CellKind::Wall {
            candidates.push((row, col - 2));
        }
        if col + 2 < c && grid[row][col + 2] == CellKind::Wall {
            candidates.push((row, col + 2));
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }
        let (nr, nc) = candidates[rng.random_range(0..candidates.len())];
        grid[(row + nr) / 2][(col + nc) / 2] = CellKind::Open;
        grid[nr][nc] = CellKind::Open;
        stack.push((nr, nc));
    }

    let start = Cell::new(1, 1);
    let end = Cell::new(rows as i32 - 2, cols as i32 - 2);
    let layout = Layout::from_rows(grid, start, end).map_err(|e| ConfigError::Inconsistent {
        reason: e.to_string(),
    })?;
    log::debug!("generated {rows}x{cols} maze from seed {seed}");
    Ok(layout)
}
