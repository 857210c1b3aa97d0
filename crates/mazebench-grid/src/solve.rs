//! Breadth-first shortest-path solver.

use crate::layout::Layout;
use mazebench_core::{Cell, NoPathCause, SolveError};
use std::collections::VecDeque;

/// Shortest path between the layout's own start and end cells.
pub fn solve(layout: &Layout) -> Result<Vec<Cell>, SolveError> {
    shortest_path(layout, layout.start(), layout.end())
}

/// Shortest 4-connected path of open cells from `start` to `end`, inclusive.
///
/// Uses a visited set with parent pointers, so every cell is expanded at
/// most once and the result has the minimum number of cells. Neighbours
/// are expanded in [`DIRECTIONS`](crate::DIRECTIONS) order, which makes
/// the choice among equally short paths deterministic.
///
/// # Examples
///
/// ```
/// use mazebench_core::Cell;
/// use mazebench_grid::{shortest_path, Layout};
///
/// let layout = Layout::from_bits(&[[0u8; 5]; 5], Cell::new(0, 0), Cell::new(4, 4)).unwrap();
/// let path = shortest_path(&layout, layout.start(), layout.end()).unwrap();
/// assert_eq!(path.len(), 9);
/// ```
pub fn shortest_path(layout: &Layout, start: Cell, end: Cell) -> Result<Vec<Cell>, SolveError> {
    let fail = |cause| SolveError::NoPathFound { start, end, cause };
    let Some(start_idx) = layout.index(start).filter(|_| layout.is_open(start)) else {
        return Err(fail(NoPathCause::StartBlocked));
    };
    let Some(end_idx) = layout.index(end).filter(|_| layout.is_open(end)) else {
        return Err(fail(NoPathCause::EndBlocked));
    };

    let cols = layout.cols() as usize;
    let flat = |c: Cell| c.row as usize * cols + c.col as usize;
    let n = layout.cell_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == end {
            break;
        }
        let cell_idx = flat(cell);
        for next in layout.open_neighbours(cell) {
            let i = flat(next);
            if !visited[i] {
                visited[i] = true;
                parent[i] = Some(cell_idx);
                queue.push_back(next);
            }
        }
    }

    if !visited[end_idx] {
        log::warn!("maze has no path from {start} to {end}");
        return Err(fail(NoPathCause::Disconnected));
    }

    let mut path = vec![end];
    let mut cursor = end_idx;
    while let Some(prev) = parent[cursor] {
        path.push(layout.cell_at(prev));
        cursor = prev;
    }
    path.reverse();
    log::debug!("solved {start} -> {end} in {} cells", path.len());
    Ok(path)
}
