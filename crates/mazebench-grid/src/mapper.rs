//! Grid-to-world coordinate mapping.
//!
//! There is exactly one formula for placing a cell in the world, and every
//! consumer (geometry emitter, waypoint builder, region registration) goes
//! through it. Two call sites with private copies of the formula drift
//! apart; this module exists so that they cannot.

use crate::layout::Layout;
use mazebench_core::config::require_positive;
use mazebench_core::{Cell, ConfigError, MazeConfig, Vec3};

/// Centre of cell `(row, col)` in a `rows x cols` grid, in world units.
///
/// ```text
/// x = (col - (cols-1)/2) * cell_size
/// y = ((rows-1)/2 - row) * cell_size
/// ```
///
/// The grid is centred on the origin and the row axis is flipped, so
/// increasing row index decreases `y`.
pub fn grid_to_world(row: i32, col: i32, rows: u32, cols: u32, cell_size: f64) -> (f64, f64) {
    let x = (f64::from(col) - (f64::from(cols) - 1.0) / 2.0) * cell_size;
    let y = ((f64::from(rows) - 1.0) / 2.0 - f64::from(row)) * cell_size;
    (x, y)
}

/// [`grid_to_world`] bound to one grid's dimensions and cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    rows: u32,
    cols: u32,
    cell_size: f64,
}

impl CoordinateMapper {
    /// Create a mapper for a `rows x cols` grid.
    ///
    /// Returns `Err` if either dimension is zero or `cell_size` is not
    /// finite and positive.
    pub fn new(rows: u32, cols: u32, cell_size: f64) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows,
                cols,
                reason: "grid must have at least one cell".into(),
            });
        }
        require_positive("cell_size", cell_size)?;
        Ok(Self {
            rows,
            cols,
            cell_size,
        })
    }

    /// Mapper for `layout` using the cell size implied by `config`.
    pub fn for_layout(layout: &Layout, config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(layout.rows(), layout.cols(), config.cell_size())
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Cell edge length.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Horizontal centre of `cell`.
    pub fn to_world(&self, cell: Cell) -> (f64, f64) {
        grid_to_world(cell.row, cell.col, self.rows, self.cols, self.cell_size)
    }

    /// Centre of `cell` lifted to height `z`.
    pub fn cell_center(&self, cell: Cell, z: f64) -> Vec3 {
        let (x, y) = self.to_world(cell);
        Vec3::new(x, y, z)
    }

    /// Nearest cell to a horizontal position, or `None` outside the grid.
    ///
    /// Inverse of [`to_world`](Self::to_world) on cell centres.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<Cell> {
        let col = (x / self.cell_size + (f64::from(self.cols) - 1.0) / 2.0).round();
        let row = ((f64::from(self.rows) - 1.0) / 2.0 - y / self.cell_size).round();
        let in_rows = (0.0..f64::from(self.rows)).contains(&row);
        let in_cols = (0.0..f64::from(self.cols)).contains(&col);
        if !in_rows || !in_cols {
            return None;
        }
        Some(Cell::new(row as i32, col as i32))
    }

    /// Half extents `(hx, hy)` of the whole grid footprint.
    pub fn half_extents(&self) -> (f64, f64) {
        (
            f64::from(self.cols) * self.cell_size / 2.0,
            f64::from(self.rows) * self.cell_size / 2.0,
        )
    }
}
