//! The immutable maze layout.

use mazebench_core::{Cell, DefinitionError};
use smallvec::SmallVec;
use std::fmt::{self, Write as _};

/// BFS expansion order: up, down, left, right.
///
/// Fixed so that the solver's choice among equal-length paths is
/// deterministic for a given layout.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Label of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Traversable floor (`0` in a definition file).
    Open,
    /// Solid wall (`1` in a definition file).
    Wall,
}

impl CellKind {
    /// The definition-file token for this label.
    pub fn token(self) -> char {
        match self {
            Self::Open => '0',
            Self::Wall => '1',
        }
    }
}

/// A rectangular open/wall grid with designated start and end cells.
///
/// Construction guarantees a non-empty rectangular grid with both
/// endpoints in bounds. Whether the endpoints are open and connected is
/// the solver's concern: it reports `NoPathFound` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: u32,
    cols: u32,
    cells: Vec<CellKind>,
    start: Cell,
    end: Cell,
}

impl Layout {
    /// Build a layout from row vectors.
    ///
    /// Ragged input is reported as [`DefinitionError::RaggedRow`] with
    /// `line` set to the 1-based row number.
    pub fn from_rows(
        grid: Vec<Vec<CellKind>>,
        start: Cell,
        end: Cell,
    ) -> Result<Self, DefinitionError> {
        let Some(first) = grid.first() else {
            return Err(DefinitionError::EmptyLayout);
        };
        let width = first.len();
        if width == 0 {
            return Err(DefinitionError::EmptyLayout);
        }
        let mut cells = Vec::with_capacity(width * grid.len());
        for (i, row) in grid.iter().enumerate() {
            if row.len() != width {
                return Err(DefinitionError::RaggedRow {
                    line: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let layout = Self {
            rows: grid.len() as u32,
            cols: width as u32,
            cells,
            start,
            end,
        };
        for (which, cell) in [("start", start), ("end", end)] {
            if !layout.contains(cell) {
                return Err(DefinitionError::EndpointOutOfBounds {
                    which,
                    cell,
                    rows: layout.rows,
                    cols: layout.cols,
                });
            }
        }
        Ok(layout)
    }

    /// Build a layout from `0`/`1` bit rows, the way definition files spell them.
    ///
    /// Any non-zero value is a wall.
    pub fn from_bits<R: AsRef<[u8]>>(
        bits: &[R],
        start: Cell,
        end: Cell,
    ) -> Result<Self, DefinitionError> {
        let grid = bits
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&b| if b == 0 { CellKind::Open } else { CellKind::Wall })
                    .collect()
            })
            .collect();
        Self::from_rows(grid, start, end)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// End cell.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// The cell at a row-major index.
    pub fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }

    /// Label of `cell`, or `None` when out of bounds.
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Whether `cell` is in bounds and open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.kind(cell) == Some(CellKind::Open)
    }

    /// All cells in row-major order with their labels.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (self.cell_at(i), kind))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&k| k == CellKind::Wall).count()
    }

    /// Open 4-connected neighbours of `cell`, in [`DIRECTIONS`] order.
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| cell.offset(dr, dc))
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// Render back to the definition-file text format.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "START: {},{}", self.start.row, self.start.col)?;
        writeln!(f, "END: {},{}", self.end.row, self.end.col)?;
        writeln!(f, "LAYOUT:")?;
        for row in self.cells.chunks(self.cols as usize) {
            for (i, kind) in row.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(kind.token())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Layout {
        Layout::from_bits(
            &[[1u8, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]],
            Cell::new(1, 1),
            Cell::new(2, 2),
        )
        .unwrap()
    }

    #[test]
    fn dimensions_and_counts() {
        let l = ring();
        assert_eq!((l.rows(), l.cols()), (4, 4));
        assert_eq!(l.cell_count(), 16);
        assert_eq!(l.wall_count(), 12);
    }

    #[test]
    fn neighbours_follow_direction_order() {
        let l = Layout::from_bits(&[[0u8; 3]; 3], Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        let n = l.open_neighbours(Cell::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn neighbours_skip_walls_and_edges() {
        let l = ring();
        let n = l.open_neighbours(Cell::new(1, 1));
        assert_eq!(n.as_slice(), &[Cell::new(2, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn out_of_bounds_is_neither_open_nor_wall() {
        let l = ring();
        assert_eq!(l.kind(Cell::new(-1, 0)), None);
        assert_eq!(l.kind(Cell::new(0, 4)), None);
        assert!(!l.is_open(Cell::new(4, 4)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Layout::from_bits(
            &[vec![0u8, 0, 0], vec![0, 0]],
            Cell::new(0, 0),
            Cell::new(0, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn endpoint_out_of_bounds_rejected() {
        let err = Layout::from_bits(&[[0u8; 2]; 2], Cell::new(0, 0), Cell::new(2, 0)).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::EndpointOutOfBounds { which: "end", .. }
        ));
    }

    #[test]
    fn empty_grid_rejected() {
        let rows: Vec<Vec<u8>> = vec![];
        assert_eq!(
            Layout::from_bits(&rows, Cell::new(0, 0), Cell::new(0, 0)),
            Err(DefinitionError::EmptyLayout)
        );
    }

    #[test]
    fn render_matches_definition_format() {
        let text = ring().render();
        assert!(text.starts_with("START: 1,1\nEND: 2,2\nLAYOUT:\n"));
        assert!(text.contains("\n1 0 0 1\n"));
    }
}
