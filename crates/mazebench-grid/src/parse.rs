//! Maze definition parser.
//!
//! The format is line oriented:
//!
//! ```text
//! START: 1, 1
//! END: 13, 13
//! LAYOUT:
//! 1 1 1 1 ...
//! 1 0 0 1 ...
//! ```
//!
//! Blank lines and surrounding whitespace are ignored. Keywords are
//! case-sensitive. `START` and `END` are recognised anywhere; rows are
//! collected only after the `LAYOUT:` marker. Lines before the marker that
//! match no keyword are skipped.

use crate::layout::{CellKind, Layout};
use mazebench_core::{Cell, DefinitionError};
use std::path::Path;

const START: &str = "START:";
const END: &str = "END:";
const LAYOUT: &str = "LAYOUT:";

/// Parse definition text into a [`Layout`].
///
/// # Examples
///
/// ```
/// use mazebench_grid::parse_definition;
///
/// let layout = parse_definition("START: 0,0\nEND: 0,2\nLAYOUT:\n0 0 0\n").unwrap();
/// assert_eq!(layout.cols(), 3);
/// assert_eq!(layout.end().col, 2);
/// ```
pub fn parse_definition(text: &str) -> Result<Layout, DefinitionError> {
    let mut start = None;
    let mut end = None;
    let mut grid: Vec<Vec<CellKind>> = Vec::new();
    let mut reading_layout = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(START) {
            start = Some(parse_coordinate("START", line_no, rest)?);
        } else if let Some(rest) = line.strip_prefix(END) {
            end = Some(parse_coordinate("END", line_no, rest)?);
        } else if line.starts_with(LAYOUT) {
            reading_layout = true;
        } else if reading_layout {
            let row = parse_row(line_no, line)?;
            if let Some(first) = grid.first() {
                if row.len() != first.len() {
                    return Err(DefinitionError::RaggedRow {
                        line: line_no,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            grid.push(row);
        } else {
            log::debug!("maze definition line {line_no}: ignoring '{line}'");
        }
    }

    let start = start.ok_or(DefinitionError::MissingSection { section: "START" })?;
    let end = end.ok_or(DefinitionError::MissingSection { section: "END" })?;
    if !reading_layout {
        return Err(DefinitionError::MissingSection { section: "LAYOUT" });
    }

    let layout = Layout::from_rows(grid, start, end)?;
    log::debug!(
        "parsed {}x{} maze ({} walls), start {} end {}",
        layout.rows(),
        layout.cols(),
        layout.wall_count(),
        layout.start(),
        layout.end()
    );
    Ok(layout)
}

/// Read and parse a definition file.
///
/// An absent or unreadable file is reported as
/// [`DefinitionError::Unreadable`].
pub fn load_definition(path: impl AsRef<Path>) -> Result<Layout, DefinitionError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| DefinitionError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_definition(&text)
}

fn parse_coordinate(
    section: &'static str,
    line: usize,
    text: &str,
) -> Result<Cell, DefinitionError> {
    let bad = || DefinitionError::BadCoordinate {
        section,
        line,
        text: text.trim().to_string(),
    };
    let mut parts = text.split(',');
    let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };
    let row = r.trim().parse::<i32>().map_err(|_| bad())?;
    let col = c.trim().parse::<i32>().map_err(|_| bad())?;
    Ok(Cell::new(row, col))
}

fn parse_row(line: usize, text: &str) -> Result<Vec<CellKind>, DefinitionError> {
    text.split_whitespace()
        .map(|token| match token {
            "0" => Ok(CellKind::Open),
            "1" => Ok(CellKind::Wall),
            _ => Err(DefinitionError::BadCellToken {
                line,
                token: token.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
START: 1, 1
END: 1,3

LAYOUT:
  1 1 1 1 1
1 0 0 0 1

1 1 1 1 1
";

    #[test]
    fn parses_sections_and_ignores_blank_lines() {
        let l = parse_definition(SMALL).unwrap();
        assert_eq!((l.rows(), l.cols()), (3, 5));
        assert_eq!(l.start(), Cell::new(1, 1));
        assert_eq!(l.end(), Cell::new(1, 3));
        assert!(l.is_open(Cell::new(1, 2)));
        assert!(!l.is_open(Cell::new(0, 2)));
    }

    #[test]
    fn sections_may_appear_in_any_order() {
        let text = "LAYOUT:\n0 0\nEND: 0,1\n0 0\nSTART: 1,0\n";
        let l = parse_definition(text).unwrap();
        assert_eq!(l.rows(), 2);
        assert_eq!(l.start(), Cell::new(1, 0));
        assert_eq!(l.end(), Cell::new(0, 1));
    }

    #[test]
    fn rows_before_layout_marker_are_ignored() {
        let text = "START: 0,0\nEND: 0,1\n1 1 1\nLAYOUT:\n0 0\n";
        let l = parse_definition(text).unwrap();
        assert_eq!((l.rows(), l.cols()), (1, 2));
    }

    #[test]
    fn ragged_row_reports_line_number() {
        let text = "START: 0,0\nEND: 0,1\nLAYOUT:\n0 0 0\n0 0\n";
        assert_eq!(
            parse_definition(text),
            Err(DefinitionError::RaggedRow {
                line: 5,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn coordinate_needs_two_integers() {
        for bad in ["START: 1\n", "START: a,b\n", "START: 1,2,3\n", "START:\n"] {
            let text = format!("{bad}END: 0,0\nLAYOUT:\n0\n");
            match parse_definition(&text) {
                Err(DefinitionError::BadCoordinate {
                    section: "START",
                    line: 1,
                    ..
                }) => {}
                other => panic!("{bad:?}: expected BadCoordinate, got {other:?}"),
            }
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let text = "start: 0,0\nEND: 0,0\nLAYOUT:\n0\n";
        assert_eq!(
            parse_definition(text),
            Err(DefinitionError::MissingSection { section: "START" })
        );
    }

    #[test]
    fn missing_layout_rejected() {
        assert_eq!(
            parse_definition("START: 0,0\nEND: 0,0\n"),
            Err(DefinitionError::MissingSection { section: "LAYOUT" })
        );
        assert_eq!(
            parse_definition("START: 0,0\nEND: 0,0\nLAYOUT:\n"),
            Err(DefinitionError::EmptyLayout)
        );
    }

    #[test]
    fn bad_cell_token_rejected() {
        let text = "START: 0,0\nEND: 0,1\nLAYOUT:\n0 2\n";
        assert_eq!(
            parse_definition(text),
            Err(DefinitionError::BadCellToken {
                line: 4,
                token: "2".into()
            })
        );
    }

    #[test]
    fn absent_file_is_malformed_definition() {
        let err = load_definition("/definitely/not/here/maze_def.txt").unwrap_err();
        assert!(matches!(err, DefinitionError::Unreadable { .. }));
        assert!(err.to_string().starts_with("malformed maze definition"));
    }

    #[test]
    fn render_then_parse_is_identity() {
        let l = parse_definition(SMALL).unwrap();
        assert_eq!(parse_definition(&l.render()).unwrap(), l);
    }
}
