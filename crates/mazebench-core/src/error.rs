//! Build-time error taxonomy.
//!
//! Both errors here are fatal configuration errors: they are raised while
//! an environment is being constructed, before any physics stepping, and
//! must abort the build rather than degrade silently.

use crate::Cell;
use std::error::Error;
use std::fmt;

/// The maze definition text is absent or malformed.
///
/// Every variant displays with a `malformed maze definition` prefix so the
/// taxonomy reads the same regardless of which check tripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    /// The definition file does not exist or cannot be read.
    Unreadable {
        /// Path that was opened.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
    /// A `START:` or `END:` line does not hold exactly two integers.
    BadCoordinate {
        /// `"START"` or `"END"`.
        section: &'static str,
        /// 1-based line number.
        line: usize,
        /// The offending text after the colon.
        text: String,
    },
    /// A layout token is not `0` or `1`.
    BadCellToken {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A layout row has a different column count from the first row.
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Column count of the first layout row.
        expected: usize,
        /// Column count found on this line.
        found: usize,
    },
    /// A required section never appeared.
    MissingSection {
        /// `"START"`, `"END"` or `"LAYOUT"`.
        section: &'static str,
    },
    /// The `LAYOUT:` marker is present but no rows follow it.
    EmptyLayout,
    /// The start or end cell lies outside the grid.
    EndpointOutOfBounds {
        /// `"start"` or `"end"`.
        which: &'static str,
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed maze definition: ")?;
        match self {
            Self::Unreadable { path, reason } => write!(f, "cannot read '{path}': {reason}"),
            Self::BadCoordinate {
                section,
                line,
                text,
            } => write!(
                f,
                "line {line}: {section} expects two integers 'r,c', got '{text}'"
            ),
            Self::BadCellToken { line, token } => {
                write!(f, "line {line}: cell token must be 0 or 1, got '{token}'")
            }
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: layout row has {found} columns, expected {expected}"
            ),
            Self::MissingSection { section } => write!(f, "missing {section} section"),
            Self::EmptyLayout => write!(f, "LAYOUT section has no rows"),
            Self::EndpointOutOfBounds {
                which,
                cell,
                rows,
                cols,
            } => write!(f, "{which} cell {cell} outside [0, {rows}) x [0, {cols})"),
        }
    }
}

impl Error for DefinitionError {}

/// Why the solver could not connect the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoPathCause {
    /// The start cell is a wall or outside the grid.
    StartBlocked,
    /// The end cell is a wall or outside the grid.
    EndBlocked,
    /// Both endpoints are open but walls separate them.
    Disconnected,
}

impl fmt::Display for NoPathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartBlocked => write!(f, "start cell is not open"),
            Self::EndBlocked => write!(f, "end cell is not open"),
            Self::Disconnected => write!(f, "walls separate start from end"),
        }
    }
}

/// Errors from the shortest-path solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The end cell was never reached from the start cell.
    NoPathFound {
        /// Requested start.
        start: Cell,
        /// Requested end.
        end: Cell,
        /// Which check failed.
        cause: NoPathCause,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound { start, end, cause } => {
                write!(f, "no path from {start} to {end}: {cause}")
            }
        }
    }
}

impl Error for SolveError {}
