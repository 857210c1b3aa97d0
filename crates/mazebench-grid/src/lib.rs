//! Maze grids for mazebench.
//!
//! This crate owns everything that happens in grid space:
//!
//! - [`Layout`]: an immutable open/wall grid with start and end cells
//! - [`parse_definition`] / [`load_definition`]: the `START`/`END`/`LAYOUT`
//!   text format
//! - [`CoordinateMapper`]: the one cell-to-world transform shared by the
//!   geometry emitter, the waypoint builder and region registration
//! - [`shortest_path`]: deterministic 4-connected BFS
//! - [`generate_layout`]: seeded perfect-maze generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod layout;
pub mod mapper;
pub mod parse;
pub mod solve;

pub use generate::generate_layout;
pub use layout::{CellKind, Layout, DIRECTIONS};
pub use mapper::{grid_to_world, CoordinateMapper};
pub use parse::{load_definition, parse_definition};
pub use solve::{shortest_path, solve};
