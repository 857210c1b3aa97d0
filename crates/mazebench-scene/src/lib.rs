//! Scene geometry for mazebench.
//!
//! Turns a parsed [`Layout`](mazebench_grid::Layout) into a declarative
//! list of solid primitives that an external physics loader can consume,
//! either as JSON or as an MJCF fragment.
//!
//! - [`emit_maze`]: floor, walls and start/end markers
//! - [`agent_body`]: the rolling ball
//! - [`task_regions`]: axis-aligned placement regions for task registration
//! - [`Mjcf`]: XML rendering of a [`SceneGeometry`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod emit;
pub mod geometry;
pub mod mjcf;
pub mod primitive;
pub mod regions;

pub use agent::agent_body;
pub use config::{FloorStyle, GeometryConfig, Palette, WallBase};
pub use emit::emit_maze;
pub use geometry::SceneGeometry;
pub use mjcf::Mjcf;
pub use primitive::{PartKind, Primitive, Role, Shape, Site};
pub use regions::{task_regions, Region, RegionConfig, TaskRegions};
