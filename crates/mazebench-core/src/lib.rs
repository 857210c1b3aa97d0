//! Core types for the mazebench workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: grid [`Cell`] addresses,
//! continuous [`Vec3`] points, the agent-derived [`MazeConfig`], the
//! build-time error taxonomy and the [`SceneQuery`] seam to the physics
//! engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod error;
pub mod traits;
pub mod vec3;

pub use cell::Cell;
pub use config::{ConfigError, MazeConfig};
pub use error::{DefinitionError, NoPathCause, SolveError};
pub use traits::SceneQuery;
pub use vec3::Vec3;
