//! mazebench: procedural maze tasks for robot-manipulation benchmarks.
//!
//! This is the top-level facade crate. It re-exports the public API of the
//! sub-crates and adds [`MazeTask`], which builds every maze product in one
//! step, and [`Episode`], which carries the per-rollout state.
//!
//! # Quick start
//!
//! ```rust
//! use mazebench::prelude::*;
//!
//! let text = "\
//! START: 1, 1
//! END: 1, 3
//! LAYOUT:
//! 1 1 1 1 1
//! 1 0 0 0 1
//! 1 1 1 1 1
//! ";
//! let task = MazeTask::from_definition(text, TaskConfig::default()).unwrap();
//! assert_eq!(task.grid_path().len(), 3);
//!
//! let start = task.path().first();
//! let end = task.path().last();
//! assert_eq!(task.progress(start), 0.0);
//! assert_eq!(task.progress(end), 1.0);
//!
//! let mut episode = task.new_episode();
//! episode.step(end);
//! assert_eq!(episode.steps(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazebench-core` | Cells, points, maze sizing, error taxonomy, scene query trait |
//! | [`grid`] | `mazebench-grid` | Layout, parser, coordinate mapper, solver, generator |
//! | [`scene`] | `mazebench-scene` | Geometry emitter, regions, agent body, MJCF output |
//! | [`eval`] | `mazebench-eval` | Waypoint path, progress, success detection, push policy |
//! | [`artifact`] | `mazebench-artifact` | Binary path artifact codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`mazebench-core`).
///
/// Contains [`types::Cell`], [`types::Vec3`], [`types::MazeConfig`], the
/// build-time errors and the [`types::SceneQuery`] trait the physics
/// engine implements.
pub use mazebench_core as types;

/// Grid layout, parsing, mapping and solving (`mazebench-grid`).
pub use mazebench_grid as grid;

/// Scene geometry emission and region computation (`mazebench-scene`).
///
/// [`scene::emit_maze`] produces the static maze, [`scene::agent_body`] the
/// rolling ball, and [`scene::Mjcf`] renders either as MJCF.
pub use mazebench_scene as scene;

/// Run-time evaluation (`mazebench-eval`).
pub use mazebench_eval as eval;

/// Path artifact encode/decode (`mazebench-artifact`).
///
/// The hand-off between offline path generation and online simulation.
pub use mazebench_artifact as artifact;

pub mod config;
pub mod error;
pub mod task;

pub use config::TaskConfig;
pub use error::BuildError;
pub use task::{Episode, MazeTask};

/// Common imports for typical mazebench usage.
///
/// ```rust
/// use mazebench::prelude::*;
/// ```
pub mod prelude {
    // Facade
    pub use crate::{BuildError, Episode, MazeTask, TaskConfig};

    // Core types and traits
    pub use mazebench_core::{Cell, MazeConfig, SceneQuery, Vec3};

    // Errors
    pub use mazebench_core::{ConfigError, DefinitionError, SolveError};
    pub use mazebench_eval::EvalError;

    // Grid
    pub use mazebench_grid::{parse_definition, solve, CoordinateMapper, Layout};

    // Scene
    pub use mazebench_scene::{GeometryConfig, SceneGeometry};

    // Evaluation
    pub use mazebench_eval::{
        HoldState, ProgressTracker, SuccessCriteria, SuccessDetector, WaypointPath,
    };
}
