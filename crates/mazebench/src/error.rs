//! Aggregate error for building a maze task.

use mazebench_artifact::ArtifactError;
use mazebench_core::{ConfigError, DefinitionError, SolveError};
use mazebench_eval::EvalError;
use std::fmt;

/// Anything that can stop a [`MazeTask`](crate::MazeTask) from being built.
///
/// Every variant is raised before the first simulated step. A built task
/// never produces one of these at run time.
#[derive(Debug)]
pub enum BuildError {
    /// The maze definition text is malformed.
    Definition(DefinitionError),
    /// The layout has no route from start to end.
    Solve(SolveError),
    /// A configuration value failed validation.
    Config(ConfigError),
    /// The waypoint path or an evaluator could not be constructed.
    Eval(EvalError),
    /// A path artifact could not be read, written or decoded.
    Artifact(ArtifactError),
    /// A precomputed waypoint does not sit on an open cell of the layout.
    ArtifactMismatch {
        /// Index of the first waypoint off the layout.
        index: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition(e) => write!(f, "maze definition: {e}"),
            Self::Solve(e) => write!(f, "maze solve: {e}"),
            Self::Config(e) => write!(f, "task config: {e}"),
            Self::Eval(e) => write!(f, "evaluator: {e}"),
            Self::Artifact(e) => write!(f, "path artifact: {e}"),
            Self::ArtifactMismatch { index } => {
                write!(f, "precomputed waypoint {index} is not on an open cell")
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Definition(e) => Some(e),
            Self::Solve(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Artifact(e) => Some(e),
            Self::ArtifactMismatch { .. } => None,
        }
    }
}

impl From<DefinitionError> for BuildError {
    fn from(e: DefinitionError) -> Self {
        Self::Definition(e)
    }
}

impl From<SolveError> for BuildError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<EvalError> for BuildError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<ArtifactError> for BuildError {
    fn from(e: ArtifactError) -> Self {
        Self::Artifact(e)
    }
}
