//! Error types for path construction and run-time evaluation.

use mazebench_core::ConfigError;
use std::fmt;

/// Errors from building evaluators or querying the scene through them.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    /// A waypoint path needs at least one point.
    EmptyPath,
    /// A waypoint has a NaN or infinite coordinate.
    NonFiniteWaypoint {
        /// Index of the offending point.
        index: usize,
    },
    /// The engine has no body with this name.
    UnknownBody {
        /// The name that was looked up.
        name: String,
    },
    /// Evaluator configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "waypoint path is empty"),
            Self::NonFiniteWaypoint { index } => {
                write!(f, "waypoint {index} has a non-finite coordinate")
            }
            Self::UnknownBody { name } => write!(f, "scene has no body named '{name}'"),
            Self::Config(e) => write!(f, "invalid evaluator config: {e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EvalError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
