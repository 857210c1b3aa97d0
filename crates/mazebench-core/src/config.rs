//! Agent-derived maze configuration and the shared [`ConfigError`].
//!
//! Every physical dimension of a maze is derived from the characteristic
//! radius of the rolling agent, so a single [`MazeConfig`] value is
//! threaded into the mapper, the geometry emitter and the waypoint
//! builder. Nothing reads module-level constants.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by the various `validate()` methods.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric parameter is outside its admissible range.
    InvalidValue {
        /// Parameter name as it appears in the config struct.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the admissible range.
        expected: &'static str,
    },
    /// Grid dimensions cannot be used for the requested operation.
    InvalidDimensions {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
        /// What went wrong.
        reason: String,
    },
    /// Parameters are individually valid but mutually inconsistent.
    Inconsistent {
        /// Description of the conflict.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue {
                name,
                value,
                expected,
            } => write!(f, "{name} must be {expected}, got {value}"),
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::Inconsistent { reason } => write!(f, "inconsistent configuration: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Reject NaN, infinities, zero and negatives.
pub fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value,
            expected: "finite and positive",
        })
    }
}

/// Reject NaN, infinities and negatives.
pub fn require_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value,
            expected: "finite and non-negative",
        })
    }
}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Agent-derived sizing shared by every maze component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Radius of the rolling agent in metres. Default: 0.02.
    pub agent_radius: f64,
    /// Cell edge length as a multiple of the agent diameter. Must be at
    /// least 1.0 or the agent cannot pass between walls. Default: 1.3.
    pub packing_ratio: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            agent_radius: 0.02,
            packing_ratio: 1.3,
        }
    }
}

impl MazeConfig {
    /// Create a config from an agent radius and packing ratio.
    pub fn new(agent_radius: f64, packing_ratio: f64) -> Self {
        Self {
            agent_radius,
            packing_ratio,
        }
    }

    /// Edge length of one grid cell: `2 * agent_radius * packing_ratio`.
    pub fn cell_size(&self) -> f64 {
        2.0 * self.agent_radius * self.packing_ratio
    }

    /// Height of the agent's centre when resting on the maze plane.
    ///
    /// Waypoints are stored at this elevation.
    pub fn rest_elevation(&self) -> f64 {
        self.agent_radius
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("agent_radius", self.agent_radius)?;
        if !self.packing_ratio.is_finite() || self.packing_ratio < 1.0 {
            return Err(ConfigError::InvalidValue {
                name: "packing_ratio",
                value: self.packing_ratio,
                expected: "finite and >= 1.0",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MazeConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.cell_size() - 0.052).abs() < 1e-12);
        assert_eq!(cfg.rest_elevation(), 0.02);
    }

    #[test]
    fn packing_ratio_below_one_rejected() {
        let cfg = MazeConfig::new(0.02, 0.9);
        match cfg.validate() {
            Err(ConfigError::InvalidValue {
                name: "packing_ratio",
                ..
            }) => {}
            other => panic!("expected InvalidValue(packing_ratio), got {other:?}"),
        }
    }

    #[test]
    fn nan_radius_rejected() {
        let cfg = MazeConfig::new(f64::NAN, 1.5);
        match cfg.validate() {
            Err(ConfigError::InvalidValue {
                name: "agent_radius",
                ..
            }) => {}
            other => panic!("expected InvalidValue(agent_radius), got {other:?}"),
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"agent_radius": 0.015}"#).unwrap();
        assert_eq!(cfg.agent_radius, 0.015);
        assert_eq!(cfg.packing_ratio, 1.3);
    }

    #[test]
    fn error_display_names_the_parameter() {
        let err = require_positive("wall_height_ratio", -1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("wall_height_ratio"));
        assert!(msg.contains("-1"));
    }
}
