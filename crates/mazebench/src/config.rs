//! Complete configuration of a maze task.

use mazebench_core::{ConfigError, MazeConfig};
use mazebench_eval::{ProgressConfig, PushPolicyConfig, SuccessCriteria};
use mazebench_scene::{GeometryConfig, RegionConfig};
use serde::{Deserialize, Serialize};

/// Every tunable of a [`MazeTask`](crate::MazeTask), grouped by component.
///
/// All sections default independently, so a JSON document only needs the
/// fields it overrides:
///
/// ```rust
/// use mazebench::TaskConfig;
///
/// let cfg = TaskConfig::from_json(r#"{ "maze": { "agent_radius": 0.025 } }"#).unwrap();
/// assert_eq!(cfg.maze.agent_radius, 0.025);
/// assert_eq!(cfg.maze.packing_ratio, 1.3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Agent radius and cell packing.
    pub maze: MazeConfig,
    /// Floor, wall and marker construction.
    pub geometry: GeometryConfig,
    /// Placement regions for registration.
    pub regions: RegionConfig,
    /// Progress projection.
    pub progress: ProgressConfig,
    /// Scripted demonstration controller.
    pub push: PushPolicyConfig,
    /// Debounced success thresholds.
    pub success: SuccessCriteria,
}

impl TaskConfig {
    /// Defaults for a maze placed at `(-0.2, 0.0)` on a table top at
    /// height 0.82, with the progress floor threshold enabled.
    pub fn tabletop() -> Self {
        Self {
            regions: RegionConfig::tabletop(),
            progress: ProgressConfig::tabletop(),
            push: PushPolicyConfig::tabletop(),
            ..Self::default()
        }
    }

    /// Validate every section, then check they agree on where the maze is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maze.validate()?;
        self.geometry.validate()?;
        self.regions.validate()?;
        self.progress.validate()?;
        self.push.validate()?;
        self.success.validate()?;
        if self.progress.maze_offset != self.push.maze_offset {
            return Err(ConfigError::Inconsistent {
                reason: format!(
                    "progress.maze_offset {} differs from push.maze_offset {}",
                    self.progress.maze_offset, self.push.maze_offset
                ),
            });
        }
        let offset = self.progress.maze_offset;
        if self.regions.maze_centroid != [offset.x, offset.y] {
            let [cx, cy] = self.regions.maze_centroid;
            return Err(ConfigError::Inconsistent {
                reason: format!(
                    "regions.maze_centroid ({cx}, {cy}) differs from progress.maze_offset ({}, {})",
                    offset.x, offset.y
                ),
            });
        }
        Ok(())
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::Vec3;

    #[test]
    fn defaults_validate() {
        TaskConfig::default().validate().unwrap();
        TaskConfig::tabletop().validate().unwrap();
    }

    #[test]
    fn mismatched_offsets_rejected() {
        let mut cfg = TaskConfig::tabletop();
        cfg.push.maze_offset = Vec3::new(0.0, 0.0, 0.5);
        match cfg.validate() {
            Err(ConfigError::Inconsistent { reason }) => assert!(reason.contains("maze_offset")),
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }

    #[test]
    fn region_placement_must_match_offset() {
        let mut cfg = TaskConfig::tabletop();
        cfg.regions.maze_centroid = [0.0, 0.0];
        match cfg.validate() {
            Err(ConfigError::Inconsistent { reason }) => {
                assert!(reason.contains("maze_centroid"));
            }
            other => panic!("expected Inconsistent, got {other:?}"),
        }

        // Height is not part of the region placement.
        let mut cfg = TaskConfig::default();
        cfg.progress.maze_offset = Vec3::new(0.0, 0.0, 0.5);
        cfg.push.maze_offset = Vec3::new(0.0, 0.0, 0.5);
        cfg.validate().unwrap();
    }

    #[test]
    fn section_errors_surface() {
        let mut cfg = TaskConfig::default();
        cfg.success.hold_steps = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_roundtrip() {
        let cfg = TaskConfig::tabletop();
        let back = TaskConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back.success.members, cfg.success.members);
        assert_eq!(back.success.hold_steps, cfg.success.hold_steps);
        assert_eq!(back.geometry.floor_style, cfg.geometry.floor_style);
        assert_eq!(back.push.lookahead, cfg.push.lookahead);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(TaskConfig::from_json("{}").unwrap(), TaskConfig::default());
    }
}
