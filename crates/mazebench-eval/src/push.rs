//! Scripted lookahead push policy for recording demonstrations.

use crate::error::EvalError;
use crate::path::WaypointPath;
use mazebench_core::config::require_positive;
use mazebench_core::{ConfigError, Vec3};
use serde::{Deserialize, Serialize};

/// Push policy gains and geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushPolicyConfig {
    /// How many waypoints past the nearest one to aim at. Default: 2.
    pub lookahead: usize,
    /// Signed distance of the hand from the ball along the heading;
    /// negative places it behind the ball. Default: -0.04.
    pub push_offset: f64,
    /// Hand height above the maze origin. Default: 0.03.
    pub hover_height: f64,
    /// Proportional gain. Default: 6.0.
    pub gain: f64,
    /// Symmetric clip on each action component. Default: 1.0.
    pub action_limit: f64,
    /// Below this ball-to-target distance the heading falls back to +x.
    /// Default: 0.001.
    pub min_heading_distance: f64,
    /// World position of the maze origin. Default: the origin.
    pub maze_offset: Vec3,
}

impl Default for PushPolicyConfig {
    fn default() -> Self {
        Self {
            lookahead: 2,
            push_offset: -0.04,
            hover_height: 0.03,
            gain: 6.0,
            action_limit: 1.0,
            min_heading_distance: 0.001,
            maze_offset: Vec3::ZERO,
        }
    }
}

impl PushPolicyConfig {
    /// Defaults for a maze placed at `(-0.2, 0.0)` on a table top at
    /// height 0.82.
    pub fn tabletop() -> Self {
        Self {
            maze_offset: Vec3::new(-0.2, 0.0, 0.82),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("gain", self.gain)?;
        require_positive("action_limit", self.action_limit)?;
        require_positive("min_heading_distance", self.min_heading_distance)?;
        if !self.push_offset.is_finite() || !self.hover_height.is_finite() {
            return Err(ConfigError::Inconsistent {
                reason: "push_offset and hover_height must be finite".into(),
            });
        }
        if !self.maze_offset.is_finite() {
            return Err(ConfigError::Inconsistent {
                reason: "maze_offset must be finite".into(),
            });
        }
        Ok(())
    }
}

/// Proportional controller that pushes the ball along the waypoints.
///
/// Each step it finds the waypoint nearest the ball, aims at the one
/// `lookahead` further on, and drives the hand to a point behind the ball
/// on that heading at a fixed hover height.
#[derive(Clone, Debug)]
pub struct PushPolicy {
    waypoints: Vec<Vec3>,
    config: PushPolicyConfig,
}

impl PushPolicy {
    /// Create a policy following `path`.
    pub fn new(path: &WaypointPath, config: PushPolicyConfig) -> Result<Self, EvalError> {
        config.validate()?;
        let waypoints = path
            .points()
            .iter()
            .map(|&p| p + config.maze_offset)
            .collect();
        Ok(Self { waypoints, config })
    }

    /// The policy configuration.
    pub fn config(&self) -> &PushPolicyConfig {
        &self.config
    }

    /// Index of the waypoint horizontally nearest `ball`. Ties go to the
    /// earlier waypoint.
    pub fn nearest_waypoint(&self, ball: Vec3) -> usize {
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (i, w) in self.waypoints.iter().enumerate() {
            let d = w.distance_xy(ball);
            if d < best_d {
                best = i;
                best_d = d;
            }
        }
        best
    }

    /// Index of the waypoint the ball is being pushed toward.
    pub fn target_waypoint(&self, ball: Vec3) -> usize {
        (self.nearest_waypoint(ball) + self.config.lookahead).min(self.waypoints.len() - 1)
    }

    /// Where the hand should be for a ball at `ball`.
    pub fn hand_target(&self, ball: Vec3) -> Vec3 {
        let target = self.waypoints[self.target_waypoint(ball)];
        let to_target = (target - ball).with_z(0.0);
        let dist = to_target.length_xy();
        let heading = if dist < self.config.min_heading_distance {
            Vec3::new(1.0, 0.0, 0.0)
        } else {
            to_target * (1.0 / dist)
        };
        let xy = ball.with_z(0.0) + heading * self.config.push_offset;
        xy.with_z(self.config.maze_offset.z + self.config.hover_height)
    }

    /// Clipped translational command `[dx, dy, dz]`.
    pub fn action(&self, ball: Vec3, hand: Vec3) -> [f64; 3] {
        let error = self.hand_target(ball) - hand;
        let lim = self.config.action_limit;
        let k = self.config.gain;
        [
            (error.x * k).clamp(-lim, lim),
            (error.y * k).clamp(-lim, lim),
            (error.z * k).clamp(-lim, lim),
        ]
    }

    /// Seven-component operational-space command: translation, zero
    /// rotation, gripper closed.
    pub fn to_osc_action(&self, ball: Vec3, hand: Vec3) -> [f64; 7] {
        let [x, y, z] = self.action(ball, hand);
        [x, y, z, 0.0, 0.0, 0.0, -1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> WaypointPath {
        WaypointPath::new(
            (0..6)
                .map(|i| Vec3::new(0.1 * f64::from(i), 0.0, 0.02))
                .collect(),
        )
        .unwrap()
    }

    fn policy() -> PushPolicy {
        PushPolicy::new(&straight(), PushPolicyConfig::default()).unwrap()
    }

    #[test]
    fn aims_two_waypoints_ahead() {
        let p = policy();
        assert_eq!(p.nearest_waypoint(Vec3::new(0.11, 0.01, 0.0)), 1);
        assert_eq!(p.target_waypoint(Vec3::new(0.11, 0.01, 0.0)), 3);
        assert_eq!(p.target_waypoint(Vec3::new(0.5, 0.0, 0.0)), 5);
    }

    #[test]
    fn hand_sits_behind_ball() {
        let p = policy();
        let ball = Vec3::new(0.1, 0.0, 0.02);
        let hand = p.hand_target(ball);
        assert!((hand.x - 0.06).abs() < 1e-12);
        assert_eq!(hand.y, 0.0);
        assert_eq!(hand.z, 0.03);
    }

    #[test]
    fn heading_falls_back_when_on_target() {
        let p = policy();
        let ball = Vec3::new(0.5, 0.0, 0.02);
        let hand = p.hand_target(ball);
        assert!((hand.x - 0.46).abs() < 1e-12);
    }

    #[test]
    fn action_is_clipped_and_osc_padded() {
        let p = policy();
        let a = p.to_osc_action(Vec3::new(0.1, 0.0, 0.02), Vec3::new(5.0, -5.0, 0.03));
        assert_eq!(&a[..2], &[-1.0, 1.0]);
        assert_eq!(a[2], 0.0);
        assert_eq!(&a[3..], &[0.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn small_error_is_proportional() {
        let p = policy();
        let ball = Vec3::new(0.1, 0.0, 0.02);
        let target = p.hand_target(ball);
        let a = p.action(ball, target - Vec3::new(0.01, 0.0, 0.0));
        assert!((a[0] - 0.06).abs() < 1e-9);
    }

    #[test]
    fn tabletop_offset_shifts_everything() {
        let p = PushPolicy::new(&straight(), PushPolicyConfig::tabletop()).unwrap();
        let hand = p.hand_target(Vec3::new(-0.1, 0.0, 0.84));
        assert!((hand.z - 0.85).abs() < 1e-12);
        assert!((hand.x - -0.14).abs() < 1e-12);
    }

    #[test]
    fn zero_gain_rejected() {
        let cfg = PushPolicyConfig {
            gain: 0.0,
            ..PushPolicyConfig::default()
        };
        assert!(matches!(
            PushPolicy::new(&straight(), cfg),
            Err(EvalError::Config(ConfigError::InvalidValue { name: "gain", .. }))
        ));
    }
}
