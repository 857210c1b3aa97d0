//! Normalised progress along the waypoint path.
//!
//! The agent position is projected onto every segment of the path in the
//! horizontal plane; the closest segment wins and the arc length up to the
//! projected point, divided by the total length, is the progress.

use crate::error::EvalError;
use crate::path::WaypointPath;
use mazebench_core::config::require_non_negative;
use mazebench_core::{ConfigError, Vec3};
use serde::{Deserialize, Serialize};

/// Progress tracker parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// World height below which the agent counts as having fallen off and
    /// progress is 0. `None` disables the check. Default: `None`.
    pub floor_threshold: Option<f64>,
    /// World position of the maze origin, subtracted from every query.
    /// Default: the origin.
    pub maze_offset: Vec3,
    /// Horizontal tolerance for matching the single point of a zero-length
    /// path. Default: 1e-6.
    pub degenerate_tolerance: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            floor_threshold: None,
            maze_offset: Vec3::ZERO,
            degenerate_tolerance: 1e-6,
        }
    }
}

impl ProgressConfig {
    /// A maze placed at `(-0.2, 0.0)` on a table top at height 0.82, with
    /// a fall-off threshold of 0.6.
    pub fn tabletop() -> Self {
        Self {
            floor_threshold: Some(0.6),
            maze_offset: Vec3::new(-0.2, 0.0, 0.82),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.floor_threshold {
            if !t.is_finite() {
                return Err(ConfigError::InvalidValue {
                    name: "floor_threshold",
                    value: t,
                    expected: "finite",
                });
            }
        }
        if !self.maze_offset.is_finite() {
            return Err(ConfigError::Inconsistent {
                reason: "maze_offset must be finite".into(),
            });
        }
        require_non_negative("degenerate_tolerance", self.degenerate_tolerance)
    }
}

/// Closest point on the path to a query position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Index of the winning segment.
    pub segment: usize,
    /// Parameter along that segment, in `[0, 1]`.
    pub t: f64,
    /// Arc length from the path start to the projected point.
    pub distance_along: f64,
    /// Horizontal distance from the query to the projected point.
    pub lateral_distance: f64,
}

/// Reports how far along its path the agent has travelled.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    path: WaypointPath,
    config: ProgressConfig,
}

impl ProgressTracker {
    /// Create a tracker for `path`.
    pub fn new(path: WaypointPath, config: ProgressConfig) -> Result<Self, EvalError> {
        config.validate()?;
        if path.is_degenerate() {
            log::warn!(
                "waypoint path has zero length; progress is 1.0 only at {}",
                path.first()
            );
        }
        Ok(Self { path, config })
    }

    /// The tracked path.
    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    /// The tracker configuration.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Project a world position onto the path.
    ///
    /// Returns `None` when the path has no segment of non-zero length.
    pub fn project(&self, position: Vec3) -> Option<Projection> {
        let p = position - self.config.maze_offset;
        let points = self.path.points();
        let seg_len = self.path.segment_lengths();
        let cumulative = self.path.cumulative_lengths();

        let mut best: Option<(f64, Projection)> = None;
        for (i, w) in points.windows(2).enumerate() {
            let (a, b) = (w[0], w[1]);
            let ab = b - a;
            let len_sq = ab.dot_xy(ab);
            if len_sq == 0.0 {
                continue;
            }
            let t = ((p - a).dot_xy(ab) / len_sq).clamp(0.0, 1.0);
            let closest = a + ab * t;
            let d = p - closest;
            let dist_sq = d.dot_xy(d);
            if best.map_or(true, |(min, _)| dist_sq < min) {
                best = Some((
                    dist_sq,
                    Projection {
                        segment: i,
                        t,
                        distance_along: cumulative[i] + t * seg_len[i],
                        lateral_distance: dist_sq.sqrt(),
                    },
                ));
            }
        }
        best.map(|(_, proj)| proj)
    }

    /// Completion fraction in `[0, 1]`.
    ///
    /// 0 when the agent is below the floor threshold or its position is
    /// not finite. For a zero-length path, 1 when the agent is over the
    /// single point and 0 otherwise.
    pub fn progress(&self, position: Vec3) -> f64 {
        if !position.is_finite() {
            log::debug!("non-finite agent position {position}");
            return 0.0;
        }
        if let Some(threshold) = self.config.floor_threshold {
            if position.z < threshold {
                log::trace!("agent at z={} is below the floor threshold", position.z);
                return 0.0;
            }
        }
        if self.path.is_degenerate() {
            let p = position - self.config.maze_offset;
            return if p.distance_xy(self.path.first()) <= self.config.degenerate_tolerance {
                1.0
            } else {
                0.0
            };
        }
        let along = self.project(position).map_or(0.0, |proj| proj.distance_along);
        (along / self.path.total_length()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_grid::{generate_layout, solve, CoordinateMapper};
    use proptest::prelude::*;

    fn l_path() -> WaypointPath {
        WaypointPath::new(vec![
            Vec3::new(0.0, 0.0, 0.02),
            Vec3::new(1.0, 0.0, 0.02),
            Vec3::new(1.0, 1.0, 0.02),
        ])
        .unwrap()
    }

    fn tracker(path: WaypointPath) -> ProgressTracker {
        ProgressTracker::new(path, ProgressConfig::default()).unwrap()
    }

    #[test]
    fn endpoints_are_exact() {
        let t = tracker(l_path());
        assert_eq!(t.progress(Vec3::new(0.0, 0.0, 0.02)), 0.0);
        assert_eq!(t.progress(Vec3::new(1.0, 1.0, 0.02)), 1.0);
    }

    #[test]
    fn midpoint_of_second_segment() {
        let t = tracker(l_path());
        assert_eq!(t.progress(Vec3::new(1.0, 0.5, 0.02)), 0.75);
    }

    #[test]
    fn height_is_ignored_without_threshold() {
        let t = tracker(l_path());
        assert_eq!(t.progress(Vec3::new(0.5, 0.0, -10.0)), 0.25);
    }

    #[test]
    fn far_positions_are_clamped() {
        let t = tracker(l_path());
        assert_eq!(t.progress(Vec3::new(-100.0, -3.0, 0.0)), 0.0);
        assert_eq!(t.progress(Vec3::new(1.0, 500.0, 0.0)), 1.0);
        let v = t.progress(Vec3::new(40.0, -7.0, 0.0));
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn below_floor_threshold_is_zero() {
        let t = ProgressTracker::new(l_path(), ProgressConfig::tabletop()).unwrap();
        assert_eq!(t.progress(Vec3::new(1.0, 1.0, 0.5)), 0.0);
        assert_eq!(t.progress(Vec3::new(0.8, 1.0, 0.84)), 1.0);
    }

    #[test]
    fn non_finite_position_is_zero() {
        let t = ProgressTracker::new(l_path(), ProgressConfig::default()).unwrap();
        assert_eq!(t.progress(Vec3::new(f64::NAN, 1.0, 0.02)), 0.0);
        assert_eq!(t.progress(Vec3::new(1.0, f64::INFINITY, 0.02)), 0.0);
        assert_eq!(t.progress(Vec3::new(1.0, 1.0, f64::NAN)), 0.0);

        let table = ProgressTracker::new(l_path(), ProgressConfig::tabletop()).unwrap();
        assert_eq!(table.progress(Vec3::new(f64::NAN, f64::NAN, 0.84)), 0.0);
    }

    #[test]
    fn maze_offset_is_subtracted() {
        let cfg = ProgressConfig {
            maze_offset: Vec3::new(-0.2, 0.0, 0.82),
            ..ProgressConfig::default()
        };
        let t = ProgressTracker::new(l_path(), cfg).unwrap();
        assert!((t.progress(Vec3::new(0.3, 0.0, 0.84)) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let path = WaypointPath::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ])
        .unwrap();
        let t = tracker(path);
        assert_eq!(t.progress(Vec3::new(0.5, 0.0, 0.0)), 0.25);
        assert_eq!(t.project(Vec3::new(0.5, 0.0, 0.0)).unwrap().segment, 1);
    }

    #[test]
    fn degenerate_path_matches_single_point() {
        let t = tracker(WaypointPath::new(vec![Vec3::new(1.0, 2.0, 0.0)]).unwrap());
        assert_eq!(t.progress(Vec3::new(1.0, 2.0, 5.0)), 1.0);
        assert_eq!(t.progress(Vec3::new(1.1, 2.0, 0.0)), 0.0);
        assert!(t.project(Vec3::ZERO).is_none());
    }

    #[test]
    fn projection_reports_lateral_distance() {
        let t = tracker(l_path());
        let proj = t.project(Vec3::new(0.5, -0.25, 0.0)).unwrap();
        assert_eq!(proj.segment, 0);
        assert_eq!(proj.t, 0.5);
        assert_eq!(proj.lateral_distance, 0.25);
    }

    #[test]
    fn non_finite_threshold_rejected() {
        let cfg = ProgressConfig {
            floor_threshold: Some(f64::NAN),
            ..ProgressConfig::default()
        };
        assert!(matches!(
            ProgressTracker::new(l_path(), cfg),
            Err(EvalError::Config(ConfigError::InvalidValue {
                name: "floor_threshold",
                ..
            }))
        ));
    }

    fn maze_path(seed: u64) -> WaypointPath {
        let layout = generate_layout(11, 11, seed).unwrap();
        let cells = solve(&layout).unwrap();
        let mapper = CoordinateMapper::new(11, 11, 0.052).unwrap();
        WaypointPath::from_cells(&cells, &mapper, 0.02).unwrap()
    }

    #[test]
    fn maze_path_first_and_last_are_exact() {
        let path = maze_path(5);
        let (first, last) = (path.first(), path.last());
        let t = tracker(path);
        assert_eq!(t.progress(first), 0.0);
        assert_eq!(t.progress(last), 1.0);
    }

    proptest! {
        #[test]
        fn progress_is_monotone_along_path(seed in any::<u64>(), steps in 2usize..8) {
            let path = maze_path(seed);
            let t = tracker(path.clone());
            let mut prev = 0.0;
            for w in path.points().windows(2) {
                for k in 0..=steps {
                    let f = k as f64 / steps as f64;
                    let p = w[0] + (w[1] - w[0]) * f;
                    let v = t.progress(p);
                    prop_assert!(v + 1e-12 >= prev, "progress went back from {} to {}", prev, v);
                    prop_assert!((0.0..=1.0).contains(&v));
                    prev = v;
                }
            }
        }

        #[test]
        fn progress_always_in_unit_interval(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            z in -1.0f64..1.0,
        ) {
            let t = tracker(l_path());
            let v = t.progress(Vec3::new(x, y, z));
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
