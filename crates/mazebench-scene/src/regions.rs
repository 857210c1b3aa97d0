//! Placement regions for task registration.
//!
//! The task toolchain places the maze and the ball by sampling inside
//! axis-aligned rectangles on the workspace surface. The start and target
//! rectangles are centred on the start and end cells as placed in the
//! world, i.e. the cell centre from the shared mapper shifted by the
//! maze's own placement centroid.

use mazebench_core::config::require_positive;
use mazebench_core::{Cell, ConfigError};
use mazebench_grid::{CoordinateMapper, Layout};
use serde::{Deserialize, Serialize};

/// An axis-aligned sampling rectangle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region name.
    pub name: String,
    /// Fixture the region lies on.
    pub target: String,
    /// Centre `(x, y)`.
    pub centroid: [f64; 2],
    /// Half-extents `(hx, hy)`.
    pub half_extents: [f64; 2],
}

impl Region {
    /// `(x_min, y_min, x_max, y_max)`.
    pub fn ranges(&self) -> (f64, f64, f64, f64) {
        let [x, y] = self.centroid;
        let [hx, hy] = self.half_extents;
        (x - hx, y - hy, x + hx, y + hy)
    }

    /// Whether `(x, y)` is inside the closed rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x0, y0, x1, y1) = self.ranges();
        (x0..=x1).contains(&x) && (y0..=y1).contains(&y)
    }
}

/// Region sizing and the maze's placement on its fixture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Fixture every region is registered against. Default: `"kitchen_table"`.
    pub workspace: String,
    /// Where the maze centre is placed. Default: the origin.
    pub maze_centroid: [f64; 2],
    /// Half-extent of the maze placement square. Default: 0.01.
    pub maze_half_extent: f64,
    /// Ball start half-extent over cell size. Default: 0.33.
    pub start_ratio: f64,
    /// Ball target half-extent over cell size. Default: 0.45.
    pub target_ratio: f64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            workspace: "kitchen_table".into(),
            maze_centroid: [0.0, 0.0],
            maze_half_extent: 0.01,
            start_ratio: 0.33,
            target_ratio: 0.45,
        }
    }
}

impl RegionConfig {
    /// The maze placed at `(-0.2, 0.0)` on the table.
    pub fn tabletop() -> Self {
        Self {
            maze_centroid: [-0.2, 0.0],
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("maze_half_extent", self.maze_half_extent)?;
        require_positive("start_ratio", self.start_ratio)?;
        require_positive("target_ratio", self.target_ratio)?;
        if self.maze_centroid.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Inconsistent {
                reason: "maze_centroid must be finite".into(),
            });
        }
        Ok(())
    }
}

/// The three regions a maze task registers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRegions {
    /// Where the maze body is placed.
    pub maze_center: Region,
    /// Where the ball starts.
    pub ball_start: Region,
    /// Where the ball must end up.
    pub ball_target: Region,
}

impl TaskRegions {
    /// All regions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        [&self.maze_center, &self.ball_start, &self.ball_target].into_iter()
    }
}

/// Compute the maze, start and target regions for `layout`.
pub fn task_regions(
    layout: &Layout,
    mapper: &CoordinateMapper,
    config: &RegionConfig,
) -> TaskRegions {
    let [ox, oy] = config.maze_centroid;
    let placed = |cell: Cell| {
        let (x, y) = mapper.to_world(cell);
        [ox + x, oy + y]
    };
    let region = |name: &str, centroid: [f64; 2], half: f64| Region {
        name: name.to_string(),
        target: config.workspace.clone(),
        centroid,
        half_extents: [half, half],
    };
    let cell = mapper.cell_size();
    TaskRegions {
        maze_center: region(
            "maze_center_region",
            config.maze_centroid,
            config.maze_half_extent,
        ),
        ball_start: region(
            "ball_start_region",
            placed(layout.start()),
            config.start_ratio * cell,
        ),
        ball_target: region(
            "ball_target_region",
            placed(layout.end()),
            config.target_ratio * cell,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Layout, CoordinateMapper) {
        let layout = Layout::from_bits(&[[0u8; 5]; 5], Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        let mapper = CoordinateMapper::new(5, 5, 0.04).unwrap();
        (layout, mapper)
    }

    #[test]
    fn ranges_are_centroid_plus_minus_half() {
        let r = Region {
            name: "r".into(),
            target: "t".into(),
            centroid: [1.0, 2.0],
            half_extents: [0.5, 0.25],
        };
        assert_eq!(r.ranges(), (0.5, 1.75, 1.5, 2.25));
        assert!(r.contains(1.5, 2.0));
        assert!(!r.contains(1.6, 2.0));
    }

    #[test]
    fn start_and_target_follow_placed_cells() {
        let (layout, mapper) = setup();
        let regions = task_regions(&layout, &mapper, &RegionConfig::default());
        assert_eq!(regions.ball_start.centroid, [-0.08, 0.08]);
        assert_eq!(regions.ball_target.centroid, [0.08, -0.08]);
    }

    #[test]
    fn maze_offset_shifts_start_and_target() {
        let (layout, mapper) = setup();
        let regions = task_regions(&layout, &mapper, &RegionConfig::tabletop());
        let (sx, sy) = mapper.to_world(layout.start());
        assert!((regions.ball_start.centroid[0] - (sx - 0.2)).abs() < 1e-12);
        assert!((regions.ball_start.centroid[1] - sy).abs() < 1e-12);
        assert_eq!(regions.maze_center.centroid, [-0.2, 0.0]);
    }

    #[test]
    fn target_region_fits_inside_its_cell() {
        let (layout, mapper) = setup();
        let regions = task_regions(&layout, &mapper, &RegionConfig::default());
        assert!(regions.ball_target.half_extents[0] < mapper.cell_size() / 2.0);
        assert_eq!(regions.iter().count(), 3);
        assert!(regions.iter().all(|r| r.target == "kitchen_table"));
    }

    #[test]
    fn zero_ratio_rejected() {
        let cfg = RegionConfig {
            start_ratio: 0.0,
            ..RegionConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue {
                name: "start_ratio",
                ..
            })
        ));
    }
}
