//! Geometry emitter configuration.
//!
//! Different maze revisions disagree on wall height, floor thickness and
//! whether the floor is one slab or one tile per cell. Each revision is a
//! preset of [`GeometryConfig`]; none is more correct than the others.

use mazebench_core::config::require_positive;
use mazebench_core::ConfigError;
use serde::{Deserialize, Serialize};

/// How the maze floor is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorStyle {
    /// One tile per grid cell, start and end tiles tinted.
    Tiles,
    /// A single slab under the whole grid.
    Slab,
}

/// Where walls stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallBase {
    /// Wall bottoms sit on the floor's top face.
    FloorTop,
    /// Wall bottoms sit at `z = 0`, the floor's mid-plane.
    Origin,
}

/// RGBA colours for each material the emitter references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Floor colour. Default: light grey.
    pub floor: [f64; 4],
    /// Wall colour. Default: brown.
    pub wall: [f64; 4],
    /// Start marker colour. Default: red.
    pub start: [f64; 4],
    /// End marker colour. Default: green.
    pub end: [f64; 4],
    /// Agent colour. Default: blue.
    pub agent: [f64; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            floor: [0.7, 0.7, 0.7, 1.0],
            wall: [0.4, 0.3, 0.2, 1.0],
            start: [0.8, 0.2, 0.2, 1.0],
            end: [0.2, 0.8, 0.2, 1.0],
            agent: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

impl Palette {
    /// `(material name, rgba)` pairs in emission order.
    pub fn entries(&self) -> [(&'static str, [f64; 4]); 5] {
        [
            ("floor", self.floor),
            ("wall", self.wall),
            ("start", self.start),
            ("end", self.end),
            ("agent", self.agent),
        ]
    }
}

/// Geometry emitter parameters.
///
/// Heights and thicknesses are ratios of the agent radius, footprints
/// are ratios of the cell size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Floor construction. Default: [`FloorStyle::Tiles`].
    pub floor_style: FloorStyle,
    /// Wall placement. Default: [`WallBase::FloorTop`].
    pub wall_base: WallBase,
    /// Wall half-height over agent radius. Default: 0.8.
    pub wall_height_ratio: f64,
    /// Floor half-thickness over agent radius. Default: 0.1.
    pub floor_thickness_ratio: f64,
    /// Marker edge over cell size, in `(0, 1]`. Default: 0.6.
    pub marker_size_ratio: f64,
    /// Marker half-thickness over agent radius. Default: 0.02.
    pub marker_thickness_ratio: f64,
    /// Height of the maze's `top_site` above the origin. Default: 0.05.
    pub top_site_height: f64,
    /// Material colours.
    pub palette: Palette,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::tiled()
    }
}

impl GeometryConfig {
    /// Per-cell floor tiles with low walls standing on the floor.
    pub fn tiled() -> Self {
        Self {
            floor_style: FloorStyle::Tiles,
            wall_base: WallBase::FloorTop,
            wall_height_ratio: 0.8,
            floor_thickness_ratio: 0.1,
            marker_size_ratio: 0.6,
            marker_thickness_ratio: 0.02,
            top_site_height: 0.05,
            palette: Palette::default(),
        }
    }

    /// A single floor slab with taller walls rooted at the origin.
    pub fn slab() -> Self {
        Self {
            floor_style: FloorStyle::Slab,
            wall_base: WallBase::Origin,
            wall_height_ratio: 1.2,
            floor_thickness_ratio: 1.0 / 3.0,
            palette: Palette {
                floor: [0.7, 0.4, 0.2, 1.0],
                wall: [0.8, 0.5, 0.3, 1.0],
                ..Palette::default()
            },
            ..Self::tiled()
        }
    }

    /// Wall half-height for an agent of radius `agent_radius`.
    pub fn wall_half_height(&self, agent_radius: f64) -> f64 {
        self.wall_height_ratio * agent_radius
    }

    /// Floor half-thickness for an agent of radius `agent_radius`.
    pub fn floor_half_thickness(&self, agent_radius: f64) -> f64 {
        self.floor_thickness_ratio * agent_radius
    }

    /// Height of a wall's centre.
    pub fn wall_center_z(&self, agent_radius: f64) -> f64 {
        let h = self.wall_half_height(agent_radius);
        match self.wall_base {
            WallBase::FloorTop => self.floor_half_thickness(agent_radius) + h,
            WallBase::Origin => h,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("wall_height_ratio", self.wall_height_ratio)?;
        require_positive("floor_thickness_ratio", self.floor_thickness_ratio)?;
        require_positive("marker_thickness_ratio", self.marker_thickness_ratio)?;
        require_positive("top_site_height", self.top_site_height)?;
        if !(self.marker_size_ratio > 0.0 && self.marker_size_ratio <= 1.0) {
            return Err(ConfigError::InvalidValue {
                name: "marker_size_ratio",
                value: self.marker_size_ratio,
                expected: "in (0, 1]",
            });
        }
        for (name, rgba) in self.palette.entries() {
            if rgba.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::Inconsistent {
                    reason: format!("palette colour '{name}' has a component outside [0, 1]"),
                });
            }
        }
        Ok(())
    }
}
