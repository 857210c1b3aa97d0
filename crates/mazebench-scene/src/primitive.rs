//! Solid primitives and attachment sites.

use mazebench_core::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric shape of a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned box given by its half-extents.
    Box {
        /// Half-extents along x, y and z.
        half_extents: [f64; 3],
    },
    /// Sphere.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
}

impl Shape {
    /// Axis-aligned box with half-extents `(hx, hy, hz)`.
    pub const fn cuboid(hx: f64, hy: f64, hz: f64) -> Self {
        Self::Box {
            half_extents: [hx, hy, hz],
        }
    }

    /// MJCF `type` attribute.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
        }
    }
}

/// Whether a primitive takes part in contact or is only drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Collides, never rendered.
    Collision,
    /// Rendered, never collides.
    Visual,
}

impl Role {
    /// Suffix appended to a body's base name.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Collision => "col",
            Self::Visual => "vis",
        }
    }
}

/// What part of the scene a primitive belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// A floor tile or the floor slab.
    Floor,
    /// One wall cell.
    Wall,
    /// Flat marker over the start cell.
    StartMarker,
    /// Flat marker over the end cell.
    EndMarker,
    /// The rolling agent.
    Agent,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::StartMarker => "start_marker",
            Self::EndMarker => "end_marker",
            Self::Agent => "agent",
        };
        f.write_str(s)
    }
}

/// One declarative solid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Unique name within its scene.
    pub name: String,
    /// Scene part this primitive belongs to.
    pub kind: PartKind,
    /// Collision or render-only.
    pub role: Role,
    /// Shape and size.
    pub shape: Shape,
    /// Centre position in the scene frame.
    pub pos: Vec3,
    /// Name of a material in the owning scene's palette.
    pub material: String,
}

/// A named reference point on a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Site name.
    pub name: String,
    /// Position in the body frame.
    pub pos: Vec3,
}

impl Site {
    /// Create a site.
    pub fn new(name: impl Into<String>, pos: Vec3) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}
