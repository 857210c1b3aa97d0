//! Minimal 3D vector used for world-space positions and velocities.
//!
//! The maze lies in the `z = const` plane, so most geometric queries come
//! in a full 3D flavour and a horizontal-plane (`_xy`) flavour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in world space (metres).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (height).
    pub z: f64,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Create a vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// This vector with its height replaced.
    pub const fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Dot product of the horizontal components only.
    pub fn dot_xy(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Length of the horizontal projection.
    pub fn length_xy(self) -> f64 {
        self.dot_xy(self).sqrt()
    }

    /// Horizontal-plane distance to `other`.
    pub fn distance_xy(self, other: Vec3) -> f64 {
        (self - other).length_xy()
    }

    /// Whether every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn horizontal_queries_ignore_height() {
        let a = Vec3::new(0.0, 0.0, 5.0);
        let b = Vec3::new(3.0, 4.0, -2.0);
        assert_eq!(a.distance_xy(b), 5.0);
        assert_eq!((b - a).dot_xy(b - a), 25.0);
    }

    #[test]
    fn arithmetic() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v + v, v * 2.0);
        assert_eq!(v - v, Vec3::ZERO);
        assert_eq!(-v, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(v.with_z(0.0), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn array_conversion_round_trips() {
        let v: Vec3 = [0.5, -1.0, 2.0].into();
        let a: [f64; 3] = v.into();
        assert_eq!(a, [0.5, -1.0, 2.0]);
    }

    fn vec3() -> impl Strategy<Value = Vec3> {
        (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn horizontal_distance_is_symmetric_and_height_blind(
            a in vec3(),
            b in vec3(),
            z in -100.0f64..100.0,
        ) {
            prop_assert_eq!(a.distance_xy(b), b.distance_xy(a));
            prop_assert_eq!(a.distance_xy(b.with_z(z)), a.distance_xy(b));
            prop_assert!(a.distance_xy(b) >= 0.0);
            prop_assert!(a.length_xy() <= a.length() + 1e-9);
        }

        #[test]
        fn dot_is_symmetric(a in vec3(), b in vec3()) {
            prop_assert_eq!(a.dot(b), b.dot(a));
            prop_assert_eq!(a.dot_xy(b), b.dot_xy(a));
            prop_assert!((a.dot(a) - a.length() * a.length()).abs() <= 1e-9 * (1.0 + a.dot(a)));
        }
    }
}
