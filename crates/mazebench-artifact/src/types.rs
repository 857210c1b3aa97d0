//! The in-memory path artifact.

use crate::error::ArtifactError;
use mazebench_core::Vec3;

/// Waypoints fixed at the agent's rest elevation.
#[derive(Clone, Debug, PartialEq)]
pub struct PathArtifact {
    rest_z: f64,
    points: Vec<Vec3>,
}

impl PathArtifact {
    /// Build an artifact, lifting every point to `rest_z`.
    pub fn new(
        points: impl IntoIterator<Item = Vec3>,
        rest_z: f64,
    ) -> Result<Self, ArtifactError> {
        let points: Vec<Vec3> = points.into_iter().map(|p| p.with_z(rest_z)).collect();
        if points.is_empty() {
            return Err(ArtifactError::EmptyPath);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ArtifactError::NonFinitePoint { index });
        }
        Ok(Self { rest_z, points })
    }

    /// Elevation shared by every point.
    pub fn rest_z(&self) -> f64 {
        self.rest_z
    }

    /// The waypoints.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; construction rejects empty paths.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Take the waypoints.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_lifted_to_rest_z() {
        let a = PathArtifact::new([Vec3::new(1.0, 2.0, 9.0), Vec3::ZERO], 0.02).unwrap();
        assert!(a.points().iter().all(|p| p.z == 0.02));
        assert_eq!(a.points()[0].x, 1.0);
    }

    #[test]
    fn empty_and_non_finite_rejected() {
        assert!(matches!(
            PathArtifact::new(Vec::new(), 0.02),
            Err(ArtifactError::EmptyPath)
        ));
        assert!(matches!(
            PathArtifact::new([Vec3::ZERO], f64::INFINITY),
            Err(ArtifactError::NonFinitePoint { index: 0 })
        ));
    }
}
