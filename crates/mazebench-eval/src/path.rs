//! The waypoint polyline the agent is expected to follow.

use crate::error::EvalError;
use mazebench_core::{Cell, Vec3};
use mazebench_grid::CoordinateMapper;

/// Ordered waypoints with precomputed segment and cumulative lengths.
///
/// Lengths are measured in the horizontal plane. Immutable; rebuild it
/// when the layout changes.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointPath {
    points: Vec<Vec3>,
    segment_len: Vec<f64>,
    cumulative: Vec<f64>,
}

impl WaypointPath {
    /// Build a path from explicit points.
    ///
    /// Fails on an empty list or a non-finite coordinate.
    pub fn new(points: Vec<Vec3>) -> Result<Self, EvalError> {
        if points.is_empty() {
            return Err(EvalError::EmptyPath);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(EvalError::NonFiniteWaypoint { index });
        }
        let segment_len: Vec<f64> = points
            .windows(2)
            .map(|w| w[0].distance_xy(w[1]))
            .collect();
        let mut cumulative = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        cumulative.push(acc);
        for len in &segment_len {
            acc += len;
            cumulative.push(acc);
        }
        Ok(Self {
            points,
            segment_len,
            cumulative,
        })
    }

    /// Lift grid cells to waypoints at height `z` through the shared mapper.
    pub fn from_cells(
        cells: &[Cell],
        mapper: &CoordinateMapper,
        z: f64,
    ) -> Result<Self, EvalError> {
        Self::new(cells.iter().map(|&c| mapper.cell_center(c, z)).collect())
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

    /// First waypoint.
    pub fn first(&self) -> Vec3 {
        self.points[0]
    }

    /// Last waypoint.
    pub fn last(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    /// Per-segment lengths; one fewer than the number of points.
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_len
    }

    /// Arc length from the first point to each point.
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative
    }

    /// Total arc length.
    pub fn total_length(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Whether the path has zero total length.
    pub fn is_degenerate(&self) -> bool {
        self.total_length() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_5x5_diagonal_length() {
        let cells: Vec<Cell> = (0..5)
            .map(|r| Cell::new(r, 0))
            .chain((1..5).map(|c| Cell::new(4, c)))
            .collect();
        let mapper = CoordinateMapper::new(5, 5, 0.03).unwrap();
        let path = WaypointPath::from_cells(&cells, &mapper, 0.015).unwrap();
        assert_eq!(path.len(), 9);
        assert!((path.total_length() - 0.24).abs() < 1e-12);
        assert!(path.points().iter().all(|p| p.z == 0.015));
    }

    #[test]
    fn cumulative_starts_at_zero_and_ends_at_total() {
        let path = WaypointPath::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 4.0, 9.0),
        ])
        .unwrap();
        assert_eq!(path.cumulative_lengths(), &[0.0, 3.0, 7.0]);
        assert_eq!(path.segment_lengths(), &[3.0, 4.0]);
        assert_eq!(path.total_length(), 7.0);
    }

    #[test]
    fn single_point_is_degenerate() {
        let path = WaypointPath::new(vec![Vec3::new(1.0, 1.0, 0.0)]).unwrap();
        assert!(path.is_degenerate());
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn empty_and_non_finite_rejected() {
        assert_eq!(WaypointPath::new(vec![]), Err(EvalError::EmptyPath));
        assert_eq!(
            WaypointPath::new(vec![Vec3::ZERO, Vec3::new(f64::NAN, 0.0, 0.0)]),
            Err(EvalError::NonFiniteWaypoint { index: 1 })
        );
    }
}
