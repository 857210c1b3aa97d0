//! Benchmark profiles for the mazebench pipeline.
//!
//! - [`reference_maze`]: 51x51 generated maze (~1.2K open cells)
//! - [`stress_maze`]: 201x201 generated maze (~20K open cells)
//! - [`ball_positions`]: deterministic ball samples over a maze footprint

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazebench_core::{MazeConfig, Vec3};
use mazebench_eval::WaypointPath;
use mazebench_grid::{generate_layout, solve, CoordinateMapper, Layout};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build the reference benchmark maze: 51x51 cells.
pub fn reference_maze(seed: u64) -> Layout {
    generate_layout(51, 51, seed).unwrap()
}

/// Build the stress benchmark maze: 201x201 cells.
///
/// Same generator as [`reference_maze`] at about 16x the cell count.
pub fn stress_maze(seed: u64) -> Layout {
    generate_layout(201, 201, seed).unwrap()
}

/// Solve `layout` and lift the result to waypoints with the default
/// maze sizing.
pub fn solved_path(layout: &Layout) -> (CoordinateMapper, WaypointPath) {
    let config = MazeConfig::default();
    let mapper = CoordinateMapper::for_layout(layout, &config).unwrap();
    let cells = solve(layout).unwrap();
    let path = WaypointPath::from_cells(&cells, &mapper, config.rest_elevation()).unwrap();
    (mapper, path)
}

/// Generate `n` ball positions uniformly over the mapper's footprint at
/// rest elevation.
pub fn ball_positions(mapper: &CoordinateMapper, n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (hx, hy) = mapper.half_extents();
    let z = MazeConfig::default().rest_elevation();
    (0..n)
        .map(|_| Vec3::new(rng.random_range(-hx..hx), rng.random_range(-hy..hy), z))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_solvable() {
        let layout = reference_maze(1);
        assert_eq!(layout.rows(), 51);
        let (_, path) = solved_path(&layout);
        assert!(path.len() >= 2);
    }

    #[test]
    fn positions_stay_on_footprint() {
        let (mapper, _) = solved_path(&reference_maze(3));
        let ps = ball_positions(&mapper, 200, 9);
        assert_eq!(ps.len(), 200);
        assert!(ps.iter().all(|p| mapper.to_cell(p.x, p.y).is_some()));
        assert_eq!(ps, ball_positions(&mapper, 200, 9));
    }
}
