//! Layout to scene geometry.

use crate::config::{FloorStyle, GeometryConfig};
use crate::geometry::SceneGeometry;
use crate::primitive::{PartKind, Shape, Site};
use mazebench_core::{MazeConfig, Vec3};
use mazebench_grid::{CellKind, CoordinateMapper, Layout};

/// Model name of emitted maze geometry.
pub const MAZE_MODEL: &str = "maze_structure";

/// Emit the maze body: floor, one wall per wall cell, start/end markers
/// and the `top_site`/`bottom_site` anchors.
///
/// Floor and walls are emitted as collision/visual pairs at the same pose.
/// Markers are render-only so they never perturb the agent. The floor is
/// centred on `z = 0`; positions come from `mapper`, so they agree with
/// the waypoints and placement regions.
///
/// Expects `maze` and `config` to have been validated.
pub fn emit_maze(
    layout: &Layout,
    mapper: &CoordinateMapper,
    maze: &MazeConfig,
    config: &GeometryConfig,
) -> SceneGeometry {
    let r = maze.agent_radius;
    let half_cell = mapper.cell_size() / 2.0;
    let floor_t = config.floor_half_thickness(r);
    let wall_h = config.wall_half_height(r);
    let wall_z = config.wall_center_z(r);

    let mut g = SceneGeometry::new(MAZE_MODEL);
    for (name, rgba) in config.palette.entries() {
        if name != "agent" {
            g.add_material(name, rgba);
        }
    }

    // ── Floor ──────────────────────────────────────────────────────
    match config.floor_style {
        FloorStyle::Tiles => {
            for (cell, _) in layout.iter() {
                let material = if cell == layout.start() {
                    "start"
                } else if cell == layout.end() {
                    "end"
                } else {
                    "floor"
                };
                g.add_body(
                    &format!("floor_{}_{}", cell.row, cell.col),
                    PartKind::Floor,
                    Shape::cuboid(half_cell, half_cell, floor_t),
                    mapper.cell_center(cell, 0.0),
                    material,
                );
            }
        }
        FloorStyle::Slab => {
            let (hx, hy) = mapper.half_extents();
            g.add_body(
                "floor",
                PartKind::Floor,
                Shape::cuboid(hx, hy, floor_t),
                Vec3::ZERO,
                "floor",
            );
        }
    }

    // ── Walls ──────────────────────────────────────────────────────
    for (cell, kind) in layout.iter() {
        if kind == CellKind::Wall {
            g.add_body(
                &format!("wall_{}_{}", cell.row, cell.col),
                PartKind::Wall,
                Shape::cuboid(half_cell, half_cell, wall_h),
                mapper.cell_center(cell, wall_z),
                "wall",
            );
        }
    }

    // ── Markers ────────────────────────────────────────────────────
    let half_marker = half_cell * config.marker_size_ratio;
    let marker_t = config.marker_thickness_ratio * r;
    let marker_z = floor_t + marker_t;
    for (base, kind, cell, material) in [
        ("start_marker", PartKind::StartMarker, layout.start(), "start"),
        ("end_marker", PartKind::EndMarker, layout.end(), "end"),
    ] {
        g.add_visual(
            base,
            kind,
            Shape::cuboid(half_marker, half_marker, marker_t),
            mapper.cell_center(cell, marker_z),
            material,
        );
    }

    g.add_site(Site::new(
        "top_site",
        Vec3::new(0.0, 0.0, config.top_site_height),
    ));
    g.add_site(Site::new("bottom_site", Vec3::new(0.0, 0.0, -floor_t)));

    log::debug!(
        "emitted {} primitives for {}x{} maze ({} walls, {:?} floor)",
        g.len(),
        layout.rows(),
        layout.cols(),
        layout.wall_count(),
        config.floor_style
    );
    g
}
