//! The rolling ball agent.

use crate::config::Palette;
use crate::geometry::SceneGeometry;
use crate::primitive::{PartKind, Shape, Site};
use mazebench_core::{MazeConfig, Vec3};

/// Model name of the agent body.
pub const AGENT_MODEL: &str = "maze_ball";

/// Describe the agent: a collision sphere, a render-only sphere, and
/// `bottom_site`, `top_site` and `horizontal_radius_site` on its surface.
pub fn agent_body(maze: &MazeConfig, palette: &Palette) -> SceneGeometry {
    let r = maze.agent_radius;
    let mut g = SceneGeometry::new(AGENT_MODEL);
    g.add_material("agent", palette.agent);
    g.add_body(
        "ball",
        PartKind::Agent,
        Shape::Sphere { radius: r },
        Vec3::ZERO,
        "agent",
    );
    g.add_site(Site::new("bottom_site", Vec3::new(0.0, 0.0, -r)));
    g.add_site(Site::new("top_site", Vec3::new(0.0, 0.0, r)));
    g.add_site(Site::new("horizontal_radius_site", Vec3::new(r, 0.0, 0.0)));
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Role;

    #[test]
    fn sphere_pair_and_surface_sites() {
        let maze = MazeConfig::new(0.02, 1.3);
        let g = agent_body(&maze, &Palette::default());
        assert_eq!(g.count(PartKind::Agent, Role::Collision), 1);
        assert_eq!(g.count(PartKind::Agent, Role::Visual), 1);
        assert_eq!(
            g.get("ball_col").unwrap().shape,
            Shape::Sphere { radius: 0.02 }
        );
        for site in g.sites() {
            assert!((site.pos.length() - 0.02).abs() < 1e-12, "{}", site.name);
        }
        assert_eq!(g.site("bottom_site").unwrap().pos.z, -0.02);
    }
}
