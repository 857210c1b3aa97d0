//! MJCF (MuJoCo XML) rendering of scene geometry.

use crate::geometry::SceneGeometry;
use crate::primitive::{Role, Shape};
use std::fmt;

/// Group rendered by the viewer.
const VISUAL_GROUP: u8 = 0;
/// Group hidden from the viewer.
const COLLISION_GROUP: u8 = 1;

/// Displays a [`SceneGeometry`] as a standalone MJCF model.
///
/// Every primitive lives in a body named `object`. Collision primitives
/// go in group 1, render-only ones in group 0 with contacts disabled.
///
/// ```
/// use mazebench_core::MazeConfig;
/// use mazebench_scene::{agent_body, Mjcf, Palette};
///
/// let xml = Mjcf(&agent_body(&MazeConfig::default(), &Palette::default())).to_string();
/// assert!(xml.starts_with("<mujoco model=\"maze_ball\">"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Mjcf<'a>(pub &'a SceneGeometry);

impl fmt::Display for Mjcf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.0;
        writeln!(f, "<mujoco model=\"{}\">", Escaped(g.model()))?;

        writeln!(f, "  <asset>")?;
        for (name, [r, gr, b, a]) in g.materials() {
            let name = Escaped(name);
            writeln!(
                f,
                "    <material name=\"mat_{name}\" rgba=\"{r} {gr} {b} {a}\"/>"
            )?;
        }
        writeln!(f, "  </asset>")?;

        writeln!(f, "  <worldbody>")?;
        writeln!(f, "    <body>")?;
        writeln!(f, "      <body name=\"object\">")?;
        for p in g.primitives() {
            let size = match p.shape {
                Shape::Box {
                    half_extents: [hx, hy, hz],
                } => format!("{hx:.4} {hy:.4} {hz:.4}"),
                Shape::Sphere { radius } => format!("{radius:.4}"),
            };
            write!(
                f,
                "        <geom name=\"{}\" type=\"{}\" size=\"{size}\" pos=\"{:.4} {:.4} {:.4}\" material=\"mat_{}\"",
                Escaped(&p.name),
                p.shape.type_name(),
                p.pos.x,
                p.pos.y,
                p.pos.z,
                Escaped(&p.material),
            )?;
            match p.role {
                Role::Collision => writeln!(
                    f,
                    " group=\"{COLLISION_GROUP}\" condim=\"4\" contype=\"1\" conaffinity=\"1\"/>"
                )?,
                Role::Visual => writeln!(
                    f,
                    " group=\"{VISUAL_GROUP}\" contype=\"0\" conaffinity=\"0\"/>"
                )?,
            }
        }
        for s in g.sites() {
            writeln!(
                f,
                "        <site name=\"{}\" pos=\"{:.4} {:.4} {:.4}\" size=\"0.002\" rgba=\"0 0 0 0\"/>",
                Escaped(&s.name),
                s.pos.x,
                s.pos.y,
                s.pos.z
            )?;
        }
        writeln!(f, "      </body>")?;
        writeln!(f, "    </body>")?;
        writeln!(f, "  </worldbody>")?;
        writeln!(f, "</mujoco>")
    }
}

/// Attribute-value escaping for names written into the document.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
            f.write_str(&rest[..i])?;
            let entity = match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}
