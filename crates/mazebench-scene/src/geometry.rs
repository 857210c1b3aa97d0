//! The write-once scene geometry description.

use crate::primitive::{PartKind, Primitive, Role, Shape, Site};
use indexmap::IndexMap;
use mazebench_core::Vec3;
use serde::{Deserialize, Serialize};

/// An ordered, name-keyed collection of primitives, materials and sites
/// describing one body.
///
/// Insertion order is preserved so that JSON and MJCF output are stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneGeometry {
    model: String,
    materials: IndexMap<String, [f64; 4]>,
    primitives: IndexMap<String, Primitive>,
    sites: Vec<Site>,
}

impl SceneGeometry {
    /// Empty geometry for a model called `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            materials: IndexMap::new(),
            primitives: IndexMap::new(),
            sites: Vec::new(),
        }
    }

    /// Model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Register a material colour.
    pub fn add_material(&mut self, name: &str, rgba: [f64; 4]) {
        self.materials.insert(name.to_string(), rgba);
    }

    /// Add a physical body: a collision primitive and a render-only
    /// primitive at the same pose, named `{base}_col` and `{base}_vis`.
    pub fn add_body(
        &mut self,
        base: &str,
        kind: PartKind,
        shape: Shape,
        pos: Vec3,
        material: &str,
    ) {
        for role in [Role::Collision, Role::Visual] {
            self.insert(base, kind, role, shape, pos, material);
        }
    }

    /// Add a render-only primitive named `{base}_vis`.
    pub fn add_visual(
        &mut self,
        base: &str,
        kind: PartKind,
        shape: Shape,
        pos: Vec3,
        material: &str,
    ) {
        self.insert(base, kind, Role::Visual, shape, pos, material);
    }

    fn insert(
        &mut self,
        base: &str,
        kind: PartKind,
        role: Role,
        shape: Shape,
        pos: Vec3,
        material: &str,
    ) {
        let name = format!("{base}_{}", role.suffix());
        let prim = Primitive {
            name: name.clone(),
            kind,
            role,
            shape,
            pos,
            material: material.to_string(),
        };
        self.primitives.insert(name, prim);
    }

    /// Add a site.
    pub fn add_site(&mut self, site: Site) {
        self.sites.push(site);
    }

    /// Materials in registration order.
    pub fn materials(&self) -> impl Iterator<Item = (&str, [f64; 4])> + '_ {
        self.materials.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Colour of a material.
    pub fn material(&self, name: &str) -> Option<[f64; 4]> {
        self.materials.get(name).copied()
    }

    /// All primitives in emission order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.values()
    }

    /// Look up a primitive by name.
    pub fn get(&self, name: &str) -> Option<&Primitive> {
        self.primitives.get(name)
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether there are no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of primitives of `kind` with `role`.
    pub fn count(&self, kind: PartKind, role: Role) -> usize {
        self.primitives()
            .filter(|p| p.kind == kind && p.role == role)
            .count()
    }

    /// Sites in insertion order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Look up a site by name.
    pub fn site(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.name == name)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse geometry previously written by [`to_json`](Self::to_json).
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_emits_paired_primitives_at_same_pose() {
        let mut g = SceneGeometry::new("t");
        let pos = Vec3::new(0.1, 0.2, 0.3);
        g.add_body("wall_0_0", PartKind::Wall, Shape::cuboid(1.0, 1.0, 1.0), pos, "wall");
        assert_eq!(g.len(), 2);
        let col = g.get("wall_0_0_col").unwrap();
        let vis = g.get("wall_0_0_vis").unwrap();
        assert_eq!(col.role, Role::Collision);
        assert_eq!(vis.role, Role::Visual);
        assert_eq!(col.pos, vis.pos);
        assert_eq!(col.shape, vis.shape);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut g = SceneGeometry::new("t");
        for name in ["c", "a", "b"] {
            g.add_visual(name, PartKind::Floor, Shape::Sphere { radius: 1.0 }, Vec3::ZERO, "x");
        }
        let names: Vec<_> = g.primitives().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c_vis", "a_vis", "b_vis"]);
    }

    #[test]
    fn json_round_trip() {
        let mut g = SceneGeometry::new("t");
        g.add_material("wall", [0.25, 0.5, 0.75, 1.0]);
        g.add_body("w", PartKind::Wall, Shape::cuboid(0.5, 0.5, 0.5), Vec3::ZERO, "wall");
        g.add_site(Site::new("top_site", Vec3::new(0.0, 0.0, 0.0625)));
        let json = g.to_json().unwrap();
        assert!(json.contains("\"type\": \"box\""));
        assert_eq!(SceneGeometry::from_json(&json).unwrap(), g);
    }
}
