//! Test utilities and mock types for mazebench development.
//!
//! Provides [`MockScene`], an in-memory implementation of
//! [`SceneQuery`], and fixture mazes in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use mazebench_core::{SceneQuery, Vec3};

#[derive(Clone, Copy, Debug)]
struct BodyState {
    position: Vec3,
    velocity: Vec3,
}

/// Mock implementation of [`SceneQuery`].
///
/// Bodies are keyed by name; contacts are stored as geom-name pairs and
/// matched by prefix in either order, the way the engine reports them.
/// Populate it with [`set_body`](MockScene::set_body) and
/// [`add_contact`](MockScene::add_contact) before passing it to code under
/// test.
#[derive(Clone, Debug, Default)]
pub struct MockScene {
    bodies: HashMap<String, BodyState>,
    contacts: Vec<(String, String)>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a body. A new body starts at rest; an existing one keeps its
    /// velocity.
    pub fn set_body(&mut self, name: &str, position: Vec3) {
        self.bodies
            .entry(name.to_string())
            .and_modify(|b| b.position = position)
            .or_insert(BodyState {
                position,
                velocity: Vec3::ZERO,
            });
    }

    /// Set a body's linear velocity. Unknown bodies are created at the origin.
    pub fn set_velocity(&mut self, name: &str, velocity: Vec3) {
        self.bodies
            .entry(name.to_string())
            .or_insert(BodyState {
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
            })
            .velocity = velocity;
    }

    pub fn remove_body(&mut self, name: &str) {
        self.bodies.remove(name);
    }

    /// Record an active contact between two geoms.
    pub fn add_contact(&mut self, geom_a: &str, geom_b: &str) {
        self.contacts.push((geom_a.to_string(), geom_b.to_string()));
    }

    pub fn clear_contacts(&mut self) {
        self.contacts.clear();
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

impl SceneQuery for MockScene {
    fn body_position(&self, body: &str) -> Option<Vec3> {
        self.bodies.get(body).map(|b| b.position)
    }

    fn body_linear_velocity(&self, body: &str) -> Option<Vec3> {
        self.bodies.get(body).map(|b| b.velocity)
    }

    fn in_contact(&self, prefix_a: &str, prefix_b: &str) -> bool {
        self.contacts.iter().any(|(g1, g2)| {
            (g1.starts_with(prefix_a) && g2.starts_with(prefix_b))
                || (g1.starts_with(prefix_b) && g2.starts_with(prefix_a))
        })
    }
}
