//! Read-only access to live simulation state.

use crate::vec3::Vec3;

/// Per-step queries the evaluators make against the physics engine.
///
/// Implemented by whatever wraps the external simulator. Body lookups
/// return `None` when the engine has no body of that name, which the
/// evaluators surface as an error rather than a failed check.
pub trait SceneQuery {
    /// World position of a body's origin.
    ///
    /// Returns `None` if the body is unknown.
    fn body_position(&self, body: &str) -> Option<Vec3>;

    /// World-frame linear velocity of a body.
    ///
    /// Returns `None` if the body is unknown.
    fn body_linear_velocity(&self, body: &str) -> Option<Vec3>;

    /// Whether any active contact pairs a geom whose name starts with
    /// `prefix_a` with one whose name starts with `prefix_b`, in either
    /// order.
    fn in_contact(&self, prefix_a: &str, prefix_b: &str) -> bool;
}
