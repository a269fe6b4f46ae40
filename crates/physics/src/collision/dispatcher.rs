//! Routes a body pair to the narrow-phase routine for its shape pair

use crate::body::Body;
use crate::shapes::Shape;
use crate::types::BodyHandle;

use super::sphere_sphere::intersect_spheres;
use super::Contact;

/// Predicts whether `body_a` and `body_b` touch within `dt`, moving at their
/// current linear velocities.
///
/// Returns `None` when the pair does not collide this step; that is a normal
/// outcome, not an error.
#[must_use]
pub fn intersect(
    handle_a: BodyHandle,
    body_a: &Body,
    handle_b: BodyHandle,
    body_b: &Body,
    dt: f32,
) -> Option<Contact> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Sphere(sphere_a), Shape::Sphere(sphere_b)) => intersect_spheres(
            handle_a, body_a, sphere_a, handle_b, body_b, sphere_b, dt,
        ),
    }
}
