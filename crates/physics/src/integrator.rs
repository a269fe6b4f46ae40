//! # Physics Integration
//!
//! Gravity impulses and the sub-step advance shared by the step loop.

use crate::body::Body;
use crate::math::Vec3;

/// Applies gravity as the impulse `g * m * dt` to every finite-mass body.
pub fn apply_gravity(bodies: &mut [Body], gravity: Vec3, dt: f32) {
    for body in bodies.iter_mut() {
        if body.has_infinite_mass() {
            continue;
        }
        // I = F * dt = m * g * dt
        let impulse = gravity * body.mass() * dt;
        body.apply_impulse_linear(impulse);
    }
}

/// Advances every body by `dt`; non-positive `dt` is a no-op.
pub fn advance_bodies(bodies: &mut [Body], dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for body in bodies.iter_mut() {
        body.update(dt);
    }
}
