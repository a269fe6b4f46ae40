//! Impulse-based contact response

use tracing::trace;

use crate::body::Body;
use crate::math::{Mat3, Vec3, EPSILON};

use super::{combine_friction, combine_restitution, Contact};

/// Effective inverse mass of the pair along `direction` at the lever arms.
fn effective_inv_mass(
    body_a: &Body,
    inv_inertia_a: Mat3,
    lever_a: Vec3,
    body_b: &Body,
    inv_inertia_b: Mat3,
    lever_b: Vec3,
    direction: Vec3,
) -> f32 {
    let angular_a = (inv_inertia_a * lever_a.cross(direction)).cross(lever_a);
    let angular_b = (inv_inertia_b * lever_b.cross(direction)).cross(lever_b);
    body_a.inv_mass + body_b.inv_mass + (angular_a + angular_b).dot(direction)
}

/// Velocity of the material point at `lever` from the centre of mass.
fn point_velocity(body: &Body, lever: Vec3) -> Vec3 {
    body.linear_velocity + body.angular_velocity.cross(lever)
}

/// Resolves one contact between `body_a` and `body_b` in place.
///
/// Applies the restitution impulse along the normal, a Coulomb-bounded
/// friction impulse along the sliding direction, and pushes penetrating
/// bodies apart in proportion to their inverse masses, leaving
/// `positional_slop` between the surfaces. Pairs of infinite-mass bodies are
/// left untouched.
pub fn resolve_contact(
    body_a: &mut Body,
    body_b: &mut Body,
    contact: &Contact,
    positional_slop: f32,
) {
    if body_a.has_infinite_mass() && body_b.has_infinite_mass() {
        return;
    }

    let point_a = body_a.body_to_world(contact.local_point_a);
    let point_b = body_b.body_to_world(contact.local_point_b);
    let normal = contact.normal;

    let inv_inertia_a = body_a.inv_inertia_tensor_world();
    let inv_inertia_b = body_b.inv_inertia_tensor_world();

    let lever_a = point_a - body_a.centre_of_mass_world();
    let lever_b = point_b - body_b.centre_of_mass_world();

    // Normal impulse
    let rel_vel = point_velocity(body_b, lever_b) - point_velocity(body_a, lever_a);
    let rel_vel_normal = rel_vel.dot(normal);

    let mut normal_impulse = 0.0;
    if rel_vel_normal < 0.0 {
        let elasticity = combine_restitution(body_a.elasticity, body_b.elasticity);
        let k_normal = effective_inv_mass(
            body_a, inv_inertia_a, lever_a, body_b, inv_inertia_b, lever_b, normal,
        );
        if k_normal > EPSILON {
            normal_impulse = -(1.0 + elasticity) * rel_vel_normal / k_normal;
            let impulse = normal * normal_impulse;
            body_a.apply_impulse(point_a, -impulse);
            body_b.apply_impulse(point_b, impulse);
        }
    }

    // Friction, bounded by mu * |j|
    let friction = combine_friction(body_a.friction, body_b.friction);
    if normal_impulse > 0.0 && friction > 0.0 {
        let rel_vel = point_velocity(body_b, lever_b) - point_velocity(body_a, lever_a);
        let tangent_vel = rel_vel - normal * rel_vel.dot(normal);
        let tangent_speed = tangent_vel.length();

        if tangent_speed > EPSILON {
            let tangent = tangent_vel / tangent_speed;
            let k_tangent = effective_inv_mass(
                body_a, inv_inertia_a, lever_a, body_b, inv_inertia_b, lever_b, tangent,
            );
            if k_tangent > EPSILON {
                let max_friction = friction * normal_impulse.abs();
                let friction_impulse = (tangent_speed / k_tangent).min(max_friction);
                let impulse = tangent * friction_impulse;
                body_a.apply_impulse(point_a, impulse);
                body_b.apply_impulse(point_b, -impulse);
            }
        }
    }

    // Projection out of penetration
    let gap = (point_b - point_a).dot(normal);
    if gap < 0.0 {
        let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
        let correction = normal * (gap - positional_slop);
        body_a.position += correction * (body_a.inv_mass / total_inv_mass);
        body_b.position -= correction * (body_b.inv_mass / total_inv_mass);
    }

    trace!(
        a = %contact.body_a,
        b = %contact.body_b,
        toi = contact.time_of_impact,
        normal_impulse,
        gap,
        "resolved contact"
    );
}
