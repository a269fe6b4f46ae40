//! Continuous sphere-sphere collision detection

use crate::body::Body;
use crate::math::{Vec3, EPSILON};
use crate::shapes::Sphere;
use crate::types::BodyHandle;

use super::Contact;

/// Linear sweep of a sphere's centre over one step.
#[derive(Debug, Clone, Copy)]
pub struct SphereSweep {
    pub centre: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
}

impl SphereSweep {
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.centre + self.velocity * t
    }
}

/// Earliest time in `[0, dt]` at which the two sweeps touch.
///
/// Overlapping spheres report `0.0`. Separating pairs, near-zero relative
/// speed, grazing (near-zero discriminant) and impacts after `dt` report
/// `None`.
#[must_use]
pub fn sphere_sphere_time_of_impact(a: &SphereSweep, b: &SphereSweep, dt: f32) -> Option<f32> {
    let delta = b.centre - a.centre;
    let rel_vel = b.velocity - a.velocity;
    let radius_sum = a.radius + b.radius;

    let c = delta.length_squared() - radius_sum * radius_sum;
    if c <= 0.0 {
        return Some(0.0);
    }

    let qa = rel_vel.length_squared();
    if qa <= EPSILON {
        return None;
    }
    let qb = 2.0 * delta.dot(rel_vel);
    if qb >= 0.0 {
        // not closing
        return None;
    }

    let discriminant = qb * qb - 4.0 * qa * c;
    if discriminant <= EPSILON {
        return None;
    }

    let t = (-qb - discriminant.sqrt()) / (2.0 * qa);
    if !t.is_finite() || t < 0.0 || t > dt {
        return None;
    }
    Some(t)
}

/// Builds the contact for two sphere bodies, if they touch within `dt`.
pub(crate) fn intersect_spheres(
    handle_a: BodyHandle,
    body_a: &Body,
    sphere_a: &Sphere,
    handle_b: BodyHandle,
    body_b: &Body,
    sphere_b: &Sphere,
    dt: f32,
) -> Option<Contact> {
    let sweep_a = SphereSweep {
        centre: body_a.centre_of_mass_world(),
        velocity: body_a.linear_velocity,
        radius: sphere_a.radius,
    };
    let sweep_b = SphereSweep {
        centre: body_b.centre_of_mass_world(),
        velocity: body_b.linear_velocity,
        radius: sphere_b.radius,
    };

    let toi = sphere_sphere_time_of_impact(&sweep_a, &sweep_b, dt)?;

    let centre_a = sweep_a.at(toi);
    let centre_b = sweep_b.at(toi);
    let delta = centre_b - centre_a;
    let distance = delta.length();

    // Coincident centres give no direction; fall back to world up
    let normal = if distance > EPSILON {
        delta / distance
    } else {
        Vec3::Z
    };

    let world_point_a = centre_a + normal * sweep_a.radius;
    let world_point_b = centre_b - normal * sweep_b.radius;

    // Body frames at the time of impact, as the step loop will see them
    let mut at_impact_a = body_a.clone();
    let mut at_impact_b = body_b.clone();
    at_impact_a.update(toi);
    at_impact_b.update(toi);
    let local_point_a = at_impact_a.world_to_body(world_point_a);
    let local_point_b = at_impact_b.world_to_body(world_point_b);

    Some(Contact {
        body_a: handle_a,
        body_b: handle_b,
        world_point_a,
        world_point_b,
        local_point_a,
        local_point_b,
        normal,
        separation_distance: distance - (sweep_a.radius + sweep_b.radius),
        time_of_impact: toi,
    })
}
