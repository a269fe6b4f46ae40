//! # Collision Detection and Response
//!
//! Continuous narrow-phase detection between body pairs and impulse-based
//! resolution of the resulting contacts.
//!
//! Contacts carry a normal pointing from body A toward body B; detection and
//! response both rely on that convention.

mod dispatcher;
mod response;
mod sphere_sphere;

pub use dispatcher::intersect;
pub use response::resolve_contact;
pub use sphere_sphere::{sphere_sphere_time_of_impact, SphereSweep};

use std::cmp::Ordering;

use crate::math::Vec3;
use crate::types::BodyHandle;

/// A predicted or occurring collision between two bodies within one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Contact point on A's surface at the time of impact.
    pub world_point_a: Vec3,
    /// Contact point on B's surface at the time of impact.
    pub world_point_b: Vec3,
    /// `world_point_a` in A's body frame (relative to its centre of mass).
    pub local_point_a: Vec3,
    /// `world_point_b` in B's body frame (relative to its centre of mass).
    pub local_point_b: Vec3,
    /// Unit normal from A toward B.
    pub normal: Vec3,
    /// Surface gap at the time of impact; negative when penetrating.
    pub separation_distance: f32,
    /// Seconds from the start of the step, in `[0, dt]`.
    pub time_of_impact: f32,
}

/// Orders contacts by ascending time of impact.
///
/// Ties compare equal; callers sort stably so simultaneous contacts keep
/// their detection order.
#[must_use]
pub fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    a.time_of_impact.total_cmp(&b.time_of_impact)
}

/// Combined restitution of two materials (product).
#[must_use]
pub fn combine_restitution(e1: f32, e2: f32) -> f32 {
    e1 * e2
}

/// Combined friction coefficient of two materials (product).
#[must_use]
pub fn combine_friction(f1: f32, f2: f32) -> f32 {
    f1 * f2
}
