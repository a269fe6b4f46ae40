//! # Physics Simulation Core
//!
//! [`Scene`] owns the body collection and runs the time-of-impact ordered
//! step: gravity, all-pairs continuous detection, resolution in impact order,
//! then integration over the rest of the frame.

use tracing::{debug, warn};

use crate::body::Body;
use crate::collision::{compare_contacts, intersect, resolve_contact, Contact};
use crate::error::PhysicsError;
use crate::integrator::{advance_bodies, apply_gravity};
use crate::transform::BodyTransform;
use crate::types::{BodyHandle, PhysParams};

/// Body collection plus the reusable per-step contact buffer.
#[derive(Debug, Default)]
pub struct Scene {
    params: PhysParams,
    bodies: Vec<Body>,
    contacts: Vec<Contact>,
    step_count: u64,
    last_contact_count: usize,
}

impl Scene {
    /// Empty scene with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns [`PhysicsError::InvalidParams`] if `params` fail validation.
    pub fn with_params(params: PhysParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn params(&self) -> &PhysParams {
        &self.params
    }

    /// Replaces the step configuration.
    ///
    /// # Errors
    /// Returns [`PhysicsError::InvalidParams`] and keeps the current
    /// parameters if `params` fail validation.
    pub fn set_params(&mut self, params: PhysParams) -> Result<(), PhysicsError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Adds a body and returns its handle.
    ///
    /// # Panics
    /// Panics if the body violates [`Body::assert_valid`] or the scene already
    /// holds `u32::MAX` bodies.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        body.assert_valid();
        let handle = BodyHandle(
            u32::try_from(self.bodies.len()).expect("body count exceeds u32::MAX"),
        );
        self.bodies.push(body);
        handle
    }

    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.index())
    }

    /// # Errors
    /// Returns [`PhysicsError::UnknownBody`] if `handle` is not in the scene.
    pub fn try_body(&self, handle: BodyHandle) -> Result<&Body, PhysicsError> {
        self.body(handle).ok_or(PhysicsError::UnknownBody(handle))
    }

    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Handles of every body, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        (0..self.bodies.len()).map(|i| BodyHandle(i as u32))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of steps taken since creation or the last clear.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Contacts detected during the most recent step.
    #[must_use]
    pub fn last_contact_count(&self) -> usize {
        self.last_contact_count
    }

    /// Drops every body (and its shape) and releases the contact buffer.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.contacts = Vec::new();
        self.step_count = 0;
        self.last_contact_count = 0;
    }

    /// Clears the scene then repopulates it with `setup`.
    pub fn reset_with<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut Self),
    {
        self.clear();
        setup(self);
        debug!(bodies = self.bodies.len(), "scene reset");
    }

    /// Snapshot of every body's transform, in handle order.
    #[must_use]
    pub fn transforms(&self) -> Vec<BodyTransform> {
        self.bodies
            .iter()
            .map(BodyTransform::from)
            .collect()
    }

    /// Advances the scene by `dt` seconds.
    ///
    /// Non-positive or non-finite `dt` leaves the scene untouched.
    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "ignoring step with invalid dt");
            return;
        }
        self.step_count += 1;

        // 1. Gravity
        apply_gravity(&mut self.bodies, self.params.gravity, dt);

        // 2. Detection
        self.detect_contacts(dt);

        // 3. Ordering; stable so equal times keep detection order
        self.contacts.sort_by(compare_contacts);

        // 4. Resolution in impact order
        let contacts = std::mem::take(&mut self.contacts);
        let mut accumulated_time = 0.0;
        for contact in &contacts {
            let sub_dt = contact.time_of_impact - accumulated_time;
            advance_bodies(&mut self.bodies, sub_dt);

            let (body_a, body_b) = pair_mut(&mut self.bodies, contact.body_a, contact.body_b);
            resolve_contact(body_a, body_b, contact, self.params.positional_slop);

            accumulated_time = accumulated_time.max(contact.time_of_impact);
        }

        // 5. Remainder of the frame
        advance_bodies(&mut self.bodies, dt - accumulated_time);

        self.last_contact_count = contacts.len();
        self.contacts = contacts;

        debug!(
            step = self.step_count,
            dt,
            contacts = self.last_contact_count,
            "step complete"
        );
    }

    /// Runs `steps` steps of `dt` each.
    pub fn run(&mut self, dt: f32, steps: usize) {
        for _ in 0..steps {
            self.step(dt);
        }
    }

    fn detect_contacts(&mut self, dt: f32) {
        let n = self.bodies.len();
        let max_pairs = n * n.saturating_sub(1) / 2;

        self.contacts.clear();
        self.contacts.reserve(max_pairs);

        for i in 0..n {
            for j in (i + 1)..n {
                let (body_a, body_b) = (&self.bodies[i], &self.bodies[j]);
                if body_a.has_infinite_mass() && body_b.has_infinite_mass() {
                    continue;
                }
                let (handle_a, handle_b) = (BodyHandle(i as u32), BodyHandle(j as u32));
                if let Some(contact) = intersect(handle_a, body_a, handle_b, body_b, dt) {
                    self.contacts.push(contact);
                }
            }
        }
    }
}

/// Mutable references to two distinct bodies.
fn pair_mut(bodies: &mut [Body], a: BodyHandle, b: BodyHandle) -> (&mut Body, &mut Body) {
    let (ia, ib) = (a.index(), b.index());
    assert_ne!(ia, ib, "contact between a body and itself: {a}");
    if ia < ib {
        let (before, after) = bodies.split_at_mut(ib);
        (&mut before[ia], &mut after[0])
    } else {
        let (before, after) = bodies.split_at_mut(ia);
        (&mut after[0], &mut before[ib])
    }
}
