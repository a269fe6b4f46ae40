//! # Scene Builder
//!
//! Helpers for populating a [`Scene`] with sphere bodies. Mirrors the explicit
//! initial state a scene-setup collaborator supplies: placement, velocities,
//! mass and material.

use crate::body::Body;
use crate::math::{normalize_or_identity, Quat, Vec3};
use crate::shapes::Shape;
use crate::simulation::Scene;
use crate::types::BodyHandle;

/// Initial state of a sphere body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub position: Vec3,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub radius: f32,
    /// `0.0` for immovable bodies.
    pub inv_mass: f32,
    pub elasticity: f32,
    pub friction: f32,
}

impl BodyDesc {
    /// Unit-mass ball of `radius` resting at `position`.
    #[must_use]
    pub fn ball(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            ..Self::default()
        }
    }

    /// Immovable sphere, used for terrain and walls.
    #[must_use]
    pub fn fixed(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            inv_mass: 0.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_velocity(mut self, linear_velocity: Vec3) -> Self {
        self.linear_velocity = linear_velocity;
        self
    }

    #[must_use]
    pub fn with_angular_velocity(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the mass; `f32::INFINITY` makes the body immovable.
    ///
    /// # Panics
    /// Panics if `mass` is not strictly positive.
    #[must_use]
    pub fn with_mass(mut self, mass: f32) -> Self {
        assert!(mass > 0.0, "mass must be positive, got {mass}");
        self.inv_mass = if mass.is_infinite() { 0.0 } else { mass.recip() };
        self
    }

    #[must_use]
    pub fn with_material(mut self, elasticity: f32, friction: f32) -> Self {
        self.elasticity = elasticity;
        self.friction = friction;
        self
    }

    /// # Panics
    /// Panics if the radius is not strictly positive and finite.
    #[must_use]
    pub fn into_body(self) -> Body {
        Body {
            position: self.position,
            orientation: normalize_or_identity(self.orientation),
            linear_velocity: self.linear_velocity,
            angular_velocity: self.angular_velocity,
            inv_mass: self.inv_mass,
            elasticity: self.elasticity,
            friction: self.friction,
            shape: Shape::sphere(self.radius),
        }
    }
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            radius: 1.0,
            inv_mass: 1.0,
            elasticity: 0.5,
            friction: 0.5,
        }
    }
}

impl From<BodyDesc> for Body {
    fn from(desc: BodyDesc) -> Self {
        desc.into_body()
    }
}

/// Builder methods for adding sphere bodies to the scene
impl Scene {
    /// Add a sphere described by `desc`.
    pub fn add_sphere(&mut self, desc: BodyDesc) -> BodyHandle {
        self.add_body(desc.into_body())
    }

    /// Add an immovable sphere (terrain, walls).
    pub fn add_fixed_sphere(&mut self, position: Vec3, radius: f32, elasticity: f32, friction: f32) -> BodyHandle {
        self.add_sphere(BodyDesc::fixed(position, radius).with_material(elasticity, friction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sphere_returns_sequential_handles() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(BodyDesc::ball(Vec3::ZERO, 1.0));
        let b = scene.add_fixed_sphere(Vec3::new(0.0, 0.0, -1000.0), 998.0, 0.99, 0.5);
        assert_eq!(a, BodyHandle(0));
        assert_eq!(b, BodyHandle(1));
        assert!(scene.body(b).unwrap().has_infinite_mass());
    }

    #[test]
    fn infinite_mass_desc_is_fixed() {
        let body = BodyDesc::ball(Vec3::ZERO, 1.0).with_mass(f32::INFINITY).into_body();
        assert!(body.has_infinite_mass());
        let body = BodyDesc::ball(Vec3::ZERO, 1.0).with_mass(4.0).into_body();
        assert!((body.inv_mass - 0.25).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "elasticity")]
    fn out_of_range_elasticity_is_rejected() {
        let mut scene = Scene::new();
        scene.add_sphere(BodyDesc::ball(Vec3::ZERO, 1.0).with_material(1.5, 0.5));
    }
}
