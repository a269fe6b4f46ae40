//! # Collision Shapes
//!
//! Geometry owned by a [`Body`](crate::Body). A shape only stores geometry;
//! mass comes from the owning body and is passed in when the inertia tensor
//! is requested.

use crate::math::{Mat3, Vec3};

/// Discriminant of a [`Shape`], used to pick a narrow-phase routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Sphere,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
}

impl Sphere {
    /// # Panics
    /// Panics if `radius` is not strictly positive and finite.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be positive and finite, got {radius}"
        );
        Self { radius }
    }

    /// Solid sphere: `(2/5) m r² · I`.
    #[must_use]
    pub fn inertia_tensor(&self, mass: f32) -> Mat3 {
        let i = 0.4 * mass * self.radius * self.radius;
        Mat3::from_diagonal(Vec3::splat(i))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    #[must_use]
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere(Sphere::new(radius))
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Sphere(_) => ShapeType::Sphere,
        }
    }

    /// Centre of mass in the body-local frame.
    #[must_use]
    pub fn centre_of_mass(&self) -> Vec3 {
        match self {
            Self::Sphere(_) => Vec3::ZERO,
        }
    }

    /// Inertia tensor in body space for a body of the given `mass`.
    #[must_use]
    pub fn inertia_tensor(&self, mass: f32) -> Mat3 {
        match self {
            Self::Sphere(sphere) => sphere.inertia_tensor(mass),
        }
    }

    /// Radius of a sphere around the centre of mass enclosing the shape.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Self::Sphere(sphere) => sphere.radius,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_inertia_scales_with_mass() {
        let shape = Shape::sphere(1.0);
        let tensor = shape.inertia_tensor(5.0);
        assert!(tensor.abs_diff_eq(Mat3::from_diagonal(Vec3::splat(2.0)), 1e-6));
    }

    #[test]
    #[should_panic(expected = "sphere radius")]
    fn zero_radius_is_a_contract_violation() {
        let _ = Sphere::new(0.0);
    }
}
