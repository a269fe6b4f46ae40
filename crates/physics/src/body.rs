//! # Rigid Bodies
//!
//! Mutable simulation state for one rigid object, plus the coordinate
//! transforms and impulse operations the collision response is built from.

use crate::math::{integrate_orientation, normalize_or_identity, try_inverse, Mat3, Quat, Vec3};
use crate::shapes::Shape;
use crate::types::MAX_ANGULAR_SPEED;

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// World-space location of the body's local origin.
    pub position: Vec3,
    /// Local-to-world rotation; kept unit length.
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    /// `0.0` means infinite mass (terrain, walls).
    pub inv_mass: f32,
    /// Restitution coefficient in `[0, 1]`.
    pub elasticity: f32,
    /// Coulomb friction coefficient, `>= 0`.
    pub friction: f32,
    pub shape: Shape,
}

impl Body {
    /// A body at rest at `position` with identity orientation.
    #[must_use]
    pub fn new(position: Vec3, shape: Shape, inv_mass: f32) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            inv_mass,
            elasticity: 0.5,
            friction: 0.5,
            shape,
        }
    }

    /// Asserts the material and mass ranges a body must satisfy.
    ///
    /// # Panics
    /// Panics on negative or non-finite inverse mass, elasticity outside
    /// `[0, 1]`, negative friction, or a non-finite initial state.
    pub fn assert_valid(&self) {
        assert!(
            self.inv_mass.is_finite() && self.inv_mass >= 0.0,
            "inverse mass must be finite and non-negative, got {}",
            self.inv_mass
        );
        assert!(
            (0.0..=1.0).contains(&self.elasticity),
            "elasticity must lie in [0, 1], got {}",
            self.elasticity
        );
        assert!(
            self.friction.is_finite() && self.friction >= 0.0,
            "friction must be non-negative, got {}",
            self.friction
        );
        assert!(
            self.position.is_finite()
                && self.orientation.is_finite()
                && self.linear_velocity.is_finite()
                && self.angular_velocity.is_finite(),
            "body state must be finite"
        );
    }

    #[must_use]
    pub fn has_infinite_mass(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Mass in kilograms; `f32::INFINITY` for immovable bodies.
    #[must_use]
    pub fn mass(&self) -> f32 {
        if self.has_infinite_mass() {
            f32::INFINITY
        } else {
            self.inv_mass.recip()
        }
    }

    #[must_use]
    pub fn centre_of_mass_body(&self) -> Vec3 {
        self.shape.centre_of_mass()
    }

    #[must_use]
    pub fn centre_of_mass_world(&self) -> Vec3 {
        self.position + self.orientation * self.centre_of_mass_body()
    }

    /// Maps a world-space point into the body frame, relative to the centre
    /// of mass.
    #[must_use]
    pub fn world_to_body(&self, world_point: Vec3) -> Vec3 {
        let offset = world_point - self.centre_of_mass_world();
        self.orientation.conjugate() * offset
    }

    /// Inverse of [`Body::world_to_body`].
    #[must_use]
    pub fn body_to_world(&self, body_point: Vec3) -> Vec3 {
        self.centre_of_mass_world() + self.orientation * body_point
    }

    /// Zero for infinite-mass bodies, so they never pick up angular velocity.
    #[must_use]
    pub fn inv_inertia_tensor_body(&self) -> Mat3 {
        if self.has_infinite_mass() {
            return Mat3::ZERO;
        }
        try_inverse(self.shape.inertia_tensor(self.mass())).unwrap_or(Mat3::ZERO)
    }

    /// `R · I⁻¹ · Rᵀ` for the current orientation.
    #[must_use]
    pub fn inv_inertia_tensor_world(&self) -> Mat3 {
        rotate_tensor(self.orientation, self.inv_inertia_tensor_body())
    }

    pub fn apply_impulse_linear(&mut self, impulse: Vec3) {
        if self.has_infinite_mass() {
            return;
        }
        self.linear_velocity += impulse * self.inv_mass;
    }

    /// Applies an angular impulse and clamps the resulting spin to
    /// [`MAX_ANGULAR_SPEED`].
    pub fn apply_impulse_angular(&mut self, impulse: Vec3) {
        if self.has_infinite_mass() {
            return;
        }
        self.angular_velocity += self.inv_inertia_tensor_world() * impulse;

        let speed_sq = self.angular_velocity.length_squared();
        if speed_sq > MAX_ANGULAR_SPEED * MAX_ANGULAR_SPEED {
            self.angular_velocity = self.angular_velocity.normalize_or_zero() * MAX_ANGULAR_SPEED;
        }
    }

    /// Applies `impulse` at the world-space `impulse_point`.
    pub fn apply_impulse(&mut self, impulse_point: Vec3, impulse: Vec3) {
        if self.has_infinite_mass() {
            return;
        }
        self.apply_impulse_linear(impulse);

        let lever_arm = impulse_point - self.centre_of_mass_world();
        self.apply_impulse_angular(lever_arm.cross(impulse));
    }

    /// Advances position and orientation by `dt`, rotating about the centre
    /// of mass. Non-positive or non-finite `dt` leaves the body untouched.
    pub fn update(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.position += self.linear_velocity * dt;

        let com = self.centre_of_mass_world();
        let com_to_origin = self.position - com;

        let previous = self.orientation;
        self.orientation = integrate_orientation(previous, self.angular_velocity, dt);

        // rotation applied this sub-step, in world space
        let delta = normalize_or_identity(self.orientation * previous.conjugate());
        self.position = com + delta * com_to_origin;
    }

    /// Linear plus rotational kinetic energy; zero for infinite-mass bodies.
    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        if self.has_infinite_mass() {
            return 0.0;
        }
        let linear = 0.5 * self.mass() * self.linear_velocity.length_squared();
        let inertia_world = rotate_tensor(self.orientation, self.shape.inertia_tensor(self.mass()));
        let angular = 0.5 * self.angular_velocity.dot(inertia_world * self.angular_velocity);
        linear + angular
    }

    /// True when both linear and angular speed are below `threshold`.
    #[must_use]
    pub fn is_resting(&self, threshold: f32) -> bool {
        self.linear_velocity.length() < threshold && self.angular_velocity.length() < threshold
    }
}

/// Expresses a body-frame tensor in world space: `R · T · Rᵀ`.
fn rotate_tensor(orientation: Quat, tensor: Mat3) -> Mat3 {
    let rotation = Mat3::from_quat(orientation);
    rotation * tensor * rotation.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn ball(inv_mass: f32) -> Body {
        Body::new(Vec3::new(1.0, 2.0, 3.0), Shape::sphere(1.0), inv_mass)
    }

    #[test]
    fn world_body_round_trip() {
        let mut body = ball(1.0);
        body.orientation = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let local = Vec3::new(1.0, 0.0, 0.0);
        let world = body.body_to_world(local);
        assert!((world - Vec3::new(1.0, 3.0, 3.0)).length() < 1e-5);
        assert!((body.world_to_body(world) - local).length() < 1e-5);
    }

    #[test]
    fn rotated_tensor_permutes_principal_axes() {
        let tensor = Mat3::from_diagonal(Vec3::new(1.0, 2.0, 3.0));
        let quarter_turn_z = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let world = rotate_tensor(quarter_turn_z, tensor);
        // body x maps to world y and body y to world x
        assert!((world.x_axis.x - 2.0).abs() < 1e-5);
        assert!((world.y_axis.y - 1.0).abs() < 1e-5);
        assert!((world.z_axis.z - 3.0).abs() < 1e-5);
        assert!(world.x_axis.y.abs() < 1e-5 && world.y_axis.x.abs() < 1e-5);
    }

    #[test]
    fn world_inverse_inertia_follows_orientation() {
        let mut body = ball(0.5);
        body.orientation = Quat::from_axis_angle(Vec3::X, 1.1);
        // 0.4 * m * r² with m = 2, r = 1
        let expected = Mat3::from_diagonal(Vec3::splat(1.0 / 0.8));
        assert!(body.inv_inertia_tensor_world().abs_diff_eq(expected, 1e-5));
        let spin = body.inv_inertia_tensor_world() * Vec3::new(0.0, 0.8, 0.0);
        assert!(spin.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn infinite_mass_ignores_impulses() {
        let mut wall = ball(0.0);
        wall.apply_impulse(Vec3::new(0.0, 3.0, 3.0), Vec3::new(100.0, -4.0, 7.0));
        wall.apply_impulse_linear(Vec3::splat(5.0));
        wall.apply_impulse_angular(Vec3::splat(5.0));
        assert_eq!(wall.linear_velocity, Vec3::ZERO);
        assert_eq!(wall.angular_velocity, Vec3::ZERO);
        assert_eq!(wall.inv_inertia_tensor_world(), Mat3::ZERO);
    }

    #[test]
    fn off_centre_impulse_spins_body() {
        let mut body = ball(1.0);
        let point = body.centre_of_mass_world() + Vec3::new(0.0, 1.0, 0.0);
        body.apply_impulse(point, Vec3::new(1.0, 0.0, 0.0));
        assert!((body.linear_velocity.x - 1.0).abs() < 1e-6);
        // I = 0.4 for unit mass and radius, torque (0,1,0)x(1,0,0) = (0,0,-1)
        assert!((body.angular_velocity.z + 2.5).abs() < 1e-5);
    }

    #[test]
    fn angular_speed_is_clamped() {
        let mut body = ball(1.0);
        body.apply_impulse_angular(Vec3::new(0.0, 1.0e6, 0.0));
        assert!(body.angular_velocity.length() <= MAX_ANGULAR_SPEED + 1e-3);
    }

    #[test]
    fn update_moves_linearly_and_keeps_orientation_unit() {
        let mut body = ball(1.0);
        body.linear_velocity = Vec3::new(2.0, 0.0, 0.0);
        body.angular_velocity = Vec3::new(0.0, 0.0, 5.0);
        for _ in 0..100 {
            body.update(0.01);
        }
        assert!((body.position.x - 3.0).abs() < 1e-4);
        assert!((body.orientation.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn update_ignores_bad_dt() {
        let mut body = ball(1.0);
        body.linear_velocity = Vec3::X;
        let before = body.clone();
        body.update(0.0);
        body.update(-1.0);
        body.update(f32::NAN);
        assert_eq!(body, before);
    }
}
