use crate::error::PhysicsError;
use crate::math::Vec3;

/// Index of a body inside a [`Scene`](crate::Scene).
///
/// Handles are stable until the scene is cleared or reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Upper bound on angular speed (rad/s) after an angular impulse.
pub const MAX_ANGULAR_SPEED: f32 = 30.0;

/// Step configuration for a [`Scene`](crate::Scene).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysParams {
    /// Gravitational acceleration, applied as an impulse each step.
    pub gravity: Vec3,
    /// Gap left between bodies when separating an already penetrating pair.
    pub positional_slop: f32,
}

impl PhysParams {
    /// Checks that every field is usable by the step loop.
    ///
    /// # Errors
    /// Returns [`PhysicsError::InvalidParams`] naming the offending field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParams("gravity must be finite"));
        }
        if !(self.positional_slop.is_finite() && self.positional_slop >= 0.0) {
            return Err(PhysicsError::InvalidParams(
                "positional_slop must be non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for PhysParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, 0.0, -10.0),
            positional_slop: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(PhysParams::default().validate().is_ok());
    }

    #[test]
    fn non_finite_gravity_is_rejected() {
        let params = PhysParams {
            gravity: Vec3::new(0.0, f32::NAN, 0.0),
            ..PhysParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(PhysicsError::InvalidParams(_))
        ));
    }
}
