//! # Math
//!
//! Vector, quaternion and matrix types come from `glam`. This module adds the
//! few operations the step needs that glam leaves to the caller: degenerate
//! input handling and the half-step orientation update.

pub use glam::{Mat3, Quat, Vec3};

/// Tolerance used for near-zero checks (normalisation, matrix inversion).
pub const EPSILON: f32 = 1e-6;

/// Unit-length copy of `q`, or identity when `q` is ~0 or not finite.
#[must_use]
pub fn normalize_or_identity(q: Quat) -> Quat {
    let len = q.length();
    if len <= EPSILON || !len.is_finite() {
        return Quat::IDENTITY;
    }
    q * len.recip()
}

/// Inverse of `m`, or `None` when it is singular or not finite.
#[must_use]
pub fn try_inverse(m: Mat3) -> Option<Mat3> {
    let det = m.determinant();
    if !det.is_finite() || det.abs() <= EPSILON * EPSILON {
        return None;
    }
    Some(m.inverse())
}

/// Advances `orientation` by `angular_velocity` over `dt` with
/// `q += 0.5·dt·(ω, 0)·q`, then renormalises.
#[must_use]
pub fn integrate_orientation(orientation: Quat, angular_velocity: Vec3, dt: f32) -> Quat {
    let omega = Quat::from_xyzw(angular_velocity.x, angular_velocity.y, angular_velocity.z, 0.0);
    let dq = omega * orientation;
    normalize_or_identity(orientation + dq * (0.5 * dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn integrate_keeps_unit_norm() {
        let mut q = Quat::IDENTITY;
        for _ in 0..1000 {
            q = integrate_orientation(q, Vec3::new(3.0, -2.0, 5.0), 0.016);
        }
        assert!((q.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn integrate_small_step_matches_axis_angle() {
        let q = integrate_orientation(Quat::IDENTITY, Vec3::Z, 0.001);
        let expected = Quat::from_axis_angle(Vec3::Z, 0.001);
        assert!((q.z - expected.z).abs() < 1e-6);
        assert!((q.w - expected.w).abs() < 1e-6);
    }

    #[test]
    fn integrate_with_zero_spin_is_unchanged() {
        let q = Quat::from_axis_angle(Vec3::X, 0.3);
        let next = integrate_orientation(q, Vec3::ZERO, 0.5);
        assert!(next.abs_diff_eq(q, 1e-6));
    }

    #[test]
    fn degenerate_quat_normalizes_to_identity() {
        assert_eq!(normalize_or_identity(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)), Quat::IDENTITY);
        assert_eq!(normalize_or_identity(Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0)), Quat::IDENTITY);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(try_inverse(Mat3::ZERO).is_none());
        let rank_two = Mat3::from_cols(Vec3::X, Vec3::Y, Vec3::X + Vec3::Y);
        assert!(try_inverse(rank_two).is_none());
    }

    #[test]
    fn inverse_of_diagonal_tensor() {
        let m = Mat3::from_diagonal(Vec3::new(2.0, 4.0, 8.0));
        let inv = try_inverse(m).unwrap();
        assert!((m * inv).abs_diff_eq(Mat3::IDENTITY, 1e-6));
        assert!((inv.z_axis.z - 0.125).abs() < 1e-7);
    }

    #[test]
    fn rotation_matrix_matches_quaternion_rotation() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let v = Vec3::new(1.0, 0.0, 0.0);
        assert!((Mat3::from_quat(q) * v).abs_diff_eq(q * v, 1e-6));
        assert!((q * v).abs_diff_eq(Vec3::Y, 1e-6));
    }
}
