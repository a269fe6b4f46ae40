//! Transform utilities for bodies
//!
//! Per-body snapshots laid out for upload to a renderer, plus the 4x4
//! column-major model matrices built from them.

use glam::Mat4;

use crate::body::Body;
use crate::math::{Quat, Vec3};

/// Orientation, position and render scale of one body.
///
/// The quaternion leads so the struct has no padding whatever alignment glam
/// picks for `Quat`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyTransform {
    pub orientation: Quat,
    pub position: Vec3,
    /// Bounding radius of the body's shape.
    pub radius: f32,
}

impl From<&Body> for BodyTransform {
    fn from(body: &Body) -> Self {
        Self {
            orientation: body.orientation,
            position: body.position,
            radius: body.shape.bounding_radius(),
        }
    }
}

/// Model matrix for a transform snapshot, scaled so a unit mesh matches the
/// body's bounding radius.
#[must_use]
pub fn to_transform_matrix(transform: &BodyTransform) -> [[f32; 4]; 4] {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(transform.radius),
        transform.orientation,
        transform.position,
    )
    .to_cols_array_2d()
}
