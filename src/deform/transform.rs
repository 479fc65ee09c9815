//! Offset transform between object space and the wave's local frame.

use glam::{Mat4, Vec3};

use crate::error::TransformError;

/// Determinants below this are treated as singular
const SINGULAR_EPSILON: f32 = 1e-8;

/// Per-element tolerance when checking a host-supplied inverse
const PAIR_EPSILON: f32 = 1e-3;

/// A 4x4 offset matrix paired with its inverse.
///
/// Points are brought into the local frame with the inverse, displaced along
/// local +Y, and taken back out with the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTransform {
    matrix: Mat4,
    inverse: Mat4,
}

impl Default for OffsetTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl OffsetTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }

    /// Build from a matrix, computing its inverse
    pub fn new(matrix: Mat4) -> Result<Self, TransformError> {
        let determinant = matrix.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
            return Err(TransformError::Singular { determinant });
        }
        Ok(Self {
            matrix,
            inverse: matrix.inverse(),
        })
    }

    /// Use a matrix/inverse pair supplied by the host as-is
    ///
    /// The caller guarantees `matrix * inverse` is the identity; debug builds
    /// assert it.
    pub fn from_pair(matrix: Mat4, inverse: Mat4) -> Self {
        debug_assert!(
            (matrix * inverse).abs_diff_eq(Mat4::IDENTITY, PAIR_EPSILON),
            "offset inverse does not match its matrix"
        );
        Self { matrix, inverse }
    }

    /// Local frame to object space
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Object space to local frame
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    /// Object space to the local wave frame
    #[inline]
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.inverse.transform_point3(point)
    }

    /// Local wave frame back to object space
    #[inline]
    pub fn to_world(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }
}
