//! Error types for wave deformation.

use thiserror::Error;

/// Per-vertex failure. The vertex is left where it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeformError {
    /// Variant samples in UV space but the vertex has no UV.
    #[error("vertex has no UV coordinate")]
    MissingUv,

    /// Variant displaces along the normal but the vertex has none.
    #[error("vertex has no surface normal")]
    MissingNormal,

    /// Normal is zero-length or not finite.
    #[error("surface normal cannot be normalized")]
    DegenerateNormal,

    /// Position contains NaN or infinity.
    #[error("vertex position is not finite")]
    NonFinitePosition,

    /// UV contains NaN or infinity.
    #[error("vertex UV is not finite")]
    NonFiniteUv,
}

/// Malformed wave parameter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamError {
    /// Parameter is NaN or infinite.
    #[error("{name} is not finite: {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// Parameter is outside its attribute range.
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f32,
        /// Range minimum.
        min: f32,
        /// Range maximum.
        max: f32,
    },
}

/// Offset transform could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    /// Matrix has no inverse.
    #[error("offset matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant of the rejected matrix.
        determinant: f32,
    },
}

/// Top-level error for the preview tool.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid preview configuration: {0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
