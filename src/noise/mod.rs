//! Deterministic 3D noise fields.
//!
//! The displacement kernel only relies on three properties of its noise:
//! determinism, continuity, and an output range of [-1, 1]. [`SimplexField`]
//! is the seedless default whose tables are fixed at compile time;
//! [`OpenSimplexField`] is a seeded alternative with the same contract.

mod open_simplex;
mod simplex;

pub use open_simplex::OpenSimplexField;
pub use simplex::{noise3, SimplexField};

/// Continuous scalar field over 3D space with values in [-1, 1].
///
/// Implementations must be pure: the same input always yields the same output,
/// regardless of call order or thread.
pub trait NoiseField: Send + Sync {
    /// Sample the field. Returns value in range [-1, 1].
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;

    /// Sample the field rescaled into [lo, hi].
    #[inline]
    fn sample_scaled(&self, lo: f32, hi: f32, x: f32, y: f32, z: f32) -> f32 {
        rescale(self.sample(x, y, z), lo, hi)
    }
}

/// Map a value from [-1, 1] into [lo, hi].
///
/// `lo > hi` is not rejected; the range is simply mirrored.
#[inline]
pub fn rescale(value: f32, lo: f32, hi: f32) -> f32 {
    value * (hi - lo) * 0.5 + (hi + lo) * 0.5
}

/// [`noise3`] rescaled into [lo, hi].
#[inline]
pub fn scaled_noise3(lo: f32, hi: f32, x: f32, y: f32, z: f32) -> f32 {
    rescale(noise3(x, y, z), lo, hi)
}
