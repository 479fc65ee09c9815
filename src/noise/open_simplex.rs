//! Seeded OpenSimplex backend.
//!
//! Same contract as the fixed simplex field, but the permutation table is
//! derived from a seed, so previews can explore alternative fields.

use ::noise::{NoiseFn, OpenSimplex};

use super::NoiseField;

/// Noise field backed by `noise::OpenSimplex`
pub struct OpenSimplexField {
    simplex: OpenSimplex,
    seed: u32,
}

impl OpenSimplexField {
    /// Create new noise field with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
            seed,
        }
    }

    /// Seed the permutation table was built from
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for OpenSimplexField {
    /// Sample 3D OpenSimplex noise at position
    ///
    /// Returns value in range [-1, 1]
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        (self.simplex.get([x as f64, y as f64, z as f64]) as f32).clamp(-1.0, 1.0)
    }
}
