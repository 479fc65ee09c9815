//! A single noise octave and the ways it is folded into a height.

use glam::Vec2;

use crate::noise::NoiseField;

/// One noise evaluation at a fixed amplitude, frequency, drift and phase.
///
/// The sample point is shifted by `drift` first, then scaled per axis by
/// `frequency`. `phase` is the third noise coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    pub amplitude: f32,
    pub frequency: Vec2,
    pub drift: Vec2,
    pub phase: f32,
}

impl Octave {
    pub fn new(amplitude: f32, frequency: Vec2, phase: f32) -> Self {
        Self {
            amplitude,
            frequency,
            drift: Vec2::ZERO,
            phase,
        }
    }

    pub fn drifting(mut self, drift: Vec2) -> Self {
        self.drift = drift;
        self
    }

    #[inline]
    fn coords(&self, p: Vec2) -> Vec2 {
        (p + self.drift) * self.frequency
    }

    /// Noise scaled into [-amplitude, amplitude].
    #[inline]
    pub fn raw<N: NoiseField + ?Sized>(&self, noise: &N, p: Vec2) -> f32 {
        let q = self.coords(p);
        noise.sample_scaled(-self.amplitude, self.amplitude, q.x, q.y, self.phase)
    }

    /// `-(|raw| - amplitude)`, in [0, amplitude].
    ///
    /// Peaks where the noise crosses zero and drops to 0 at its extremes,
    /// which gives sharp crests instead of rounded hills.
    #[inline]
    pub fn ridged<N: NoiseField + ?Sized>(&self, noise: &N, p: Vec2) -> f32 {
        -(self.raw(noise, p).abs() - self.amplitude)
    }

    /// Noise scaled into [0, 1]; amplitude is ignored.
    #[inline]
    pub fn mask<N: NoiseField + ?Sized>(&self, noise: &N, p: Vec2) -> f32 {
        let q = self.coords(p);
        noise.sample_scaled(0.0, 1.0, q.x, q.y, self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{scaled_noise3, SimplexField};

    #[test]
    fn test_ridged_bounds() {
        let noise = SimplexField;
        for amplitude in [0.0, 0.2, 0.6, 1.0, 7.5] {
            let octave = Octave::new(amplitude, Vec2::new(0.13, 0.29), 2.0);
            for i in 0..40 {
                for j in 0..40 {
                    let p = Vec2::new(i as f32 * 1.7, j as f32 * -2.3);
                    let v = octave.ridged(&noise, p);
                    assert!(
                        v >= 0.0 && v <= amplitude,
                        "ridged octave {} outside [0, {}]",
                        v,
                        amplitude
                    );
                }
            }
        }
    }

    #[test]
    fn test_ridged_peaks_at_zero_crossing() {
        // Noise is exactly zero on lattice points
        let octave = Octave::new(0.6, Vec2::ONE, 0.0);
        assert_eq!(octave.ridged(&SimplexField, Vec2::ZERO), 0.6);
    }

    #[test]
    fn test_mask_bounds() {
        let octave = Octave::new(123.0, Vec2::new(0.07, 0.11), 0.5);
        for i in 0..100 {
            let v = octave.mask(&SimplexField, Vec2::new(i as f32 * 3.1, i as f32 * 0.9));
            assert!((0.0..=1.0).contains(&v), "mask {} outside [0, 1]", v);
        }
    }

    #[test]
    fn test_drift_applied_before_frequency() {
        let octave =
            Octave::new(1.0, Vec2::new(0.5, 0.25), 3.0).drifting(Vec2::new(2.0, -4.0));
        let p = Vec2::new(1.0, 8.0);
        let expected = scaled_noise3(-1.0, 1.0, (1.0 + 2.0) * 0.5, (8.0 - 4.0) * 0.25, 3.0);
        assert_eq!(octave.raw(&SimplexField, p), expected);
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let octave = Octave::new(0.0, Vec2::new(3.0, 3.0), 1.0);
        for i in 0..20 {
            let p = Vec2::splat(i as f32 * 0.7);
            assert_eq!(octave.raw(&SimplexField, p), 0.0);
            assert_eq!(octave.ridged(&SimplexField, p), 0.0);
        }
    }
}
