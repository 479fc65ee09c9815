//! Octave tables and compositions for the three displacement variants.
//!
//! The coefficients are tuned by eye; they are kept exactly as tuned, since
//! renormalizing any of them changes the rendered surface.

use glam::Vec2;

use super::octave::Octave;
use crate::noise::{NoiseField, SimplexField};
use crate::params::{DirectionalWaveParams, PositionWaveParams, UvWaveParams, WaveParams};

/// UV coordinates are multiplied by this before sampling
pub const UV_WORKING_SCALE: f32 = 100.0;

/// Constant noise phase of every UV-space octave
const UV_PHASE: f32 = 10.0;

/// Frequency of the large swell mask (fixed; not the large wave amplitude)
const SWELL_FREQUENCY: f32 = 0.01;

/// UV in [0, 1] to working units
pub fn uv_to_working(uv: Vec2) -> Vec2 {
    uv * UV_WORKING_SCALE
}

/// Variant A octaves (object-space x, z)
pub fn position_octaves(p: &PositionWaveParams) -> [Octave; 3] {
    let t = p.time_s;
    let f1 = p.frequency1 / 10.0;
    [
        Octave::new(p.amplitude1, Vec2::new(f1 / 1.5, f1), t),
        Octave::new(0.6, Vec2::new(0.2 / 5.0, 0.2 / 2.0), t),
        Octave::new(0.2, Vec2::new(0.3, 0.3), t),
    ]
}

/// Variant B octaves (working-unit u, v)
pub fn uv_octaves(p: &UvWaveParams) -> [Octave; 3] {
    let f1 = p.frequency1 / 10.0;
    [
        // Time scrolls the first octave along v instead of through the phase
        Octave::new(p.amplitude1, Vec2::new(f1 / 1.5, f1), UV_PHASE)
            .drifting(Vec2::new(0.0, p.time_s)),
        Octave::new(0.6, Vec2::new(0.2 / 5.0, 0.2 / 2.0), UV_PHASE),
        Octave::new(0.2, Vec2::new(0.3, 0.3), UV_PHASE),
    ]
}

/// Variant C octaves: the swell mask followed by five wave octaves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalOctaves {
    pub swell: Octave,
    pub octaves: [Octave; 5],
}

pub fn directional_octaves(p: &DirectionalWaveParams) -> DirectionalOctaves {
    let t = p.time_s;
    let dir = p.direction();
    let f1 = p.frequency1 / 10.0;
    let f2 = p.frequency2 / 10.0;

    let swell = Octave::new(
        1.0,
        Vec2::new(SWELL_FREQUENCY * dir.x, SWELL_FREQUENCY * dir.y * 2.0),
        t * 0.01,
    )
    .drifting(dir * (3.0 * t));

    let fast = dir * (0.7 * t);
    let slow = dir * (0.5 * t);

    let octaves = [
        Octave::new(p.amplitude1, Vec2::new(f1 * 0.4, f1 * 0.6), 0.05 * t).drifting(fast),
        Octave::new(p.amplitude2, Vec2::new(f2 * 0.35, f2 * 0.65), 0.005 * t).drifting(fast),
        Octave::new(p.amplitude1 / 1.5, Vec2::new(f1 * 0.4, f1 * 0.6), 30.0).drifting(slow),
        Octave::new(p.amplitude2 / 1.5, Vec2::new(f2 * 0.4, f2 * 0.6), 50.0).drifting(slow),
        Octave::new(
            p.amplitude2 / 2.0,
            Vec2::new(p.frequency2 * 0.15, p.frequency2 * 0.85),
            0.001 * t,
        )
        .drifting(slow),
    ];

    DirectionalOctaves { swell, octaves }
}

/// Folds octaves of a noise field into a scalar displacement.
///
/// Stateless apart from the (immutable) noise field, so one composer can be
/// shared by every thread evaluating a mesh.
#[derive(Debug, Clone, Default)]
pub struct WaveComposer<N = SimplexField> {
    noise: N,
}

impl WaveComposer<SimplexField> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: NoiseField> WaveComposer<N> {
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Displacement at a working-space sample point
    ///
    /// `sample` is local (x, z) for the position variant and UV in working
    /// units for the others.
    pub fn displacement(&self, sample: Vec2, params: &WaveParams) -> f32 {
        match params {
            WaveParams::Position(p) => self.position_displacement(sample, p),
            WaveParams::Uv(p) => self.uv_displacement(sample, p),
            WaveParams::Directional(p) => self.directional_displacement(sample, p),
        }
    }

    /// Variant A: sum of three ridged octaves, in [0, amplitude1 + 0.8]
    pub fn position_displacement(&self, xz: Vec2, p: &PositionWaveParams) -> f32 {
        position_octaves(p)
            .iter()
            .map(|o| o.ridged(&self.noise, xz))
            .sum()
    }

    /// Variant B: sum of three ridged octaves over UV
    pub fn uv_displacement(&self, uv: Vec2, p: &UvWaveParams) -> f32 {
        uv_octaves(p).iter().map(|o| o.ridged(&self.noise, uv)).sum()
    }

    /// Variant C: swell-masked blend of five octaves
    pub fn directional_displacement(&self, uv: Vec2, p: &DirectionalWaveParams) -> f32 {
        let DirectionalOctaves { swell, octaves: o } = directional_octaves(p);
        let noise = &self.noise;

        let swell = swell.mask(noise, uv);
        let o1 = o[0].ridged(noise, uv);
        let o2 = o[1].ridged(noise, uv);
        let o3 = o[2].ridged(noise, uv);
        let o4 = o[3].raw(noise, uv);
        let o5 = o[4].raw(noise, uv);

        p.large_wave_amplitude * swell
            + 7.0 * swell * o1
            + o2
            + o3 * o3
            + o4
            + (swell - 1.0).abs() * o5
    }

    /// The swell mask alone, in [0, 1]
    pub fn swell(&self, uv: Vec2, p: &DirectionalWaveParams) -> f32 {
        directional_octaves(p).swell.mask(&self.noise, uv)
    }
}
