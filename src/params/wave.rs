//! Wave parameters for the three displacement variants.
//!
//! Values are plain numbers read fresh for every evaluation. Defaults and
//! attribute ranges are the ones the deformer nodes expose to artists.

use glam::Vec2;

use crate::error::ParamError;

/// Hard min/max of a numeric attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRange {
    pub min: f32,
    pub max: f32,
}

impl AttributeRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into range. NaN falls back to the minimum.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    fn check(&self, name: &'static str, value: f32) -> Result<(), ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NonFinite { name, value });
        }
        if !self.contains(value) {
            return Err(ParamError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Time range of the three-octave nodes (seconds)
pub const SHORT_TIME_RANGE: AttributeRange = AttributeRange::new(0.0, 10.0);
/// Time range of the directional node (seconds)
pub const LONG_TIME_RANGE: AttributeRange = AttributeRange::new(0.0, 1000.0);
/// Amplitude range of the three-octave nodes
pub const SHORT_AMPLITUDE_RANGE: AttributeRange = AttributeRange::new(0.0, 10.0);
/// Amplitude/frequency range shared by most attributes
pub const WIDE_RANGE: AttributeRange = AttributeRange::new(0.0, 100.0);
/// Wave heading (degrees)
pub const DIRECTION_RANGE: AttributeRange = AttributeRange::new(0.0, 360.0);
/// Deformer envelope (blend factor)
pub const ENVELOPE_RANGE: AttributeRange = AttributeRange::new(0.0, 1.0);

/// Variant A: position-space ridged octaves
///
/// Only the first octave is artist-controlled; octaves 2 and 3 are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionWaveParams {
    /// Animation time (seconds), fed straight into the noise phase
    pub time_s: f32,

    /// First octave peak height (local units)
    pub amplitude1: f32,

    /// First octave frequency, divided by 10 before use
    pub frequency1: f32,
}

impl Default for PositionWaveParams {
    fn default() -> Self {
        Self {
            time_s: 0.0,
            amplitude1: 0.0,
            frequency1: 0.0,
        }
    }
}

impl PositionWaveParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        SHORT_TIME_RANGE.check("time", self.time_s)?;
        SHORT_AMPLITUDE_RANGE.check("amplitude1", self.amplitude1)?;
        WIDE_RANGE.check("frequency1", self.frequency1)?;
        Ok(())
    }

    pub fn clamped(&self) -> Self {
        Self {
            time_s: SHORT_TIME_RANGE.clamp(self.time_s),
            amplitude1: SHORT_AMPLITUDE_RANGE.clamp(self.amplitude1),
            frequency1: WIDE_RANGE.clamp(self.frequency1),
        }
    }
}

/// Variant B: UV-space ridged octaves with the first octave scrolling in v
#[derive(Debug, Clone, PartialEq)]
pub struct UvWaveParams {
    /// Animation time (seconds), added to the v coordinate of octave 1
    pub time_s: f32,

    /// First octave peak height (along the normal)
    pub amplitude1: f32,

    /// First octave frequency, divided by 10 before use
    pub frequency1: f32,
}

impl Default for UvWaveParams {
    fn default() -> Self {
        Self {
            time_s: 0.0,
            amplitude1: 0.0,
            frequency1: 0.0,
        }
    }
}

impl UvWaveParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        SHORT_TIME_RANGE.check("time", self.time_s)?;
        SHORT_AMPLITUDE_RANGE.check("amplitude1", self.amplitude1)?;
        WIDE_RANGE.check("frequency1", self.frequency1)?;
        Ok(())
    }

    pub fn clamped(&self) -> Self {
        Self {
            time_s: SHORT_TIME_RANGE.clamp(self.time_s),
            amplitude1: SHORT_AMPLITUDE_RANGE.clamp(self.amplitude1),
            frequency1: WIDE_RANGE.clamp(self.frequency1),
        }
    }
}

/// Variant C: five octaves masked by a drifting large-scale swell
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalWaveParams {
    /// Animation time (seconds)
    pub time_s: f32,

    /// Heading the waves drift toward (degrees, 0 = +u)
    pub direction_deg: f32,

    /// Height of the large swell (multiplies the mask octave)
    pub large_wave_amplitude: f32,

    /// Ridged chop amplitude (octaves 1 and 3)
    pub amplitude1: f32,

    /// Ridged chop frequency, divided by 10 before use
    pub frequency1: f32,

    /// Secondary wave amplitude (octaves 2, 4 and 5)
    pub amplitude2: f32,

    /// Secondary wave frequency; octaves 2 and 4 divide it by 10, octave 5 does not
    pub frequency2: f32,
}

impl Default for DirectionalWaveParams {
    fn default() -> Self {
        Self {
            time_s: 0.0,
            direction_deg: 45.0,
            large_wave_amplitude: 3.0,
            amplitude1: 0.5,
            frequency1: 0.5,
            amplitude2: 1.3,
            frequency2: 0.7,
        }
    }
}

impl DirectionalWaveParams {
    /// Unit drift vector (cos θ, sin θ)
    pub fn direction(&self) -> Vec2 {
        let (sin, cos) = self.direction_deg.to_radians().sin_cos();
        Vec2::new(cos, sin)
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        LONG_TIME_RANGE.check("time", self.time_s)?;
        DIRECTION_RANGE.check("direction", self.direction_deg)?;
        WIDE_RANGE.check("largeWaveAmplitude", self.large_wave_amplitude)?;
        WIDE_RANGE.check("amplitude1", self.amplitude1)?;
        WIDE_RANGE.check("frequency1", self.frequency1)?;
        WIDE_RANGE.check("amplitude2", self.amplitude2)?;
        WIDE_RANGE.check("frequency2", self.frequency2)?;
        Ok(())
    }

    pub fn clamped(&self) -> Self {
        Self {
            time_s: LONG_TIME_RANGE.clamp(self.time_s),
            direction_deg: DIRECTION_RANGE.clamp(self.direction_deg),
            large_wave_amplitude: WIDE_RANGE.clamp(self.large_wave_amplitude),
            amplitude1: WIDE_RANGE.clamp(self.amplitude1),
            frequency1: WIDE_RANGE.clamp(self.frequency1),
            amplitude2: WIDE_RANGE.clamp(self.amplitude2),
            frequency2: WIDE_RANGE.clamp(self.frequency2),
        }
    }
}

/// Parameters for one evaluation of any variant
#[derive(Debug, Clone, PartialEq)]
pub enum WaveParams {
    Position(PositionWaveParams),
    Uv(UvWaveParams),
    Directional(DirectionalWaveParams),
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams::Directional(DirectionalWaveParams::default())
    }
}

impl WaveParams {
    pub fn time_s(&self) -> f32 {
        match self {
            WaveParams::Position(p) => p.time_s,
            WaveParams::Uv(p) => p.time_s,
            WaveParams::Directional(p) => p.time_s,
        }
    }

    /// Same parameters at another point in time
    pub fn with_time(&self, time_s: f32) -> Self {
        let mut params = self.clone();
        match &mut params {
            WaveParams::Position(p) => p.time_s = time_s,
            WaveParams::Uv(p) => p.time_s = time_s,
            WaveParams::Directional(p) => p.time_s = time_s,
        }
        params
    }

    /// Whether per-vertex UVs and normals are needed
    pub fn samples_uv(&self) -> bool {
        !matches!(self, WaveParams::Position(_))
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        match self {
            WaveParams::Position(p) => p.validate(),
            WaveParams::Uv(p) => p.validate(),
            WaveParams::Directional(p) => p.validate(),
        }
    }

    pub fn clamped(&self) -> Self {
        match self {
            WaveParams::Position(p) => WaveParams::Position(p.clamped()),
            WaveParams::Uv(p) => WaveParams::Uv(p.clamped()),
            WaveParams::Directional(p) => WaveParams::Directional(p.clamped()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WaveParams::Position(_) => "position",
            WaveParams::Uv(_) => "uv",
            WaveParams::Directional(_) => "directional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PositionWaveParams::default().validate().is_ok());
        assert!(UvWaveParams::default().validate().is_ok());
        assert!(DirectionalWaveParams::default().validate().is_ok());
    }

    #[test]
    fn test_direction_unit_vector() {
        let mut p = DirectionalWaveParams::default();
        let d = p.direction();
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - d.y).abs() < 1e-6, "45 degrees should be diagonal");

        p.direction_deg = 90.0;
        let d = p.direction();
        assert!(d.x.abs() < 1e-6);
        assert!((d.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let p = PositionWaveParams {
            frequency1: -1.0,
            ..Default::default()
        };
        assert_eq!(
            p.validate(),
            Err(ParamError::OutOfRange {
                name: "frequency1",
                value: -1.0,
                min: 0.0,
                max: 100.0,
            })
        );
    }

    #[test]
    fn test_nan_rejected_and_clamped_to_min() {
        let p = UvWaveParams {
            amplitude1: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ParamError::NonFinite {
                name: "amplitude1",
                ..
            })
        ));
        assert_eq!(p.clamped().amplitude1, 0.0);
    }

    #[test]
    fn test_clamped_is_valid() {
        let p = DirectionalWaveParams {
            time_s: 5000.0,
            direction_deg: -30.0,
            large_wave_amplitude: f32::INFINITY,
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let c = p.clamped();
        assert!(c.validate().is_ok());
        assert_eq!(c.time_s, 1000.0);
        assert_eq!(c.direction_deg, 0.0);
        assert_eq!(c.large_wave_amplitude, 100.0);
    }

    #[test]
    fn test_with_time_only_changes_time() {
        let params = WaveParams::Directional(DirectionalWaveParams::default());
        let later = params.with_time(12.5);
        assert_eq!(later.time_s(), 12.5);
        match later {
            WaveParams::Directional(p) => {
                assert_eq!(p.amplitude2, 1.3);
                assert_eq!(p.direction_deg, 45.0);
            }
            other => panic!("variant changed: {:?}", other),
        }
    }

    #[test]
    fn test_samples_uv() {
        assert!(!WaveParams::Position(PositionWaveParams::default()).samples_uv());
        assert!(WaveParams::Uv(UvWaveParams::default()).samples_uv());
        assert!(WaveParams::default().samples_uv());
    }
}
