//! Parameter definitions with documented semantics and ranges.
//!
//! All tunable numbers live here:
//! - Wave parameters per displacement variant, with host attribute ranges
//! - Preview surface and output settings

mod preview;
mod wave;

// Re-export all types
pub use preview::{GridConfig, PreviewConfig};
pub use wave::{
    AttributeRange, DirectionalWaveParams, PositionWaveParams, UvWaveParams, WaveParams,
    DIRECTION_RANGE, ENVELOPE_RANGE, LONG_TIME_RANGE, SHORT_AMPLITUDE_RANGE, SHORT_TIME_RANGE,
    WIDE_RANGE,
};
