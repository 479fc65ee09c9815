//! Layered noise composition into a time-animated displacement field.

mod composer;
mod octave;

pub use composer::{
    directional_octaves, position_octaves, uv_octaves, uv_to_working, DirectionalOctaves,
    WaveComposer, UV_WORKING_SCALE,
};
pub use octave::Octave;
