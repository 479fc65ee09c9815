//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::warn;

use crate::params::{
    DirectionalWaveParams, GridConfig, PositionWaveParams, PreviewConfig, UvWaveParams,
    WaveParams,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavedeform")]
#[command(about = "Render procedural water displacement to heightmaps", long_about = None)]
pub struct Args {
    /// Displacement variant: position, uv, directional (default)
    #[arg(long, value_name = "VARIANT", default_value = "directional")]
    pub variant: String,

    /// Wave time of the first frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// First octave amplitude (variant default if omitted)
    #[arg(long)]
    pub amplitude1: Option<f32>,

    /// First octave frequency (variant default if omitted)
    #[arg(long)]
    pub frequency1: Option<f32>,

    /// Second octave amplitude (directional only)
    #[arg(long)]
    pub amplitude2: Option<f32>,

    /// Second octave frequency (directional only)
    #[arg(long)]
    pub frequency2: Option<f32>,

    /// Wave heading in degrees (directional only)
    #[arg(long, value_name = "DEGREES")]
    pub direction: Option<f32>,

    /// Large swell height (directional only)
    #[arg(long)]
    pub large_wave_amplitude: Option<f32>,

    /// Deformation blend factor in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub envelope: f32,

    /// Use seeded OpenSimplex noise instead of the fixed simplex field
    #[arg(long)]
    pub seed: Option<u32>,

    /// Grid quads per side
    #[arg(long, default_value_t = 256)]
    pub grid_size: usize,

    /// Spacing between grid vertices (object units)
    #[arg(long, default_value_t = 0.4)]
    pub spacing: f32,

    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Frame rate used to advance wave time
    #[arg(long, default_value_t = 24.0)]
    pub fps: f32,

    /// Height mapped to black (requires --max-height)
    #[arg(long, requires = "max_height", allow_negative_numbers = true)]
    pub min_height: Option<f32>,

    /// Height mapped to white (requires --min-height)
    #[arg(long, requires = "min_height", allow_negative_numbers = true)]
    pub max_height: Option<f32>,

    /// Output PNG path
    #[arg(long, short, value_name = "PATH", default_value = "displacement.png")]
    pub output: PathBuf,

    /// Also write the raw displaced vertex buffer of the last frame
    #[arg(long, value_name = "PATH")]
    pub dump_vertices: Option<PathBuf>,
}

impl Args {
    /// Parse wave variant and parameters from command-line arguments
    pub fn wave_params(&self) -> WaveParams {
        match self.variant.to_lowercase().as_str() {
            "position" | "a" => WaveParams::Position(self.position_params()),
            "uv" | "b" => WaveParams::Uv(self.uv_params()),
            "directional" | "c" => WaveParams::Directional(self.directional_params()),
            other => {
                warn!("Unknown variant '{}', using directional", other);
                WaveParams::Directional(self.directional_params())
            }
        }
    }

    fn position_params(&self) -> PositionWaveParams {
        let defaults = PositionWaveParams::default();
        PositionWaveParams {
            time_s: self.time,
            amplitude1: self.amplitude1.unwrap_or(defaults.amplitude1),
            frequency1: self.frequency1.unwrap_or(defaults.frequency1),
        }
    }

    fn uv_params(&self) -> UvWaveParams {
        let defaults = UvWaveParams::default();
        UvWaveParams {
            time_s: self.time,
            amplitude1: self.amplitude1.unwrap_or(defaults.amplitude1),
            frequency1: self.frequency1.unwrap_or(defaults.frequency1),
        }
    }

    fn directional_params(&self) -> DirectionalWaveParams {
        let defaults = DirectionalWaveParams::default();
        DirectionalWaveParams {
            time_s: self.time,
            direction_deg: self.direction.unwrap_or(defaults.direction_deg),
            large_wave_amplitude: self
                .large_wave_amplitude
                .unwrap_or(defaults.large_wave_amplitude),
            amplitude1: self.amplitude1.unwrap_or(defaults.amplitude1),
            frequency1: self.frequency1.unwrap_or(defaults.frequency1),
            amplitude2: self.amplitude2.unwrap_or(defaults.amplitude2),
            frequency2: self.frequency2.unwrap_or(defaults.frequency2),
        }
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            grid_size: self.grid_size,
            grid_spacing: self.spacing,
        }
    }

    pub fn preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            output: self.output.clone(),
            frames: self.frames,
            fps: self.fps,
            start_time_s: self.time,
            height_range: self.min_height.zip(self.max_height),
        }
    }
}
