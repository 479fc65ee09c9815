//! Preview surface and output configuration.

use std::path::{Path, PathBuf};

/// Flat preview surface configuration
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Grid resolution (quads per side, e.g. 256 = 66,049 vertices)
    pub grid_size: usize,

    /// Spacing between grid vertices in object units
    pub grid_spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 256,
            // 256 * 0.4 ≈ 100 units across, matching the UV working scale
            grid_spacing: 0.4,
        }
    }
}

impl GridConfig {
    /// Edge length of the whole grid
    pub fn extent(&self) -> f32 {
        self.grid_size as f32 * self.grid_spacing
    }

    pub fn vertex_count(&self) -> usize {
        (self.grid_size + 1).pow(2)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("Grid size must be > 0".to_string());
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(format!(
                "Grid spacing must be a positive number, got {}",
                self.grid_spacing
            ));
        }
        Ok(())
    }
}

/// Heightmap output configuration
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Output PNG path; frame sequences get a `_NNNN` suffix
    pub output: PathBuf,

    /// Number of frames to render
    pub frames: u32,

    /// Frame rate (FPS), converts frame index to wave time
    pub fps: f32,

    /// Wave time of the first frame (seconds)
    pub start_time_s: f32,

    /// Height mapped to black and white; `None` stretches each frame
    pub height_range: Option<(f32, f32)>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("displacement.png"),
            frames: 1,
            fps: 24.0,
            start_time_s: 0.0,
            height_range: None,
        }
    }
}

impl PreviewConfig {
    pub fn total_frames(&self) -> usize {
        self.frames.max(1) as usize
    }

    /// Wave time of a given frame (seconds)
    pub fn frame_time(&self, frame: usize) -> f32 {
        self.start_time_s + frame as f32 / self.fps
    }

    /// Output path for a given frame
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        if self.total_frames() == 1 {
            return self.output.clone();
        }

        let stem = self
            .output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("frame");
        let ext = self
            .output
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png");
        let name = format!("{}_{:04}.{}", stem, frame, ext);

        match self.output.parent() {
            Some(dir) if dir != Path::new("") => dir.join(name),
            _ => PathBuf::from(name),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(format!("FPS must be > 0, got {}", self.fps));
        }
        if let Some((lo, hi)) = self.height_range {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(format!("Height range must satisfy lo < hi, got {}..{}", lo, hi));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_counts() {
        let config = GridConfig {
            grid_size: 4,
            grid_spacing: 0.5,
        };
        assert_eq!(config.vertex_count(), 25);
        assert_eq!(config.extent(), 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_grid_config_rejects_empty() {
        let config = GridConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_frame_uses_output_path() {
        let config = PreviewConfig::default();
        assert_eq!(config.frame_path(0), PathBuf::from("displacement.png"));
    }

    #[test]
    fn test_frame_sequence_paths_and_times() {
        let config = PreviewConfig {
            output: PathBuf::from("out/waves.png"),
            frames: 3,
            fps: 10.0,
            start_time_s: 1.0,
            height_range: None,
        };
        assert_eq!(config.total_frames(), 3);
        assert_eq!(config.frame_path(2), PathBuf::from("out/waves_0002.png"));
        assert!((config.frame_time(0) - 1.0).abs() < 1e-6);
        assert!((config.frame_time(2) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_inverted_height_range() {
        let config = PreviewConfig {
            height_range: Some((1.0, -1.0)),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
