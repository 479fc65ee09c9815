//! Flat preview surface: a UV-mapped XZ grid that can be deformed repeatedly.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::deform::SurfaceSample;
use crate::params::GridConfig;

/// Vertex data for the surface mesh (position + UV + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl SurfaceSample for Vertex {
    fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    fn uv(&self) -> Option<Vec2> {
        Some(Vec2::from_array(self.uv))
    }

    fn normal(&self) -> Option<Vec3> {
        Some(Vec3::from_array(self.normal))
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }
}

/// Grid surface centred on the origin, facing +Y
pub struct SurfaceGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Undeformed vertices; every frame starts again from these
    rest: Vec<Vertex>,
    grid_size: usize,
}

impl SurfaceGrid {
    /// Create a new surface grid with specified parameters
    pub fn new(config: &GridConfig) -> Self {
        let grid_size = config.grid_size;
        let grid_spacing = config.grid_spacing;
        let half_size = config.extent() / 2.0;

        let mut vertices = Vec::with_capacity(config.vertex_count());
        let mut indices = Vec::with_capacity(grid_size * grid_size * 6);

        // Generate flat XZ plane grid
        for z in 0..=grid_size {
            for x in 0..=grid_size {
                let x_pos = x as f32 * grid_spacing - half_size;
                let z_pos = z as f32 * grid_spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    uv: [x as f32 / grid_size as f32, z as f32 / grid_size as f32],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }

        // Generate triangle indices (counter-clockwise winding)
        for z in 0..grid_size {
            for x in 0..grid_size {
                let top_left = (z * (grid_size + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (grid_size + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            rest: vertices.clone(),
            vertices,
            indices,
            grid_size,
        }
    }

    /// Vertices per side
    pub fn resolution(&self) -> usize {
        self.grid_size + 1
    }

    /// Restore the undeformed surface
    pub fn reset(&mut self) {
        self.vertices.copy_from_slice(&self.rest);
    }

    /// Per-vertex height (Y), row-major in z then x
    pub fn heights(&self) -> Vec<f32> {
        self.vertices.iter().map(|v| v.position[1]).collect()
    }

    /// Lowest and highest vertex, ignoring non-finite heights
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.vertices
            .iter()
            .map(|v| v.position[1])
            .filter(|h| h.is_finite())
            .fold(None, |range, h| match range {
                None => Some((h, h)),
                Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
            })
    }

    /// Raw vertex buffer, as it would be uploaded to a GPU
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deform::Deformer;
    use crate::params::{UvWaveParams, WaveParams};

    fn small_config() -> GridConfig {
        GridConfig {
            grid_size: 8,
            grid_spacing: 0.5,
        }
    }

    #[test]
    fn test_surface_grid_creation() {
        let config = small_config();
        let grid = SurfaceGrid::new(&config);

        // Check vertex count: (grid_size + 1)^2
        assert_eq!(grid.vertices.len(), (config.grid_size + 1).pow(2));

        // Check triangle count: grid_size^2 * 2 triangles * 3 indices
        assert_eq!(grid.indices.len(), config.grid_size.pow(2) * 6);

        assert_eq!(grid.resolution(), 9);
        assert_eq!(grid.height_range(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_grid_is_centred_with_unit_uvs() {
        let grid = SurfaceGrid::new(&small_config());
        let first = grid.vertices.first().expect("vertices");
        let last = grid.vertices.last().expect("vertices");

        assert_eq!(first.position, [-2.0, 0.0, -2.0]);
        assert_eq!(last.position, [2.0, 0.0, 2.0]);
        assert_eq!(first.uv, [0.0, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
        assert!(grid.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_reset_restores_rest_pose() {
        let mut grid = SurfaceGrid::new(&small_config());
        let rest = grid.vertices.clone();

        let deformer = Deformer::new(WaveParams::Uv(UvWaveParams {
            time_s: 2.0,
            amplitude1: 1.0,
            frequency1: 4.0,
        }));
        let report = deformer.deform(&mut grid.vertices);
        assert!(report.is_complete());
        assert_ne!(grid.vertices, rest);

        grid.reset();
        assert_eq!(grid.vertices, rest);
    }

    #[test]
    fn test_heights_follow_vertex_order() {
        let mut grid = SurfaceGrid::new(&small_config());
        grid.vertices[0].position[1] = -0.5;
        grid.vertices[10].position[1] = 2.0;

        let heights = grid.heights();
        assert_eq!(heights.len(), grid.vertices.len());
        assert_eq!(heights[0], -0.5);
        assert_eq!(heights[10], 2.0);
        assert!(heights[1..10].iter().all(|&h| h == 0.0));
        assert_eq!(grid.height_range(), Some((-0.5, 2.0)));
    }

    #[test]
    fn test_vertex_bytes_layout() {
        let grid = SurfaceGrid::new(&small_config());
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(grid.vertex_bytes().len(), grid.vertices.len() * 32);
    }
}
