//! Applying wave displacement to a vertex collection.
//!
//! The geometry itself belongs to the caller: anything implementing
//! [`SurfaceSample`] can be deformed. Each vertex is evaluated independently
//! and in parallel; a vertex that lacks the context its variant needs is left
//! untouched and reported, without affecting the rest of the batch.

mod transform;

use glam::{Vec2, Vec3};
use log::{debug, warn};
use rayon::prelude::*;

pub use transform::OffsetTransform;

use crate::error::DeformError;
use crate::noise::{NoiseField, SimplexField};
use crate::params::{WaveParams, ENVELOPE_RANGE};
use crate::wave::{uv_to_working, WaveComposer};

/// Per-vertex view of a host mesh
pub trait SurfaceSample {
    fn position(&self) -> Vec3;

    /// UV in [0, 1], if the surface has one here
    fn uv(&self) -> Option<Vec2>;

    /// Outward surface normal, if known
    fn normal(&self) -> Option<Vec3>;

    fn set_position(&mut self, position: Vec3);
}

/// A host vertex whose UV and normal may be missing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVertex {
    pub position: Vec3,
    pub uv: Option<Vec2>,
    pub normal: Option<Vec3>,
}

impl SurfaceVertex {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            uv: None,
            normal: None,
        }
    }

    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = Some(uv);
        self
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }
}

impl SurfaceSample for SurfaceVertex {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn uv(&self) -> Option<Vec2> {
        self.uv
    }

    fn normal(&self) -> Option<Vec3> {
        self.normal
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

/// Outcome of one deformation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeformReport {
    /// Vertices that were moved
    pub displaced: usize,
    /// Vertices left in place, by index
    pub skipped: Vec<(usize, DeformError)>,
}

impl DeformReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn total(&self) -> usize {
        self.displaced + self.skipped.len()
    }
}

/// Wave deformer: a composer plus the parameters of one evaluation
pub struct Deformer<N = SimplexField> {
    composer: WaveComposer<N>,
    params: WaveParams,
    offset: OffsetTransform,
    envelope: f32,
}

impl Deformer<SimplexField> {
    /// Create a deformer over the seedless simplex field
    ///
    /// Out-of-range parameters are clamped into their attribute ranges.
    pub fn new(params: WaveParams) -> Self {
        Self::with_noise(params, SimplexField)
    }
}

impl<N: NoiseField> Deformer<N> {
    pub fn with_noise(params: WaveParams, noise: N) -> Self {
        Self {
            composer: WaveComposer::with_noise(noise),
            params: in_range(params),
            offset: OffsetTransform::identity(),
            envelope: 1.0,
        }
    }

    /// Offset frame for the position variant (ignored by the UV variants)
    pub fn with_offset(mut self, offset: OffsetTransform) -> Self {
        self.offset = offset;
        self
    }

    /// Blend factor: 0 leaves the surface untouched, 1 applies full displacement
    pub fn with_envelope(mut self, envelope: f32) -> Self {
        if !ENVELOPE_RANGE.contains(envelope) {
            warn!("envelope {} clamped to [0, 1]", envelope);
        }
        self.envelope = ENVELOPE_RANGE.clamp(envelope);
        self
    }

    /// Move the wave to another point in time, keeping every other parameter
    pub fn set_time(&mut self, time_s: f32) {
        self.params = in_range(self.params.with_time(time_s));
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn composer(&self) -> &WaveComposer<N> {
        &self.composer
    }

    pub fn envelope(&self) -> f32 {
        self.envelope
    }

    /// Where a vertex ends up, without modifying it
    pub fn displaced_position<V: SurfaceSample + ?Sized>(
        &self,
        vertex: &V,
    ) -> Result<Vec3, DeformError> {
        let position = vertex.position();
        if !position.is_finite() {
            return Err(DeformError::NonFinitePosition);
        }

        if !self.params.samples_uv() {
            let mut local = self.offset.to_local(position);
            let d = self
                .composer
                .displacement(Vec2::new(local.x, local.z), &self.params);
            local.y += d * self.envelope;
            return Ok(self.offset.to_world(local));
        }

        let uv = vertex.uv().ok_or(DeformError::MissingUv)?;
        if !uv.is_finite() {
            return Err(DeformError::NonFiniteUv);
        }
        let normal = vertex
            .normal()
            .ok_or(DeformError::MissingNormal)?
            .try_normalize()
            .ok_or(DeformError::DegenerateNormal)?;

        let d = self.composer.displacement(uv_to_working(uv), &self.params);
        Ok(position + normal * (d * self.envelope))
    }

    /// Displace every vertex in place
    ///
    /// Vertices are independent, so they are processed in parallel. Failures are
    /// collected rather than propagated.
    pub fn deform<V: SurfaceSample + Send>(&self, vertices: &mut [V]) -> DeformReport {
        let mut skipped: Vec<(usize, DeformError)> = vertices
            .par_iter_mut()
            .enumerate()
            .filter_map(|(idx, vertex)| match self.displaced_position(&*vertex) {
                Ok(position) => {
                    vertex.set_position(position);
                    None
                }
                Err(e) => Some((idx, e)),
            })
            .collect();
        skipped.sort_by_key(|(idx, _)| *idx);

        let report = DeformReport {
            displaced: vertices.len() - skipped.len(),
            skipped,
        };

        debug!(
            "{} deform at t={:.3}: {} displaced, {} skipped",
            self.params.name(),
            self.params.time_s(),
            report.displaced,
            report.skipped.len()
        );
        if let Some((idx, e)) = report.skipped.first() {
            warn!(
                "{} of {} vertices left unmodified (first: vertex {}: {})",
                report.skipped.len(),
                report.total(),
                idx,
                e
            );
        }

        report
    }
}

fn in_range(params: WaveParams) -> WaveParams {
    match params.validate() {
        Ok(()) => params,
        Err(e) => {
            warn!("{} wave parameters clamped: {}", params.name(), e);
            params.clamped()
        }
    }
}
