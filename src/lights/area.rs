//! Rectangular area light, sampled on a regular grid.
//!
//! The rectangle starts at *corner* and is spanned by two edge
//! vectors. Each edge is cut into a number of steps, the resulting
//! cells are sampled at their centres (or, jittered, anywhere inside
//! the cell).

// others
use smallvec::SmallVec;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::light::LightSamples;
use crate::core::pbrt::{Float, Spectrum, EPSILON};
use crate::core::rng::Rng;

#[derive(Debug, Copy, Clone)]
pub struct AreaLight {
    pub corner: Point3f,
    /// one cell along the first edge
    pub uvec: Vector3f,
    pub usteps: usize,
    /// one cell along the second edge
    pub vvec: Vector3f,
    pub vsteps: usize,
    pub intensity: Spectrum,
    /// centre of the rectangle
    pub position: Point3f,
}

impl AreaLight {
    /// *full_uvec* and *full_vvec* are the complete edges of the
    /// rectangle, not a single cell.
    pub fn new(
        corner: Point3f,
        full_uvec: Vector3f,
        usteps: usize,
        full_vvec: Vector3f,
        vsteps: usize,
        intensity: Spectrum,
    ) -> Result<Self> {
        if usteps == 0 {
            return Err(KernelError::invalid("usteps", "needs at least one step"));
        }
        if vsteps == 0 {
            return Err(KernelError::invalid("vsteps", "needs at least one step"));
        }
        if full_uvec.length() < EPSILON || full_vvec.length() < EPSILON {
            return Err(KernelError::DegenerateGeometry(format!(
                "area light edges {:?} and {:?}",
                full_uvec, full_vvec
            )));
        }
        let position: Point3f = corner + full_uvec * 0.5 + full_vvec * 0.5;
        Ok(AreaLight {
            corner,
            uvec: full_uvec / usteps as Float,
            usteps,
            vvec: full_vvec / vsteps as Float,
            vsteps,
            intensity,
            position,
        })
    }
    pub fn n_samples(&self) -> usize {
        self.usteps * self.vsteps
    }
    /// Point in cell (*u*, *v*); the offsets within the cell are in
    /// [0, 1), 0.5 being the centre.
    pub fn point_on(&self, u: usize, v: usize, u_offset: Float, v_offset: Float) -> Point3f {
        self.corner + self.uvec * (u as Float + u_offset) + self.vvec * (v as Float + v_offset)
    }
    /// One sample per cell, row by row. Without a generator the
    /// samples sit at the cell centres.
    pub fn samples(&self, mut rng: Option<&mut Rng>) -> LightSamples {
        let mut samples: LightSamples = SmallVec::with_capacity(self.n_samples());
        for v in 0..self.vsteps {
            for u in 0..self.usteps {
                let (u_offset, v_offset) = match rng.as_mut() {
                    Some(rng) => (rng.uniform_float(), rng.uniform_float()),
                    None => (0.5 as Float, 0.5 as Float),
                };
                samples.push(self.point_on(u, v, u_offset, v_offset));
            }
        }
        samples
    }
}
