// others
use smallvec::smallvec;
// pbrt
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray};
use crate::core::pbrt::Float;
use crate::shapes::{LocalHit, LocalHits};

/// The axis-aligned cube from (-1, -1, -1) to (1, 1, 1).
#[derive(Debug, Default, Copy, Clone)]
pub struct Cube {}

impl Cube {
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0))
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        match self.object_bound().intersect_interval(r) {
            Some((t0, t1)) => smallvec![LocalHit::new(t0), LocalHit::new(t1)],
            None => LocalHits::new(),
        }
    }
    /// The face belongs to the component with the largest magnitude.
    pub fn normal(&self, p: &Point3f) -> Normal3f {
        let ax: Float = p.x.abs();
        let ay: Float = p.y.abs();
        let az: Float = p.z.abs();
        if ax >= ay && ax >= az {
            Normal3f::new(p.x.signum(), 0.0, 0.0)
        } else if ay >= az {
            Normal3f::new(0.0, p.y.signum(), 0.0)
        } else {
            Normal3f::new(0.0, 0.0, p.z.signum())
        }
    }
}
