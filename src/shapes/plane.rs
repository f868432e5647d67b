// others
use smallvec::smallvec;
// pbrt
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray};
use crate::core::pbrt::{Float, EPSILON, INFINITY};
use crate::shapes::{LocalHit, LocalHits};

/// The xz plane, extending infinitely in x and z.
#[derive(Debug, Default, Copy, Clone)]
pub struct Plane {}

impl Plane {
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f::new(
            Point3f::new(-INFINITY, 0.0, -INFINITY),
            Point3f::new(INFINITY, 0.0, INFINITY),
        )
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        if r.d.y.abs() < EPSILON {
            // parallel or coplanar
            return LocalHits::new();
        }
        let t: Float = -r.o.y / r.d.y;
        smallvec![LocalHit::new(t)]
    }
    pub fn normal(&self, _p: &Point3f) -> Normal3f {
        Normal3f::new(0.0, 1.0, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::geometry::Vector3f;

    #[test]
    fn normal_is_constant() {
        let p = Plane::default();
        assert_eq!(p.normal(&Point3f::new(10.0, 0.0, -10.0)), Normal3f::new(0.0, 1.0, 0.0));
        assert_eq!(p.normal(&Point3f::new(-5.0, 0.0, 150.0)), Normal3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn parallel_and_coplanar_rays_miss() {
        let p = Plane::default();
        let r = Ray::new(Point3f::new(0.0, 10.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(p.intersect(&r).is_empty());
        let r = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(p.intersect(&r).is_empty());
    }

    #[test]
    fn rays_from_above_and_below() {
        let p = Plane::default();
        let r = Ray::new(Point3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        assert_eq!(p.intersect(&r)[0].t, 1.0);
        let r = Ray::new(Point3f::new(0.0, -1.0, 0.0), Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(p.intersect(&r)[0].t, 1.0);
    }
}
