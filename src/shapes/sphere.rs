// others
use smallvec::smallvec;
// pbrt
use crate::core::geometry::{vec3_dot_vec3, Bounds3f, Normal3f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{quadratic, Float};
use crate::shapes::{LocalHit, LocalHits};

// see sphere.h

/// The unit sphere centered at the origin.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sphere {}

impl Sphere {
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0))
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        let sphere_to_ray: Vector3f = Vector3f::from(r.o);
        // compute quadratic sphere coefficients
        let a: Float = vec3_dot_vec3(&r.d, &r.d);
        let b: Float = 2.0 * vec3_dot_vec3(&r.d, &sphere_to_ray);
        let c: Float = vec3_dot_vec3(&sphere_to_ray, &sphere_to_ray) - 1.0;
        match quadratic(a, b, c) {
            Some((t0, t1)) => smallvec![LocalHit::new(t0), LocalHit::new(t1)],
            None => LocalHits::new(),
        }
    }
    pub fn normal(&self, p: &Point3f) -> Normal3f {
        Normal3f::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ts(hits: &LocalHits) -> Vec<Float> {
        hits.iter().map(|h| h.t).collect()
    }

    #[test]
    fn ray_through_center() {
        let r = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ts(&Sphere::default().intersect(&r)), vec![4.0, 6.0]);
    }

    #[test]
    fn tangent_ray_hits_twice_at_same_distance() {
        let r = Ray::new(Point3f::new(0.0, 1.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ts(&Sphere::default().intersect(&r)), vec![5.0, 5.0]);
    }

    #[test]
    fn ray_misses() {
        let r = Ray::new(Point3f::new(0.0, 2.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(Sphere::default().intersect(&r).is_empty());
    }

    #[test]
    fn ray_inside_and_behind() {
        let r = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ts(&Sphere::default().intersect(&r)), vec![-1.0, 1.0]);
        let r = Ray::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ts(&Sphere::default().intersect(&r)), vec![-6.0, -4.0]);
    }
}
