// others
use log::warn;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{vec3_dot_vec3, Bounds3f, Normal3f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{Float, EPSILON};
use crate::core::polynomial::real_roots;
use crate::shapes::{LocalHit, LocalHits};

/// Ring torus around the y axis, centered at the origin.
///
/// The implicit surface is
/// (|p|² - R² - r²)² - 4R²(r² - y²) = 0,
/// with *R* the major radius (from the y axis to the middle of the
/// tube) and *r* the minor radius (of the tube).
#[derive(Debug, Copy, Clone)]
pub struct Torus {
    pub major_radius: Float,
    pub minor_radius: Float,
}

impl Default for Torus {
    fn default() -> Self {
        Torus {
            major_radius: 1.0,
            minor_radius: 0.25,
        }
    }
}

impl Torus {
    pub fn new(major_radius: Float, minor_radius: Float) -> Result<Self> {
        if !(minor_radius > 0.0) {
            return Err(KernelError::invalid(
                "minorradius",
                format!("must be positive, got {}", minor_radius),
            ));
        }
        if !(major_radius > 0.0) {
            return Err(KernelError::invalid(
                "majorradius",
                format!("must be positive, got {}", major_radius),
            ));
        }
        Ok(Torus {
            major_radius,
            minor_radius,
        })
    }
    pub fn object_bound(&self) -> Bounds3f {
        let outer: Float = self.major_radius + self.minor_radius;
        let r: Float = self.minor_radius;
        Bounds3f::new(Point3f::new(-outer, -r, -outer), Point3f::new(outer, r, outer))
    }
    pub fn intersect(&self, ray: &Ray) -> LocalHits {
        let mut hits: LocalHits = LocalHits::new();
        // cheap rejection before building the quartic
        if !self.object_bound().intersect_p(ray) {
            return hits;
        }
        let big_r2: Float = self.major_radius * self.major_radius;
        let small_r2: Float = self.minor_radius * self.minor_radius;
        let o: Vector3f = Vector3f::from(ray.o);
        let d: Vector3f = ray.d;
        let dd: Float = vec3_dot_vec3(&d, &d);
        let e: Float = vec3_dot_vec3(&o, &o) - big_r2 - small_r2;
        let f: Float = vec3_dot_vec3(&o, &d);
        let four_r2: Float = 4.0 * big_r2;
        let c4: Float = dd * dd;
        let c3: Float = 4.0 * dd * f;
        let c2: Float = 2.0 * dd * e + 4.0 * f * f + four_r2 * d.y * d.y;
        let c1: Float = 4.0 * f * e + 2.0 * four_r2 * o.y * d.y;
        let c0: Float = e * e - four_r2 * (small_r2 - o.y * o.y);
        for t in real_roots(&[c4, c3, c2, c1, c0]) {
            hits.push(LocalHit::new(t));
        }
        hits
    }
    /// Gradient of the implicit function. Points off the surface (or
    /// on the y axis) may leave it close to zero; then the direction
    /// from the middle of the tube is used instead.
    pub fn normal(&self, p: &Point3f) -> Normal3f {
        let big_r2: Float = self.major_radius * self.major_radius;
        let s: Float = p.x * p.x + p.y * p.y + p.z * p.z - big_r2 - self.minor_radius * self.minor_radius;
        let gradient: Normal3f = Normal3f::new(
            4.0 * s * p.x,
            4.0 * s * p.y + 8.0 * big_r2 * p.y,
            4.0 * s * p.z,
        );
        if gradient.length() >= EPSILON {
            return gradient;
        }
        let radial: Float = (p.x * p.x + p.z * p.z).sqrt();
        if radial < EPSILON {
            warn!("torus normal requested on the y axis at {:?}", p);
            return Normal3f::new(0.0, 1.0, 0.0);
        }
        let scale: Float = self.major_radius / radial;
        let center: Point3f = Point3f::new(p.x * scale, 0.0, p.z * scale);
        Normal3f::from(*p - center)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::pbrt::float_eq;
    use approx::assert_relative_eq;

    #[test]
    fn ray_through_both_sides_of_ring() {
        let torus = Torus::new(2.0, 0.5).unwrap();
        let r = Ray::new(Point3f::new(-5.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        let xs = torus.intersect(&r);
        let expected = [2.5, 3.5, 6.5, 7.5];
        assert_eq!(xs.len(), 4);
        for (x, t) in xs.iter().zip(expected.iter()) {
            assert_relative_eq!(x.t, *t, epsilon = 1e-6);
        }
    }

    #[test]
    fn ray_through_hole_misses() {
        let torus = Torus::new(2.0, 0.5).unwrap();
        let r = Ray::new(Point3f::new(0.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        assert!(torus.intersect(&r).is_empty());
    }

    #[test]
    fn ray_through_tube_from_above() {
        let torus = Torus::new(2.0, 0.5).unwrap();
        let r = Ray::new(Point3f::new(2.0, 5.0, 0.0), Vector3f::new(0.0, -1.0, 0.0));
        let xs = torus.intersect(&r);
        assert_eq!(xs.len(), 2);
        assert_relative_eq!(xs[0].t, 4.5, epsilon = 1e-6);
        assert_relative_eq!(xs[1].t, 5.5, epsilon = 1e-6);
    }

    #[test]
    fn hits_lie_on_the_surface() {
        let torus = Torus::new(1.0, 0.3).unwrap();
        let r = Ray::new(
            Point3f::new(-3.0, 0.1, -0.4),
            Vector3f::new(1.0, 0.02, 0.1).normalize(),
        );
        for hit in torus.intersect(&r) {
            let p = r.position(hit.t);
            let s = p.x * p.x + p.y * p.y + p.z * p.z - 1.0 - 0.09;
            let f = s * s - 4.0 * (0.09 - p.y * p.y);
            assert!(f.abs() < 1e-6);
        }
    }

    #[test]
    fn normals_point_away_from_tube() {
        let torus = Torus::new(2.0, 0.5).unwrap();
        let n = torus.normal(&Point3f::new(2.5, 0.0, 0.0)).normalize();
        assert_eq!(n, Normal3f::new(1.0, 0.0, 0.0));
        let n = torus.normal(&Point3f::new(1.5, 0.0, 0.0)).normalize();
        assert_eq!(n, Normal3f::new(-1.0, 0.0, 0.0));
        let n = torus.normal(&Point3f::new(0.0, 0.5, 2.0)).normalize();
        assert_eq!(n, Normal3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn degenerate_gradient_falls_back_to_tube_center() {
        // the center of a horn torus, where the gradient vanishes
        let torus = Torus::new(1.0, 1.0).unwrap();
        let n = torus.normal(&Point3f::new(0.0, 0.0, 0.0));
        assert!(float_eq(n.length(), 1.0));
    }

    #[test]
    fn invalid_radii() {
        assert!(Torus::new(1.0, 0.0).is_err());
        assert!(Torus::new(-1.0, 0.5).is_err());
    }
}
