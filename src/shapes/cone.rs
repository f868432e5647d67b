// others
use log::trace;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray};
use crate::core::pbrt::{quadratic, Float, EPSILON, INFINITY};
use crate::shapes::{LocalHit, LocalHits};

// see cone.h

/// Double-napped cone around the y axis with its apex at the origin;
/// the radius at height y is |y|. Optionally truncated and capped like
/// a [Cylinder](crate::shapes::cylinder::Cylinder).
#[derive(Debug, Copy, Clone)]
pub struct Cone {
    pub minimum: Float,
    pub maximum: Float,
    pub closed: bool,
}

impl Default for Cone {
    fn default() -> Self {
        Cone {
            minimum: -INFINITY,
            maximum: INFINITY,
            closed: false,
        }
    }
}

impl Cone {
    pub fn new(minimum: Float, maximum: Float, closed: bool) -> Result<Self> {
        if minimum.is_nan() || maximum.is_nan() || minimum > maximum {
            return Err(KernelError::invalid(
                "minimum",
                format!("cone minimum {} exceeds maximum {}", minimum, maximum),
            ));
        }
        Ok(Cone {
            minimum,
            maximum,
            closed,
        })
    }
    pub fn is_solid(&self) -> bool {
        self.closed
    }
    pub fn object_bound(&self) -> Bounds3f {
        let radius: Float = self.minimum.abs().max(self.maximum.abs());
        Bounds3f::new(
            Point3f::new(-radius, self.minimum, -radius),
            Point3f::new(radius, self.maximum, radius),
        )
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        let mut hits: LocalHits = LocalHits::new();
        let a: Float = r.d.x * r.d.x - r.d.y * r.d.y + r.d.z * r.d.z;
        let b: Float = 2.0 * r.o.x * r.d.x - 2.0 * r.o.y * r.d.y + 2.0 * r.o.z * r.d.z;
        let c: Float = r.o.x * r.o.x - r.o.y * r.o.y + r.o.z * r.o.z;
        if a.abs() < EPSILON {
            // parallel to one of the halves: at most one hit with the
            // other half
            if b.abs() >= EPSILON {
                let t: Float = -c / (2.0 * b);
                self.push_if_in_range(r, t, &mut hits);
            } else {
                trace!("ray along the surface of the cone, no side hit");
            }
        } else if let Some((t0, t1)) = quadratic(a, b, c) {
            self.push_if_in_range(r, t0, &mut hits);
            self.push_if_in_range(r, t1, &mut hits);
        }
        self.intersect_caps(r, &mut hits);
        hits
    }
    fn push_if_in_range(&self, r: &Ray, t: Float, hits: &mut LocalHits) {
        let y: Float = r.o.y + t * r.d.y;
        if self.minimum < y && y < self.maximum {
            hits.push(LocalHit::new(t));
        }
    }
    fn intersect_caps(&self, r: &Ray, hits: &mut LocalHits) {
        if !self.closed || r.d.y.abs() < EPSILON {
            return;
        }
        for y in [self.minimum, self.maximum].iter() {
            if y.is_infinite() {
                continue;
            }
            let t: Float = (y - r.o.y) / r.d.y;
            let x: Float = r.o.x + t * r.d.x;
            let z: Float = r.o.z + t * r.d.z;
            if x * x + z * z <= y * y + EPSILON {
                hits.push(LocalHit::new(t));
            }
        }
    }
    pub fn normal(&self, p: &Point3f) -> Normal3f {
        let dist: Float = p.x * p.x + p.z * p.z;
        if dist < self.maximum * self.maximum && p.y >= self.maximum - EPSILON {
            Normal3f::new(0.0, 1.0, 0.0)
        } else if dist < self.minimum * self.minimum && p.y <= self.minimum + EPSILON {
            Normal3f::new(0.0, -1.0, 0.0)
        } else {
            let mut y: Float = dist.sqrt();
            if p.y > 0.0 {
                y = -y;
            }
            Normal3f::new(p.x, y, p.z)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::geometry::Vector3f;
    use approx::assert_relative_eq;

    #[test]
    fn rays_strike_cone() {
        let cone = Cone::default();
        let cases = [
            ((0.0, 0.0, -5.0), (0.0, 0.0, 1.0), 5.0, 5.0),
            ((0.0, 0.0, -5.0), (1.0, 1.0, 1.0), 8.66025, 8.66025),
            ((1.0, 1.0, -5.0), (-0.5, -1.0, 1.0), 4.55006, 49.44994),
        ];
        for (o, d, t0, t1) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            let xs = cone.intersect(&r);
            assert_eq!(xs.len(), 2);
            assert_relative_eq!(xs[0].t, *t0, epsilon = 1e-4);
            assert_relative_eq!(xs[1].t, *t1, epsilon = 1e-4);
        }
    }

    #[test]
    fn ray_parallel_to_one_half() {
        let cone = Cone::default();
        let r = Ray::new(
            Point3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 1.0).normalize(),
        );
        let xs = cone.intersect(&r);
        assert_eq!(xs.len(), 1);
        assert_relative_eq!(xs[0].t, 0.35355, epsilon = 1e-4);
    }

    #[test]
    fn ray_through_apex_along_surface() {
        let cone = Cone::default();
        let r = Ray::new(
            Point3f::new(-1.0, -1.0, 0.0),
            Vector3f::new(1.0, 1.0, 0.0).normalize(),
        );
        assert!(cone.intersect(&r).is_empty());
    }

    #[test]
    fn capped_cone() {
        let cone = Cone::new(-0.5, 0.5, true).unwrap();
        let cases = [
            ((0.0, 0.0, -5.0), (0.0, 1.0, 0.0), 0),
            ((0.0, 0.0, -0.25), (0.0, 1.0, 1.0), 2),
            ((0.0, 0.0, -0.25), (0.0, 1.0, 0.0), 4),
        ];
        for (o, d, count) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            assert_eq!(cone.intersect(&r).len(), *count);
        }
    }

    #[test]
    fn side_normals() {
        let cone = Cone::default();
        assert_eq!(cone.normal(&Point3f::new(0.0, 0.0, 0.0)), Normal3f::new(0.0, 0.0, 0.0));
        let s: Float = (2.0 as Float).sqrt();
        assert_eq!(cone.normal(&Point3f::new(1.0, 1.0, 1.0)), Normal3f::new(1.0, -s, 1.0));
        assert_eq!(cone.normal(&Point3f::new(-1.0, -1.0, 0.0)), Normal3f::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn bounds_cover_the_wider_end() {
        let cone = Cone::new(-5.0, 3.0, false).unwrap();
        let b = cone.object_bound();
        assert_eq!(b.p_min, Point3f::new(-5.0, -5.0, -5.0));
        assert_eq!(b.p_max, Point3f::new(5.0, 3.0, 5.0));
    }
}
