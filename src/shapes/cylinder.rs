// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray};
use crate::core::pbrt::{quadratic, Float, EPSILON, INFINITY};
use crate::shapes::{LocalHit, LocalHits};

// see cylinder.h

/// Radius 1 around the y axis, between *minimum* and *maximum*
/// (exclusive). Closed cylinders have caps at both ends.
#[derive(Debug, Copy, Clone)]
pub struct Cylinder {
    pub minimum: Float,
    pub maximum: Float,
    pub closed: bool,
}

impl Default for Cylinder {
    fn default() -> Self {
        Cylinder {
            minimum: -INFINITY,
            maximum: INFINITY,
            closed: false,
        }
    }
}

impl Cylinder {
    pub fn new(minimum: Float, maximum: Float, closed: bool) -> Result<Self> {
        if minimum.is_nan() || maximum.is_nan() || minimum > maximum {
            return Err(KernelError::invalid(
                "minimum",
                format!("cylinder minimum {} exceeds maximum {}", minimum, maximum),
            ));
        }
        Ok(Cylinder {
            minimum,
            maximum,
            closed,
        })
    }
    /// Only a closed cylinder encloses a volume.
    pub fn is_solid(&self) -> bool {
        self.closed
    }
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f::new(
            Point3f::new(-1.0, self.minimum, -1.0),
            Point3f::new(1.0, self.maximum, 1.0),
        )
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        let mut hits: LocalHits = LocalHits::new();
        let a: Float = r.d.x * r.d.x + r.d.z * r.d.z;
        // a ray parallel to the y axis can only hit the caps
        if a.abs() >= EPSILON {
            let b: Float = 2.0 * r.o.x * r.d.x + 2.0 * r.o.z * r.d.z;
            let c: Float = r.o.x * r.o.x + r.o.z * r.o.z - 1.0;
            if let Some((t0, t1)) = quadratic(a, b, c) {
                for t in [t0, t1].iter() {
                    let y: Float = r.o.y + t * r.d.y;
                    if self.minimum < y && y < self.maximum {
                        hits.push(LocalHit::new(*t));
                    }
                }
            }
        }
        self.intersect_caps(r, &mut hits);
        hits
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
            if x * x + z * z <= 1.0 + EPSILON {
                hits.push(LocalHit::new(t));
            }
        }
    }
    pub fn normal(&self, p: &Point3f) -> Normal3f {
        let dist: Float = p.x * p.x + p.z * p.z;
        if dist < 1.0 && p.y >= self.maximum - EPSILON {
            Normal3f::new(0.0, 1.0, 0.0)
        } else if dist < 1.0 && p.y <= self.minimum + EPSILON {
            Normal3f::new(0.0, -1.0, 0.0)
        } else {
            Normal3f::new(p.x, 0.0, p.z)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::geometry::Vector3f;
    use approx::assert_relative_eq;

    #[test]
    fn rays_miss_infinite_cylinder() {
        let cyl = Cylinder::default();
        let cases = [
            ((1.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
            ((0.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
            ((0.0, 0.0, -5.0), (1.0, 1.0, 1.0)),
        ];
        for (o, d) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            assert!(cyl.intersect(&r).is_empty());
        }
    }

    #[test]
    fn rays_strike_infinite_cylinder() {
        let cyl = Cylinder::default();
        let cases = [
            ((1.0, 0.0, -5.0), (0.0, 0.0, 1.0), 5.0, 5.0),
            ((0.0, 0.0, -5.0), (0.0, 0.0, 1.0), 4.0, 6.0),
            ((0.5, 0.0, -5.0), (0.1, 1.0, 1.0), 6.80798, 7.08872),
        ];
        for (o, d, t0, t1) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            let xs = cyl.intersect(&r);
            assert_eq!(xs.len(), 2);
            assert_relative_eq!(xs[0].t, *t0, epsilon = 1e-4);
            assert_relative_eq!(xs[1].t, *t1, epsilon = 1e-4);
        }
    }

    #[test]
    fn truncated_cylinder_excludes_ends() {
        let cyl = Cylinder::new(1.0, 2.0, false).unwrap();
        let cases = [
            ((0.0, 1.5, 0.0), (0.1, 1.0, 0.0), 0),
            ((0.0, 3.0, -5.0), (0.0, 0.0, 1.0), 0),
            ((0.0, 0.0, -5.0), (0.0, 0.0, 1.0), 0),
            ((0.0, 2.0, -5.0), (0.0, 0.0, 1.0), 0),
            ((0.0, 1.0, -5.0), (0.0, 0.0, 1.0), 0),
            ((0.0, 1.5, -2.0), (0.0, 0.0, 1.0), 2),
        ];
        for (o, d, count) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            assert_eq!(cyl.intersect(&r).len(), *count);
        }
    }

    #[test]
    fn closed_cylinder_caps() {
        let cyl = Cylinder::new(1.0, 2.0, true).unwrap();
        let cases = [
            ((0.0, 3.0, 0.0), (0.0, -1.0, 0.0), 2),
            ((0.0, 3.0, -2.0), (0.0, -1.0, 2.0), 2),
            ((0.0, 0.0, -2.0), (0.0, 1.0, 2.0), 2),
        ];
        for (o, d, count) in cases.iter() {
            let r = Ray::new(
                Point3f::new(o.0, o.1, o.2),
                Vector3f::new(d.0, d.1, d.2).normalize(),
            );
            assert_eq!(cyl.intersect(&r).len(), *count);
        }
    }

    #[test]
    fn normals_on_side_and_caps() {
        let cyl = Cylinder::default();
        assert_eq!(cyl.normal(&Point3f::new(1.0, 0.0, 0.0)), Normal3f::new(1.0, 0.0, 0.0));
        assert_eq!(cyl.normal(&Point3f::new(0.0, 5.0, -1.0)), Normal3f::new(0.0, 0.0, -1.0));
        let cyl = Cylinder::new(1.0, 2.0, true).unwrap();
        assert_eq!(cyl.normal(&Point3f::new(0.0, 1.0, 0.0)), Normal3f::new(0.0, -1.0, 0.0));
        assert_eq!(cyl.normal(&Point3f::new(0.5, 1.0, 0.0)), Normal3f::new(0.0, -1.0, 0.0));
        assert_eq!(cyl.normal(&Point3f::new(0.0, 2.0, 0.5)), Normal3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn minimum_above_maximum_is_rejected() {
        assert!(Cylinder::new(2.0, 1.0, true).is_err());
    }
}
