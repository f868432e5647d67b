// others
use smallvec::smallvec;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{vec3_cross_vec3, vec3_dot_vec3, Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{Float, EPSILON};
use crate::shapes::{LocalHit, LocalHits};

// see triangle.h

/// A flat triangle given by its three corners.
#[derive(Debug, Copy, Clone)]
pub struct Triangle {
    pub p1: Point3f,
    pub p2: Point3f,
    pub p3: Point3f,
    pub e1: Vector3f,
    pub e2: Vector3f,
    pub normal: Normal3f,
    /// |e1| |e2|, tolerances scale with it
    edge_scale: Float,
}

impl Triangle {
    /// Fails for collinear (or coinciding) corners.
    pub fn new(p1: Point3f, p2: Point3f, p3: Point3f) -> Result<Self> {
        let e1: Vector3f = p2 - p1;
        let e2: Vector3f = p3 - p1;
        let n: Vector3f = vec3_cross_vec3(&e2, &e1);
        let edge_scale: Float = e1.length() * e2.length();
        if n.length() < EPSILON * edge_scale || edge_scale == 0.0 as Float {
            return Err(KernelError::DegenerateGeometry(format!(
                "triangle {:?} {:?} {:?} has no area",
                p1, p2, p3
            )));
        }
        Ok(Triangle {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal: Normal3f::from(n.normalize()),
            edge_scale,
        })
    }
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f::new(self.p1, self.p2).union_point(&self.p3)
    }
    /// Möller-Trumbore. The hit carries the barycentric coordinates
    /// (u, v) relative to *p2* and *p3*.
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        let dir_cross_e2: Vector3f = vec3_cross_vec3(&r.d, &self.e2);
        let det: Float = vec3_dot_vec3(&self.e1, &dir_cross_e2);
        // relative to the size of the triangle, small meshes stay
        // intersectable
        if det.abs() < EPSILON * self.edge_scale * r.d.length() {
            return LocalHits::new();
        }
        let f: Float = 1.0 / det;
        let p1_to_origin: Vector3f = r.o - self.p1;
        let u: Float = f * vec3_dot_vec3(&p1_to_origin, &dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return LocalHits::new();
        }
        let origin_cross_e1: Vector3f = vec3_cross_vec3(&p1_to_origin, &self.e1);
        let v: Float = f * vec3_dot_vec3(&r.d, &origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return LocalHits::new();
        }
        let t: Float = f * vec3_dot_vec3(&self.e2, &origin_cross_e1);
        smallvec![LocalHit::with_uv(t, u, v)]
    }
    pub fn normal(&self, _p: &Point3f) -> Normal3f {
        self.normal
    }
    /// Barycentric coordinates (u, v) of a point in the plane of the
    /// triangle.
    pub fn barycentric(&self, p: &Point3f) -> Point2f {
        let w: Vector3f = *p - self.p1;
        let d00: Float = vec3_dot_vec3(&self.e1, &self.e1);
        let d01: Float = vec3_dot_vec3(&self.e1, &self.e2);
        let d11: Float = vec3_dot_vec3(&self.e2, &self.e2);
        let d20: Float = vec3_dot_vec3(&w, &self.e1);
        let d21: Float = vec3_dot_vec3(&w, &self.e2);
        let denom: Float = d00 * d11 - d01 * d01;
        Point2f::new(
            (d11 * d20 - d01 * d21) / denom,
            (d00 * d21 - d01 * d20) / denom,
        )
    }
}

/// A triangle with a normal per corner. The shading normal is the
/// barycentric blend of the three.
#[derive(Debug, Copy, Clone)]
pub struct SmoothTriangle {
    pub triangle: Triangle,
    pub n1: Normal3f,
    pub n2: Normal3f,
    pub n3: Normal3f,
}

impl SmoothTriangle {
    pub fn new(
        p1: Point3f,
        p2: Point3f,
        p3: Point3f,
        n1: Normal3f,
        n2: Normal3f,
        n3: Normal3f,
    ) -> Result<Self> {
        Ok(SmoothTriangle {
            triangle: Triangle::new(p1, p2, p3)?,
            n1,
            n2,
            n3,
        })
    }
    pub fn object_bound(&self) -> Bounds3f {
        self.triangle.object_bound()
    }
    pub fn intersect(&self, r: &Ray) -> LocalHits {
        self.triangle.intersect(r)
    }
    /// Without the (u, v) of a hit they are recomputed from the point.
    pub fn normal(&self, p: &Point3f, uv: Option<Point2f>) -> Normal3f {
        let uv: Point2f = uv.unwrap_or_else(|| self.triangle.barycentric(p));
        self.n2 * uv.x + self.n3 * uv.y + self.n1 * (1.0 - uv.x - uv.y)
    }
}
