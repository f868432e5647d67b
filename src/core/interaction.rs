//! The result of a ray query is a list of **Intersection**s: a
//! distance along the ray, the primitive which was hit and (for
//! triangles) the barycentric coordinates of the hit.
//!
//! The geometry of a particular point on a surface, prepared for
//! shading, is represented by a **SurfaceInteraction**. It carries
//! everything the lighting model and a recursive renderer need: the
//! point, eye and normal vectors, the points just above and below the
//! surface and the refractive indices on both sides.

// others
use smallvec::SmallVec;
// pbrt
use crate::core::geometry::{nrm_dot_vec3, vec3_reflect, Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::{Float, SHADOW_EPSILON};
use crate::core::shape::Shape;

#[derive(Debug, Copy, Clone)]
pub struct Intersection<'a> {
    pub t: Float,
    pub shape: &'a Shape,
    pub uv: Option<Point2f>,
}

pub type Intersections<'a> = SmallVec<[Intersection<'a>; 8]>;

impl<'a> Intersection<'a> {
    pub fn new(t: Float, shape: &'a Shape, uv: Option<Point2f>) -> Self {
        Intersection { t, shape, uv }
    }
    /// Stable sort by distance; hits at equal distances keep the order
    /// in which they were found.
    pub fn sort(xs: &mut [Intersection<'a>]) {
        xs.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
    }
    /// Same primitive, same distance.
    pub fn is_same(&self, other: &Intersection) -> bool {
        std::ptr::eq(self.shape, other.shape) && self.t == other.t
    }
}

/// The visible hit: the intersection with the smallest non-negative
/// distance.
pub fn hit<'a, 'b>(xs: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    xs.iter()
        .filter(|x| x.t >= 0.0 as Float)
        .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
}

#[derive(Debug, Clone)]
pub struct SurfaceInteraction<'a> {
    pub t: Float,
    pub shape: &'a Shape,
    pub p: Point3f,
    /// pointing back to the eye
    pub eyev: Vector3f,
    /// facing the eye, flipped if the hit is inside the shape
    pub normalv: Normal3f,
    pub inside: bool,
    /// `p` nudged along the normal (shadow rays start here)
    pub over_point: Point3f,
    /// `p` nudged against the normal (refracted rays start here)
    pub under_point: Point3f,
    pub reflectv: Vector3f,
    /// refractive index of the medium the ray comes from
    pub n1: Float,
    /// refractive index of the medium the ray goes into
    pub n2: Float,
}

impl<'a> SurfaceInteraction<'a> {
    /// Prepare the hit *x* of *ray*. *xs* is the full sorted list the
    /// hit was taken from, it's needed to find out which transparent
    /// shapes the ray is inside of.
    pub fn new(x: &Intersection<'a>, ray: &Ray, xs: &[Intersection<'a>]) -> Self {
        let p: Point3f = ray.position(x.t);
        let eyev: Vector3f = -ray.d;
        let mut normalv: Normal3f = x.shape.normal_at(&p, x.uv);
        let inside: bool = nrm_dot_vec3(&normalv, &eyev) < 0.0 as Float;
        if inside {
            normalv = -normalv;
        }
        let offset: Vector3f = Vector3f::from(normalv) * SHADOW_EPSILON;
        let (n1, n2) = refractive_indices(x, xs);
        SurfaceInteraction {
            t: x.t,
            shape: x.shape,
            p,
            eyev,
            normalv,
            inside,
            over_point: p + offset,
            under_point: p - offset,
            reflectv: vec3_reflect(&ray.d, &normalv),
            n1,
            n2,
        }
    }
}

fn refractive_indices(x: &Intersection, xs: &[Intersection]) -> (Float, Float) {
    let mut containers: SmallVec<[&Shape; 8]> = SmallVec::new();
    let mut n1: Float = 1.0;
    for i in xs {
        let is_hit: bool = i.is_same(x);
        if is_hit {
            n1 = containers
                .last()
                .map_or(1.0, |s| s.material().refractive_index);
        }
        if let Some(pos) = containers.iter().position(|s| std::ptr::eq(*s, i.shape)) {
            containers.remove(pos);
        } else {
            containers.push(i.shape);
        }
        if is_hit {
            let n2: Float = containers
                .last()
                .map_or(1.0, |s| s.material().refractive_index);
            return (n1, n2);
        }
    }
    (n1, 1.0)
}
