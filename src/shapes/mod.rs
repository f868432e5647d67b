//! The primitives of the kernel. Every one of them is defined in its
//! own canonical object space; the transformation into that space is
//! applied by [Shape](crate::core::shape::Shape), never here.
//!
//! - Cone
//! - Cube
//! - Cylinder
//! - Plane
//! - Sphere
//! - Torus
//! - Triangle and SmoothTriangle
//!
//! ## Spheres
//!
//! The unit sphere at the origin. A ray hits it where the quadratic
//! |o + t d|² = 1 has real roots; a tangent ray yields the same
//! distance twice.
//!
//! ## Planes
//!
//! The infinite xz plane (y = 0). Rays parallel to it never hit,
//! a ray lying in it would only see an infinitely thin edge.
//!
//! ## Cubes
//!
//! The axis-aligned cube from (-1, -1, -1) to (1, 1, 1), intersected
//! with the slab test.
//!
//! ## Cylinders and Cones
//!
//! Both are centered around the y axis, optionally truncated to
//! *minimum* < y < *maximum* and optionally closed by caps. The
//! cylinder has radius 1, the cone's radius at height y is |y|.
//!
//! ## Triangles
//!
//! Intersected with the Möller-Trumbore algorithm, which also yields
//! the barycentric coordinates a smooth triangle uses to interpolate
//! its vertex normals.
//!
//! ## Tori
//!
//! A ring around the y axis described by a major radius (center of
//! the tube to the y axis) and a minor radius (of the tube itself).
//! The implicit surface is a quartic, solved with
//! [real_roots](crate::core::polynomial::real_roots).
//!
//! Group and CSG nodes live in [accelerators](crate::accelerators)
//! and [csg](crate::shapes::csg).

// others
use smallvec::SmallVec;
// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;

pub mod cone;
pub mod csg;
pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod torus;
pub mod triangle;

/// One hit of a ray with a primitive, in object space.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LocalHit {
    pub t: Float,
    pub uv: Option<Point2f>,
}

impl LocalHit {
    pub fn new(t: Float) -> Self {
        LocalHit { t, uv: None }
    }
    pub fn with_uv(t: Float, u: Float, v: Float) -> Self {
        LocalHit {
            t,
            uv: Some(Point2f::new(u, v)),
        }
    }
}

pub type LocalHits = SmallVec<[LocalHit; 4]>;
