//! Constructive solid geometry: the union, intersection or difference
//! of two shapes (which may be groups or CSG nodes themselves).
//!
//! The ray is intersected with both operands. The merged hits are
//! swept front to back while tracking whether the ray is inside the
//! left and inside the right operand; each hit survives or not
//! according to [intersection_allowed]. Only hits on solid shapes
//! toggle the inside state, an open surface (plane, triangle, open
//! cylinder) is never "entered".
//!
//! Hits at the same distance (coinciding surfaces of the two
//! operands) are one event: at most one of them survives, and only if
//! the ray crosses the boundary of the combined solid there.

// others
use strum_macros::EnumIter;
// pbrt
use crate::core::geometry::{Bounds3f, Ray};
use crate::core::interaction::{Intersection, Intersections};
use crate::core::pbrt::float_eq;
use crate::core::shape::Shape;

#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CsgOperation {
    Union,
    Intersection,
    Difference,
}

/// Does a hit survive? *lhit* tells whether it belongs to the left
/// operand, *inl* and *inr* whether the ray is currently inside the
/// left and the right operand.
pub fn intersection_allowed(operation: CsgOperation, lhit: bool, inl: bool, inr: bool) -> bool {
    match operation {
        CsgOperation::Union => (lhit && !inr) || (!lhit && !inl),
        CsgOperation::Intersection => (lhit && inr) || (!lhit && inl),
        CsgOperation::Difference => (lhit && !inr) || (!lhit && inl),
    }
}

/// Is the ray inside the combined solid?
pub fn inside_combined(operation: CsgOperation, inl: bool, inr: bool) -> bool {
    match operation {
        CsgOperation::Union => inl || inr,
        CsgOperation::Intersection => inl && inr,
        CsgOperation::Difference => inl && !inr,
    }
}

#[derive(Debug, Clone)]
pub struct Csg {
    operation: CsgOperation,
    left: Box<Shape>,
    right: Box<Shape>,
}

impl Csg {
    pub fn new(operation: CsgOperation, left: Shape, right: Shape) -> Self {
        Csg {
            operation,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
    pub fn operation(&self) -> CsgOperation {
        self.operation
    }
    pub fn left(&self) -> &Shape {
        &self.left
    }
    pub fn right(&self) -> &Shape {
        &self.right
    }
    pub(crate) fn left_mut(&mut self) -> &mut Shape {
        &mut self.left
    }
    pub(crate) fn right_mut(&mut self) -> &mut Shape {
        &mut self.right
    }
    pub fn bounds(&self) -> Bounds3f {
        self.left
            .parent_space_bounds()
            .union(&self.right.parent_space_bounds())
    }
    /// Object space intersection.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        if !self.bounds().intersect_p(ray) {
            return Intersections::new();
        }
        let mut xs: Intersections<'_> = self.left.intersect(ray);
        xs.extend(self.right.intersect(ray));
        Intersection::sort(&mut xs);
        self.filter(&xs)
    }
    /// Keep the hits which lie on the surface of the combined solid.
    /// *xs* has to be sorted.
    pub fn filter<'a>(&self, xs: &[Intersection<'a>]) -> Intersections<'a> {
        let mut inl: bool = false;
        let mut inr: bool = false;
        let mut result: Intersections<'a> = Intersections::new();
        let mut start: usize = 0;
        while start < xs.len() {
            let mut end: usize = start + 1;
            while end < xs.len() && float_eq(xs[end].t, xs[start].t) {
                end += 1;
            }
            let (was_inl, was_inr) = (inl, inr);
            let mut first_solid: Option<&Intersection<'a>> = None;
            let mut allowed_solid: Option<&Intersection<'a>> = None;
            for x in &xs[start..end] {
                let lhit: bool = self.left.includes(x.shape);
                let allowed: bool = intersection_allowed(self.operation, lhit, was_inl, was_inr);
                if x.shape.is_solid() {
                    if lhit {
                        inl = !inl;
                    } else {
                        inr = !inr;
                    }
                    first_solid.get_or_insert(x);
                    if allowed && allowed_solid.is_none() {
                        allowed_solid = Some(x);
                    }
                } else if allowed {
                    result.push(*x);
                }
            }
            // a single solid hit survives exactly when the combined
            // state flips, coinciding hits are merged into one
            if inside_combined(self.operation, was_inl, was_inr)
                != inside_combined(self.operation, inl, inr)
            {
                if let Some(x) = allowed_solid.or(first_solid) {
                    result.push(*x);
                }
            }
            start = end;
        }
        result
    }
}
