//! Almost all nontrivial graphics programs are built on a foundation
//! of geometric classes. These classes represent mathematical
//! constructs like points, vectors, and rays.
//!
//! # Points, Vectors and Normals
//!
//! All three are homogeneous 4-tuples in disguise: a **point** is a
//! tuple with *w = 1*, a **vector** or **normal** a tuple with
//! *w = 0*. Instead of storing *w* we keep them as separate types, so
//! a [Transform](crate::core::transform::Transform) knows whether the
//! translation part applies. Only point - point (giving a vector),
//! point +/- vector (giving a point) and vector +/- vector are
//! meaningful, and those are the only operators implemented.
//!
//! Equality of all these types is tolerance based (see
//! [float_eq](crate::core::pbrt::float_eq)).
//!
//! ```rust
//! use rs_raykernel::core::geometry::{Point3f, Vector3f};
//!
//! let p = Point3f::new(3.0, 2.0, 1.0);
//! let q = Point3f::new(5.0, 6.0, 7.0);
//! assert_eq!(p - q, Vector3f::new(-2.0, -4.0, -6.0));
//! ```
//!
//! # Rays
//!
//! A **ray** is a semi-infinite line specified by its origin and
//! direction, plus the time at which it was sampled.
//!
//! # Bounding Boxes
//!
//! **Bounds3f** describes an axis-aligned box by its minimum and
//! maximum corner. Unbounded primitives (planes, infinite cylinders
//! and cones) use infinite extents. A default box is *empty*: its
//! minimum is +inf and its maximum -inf, so growing it by any point
//! yields a box containing exactly that point.

// std
use std::ops;
use std::ops::{Index, IndexMut};
// others
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
// pbrt
use crate::core::pbrt::{float_eq, Float, EPSILON, INFINITY};

#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum XYZEnum {
    X = 0,
    Y = 1,
    Z = 2,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn abs(&self) -> Vector3f {
        Vector3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
}

impl PartialEq for Vector3f {
    fn eq(&self, rhs: &Vector3f) -> bool {
        float_eq(self.x, rhs.x) && float_eq(self.y, rhs.y) && float_eq(self.z, rhs.z)
    }
}

impl Index<XYZEnum> for Vector3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value if one means they are
/// codirectional.
pub fn vec3_dot_vec3(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Dot product of a vector and a normal.
pub fn vec3_dot_nrm(v1: &Vector3f, n2: &Normal3f) -> Float {
    v1.x * n2.x + v1.y * n2.y + v1.z * n2.z
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them.
pub fn vec3_cross_vec3(v1: &Vector3f, v2: &Vector3f) -> Vector3f {
    Vector3f {
        x: v1.y * v2.z - v1.z * v2.y,
        y: v1.z * v2.x - v1.x * v2.z,
        z: v1.x * v2.y - v1.y * v2.x,
    }
}

/// Mirror the incoming vector *v* about the normal *n*.
pub fn vec3_reflect(v: &Vector3f, n: &Normal3f) -> Vector3f {
    let n: Vector3f = Vector3f::from(*n);
    *v - n * (2.0 * vec3_dot_vec3(v, &n))
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

impl Point2f {
    pub fn new(x: Float, y: Float) -> Self {
        Point2f { x, y }
    }
}

impl PartialEq for Point2f {
    fn eq(&self, rhs: &Point2f) -> bool {
        float_eq(self.x, rhs.x) && float_eq(self.y, rhs.y)
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
    pub fn origin() -> Self {
        Point3f::default()
    }
}

impl PartialEq for Point3f {
    fn eq(&self, rhs: &Point3f) -> bool {
        float_eq(self.x, rhs.x) && float_eq(self.y, rhs.y) && float_eq(self.z, rhs.z)
    }
}

impl Index<XYZEnum> for Point3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            _ => &self.z,
        }
    }
}

impl IndexMut<XYZEnum> for Point3f {
    fn index_mut(&mut self, index: XYZEnum) -> &mut Float {
        match index {
            XYZEnum::X => &mut self.x,
            XYZEnum::Y => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Point3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

pub fn pnt3_distance(p1: &Point3f, p2: &Point3f) -> Float {
    (*p1 - *p2).length()
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Normal3f { x, y, z }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    pub fn normalize(&self) -> Normal3f {
        *self / self.length()
    }
}

impl PartialEq for Normal3f {
    fn eq(&self, rhs: &Normal3f) -> bool {
        float_eq(self.x, rhs.x) && float_eq(self.y, rhs.y) && float_eq(self.z, rhs.z)
    }
}

impl From<Vector3f> for Normal3f {
    fn from(v: Vector3f) -> Self {
        Normal3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

pub fn nrm_dot_vec3(n1: &Normal3f, v2: &Vector3f) -> Float {
    n1.x * v2.x + n1.y * v2.y + n1.z * v2.z
}

impl_op!(-|a: Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op!(-|a: Normal3f| -> Normal3f {
    Normal3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(+|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: &Normal3f, b: Float| -> Normal3f {
    Normal3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(/|a: &Normal3f, b: Float| -> Normal3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Normal3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op!(+= |a: &mut Point3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_op!(+= |a: &mut Vector3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

#[derive(Debug, Copy, Clone)]
pub struct Bounds3f {
    pub p_min: Point3f,
    pub p_max: Point3f,
}

impl Default for Bounds3f {
    fn default() -> Bounds3f {
        Bounds3f::empty()
    }
}

impl PartialEq for Bounds3f {
    fn eq(&self, rhs: &Bounds3f) -> bool {
        self.p_min == rhs.p_min && self.p_max == rhs.p_max
    }
}

impl Bounds3f {
    /// The box spanned by two arbitrary corner points.
    pub fn new(p1: Point3f, p2: Point3f) -> Self {
        let p_min: Point3f = Point3f {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            z: p1.z.min(p2.z),
        };
        let p_max: Point3f = Point3f {
            x: p1.x.max(p2.x),
            y: p1.y.max(p2.y),
            z: p1.z.max(p2.z),
        };
        Bounds3f { p_min, p_max }
    }
    /// A box containing nothing; the neutral element of [Bounds3f::union].
    pub fn empty() -> Self {
        Bounds3f {
            p_min: Point3f {
                x: INFINITY,
                y: INFINITY,
                z: INFINITY,
            },
            p_max: Point3f {
                x: -INFINITY,
                y: -INFINITY,
                z: -INFINITY,
            },
        }
    }
    pub fn is_empty(&self) -> bool {
        self.p_min.x > self.p_max.x || self.p_min.y > self.p_max.y || self.p_min.z > self.p_max.z
    }
    pub fn corner(&self, corner: u8) -> Point3f {
        assert!(corner < 8_u8);
        let x: Float = if corner & 1 == 0 {
            self.p_min.x
        } else {
            self.p_max.x
        };
        let y: Float = if corner & 2 == 0 {
            self.p_min.y
        } else {
            self.p_max.y
        };
        let z: Float = if corner & 4 == 0 {
            self.p_min.z
        } else {
            self.p_max.z
        };
        Point3f { x, y, z }
    }
    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }
    pub fn centroid(&self) -> Point3f {
        Point3f {
            x: centre(self.p_min.x, self.p_max.x),
            y: centre(self.p_min.y, self.p_max.y),
            z: centre(self.p_min.z, self.p_max.z),
        }
    }
    pub fn surface_area(&self) -> Float {
        let d: Vector3f = self.diagonal();
        // 2 * (d.x * d.y + d.x * d.z + d.y * d.z)
        let r: Float = d.x * d.y + d.x * d.z + d.y * d.z;
        r + r // avoid '2 *'
    }
    pub fn maximum_extent(&self) -> XYZEnum {
        let d: Vector3f = self.diagonal();
        if d.x > d.y && d.x > d.z {
            XYZEnum::X
        } else if d.y > d.z {
            XYZEnum::Y
        } else {
            XYZEnum::Z
        }
    }
    /// Position of *p* relative to the corners of the box; (0, 0, 0)
    /// at the minimum, (1, 1, 1) at the maximum corner.
    pub fn offset(&self, p: &Point3f) -> Vector3f {
        let mut o: Vector3f = p - self.p_min;
        if self.p_max.x > self.p_min.x {
            o.x /= self.p_max.x - self.p_min.x;
        }
        if self.p_max.y > self.p_min.y {
            o.y /= self.p_max.y - self.p_min.y;
        }
        if self.p_max.z > self.p_min.z {
            o.z /= self.p_max.z - self.p_min.z;
        }
        o
    }
    /// Grow the box so it contains *p*.
    pub fn union_point(&self, p: &Point3f) -> Bounds3f {
        bnd3_union_pnt3(self, p)
    }
    /// Merge two boxes.
    pub fn union(&self, b: &Bounds3f) -> Bounds3f {
        bnd3_union_bnd3(self, b)
    }
    pub fn contains_point(&self, p: &Point3f) -> bool {
        pnt3_inside_bnd3(p, self)
    }
    pub fn contains_bounds(&self, b: &Bounds3f) -> bool {
        b.is_empty() || (self.contains_point(&b.p_min) && self.contains_point(&b.p_max))
    }
    /// Slab test. Returns the parametric interval `(t0, t1)` over which
    /// the (infinite) ray line is inside the box, or `None` if it
    /// misses. Both ends may be negative, and unbounded axes or axes
    /// the ray runs parallel to contribute `(-inf, inf)`.
    pub fn intersect_interval(&self, ray: &Ray) -> Option<(Float, Float)> {
        if self.is_empty() {
            return None;
        }
        let mut t0: Float = -INFINITY;
        let mut t1: Float = INFINITY;
        for i in XYZEnum::iter() {
            // update interval for _i_th bounding box slab
            let (t_near, t_far) = if ray.d[i].abs() < EPSILON {
                if ray.o[i] < self.p_min[i] || ray.o[i] > self.p_max[i] {
                    return None;
                }
                (-INFINITY, INFINITY)
            } else {
                let inv_ray_dir: Float = 1.0 as Float / ray.d[i];
                let mut t_near: Float = (self.p_min[i] - ray.o[i]) * inv_ray_dir;
                let mut t_far: Float = (self.p_max[i] - ray.o[i]) * inv_ray_dir;
                if t_near > t_far {
                    std::mem::swap(&mut t_near, &mut t_far);
                }
                (t_near, t_far)
            };
            // update parametric interval from slab intersection $t$ values
            if t_near > t0 {
                t0 = t_near;
            }
            if t_far < t1 {
                t1 = t_far;
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
    /// Does the ray line pass through the box at all?
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.intersect_interval(ray).is_some()
    }
}

fn centre(lo: Float, hi: Float) -> Float {
    // unbounded on both sides would give NaN
    if lo.is_infinite() && hi.is_infinite() && lo < 0.0 && hi > 0.0 {
        0.0
    } else {
        lo * 0.5 + hi * 0.5
    }
}

/// Given a bounding box and a point, the **bnd3_union_pnt3()**
/// function returns a new bounding box that encompasses that point as
/// well as the original box.
pub fn bnd3_union_pnt3(b: &Bounds3f, p: &Point3f) -> Bounds3f {
    let p_min: Point3f = Point3f {
        x: b.p_min.x.min(p.x),
        y: b.p_min.y.min(p.y),
        z: b.p_min.z.min(p.z),
    };
    let p_max: Point3f = Point3f {
        x: b.p_max.x.max(p.x),
        y: b.p_max.y.max(p.y),
        z: b.p_max.z.max(p.z),
    };
    Bounds3f { p_min, p_max }
}

/// Construct a new box that bounds the space encompassed by two other
/// bounding boxes.
pub fn bnd3_union_bnd3(b1: &Bounds3f, b2: &Bounds3f) -> Bounds3f {
    let p_min: Point3f = Point3f {
        x: b1.p_min.x.min(b2.p_min.x),
        y: b1.p_min.y.min(b2.p_min.y),
        z: b1.p_min.z.min(b2.p_min.z),
    };
    let p_max: Point3f = Point3f {
        x: b1.p_max.x.max(b2.p_max.x),
        y: b1.p_max.y.max(b2.p_max.y),
        z: b1.p_max.z.max(b2.p_max.z),
    };
    Bounds3f { p_min, p_max }
}

/// Determine if a given point is inside the bounding box.
pub fn pnt3_inside_bnd3(p: &Point3f, b: &Bounds3f) -> bool {
    p.x >= b.p_min.x
        && p.x <= b.p_max.x
        && p.y >= b.p_min.y
        && p.y <= b.p_max.y
        && p.z >= b.p_min.z
        && p.z <= b.p_max.z
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Ray {
    /// origin
    pub o: Point3f,
    /// direction
    pub d: Vector3f,
    /// used for animations
    pub time: Float,
}

impl Ray {
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Ray { o, d, time: 0.0 }
    }
    pub fn with_time(&self, time: Float) -> Self {
        Ray {
            o: self.o,
            d: self.d,
            time,
        }
    }
    // Point3f operator()(Float t) const { return o + d * t; }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}
