//! In general, transformations make it possible to work in the most
//! convenient coordinate space. Every shape does its intersection and
//! normal math in a canonical object space (the unit sphere at the
//! origin, the y = 0 plane, ...) and a **Transform** carries rays into
//! that space and normals back out of it.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//! Inversion is cofactor based and fails for a (nearly) singular
//! matrix.
//!
//! ## Transformations
//!
//! When a new **Transform** is created, it defaults to the *identity
//! transformation*. A transform stores both its matrix and the inverse
//! of it, so applying the inverse (which is what shapes do with every
//! ray) costs nothing extra.
//!
//! ### Translations
//!
//! Translations only affect points, leaving vectors unchanged.
//!
//! ```rust
//! use rs_raykernel::core::geometry::{Point3f, Vector3f};
//! use rs_raykernel::core::transform::Transform;
//!
//! let t = Transform::translate(&Vector3f::new(5.0, -3.0, 2.0));
//! let p = Point3f::new(-3.0, 4.0, 5.0);
//! assert_eq!(t.transform_point(&p), Point3f::new(2.0, 1.0, 7.0));
//! let v = Vector3f::new(-3.0, 4.0, 5.0);
//! assert_eq!(t.transform_vector(&v), v);
//! ```
//!
//! ### Scaling, Rotations and Shearing
//!
//! Scaling may be uniform or nonuniform, rotations are given in
//! degrees around the x, y or z axis (or an arbitrary axis), and a
//! shearing moves each component in proportion to the other two.
//!
//! ### The Look-At Transformation
//!
//! The view transformation orients the world relative to an eye
//! position. It's the only piece of camera machinery the kernel
//! provides, for callers which build their rays in eye space.

// std
use std::ops::Mul;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{
    vec3_cross_vec3, Bounds3f, Normal3f, Point3f, Ray, Vector3f, XYZEnum,
};
use crate::core::pbrt::{float_eq, radians, Float, EPSILON, INFINITY};

// see transform.h

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn identity() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
    pub fn transpose(&self) -> Matrix4x4 {
        let m = &self.m;
        Matrix4x4 {
            m: [
                [m[0][0], m[1][0], m[2][0], m[3][0]],
                [m[0][1], m[1][1], m[2][1], m[3][1]],
                [m[0][2], m[1][2], m[2][2], m[3][2]],
                [m[0][3], m[1][3], m[2][3], m[3][3]],
            ],
        }
    }
    /// Determinant of the 3x3 matrix left after removing *row* and
    /// *col*.
    pub fn minor(&self, row: usize, col: usize) -> Float {
        let mut sub: [[Float; 3]; 3] = [[0.0; 3]; 3];
        let mut si: usize = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut sj: usize = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                sub[si][sj] = self.m[i][j];
                sj += 1;
            }
            si += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }
    pub fn cofactor(&self, row: usize, col: usize) -> Float {
        let minor: Float = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
    pub fn determinant(&self) -> Float {
        (0..4).map(|j| self.m[0][j] * self.cofactor(0, j)).sum()
    }
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() >= EPSILON
    }
    /// Cofactor-based inverse. Fails with
    /// [KernelError::SingularMatrix] if the determinant is (nearly)
    /// zero.
    pub fn inverse(&self) -> Result<Matrix4x4> {
        let determinant: Float = self.determinant();
        if determinant.abs() < EPSILON {
            return Err(KernelError::SingularMatrix { determinant });
        }
        let mut inv: Matrix4x4 = Matrix4x4::identity();
        for row in 0..4 {
            for col in 0..4 {
                // transposed on purpose (adjugate)
                inv.m[col][row] = self.cofactor(row, col) / determinant;
            }
        }
        Ok(inv)
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !float_eq(self.m[i][j], rhs.m[i][j]) {
                    return false;
                }
            }
        }
        true
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::identity();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        mtx_mul(&self, &rhs)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            m: Matrix4x4::identity(),
            m_inv: Matrix4x4::identity(),
        }
    }
}

impl Transform {
    /// Wrap an arbitrary matrix, computing its inverse.
    pub fn from_matrix(m: Matrix4x4) -> Result<Transform> {
        let m_inv: Matrix4x4 = m.inverse()?;
        Ok(Transform { m, m_inv })
    }
    pub fn inverse(&self) -> Transform {
        Transform {
            m: self.m_inv,
            m_inv: self.m,
        }
    }
    pub fn transpose(&self) -> Transform {
        Transform {
            m: self.m.transpose(),
            m_inv: self.m_inv.transpose(),
        }
    }
    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::identity()
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, delta.x, 0.0, 1.0, 0.0, delta.y, 0.0, 0.0, 1.0, delta.z, 0.0, 0.0,
                0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -delta.x, 0.0, 1.0, 0.0, -delta.y, 0.0, 0.0, 1.0, -delta.z, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
    /// Scale by the given factors. None of them may be zero.
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        assert!(
            x != 0.0 && y != 0.0 && z != 0.0,
            "scale factors must be non-zero ({}, {}, {})",
            x,
            y,
            z
        );
        Transform {
            m: Matrix4x4::new(
                x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0 / x,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / y,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / z,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ),
        }
    }
    pub fn rotate_x(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: m.transpose(),
        }
    }
    pub fn rotate_y(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            cos_theta, 0.0, sin_theta, 0.0, 0.0, 1.0, 0.0, 0.0, -sin_theta, 0.0, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: m.transpose(),
        }
    }
    pub fn rotate_z(theta: Float) -> Transform {
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let m = Matrix4x4::new(
            cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: m.transpose(),
        }
    }
    /// Rotation by *theta* degrees around an arbitrary axis.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Transform {
        let a: Vector3f = axis.normalize();
        let sin_theta: Float = radians(theta).sin();
        let cos_theta: Float = radians(theta).cos();
        let mut m = Matrix4x4::identity();
        // compute rotation of first basis vector
        m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        // compute rotations of second basis vectors
        m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        // compute rotations of third basis vectors
        m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        Transform {
            m,
            m_inv: m.transpose(),
        }
    }
    /// Shearing: x moves in proportion to y (*xy*) and z (*xz*), and so
    /// on. Some combinations are singular, hence the `Result`.
    pub fn shearing(xy: Float, xz: Float, yx: Float, yz: Float, zx: Float, zy: Float) -> Result<Transform> {
        Transform::from_matrix(Matrix4x4::new(
            1.0, xy, xz, 0.0, yx, 1.0, yz, 0.0, zx, zy, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ))
    }
    /// Orient the world relative to an eye at *from*, looking at *to*.
    pub fn view_transform(from: &Point3f, to: &Point3f, up: &Vector3f) -> Result<Transform> {
        let forward: Vector3f = *to - *from;
        if forward.length_squared() < EPSILON * EPSILON {
            return Err(KernelError::invalid("to", "eye and target coincide"));
        }
        let forward: Vector3f = forward.normalize();
        let left: Vector3f = vec3_cross_vec3(&forward, &up.normalize());
        if left.length_squared() < EPSILON * EPSILON {
            return Err(KernelError::invalid("up", "parallel to the viewing direction"));
        }
        let true_up: Vector3f = vec3_cross_vec3(&left, &forward);
        let orientation: Matrix4x4 = Matrix4x4::new(
            left.x, left.y, left.z, 0.0, true_up.x, true_up.y, true_up.z, 0.0, -forward.x,
            -forward.y, -forward.z, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let orientation = Transform {
            m: orientation,
            m_inv: orientation.transpose(),
        };
        Ok(orientation * Transform::translate(&Vector3f::new(-from.x, -from.y, -from.z)))
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Normals transform with the inverse transpose. The result is not
    /// normalized.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let x: Float = n.x;
        let y: Float = n.y;
        let z: Float = n.z;
        Normal3f {
            x: self.m_inv.m[0][0] * x + self.m_inv.m[1][0] * y + self.m_inv.m[2][0] * z,
            y: self.m_inv.m[0][1] * x + self.m_inv.m[1][1] * y + self.m_inv.m[2][1] * z,
            z: self.m_inv.m[0][2] * x + self.m_inv.m[1][2] * y + self.m_inv.m[2][2] * z,
        }
    }
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        Ray {
            o: self.transform_point(&r.o),
            d: self.transform_vector(&r.d),
            time: r.time,
        }
    }
    /// Transform all 8 corners and bound them again. Infinite extents
    /// survive: a matrix entry of zero never multiplies an infinity,
    /// and an axis ending up with +inf - inf is unbounded.
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        if b.is_empty() {
            return *b;
        }
        let mut ret: Bounds3f = Bounds3f::empty();
        let mut unbounded: [bool; 3] = [false; 3];
        for corner in 0..8_u8 {
            let c: Point3f = b.corner(corner);
            let c: [Float; 3] = [c.x, c.y, c.z];
            let mut p: [Float; 3] = [0.0; 3];
            for (i, pi) in p.iter_mut().enumerate() {
                let mut sum: Float = self.m.m[i][3];
                for (j, cj) in c.iter().enumerate() {
                    if self.m.m[i][j] != 0.0 {
                        sum += self.m.m[i][j] * cj;
                    }
                }
                if sum.is_nan() {
                    unbounded[i] = true;
                }
                *pi = sum;
            }
            ret = ret.union_point(&Point3f::new(p[0], p[1], p[2]));
        }
        for (i, axis) in [XYZEnum::X, XYZEnum::Y, XYZEnum::Z].iter().enumerate() {
            if unbounded[i] {
                ret.p_min[*axis] = -INFINITY;
                ret.p_max[*axis] = INFINITY;
            }
        }
        ret
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        rhs.m == self.m && rhs.m_inv == self.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}
