//! Type definitions of Float and Spectrum, otherwise constants and
//! functions which can be used almost everywhere else in the code.

// std
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};
// others
use num;
// pbrt
use crate::core::spectrum::RGBSpectrum;

pub type Spectrum = RGBSpectrum;

pub type Float = f64;

/// Tolerance of the shared comparator. Every geometric equality test
/// in the kernel goes through [float_eq] or compares against this
/// value.
pub const EPSILON: Float = 1e-6;
/// Distance a shading point is pushed off the surface before shadow
/// or secondary rays are spawned from it.
pub const SHADOW_EPSILON: Float = 1e-5;
pub const INFINITY: Float = std::f64::INFINITY;

/// Epsilon comparison of two floats. Infinities of the same sign
/// compare equal.
pub fn float_eq(a: Float, b: Float) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < EPSILON
}

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Convert from angles expressed in radians to degrees.
pub fn degrees(rad: Float) -> Float {
    (180.0 / PI) * rad
}

/// Interpolate linearly between two provided values.
pub fn lerp<S, T>(t: S, a: T, b: T) -> T
where
    S: num::One,
    S: Sub<S, Output = S>,
    S: Copy,
    T: Add<T, Output = T>,
    T: Mul<S, Output = T>,
{
    let one: S = num::One::one();
    a * (one - t) + b * t
}

/// Find solution(s) of the quadratic equation at<sup>2</sup> + bt + c = 0.
///
/// The roots come back ordered. A tangent (zero discriminant) yields
/// the same root twice. A leading coefficient close to zero is not a
/// quadratic and returns `None`, callers decide what a degenerate
/// equation means for them.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    if a.abs() < EPSILON {
        return None;
    }
    // find quadratic discriminant
    let discrim: Float = b * b - 4.0 * a * c;
    if discrim < 0.0 {
        return None;
    }
    let root_discrim: Float = discrim.sqrt();
    // compute quadratic _t_ values
    let q: Float = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    if q == 0.0 {
        // b == 0 and c == 0, double root at zero
        return Some((0.0, 0.0));
    }
    let mut t0: Float = q / a;
    let mut t1: Float = c / q;
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    Some((t0, t1))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quadratic_orders_roots() {
        // (t - 4) (t - 6)
        let (t0, t1) = quadratic(1.0, -10.0, 24.0).unwrap();
        assert!(float_eq(t0, 4.0));
        assert!(float_eq(t1, 6.0));
    }

    #[test]
    fn quadratic_tangent_is_double_root() {
        let (t0, t1) = quadratic(1.0, -2.0, 1.0).unwrap();
        assert!(float_eq(t0, 1.0));
        assert!(float_eq(t1, 1.0));
    }

    #[test]
    fn quadratic_without_real_roots() {
        assert!(quadratic(1.0, 0.0, 1.0).is_none());
        assert!(quadratic(0.0, 2.0, 1.0).is_none());
    }

    #[test]
    fn angle_conversions() {
        assert!(float_eq(radians(180.0), std::f64::consts::PI));
        assert!(float_eq(degrees(std::f64::consts::FRAC_PI_4), 45.0));
    }

    #[test]
    fn float_eq_tolerates_rounding() {
        assert!(float_eq(0.1 + 0.2, 0.3));
        assert!(!float_eq(1.0, 1.0 + 1e-4));
        assert!(float_eq(INFINITY, INFINITY));
        assert!(!float_eq(INFINITY, -INFINITY));
    }
}
