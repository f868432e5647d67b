//! Real roots of univariate polynomials.
//!
//! Degrees one and two are solved in closed form. Anything higher
//! (the torus produces quartics) goes through the eigenvalues of the
//! companion matrix, which is robust for the nearly repeated roots a
//! grazing ray produces. The eigenvalues are then polished with a few
//! Newton steps on the original polynomial.

// others
use nalgebra::DMatrix;
use smallvec::SmallVec;
// pbrt
use crate::core::pbrt::{quadratic, Float, EPSILON};

pub type Roots = SmallVec<[Float; 4]>;

/// Maximum imaginary part (relative to the magnitude of the root) of
/// an eigenvalue still counted as real.
const IMAGINARY_TOLERANCE: Float = 1e-5;
const NEWTON_STEPS: usize = 4;

/// Evaluate the polynomial and its derivative at *x* (Horner).
/// Coefficients are ordered from the highest degree down.
pub fn evaluate(coefficients: &[Float], x: Float) -> (Float, Float) {
    let mut p: Float = 0.0;
    let mut dp: Float = 0.0;
    for c in coefficients {
        dp = dp * x + p;
        p = p * x + c;
    }
    (p, dp)
}

/// All real roots, ascending. Coefficients are ordered from the
/// highest degree down, so `[1.0, -3.0, 2.0]` is x² - 3x + 2. Leading
/// coefficients close to zero are dropped, a constant polynomial has
/// no roots.
pub fn real_roots(coefficients: &[Float]) -> Roots {
    let scale: Float = coefficients
        .iter()
        .fold(0.0 as Float, |acc, c| acc.max(c.abs()));
    let mut roots: Roots = SmallVec::new();
    if scale == 0.0 as Float {
        return roots;
    }
    let first = coefficients
        .iter()
        .position(|c| c.abs() > EPSILON * scale * EPSILON);
    let coeffs: &[Float] = match first {
        Some(i) => &coefficients[i..],
        None => return roots,
    };
    match coeffs.len() {
        0 | 1 => {}
        2 => roots.push(-coeffs[1] / coeffs[0]),
        3 => match quadratic(coeffs[0], coeffs[1], coeffs[2]) {
            Some((t0, t1)) => {
                roots.push(t0);
                roots.push(t1);
            }
            // too flat for the quadratic formula, solve the linear part
            None if coeffs[0].abs() < EPSILON && coeffs[1].abs() > EPSILON => {
                roots.push(-coeffs[2] / coeffs[1]);
            }
            None => {}
        },
        _ => {
            for root in companion_roots(coeffs) {
                roots.push(polish(coeffs, root));
            }
            roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        }
    }
    roots
}

fn companion_roots(coeffs: &[Float]) -> Roots {
    let n: usize = coeffs.len() - 1;
    let lead: Float = coeffs[0];
    // x^n + a[n-1] x^(n-1) + ... + a[0]: ones below the diagonal,
    // the negated monic coefficients in the last column
    let mut companion: DMatrix<Float> = DMatrix::zeros(n, n);
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..n {
        companion[(i, n - 1)] = -coeffs[n - i] / lead;
    }
    let mut roots: Roots = SmallVec::new();
    for ev in companion.complex_eigenvalues().iter() {
        if ev.im.abs() <= IMAGINARY_TOLERANCE * ev.re.abs().max(1.0) {
            roots.push(ev.re);
        }
    }
    roots
}

fn polish(coeffs: &[Float], mut x: Float) -> Float {
    for _ in 0..NEWTON_STEPS {
        let (p, dp) = evaluate(coeffs, x);
        if dp.abs() < EPSILON || p == 0.0 as Float {
            break;
        }
        let next: Float = x - p / dp;
        if !next.is_finite() {
            break;
        }
        x = next;
    }
    x
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_and_quadratic_closed_form() {
        let r = real_roots(&[2.0, -4.0]);
        assert_eq!(r.len(), 1);
        assert_relative_eq!(r[0], 2.0);
        let r = real_roots(&[0.0, 1.0, -3.0, 2.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 1.0);
        assert_relative_eq!(r[1], 2.0);
    }

    #[test]
    fn constant_has_no_roots() {
        assert!(real_roots(&[0.0, 0.0, 5.0]).is_empty());
        assert!(real_roots(&[]).is_empty());
    }

    #[test]
    fn quartic_with_four_real_roots() {
        // (x - 1)(x - 2)(x - 3)(x - 4)
        let r = real_roots(&[1.0, -10.0, 35.0, -50.0, 24.0]);
        assert_eq!(r.len(), 4);
        for (got, want) in r.iter().zip([1.0, 2.0, 3.0, 4.0].iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn quartic_with_two_complex_roots() {
        // (x^2 + 1)(x - 3)(x + 5)
        let r = real_roots(&[1.0, 2.0, -14.0, 2.0, -15.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], -5.0, epsilon = 1e-9);
        assert_relative_eq!(r[1], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic() {
        // (x + 1)(x - 0.5)(x - 7)
        let r = real_roots(&[1.0, -6.5, -4.0, 3.5]);
        assert_eq!(r.len(), 3);
        assert_relative_eq!(r[0], -1.0, epsilon = 1e-9);
        assert_relative_eq!(r[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(r[2], 7.0, epsilon = 1e-9);
    }

    #[test]
    fn horner_evaluation() {
        let (p, dp) = evaluate(&[1.0, -3.0, 2.0], 3.0);
        assert_relative_eq!(p, 2.0);
        assert_relative_eq!(dp, 3.0);
    }
}
