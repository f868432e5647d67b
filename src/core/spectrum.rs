//! Colours are carried as RGB triples. Components are not clamped;
//! lights may be brighter than 1 and intermediate results of the
//! lighting model may exceed the displayable range.

// std
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub};
// others
use num::Zero;
// pbrt
use crate::core::pbrt::{clamp_t, float_eq, Float};

#[derive(Debug, Default, Copy, Clone)]
pub struct RGBSpectrum {
    pub c: [Float; 3],
}

impl RGBSpectrum {
    pub fn new(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }
    pub fn rgb(r: Float, g: Float, b: Float) -> RGBSpectrum {
        RGBSpectrum { c: [r, g, b] }
    }
    pub fn black() -> RGBSpectrum {
        RGBSpectrum::new(0.0 as Float)
    }
    pub fn white() -> RGBSpectrum {
        RGBSpectrum::new(1.0 as Float)
    }
    pub fn r(&self) -> Float {
        self.c[0]
    }
    pub fn g(&self) -> Float {
        self.c[1]
    }
    pub fn b(&self) -> Float {
        self.c[2]
    }
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0 as Float)
    }
    pub fn clamp(&self, low: Float, high: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                clamp_t(self.c[0], low, high),
                clamp_t(self.c[1], low, high),
                clamp_t(self.c[2], low, high),
            ],
        }
    }
}

impl PartialEq for RGBSpectrum {
    fn eq(&self, rhs: &RGBSpectrum) -> bool {
        float_eq(self.c[0], rhs.c[0])
            && float_eq(self.c[1], rhs.c[1])
            && float_eq(self.c[2], rhs.c[2])
    }
}

impl Add for RGBSpectrum {
    type Output = RGBSpectrum;
    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] + rhs.c[0],
                self.c[1] + rhs.c[1],
                self.c[2] + rhs.c[2],
            ],
        }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] += rhs.c[0];
        self.c[1] += rhs.c[1];
        self.c[2] += rhs.c[2];
    }
}

impl Mul for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] * rhs.c[0],
                self.c[1] * rhs.c[1],
                self.c[2] * rhs.c[2],
            ],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [self.c[0] * rhs, self.c[1] * rhs, self.c[2] * rhs],
        }
    }
}

impl MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Float) {
        self.c[0] *= rhs;
        self.c[1] *= rhs;
        self.c[2] *= rhs;
    }
}

impl Sub for RGBSpectrum {
    type Output = RGBSpectrum;
    fn sub(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] - rhs.c[0],
                self.c[1] - rhs.c[1],
                self.c[2] - rhs.c[2],
            ],
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn div(self, rhs: Float) -> RGBSpectrum {
        assert_ne!(rhs, 0.0 as Float);
        let inv: Float = 1.0 as Float / rhs;
        self * inv
    }
}

impl Zero for RGBSpectrum {
    fn zero() -> RGBSpectrum {
        RGBSpectrum::new(0.0 as Float)
    }
    fn is_zero(&self) -> bool {
        self.is_black()
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        &self.c[index]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        &mut self.c[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::pbrt::lerp;

    #[test]
    fn hadamard_product() {
        let c1 = RGBSpectrum::rgb(1.0, 0.2, 0.4);
        let c2 = RGBSpectrum::rgb(0.9, 1.0, 0.1);
        assert_eq!(c1 * c2, RGBSpectrum::rgb(0.9, 0.2, 0.04));
    }

    #[test]
    fn clamp_each_component() {
        let c = RGBSpectrum::rgb(1.5, -0.25, 0.5).clamp(0.0, 1.0);
        assert_eq!(c, RGBSpectrum::rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn lerp_between_colours() {
        let a = RGBSpectrum::white();
        let b = RGBSpectrum::black();
        assert_eq!(lerp(0.25, a, b), RGBSpectrum::new(0.75));
    }
}
