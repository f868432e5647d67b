//! A **Pattern** maps a point to a colour. It's evaluated in its own
//! pattern space, which is reached from world space in two steps:
//!
//! 1. world space to object space of the shape being shaded (through
//!    all of the shape's ancestors),
//! 2. object space to pattern space (through the pattern's own
//!    transform).
//!
//! Composite patterns (stripes, rings, checkers, ...) combine two
//! child patterns. A child applies its own transform to the point it
//! receives from its parent, so patterns nest freely.
//!
//! The Perlin noise in this module is used by
//! [PerturbPattern](crate::textures::perturb::PerturbPattern) to jitter
//! the point before delegating.

// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::lerp;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::shape::Shape;
use crate::core::transform::Transform;
use crate::textures::blend::BlendPattern;
use crate::textures::checkerboard::CheckerPattern;
use crate::textures::gradient::{GradientPattern, RadialGradientPattern};
use crate::textures::perturb::PerturbPattern;
use crate::textures::ring::RingPattern;
use crate::textures::stripe::StripePattern;

// Perlin Noise Data
pub const NOISE_PERM_SIZE: usize = 256;
pub const NOISE_PERM: [u8; 2 * NOISE_PERM_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180, 151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194,
    233, 7, 225, 140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234,
    75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174,
    20, 125, 136, 171, 168, 68, 175, 74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83,
    111, 229, 122, 60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25,
    63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188,
    159, 86, 164, 100, 109, 198, 173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147,
    118, 126, 255, 82, 85, 212, 207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170,
    213, 119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253,
    19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193,
    238, 210, 144, 12, 191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31,
    181, 199, 106, 157, 184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

#[derive(Debug, Clone)]
pub enum PatternKind {
    Solid(Spectrum),
    Stripe(StripePattern),
    Gradient(GradientPattern),
    RadialGradient(RadialGradientPattern),
    Ring(RingPattern),
    Checker(CheckerPattern),
    Blend(BlendPattern),
    Perturb(PerturbPattern),
}

#[derive(Debug, Clone)]
pub struct Pattern {
    pub kind: PatternKind,
    /// object (or parent pattern) space to pattern space
    pub transform: Transform,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Pattern {
            kind,
            transform: Transform::default(),
        }
    }
    pub fn solid(color: Spectrum) -> Self {
        Pattern::new(PatternKind::Solid(color))
    }
    pub fn stripe(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::Stripe(StripePattern::new(a, b)))
    }
    pub fn gradient(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::Gradient(GradientPattern::new(a, b)))
    }
    pub fn radial_gradient(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::RadialGradient(RadialGradientPattern::new(a, b)))
    }
    pub fn ring(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::Ring(RingPattern::new(a, b)))
    }
    pub fn checker(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::Checker(CheckerPattern::new(a, b)))
    }
    pub fn blend(a: Pattern, b: Pattern) -> Self {
        Pattern::new(PatternKind::Blend(BlendPattern::new(a, b)))
    }
    pub fn perturb(pattern: Pattern, scale: Float) -> Self {
        Pattern::new(PatternKind::Perturb(PerturbPattern::new(pattern, scale)))
    }
    /// The pattern transform maps pattern space to object space, just
    /// like a shape's transform.
    pub fn with_transform(self, transform: Transform) -> Self {
        Pattern {
            kind: self.kind,
            transform,
        }
    }
    /// Colour at a point which is already in this pattern's space.
    pub fn pattern_at(&self, p: &Point3f) -> Spectrum {
        match &self.kind {
            PatternKind::Solid(color) => *color,
            PatternKind::Stripe(pattern) => pattern.evaluate(p),
            PatternKind::Gradient(pattern) => pattern.evaluate(p),
            PatternKind::RadialGradient(pattern) => pattern.evaluate(p),
            PatternKind::Ring(pattern) => pattern.evaluate(p),
            PatternKind::Checker(pattern) => pattern.evaluate(p),
            PatternKind::Blend(pattern) => pattern.evaluate(p),
            PatternKind::Perturb(pattern) => pattern.evaluate(p),
        }
    }
    /// Colour at a point given in the space of the enclosing pattern
    /// (or object space for the outermost one).
    pub fn pattern_at_parent(&self, p: &Point3f) -> Spectrum {
        let pattern_point: Point3f = self.transform.inverse().transform_point(p);
        self.pattern_at(&pattern_point)
    }
    /// Colour at a world space point on *shape*.
    pub fn pattern_at_shape(&self, shape: &Shape, world_point: &Point3f) -> Spectrum {
        let object_point: Point3f = shape
            .world_transform()
            .inverse()
            .transform_point(world_point);
        self.pattern_at_parent(&object_point)
    }
}

pub fn noise_flt(x: Float, y: Float, z: Float) -> Float {
    // compute noise cell coordinates and offsets
    let mut ix: i32 = x.floor() as i32;
    let mut iy: i32 = y.floor() as i32;
    let mut iz: i32 = z.floor() as i32;
    let dx: Float = x - ix as Float;
    let dy: Float = y - iy as Float;
    let dz: Float = z - iz as Float;
    // compute gradient weights
    ix &= NOISE_PERM_SIZE as i32 - 1;
    iy &= NOISE_PERM_SIZE as i32 - 1;
    iz &= NOISE_PERM_SIZE as i32 - 1;
    let w000: Float = grad(ix, iy, iz, dx, dy, dz);
    let w100: Float = grad(ix + 1, iy, iz, dx - 1.0, dy, dz);
    let w010: Float = grad(ix, iy + 1, iz, dx, dy - 1.0, dz);
    let w110: Float = grad(ix + 1, iy + 1, iz, dx - 1.0, dy - 1.0, dz);
    let w001: Float = grad(ix, iy, iz + 1, dx, dy, dz - 1.0);
    let w101: Float = grad(ix + 1, iy, iz + 1, dx - 1.0, dy, dz - 1.0);
    let w011: Float = grad(ix, iy + 1, iz + 1, dx, dy - 1.0, dz - 1.0);
    let w111: Float = grad(ix + 1, iy + 1, iz + 1, dx - 1.0, dy - 1.0, dz - 1.0);
    // compute trilinear interpolation of weights
    let wx: Float = noise_weight(dx);
    let wy: Float = noise_weight(dy);
    let wz: Float = noise_weight(dz);
    let x00: Float = lerp(wx, w000, w100);
    let x10: Float = lerp(wx, w010, w110);
    let x01: Float = lerp(wx, w001, w101);
    let x11: Float = lerp(wx, w011, w111);
    let y0: Float = lerp(wy, x00, x10);
    let y1: Float = lerp(wy, x01, x11);
    lerp(wz, y0, y1)
}

/// Perlin noise in about [-1, 1], zero at integer lattice points.
pub fn noise_pnt3(p: &Point3f) -> Float {
    noise_flt(p.x, p.y, p.z)
}

fn grad(x: i32, y: i32, z: i32, dx: Float, dy: Float, dz: Float) -> Float {
    let mut h: u8 =
        NOISE_PERM[NOISE_PERM[NOISE_PERM[x as usize] as usize + y as usize] as usize + z as usize];
    h &= 15_u8;
    let u = if h < 8_u8 || h == 12_u8 || h == 13_u8 {
        dx
    } else {
        dy
    };
    let v = if h < 4_u8 || h == 12_u8 || h == 13_u8 {
        dy
    } else {
        dz
    };
    let ret_u = if h & 1_u8 > 0_u8 { -u } else { u };
    let ret_v = if h & 2_u8 > 0_u8 { -v } else { v };
    ret_u + ret_v
}

fn noise_weight(t: Float) -> Float {
    let t3: Float = t * t * t;
    let t4: Float = t3 * t;
    6.0 * t4 * t - 15.0 * t4 + 10.0 * t3
}
