// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::Spectrum;
use crate::core::texture::Pattern;

// see checkerboard.h

/// Three dimensional checkers: unit cubes alternating between *a* and
/// *b*.
#[derive(Debug, Clone)]
pub struct CheckerPattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl CheckerPattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        CheckerPattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        let sum: i64 = p.x.floor() as i64 + p.y.floor() as i64 + p.z.floor() as i64;
        if sum.rem_euclid(2) == 0 {
            self.a.pattern_at_parent(p)
        } else {
            self.b.pattern_at_parent(p)
        }
    }
}
