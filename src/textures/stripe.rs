// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::Spectrum;
use crate::core::texture::Pattern;

/// Alternates between *a* and *b* along x, switching at every integer.
#[derive(Debug, Clone)]
pub struct StripePattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl StripePattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        StripePattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        if (p.x.floor() as i64).rem_euclid(2) == 0 {
            self.a.pattern_at_parent(p)
        } else {
            self.b.pattern_at_parent(p)
        }
    }
}
