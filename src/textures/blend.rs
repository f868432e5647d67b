// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::Spectrum;
use crate::core::texture::Pattern;

/// The average of two patterns.
#[derive(Debug, Clone)]
pub struct BlendPattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl BlendPattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        BlendPattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        (self.a.pattern_at_parent(p) + self.b.pattern_at_parent(p)) * 0.5
    }
}
