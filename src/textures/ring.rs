// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::texture::Pattern;

/// Concentric rings around the y axis.
#[derive(Debug, Clone)]
pub struct RingPattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl RingPattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        RingPattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        let distance: Float = (p.x * p.x + p.z * p.z).sqrt();
        if (distance.floor() as i64).rem_euclid(2) == 0 {
            self.a.pattern_at_parent(p)
        } else {
            self.b.pattern_at_parent(p)
        }
    }
}
