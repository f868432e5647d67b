// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::{lerp, Float, Spectrum};
use crate::core::texture::Pattern;

/// Linear blend from *a* to *b* along x, repeating every unit.
#[derive(Debug, Clone)]
pub struct GradientPattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl GradientPattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        GradientPattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        let fraction: Float = p.x - p.x.floor();
        lerp(
            fraction,
            self.a.pattern_at_parent(p),
            self.b.pattern_at_parent(p),
        )
    }
}

/// Like [GradientPattern], but following the distance from the y axis
/// instead of x.
#[derive(Debug, Clone)]
pub struct RadialGradientPattern {
    pub a: Box<Pattern>,
    pub b: Box<Pattern>,
}

impl RadialGradientPattern {
    pub fn new(a: Pattern, b: Pattern) -> Self {
        RadialGradientPattern {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        let distance: Float = (p.x * p.x + p.z * p.z).sqrt();
        let fraction: Float = distance - distance.floor();
        lerp(
            fraction,
            self.a.pattern_at_parent(p),
            self.b.pattern_at_parent(p),
        )
    }
}
