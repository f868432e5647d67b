// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::texture::{noise_flt, Pattern};

/// Jitters the point with Perlin noise before handing it to the
/// wrapped pattern, which breaks up the perfectly straight borders of
/// stripes, rings and checkers.
#[derive(Debug, Clone)]
pub struct PerturbPattern {
    pub pattern: Box<Pattern>,
    /// maximum displacement per axis
    pub scale: Float,
}

impl PerturbPattern {
    pub fn new(pattern: Pattern, scale: Float) -> Self {
        PerturbPattern {
            pattern: Box::new(pattern),
            scale,
        }
    }
    pub fn evaluate(&self, p: &Point3f) -> Spectrum {
        // three decorrelated noise values from shifted lookups
        let dx: Float = noise_flt(p.x, p.y, p.z) * self.scale;
        let dy: Float = noise_flt(p.x, p.y, p.z + 1.0) * self.scale;
        let dz: Float = noise_flt(p.x, p.y, p.z + 2.0) * self.scale;
        let jittered: Point3f = Point3f::new(p.x + dx, p.y + dy, p.z + dz);
        self.pattern.pattern_at_parent(&jittered)
    }
}
