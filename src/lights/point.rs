// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::Spectrum;

/// Isotropic point light source that emits the same amount of light
/// in all directions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Point3f,
    pub intensity: Spectrum,
}

impl PointLight {
    pub fn new(position: Point3f, intensity: Spectrum) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}
