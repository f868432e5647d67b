// pbrt
use crate::core::error::Result;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::area::AreaLight;
use crate::lights::spot::SpotCone;

/// An area light which only shines into a cone. The cone's apex is
/// the centre of the rectangle.
#[derive(Debug, Copy, Clone)]
pub struct AreaSpotLight {
    pub area: AreaLight,
    pub cone: SpotCone,
}

impl AreaSpotLight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        corner: Point3f,
        full_uvec: Vector3f,
        usteps: usize,
        full_vvec: Vector3f,
        vsteps: usize,
        direction: &Vector3f,
        falloff_start: Float,
        total_width: Float,
        intensity: Spectrum,
    ) -> Result<Self> {
        Ok(AreaSpotLight {
            area: AreaLight::new(corner, full_uvec, usteps, full_vvec, vsteps, intensity)?,
            cone: SpotCone::new(direction, falloff_start, total_width)?,
        })
    }
    pub fn falloff(&self, p: &Point3f) -> Float {
        self.cone.falloff(&self.area.position, p)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cone_starts_at_the_centre() {
        let l = AreaSpotLight::new(
            Point3f::new(-1.0, 5.0, -1.0),
            Vector3f::new(2.0, 0.0, 0.0),
            2,
            Vector3f::new(0.0, 0.0, 2.0),
            2,
            &Vector3f::new(0.0, -1.0, 0.0),
            10.0,
            20.0,
            Spectrum::white(),
        )
        .unwrap();
        assert_eq!(l.area.position, Point3f::new(0.0, 5.0, 0.0));
        assert_eq!(l.falloff(&Point3f::new(0.0, 0.0, 0.0)), 1.0);
        assert_eq!(l.falloff(&Point3f::new(5.0, 0.0, 0.0)), 0.0);
        assert_eq!(l.area.n_samples(), 4);
    }
}
