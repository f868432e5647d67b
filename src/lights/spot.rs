// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{vec3_dot_vec3, Point3f, Vector3f};
use crate::core::pbrt::{radians, Float, Spectrum, EPSILON};

/// Cone of a spot light. Inside *falloff_start* (degrees from the
/// axis) the light has full strength, it fades linearly to zero at
/// *total_width*.
#[derive(Debug, Copy, Clone)]
pub struct SpotCone {
    /// normalized axis
    pub direction: Vector3f,
    pub cos_total_width: Float,
    pub cos_falloff_start: Float,
}

impl SpotCone {
    pub fn new(direction: &Vector3f, falloff_start: Float, total_width: Float) -> Result<Self> {
        if direction.length() < EPSILON {
            return Err(KernelError::invalid("direction", "must not be zero"));
        }
        if falloff_start < 0.0 as Float {
            return Err(KernelError::invalid("falloff_start", "negative angle"));
        }
        if !(total_width <= 180.0 as Float) {
            return Err(KernelError::invalid(
                "total_width",
                format!("{} degrees is more than a half turn from the axis", total_width),
            ));
        }
        if falloff_start > total_width {
            return Err(KernelError::invalid(
                "falloff_start",
                format!("{} is wider than the outer angle {}", falloff_start, total_width),
            ));
        }
        Ok(SpotCone {
            direction: direction.normalize(),
            cos_total_width: radians(total_width).cos(),
            cos_falloff_start: radians(falloff_start).cos(),
        })
    }
    /// Attenuation at *p* for a cone with its apex at *apex*.
    pub fn falloff(&self, apex: &Point3f, p: &Point3f) -> Float {
        let w: Vector3f = *p - *apex;
        let length: Float = w.length();
        if length < EPSILON {
            return 1.0 as Float;
        }
        let cos_theta: Float = vec3_dot_vec3(&(w / length), &self.direction);
        if cos_theta >= self.cos_falloff_start {
            return 1.0 as Float;
        }
        if cos_theta <= self.cos_total_width {
            return 0.0 as Float;
        }
        // linear between the two cones
        (cos_theta - self.cos_total_width) / (self.cos_falloff_start - self.cos_total_width)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct SpotLight {
    pub position: Point3f,
    pub cone: SpotCone,
    pub intensity: Spectrum,
}

impl SpotLight {
    pub fn new(
        position: Point3f,
        direction: &Vector3f,
        falloff_start: Float,
        total_width: Float,
        intensity: Spectrum,
    ) -> Result<Self> {
        Ok(SpotLight {
            position,
            cone: SpotCone::new(direction, falloff_start, total_width)?,
            intensity,
        })
    }
    pub fn falloff(&self, p: &Point3f) -> Float {
        self.cone.falloff(&self.position, p)
    }
}
