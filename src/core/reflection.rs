//! When light is incident on the surface, the surface scatters the
//! light, reflecting some of it back into the environment. The kernel
//! models this with the Phong reflection model:
//!
//! - an ambient term, independent of the light's position and never
//!   shadowed,
//! - a diffuse term, proportional to the cosine between the normal
//!   and the direction to the light,
//! - a specular term, the cosine between the reflected light
//!   direction and the eye raised to the material's shininess.
//!
//! For lights with several sample points the diffuse and specular
//! terms are averaged over the samples. The average is scaled by the
//! spot falloff and by `1 - shadow`, where *shadow* is the fraction
//! of samples hidden from the point.

// pbrt
use crate::core::geometry::{vec3_dot_nrm, vec3_dot_vec3, vec3_reflect};
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::material::Material;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::shape::Shape;

/// Phong shading of *point* on *shape*, using the light's
/// deterministic sample points.
pub fn lighting(
    material: &Material,
    shape: &Shape,
    light: &Light,
    point: &Point3f,
    eyev: &Vector3f,
    normalv: &Normal3f,
    shadow: Float,
) -> Spectrum {
    lighting_with_samples(
        material,
        shape,
        light,
        &light.samples(),
        point,
        eyev,
        normalv,
        shadow,
    )
}

/// Phong shading with an explicit set of light sample points (for
/// example jittered ones).
#[allow(clippy::too_many_arguments)]
pub fn lighting_with_samples(
    material: &Material,
    shape: &Shape,
    light: &Light,
    samples: &[Point3f],
    point: &Point3f,
    eyev: &Vector3f,
    normalv: &Normal3f,
    shadow: Float,
) -> Spectrum {
    let color: Spectrum = material.pattern.pattern_at_shape(shape, point);
    let effective_color: Spectrum = color * light.intensity();
    let ambient: Spectrum = effective_color * material.ambient;
    if samples.is_empty() {
        return ambient;
    }
    let mut sum: Spectrum = Spectrum::black();
    for sample in samples {
        let lightv: Vector3f = (*sample - *point).normalize();
        let light_dot_normal: Float = vec3_dot_nrm(&lightv, normalv);
        if light_dot_normal <= 0.0 as Float {
            // light on the other side of the surface or grazing it
            continue;
        }
        sum += effective_color * material.diffuse * light_dot_normal;
        let reflectv: Vector3f = vec3_reflect(&-lightv, normalv);
        let reflect_dot_eye: Float = vec3_dot_vec3(&reflectv, eyev);
        if reflect_dot_eye > 0.0 as Float {
            let factor: Float = reflect_dot_eye.powf(material.shininess);
            sum += light.intensity() * material.specular * factor;
        }
    }
    let lit: Float = light.falloff(point) * (1.0 as Float - shadow);
    ambient + sum * (lit / samples.len() as Float)
}
