//! Surface properties used by the Phong model and by a recursive
//! renderer on top of the kernel.
//!
//! A **Material** is an immutable value. Every `with_*` setter returns
//! a modified copy and leaves the original untouched, so one material
//! can be shared (by `Arc`) between many shapes.
//!
//! ```rust
//! use rs_raykernel::core::material::Material;
//!
//! let m = Material::default();
//! let shiny = m.with_shininess(300.0).with_reflective(0.5);
//! assert_eq!(m.shininess, 200.0);
//! assert_eq!(shiny.shininess, 300.0);
//! ```

// std
use std::fmt;
use std::sync::Arc;
// pbrt
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::{Float, Spectrum};
use crate::core::texture::Pattern;

/// Maps an object space point to an offset which is added to the
/// object space normal (bump mapping without a texture).
pub type NormalPerturbation = dyn Fn(&Point3f) -> Vector3f + Send + Sync;

#[derive(Clone)]
pub struct Material {
    pub pattern: Pattern,
    pub ambient: Float,
    pub diffuse: Float,
    pub specular: Float,
    pub shininess: Float,
    pub reflective: Float,
    pub transparency: Float,
    pub refractive_index: Float,
    /// Shapes with this material block light.
    pub casts_shadow: bool,
    normal_perturbation: Option<Arc<NormalPerturbation>>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            pattern: Pattern::solid(Spectrum::white()),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            casts_shadow: true,
            normal_perturbation: None,
        }
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Material")
            .field("pattern", &self.pattern)
            .field("ambient", &self.ambient)
            .field("diffuse", &self.diffuse)
            .field("specular", &self.specular)
            .field("shininess", &self.shininess)
            .field("reflective", &self.reflective)
            .field("transparency", &self.transparency)
            .field("refractive_index", &self.refractive_index)
            .field("casts_shadow", &self.casts_shadow)
            .field("normal_perturbation", &self.normal_perturbation.is_some())
            .finish()
    }
}

impl Material {
    pub fn with_color(&self, color: Spectrum) -> Material {
        self.with_pattern(Pattern::solid(color))
    }
    pub fn with_pattern(&self, pattern: Pattern) -> Material {
        Material {
            pattern,
            ..self.clone()
        }
    }
    pub fn with_ambient(&self, ambient: Float) -> Material {
        Material {
            ambient,
            ..self.clone()
        }
    }
    pub fn with_diffuse(&self, diffuse: Float) -> Material {
        Material {
            diffuse,
            ..self.clone()
        }
    }
    pub fn with_specular(&self, specular: Float) -> Material {
        Material {
            specular,
            ..self.clone()
        }
    }
    pub fn with_shininess(&self, shininess: Float) -> Material {
        Material {
            shininess,
            ..self.clone()
        }
    }
    pub fn with_reflective(&self, reflective: Float) -> Material {
        Material {
            reflective,
            ..self.clone()
        }
    }
    pub fn with_transparency(&self, transparency: Float) -> Material {
        Material {
            transparency,
            ..self.clone()
        }
    }
    pub fn with_refractive_index(&self, refractive_index: Float) -> Material {
        Material {
            refractive_index,
            ..self.clone()
        }
    }
    pub fn with_casts_shadow(&self, casts_shadow: bool) -> Material {
        Material {
            casts_shadow,
            ..self.clone()
        }
    }
    pub fn with_normal_perturbation<F>(&self, perturbation: F) -> Material
    where
        F: Fn(&Point3f) -> Vector3f + Send + Sync + 'static,
    {
        Material {
            normal_perturbation: Some(Arc::new(perturbation)),
            ..self.clone()
        }
    }
    pub fn normal_perturbation(&self) -> Option<&NormalPerturbation> {
        self.normal_perturbation.as_deref()
    }
}
