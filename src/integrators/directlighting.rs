// others
use rayon::prelude::*;
// pbrt
use crate::core::geometry::{Point3f, Ray};
use crate::core::interaction::{hit, Intersections, SurfaceInteraction};
use crate::core::light::{occlusion_of, LightSamples};
use crate::core::pbrt::Spectrum;
use crate::core::reflection::lighting_with_samples;
use crate::core::rng::Rng;
use crate::core::scene::Scene;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LightSampling {
    /// cell centres, the same image every time
    Fixed,
    /// random point inside every cell, seeded per ray
    Jittered { seed: u64 },
}

/// Direct Lighting (no Global Illumination)
///
/// Every ray gets the Phong colour of its closest visible hit, summed
/// over all lights and attenuated by the fraction of each light's
/// samples that are hidden from the hit point. Rays which miss
/// everything are black.
#[derive(Debug, Clone)]
pub struct DirectLightingIntegrator {
    sampling: LightSampling,
}

impl Default for DirectLightingIntegrator {
    fn default() -> Self {
        DirectLightingIntegrator::new(LightSampling::Fixed)
    }
}

impl DirectLightingIntegrator {
    pub fn new(sampling: LightSampling) -> Self {
        DirectLightingIntegrator { sampling }
    }
    /// Unclamped colour seen along *ray*.
    pub fn li(&self, ray: &Ray, scene: &Scene) -> Spectrum {
        match self.sampling {
            LightSampling::Fixed => self.li_sampled(ray, scene, None),
            LightSampling::Jittered { seed } => {
                let mut rng: Rng = Rng::with_sequence(seed);
                self.li_sampled(ray, scene, Some(&mut rng))
            }
        }
    }
    fn li_sampled(&self, ray: &Ray, scene: &Scene, mut rng: Option<&mut Rng>) -> Spectrum {
        let xs: Intersections<'_> = scene.intersect(ray);
        let x = match hit(&xs) {
            Some(x) => *x,
            None => return Spectrum::black(),
        };
        let comps: SurfaceInteraction<'_> = SurfaceInteraction::new(&x, ray, &xs);
        let point: Point3f = comps.over_point;
        let mut l: Spectrum = Spectrum::black();
        for light in &scene.lights {
            let samples: LightSamples = match rng.as_mut() {
                Some(rng) => light.samples_jittered(rng),
                None => light.samples(),
            };
            let shadow = occlusion_of(&samples, &point, scene, ray.time);
            l += lighting_with_samples(
                comps.shape.material(),
                comps.shape,
                light,
                &samples,
                &point,
                &comps.eyev,
                &comps.normalv,
                shadow,
            );
        }
        l
    }
    /// Evaluate independent rays in parallel, the results come back
    /// in the order of *rays*. With jittered sampling ray `i` uses the
    /// random sequence `seed + i`, so results don't depend on the
    /// number of threads.
    pub fn render(&self, rays: &[Ray], scene: &Scene) -> Vec<Spectrum> {
        rays.par_iter()
            .enumerate()
            .map(|(i, ray)| match self.sampling {
                LightSampling::Fixed => self.li_sampled(ray, scene, None),
                LightSampling::Jittered { seed } => {
                    let mut rng: Rng = Rng::with_sequence(seed.wrapping_add(i as u64));
                    self.li_sampled(ray, scene, Some(&mut rng))
                }
            })
            .collect()
    }
}
