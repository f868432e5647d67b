//! In order for objects in a scene to be visible, there must be a
//! source of illumination so that some light is reflected from them
//! to the eye.
//!
//! Every light is reduced to a finite set of sample points. A point
//! or spot light has exactly one, an area light one per cell of its
//! U×V grid. The shadow fraction of a surface point is the share of
//! samples which are hidden from it, which yields soft penumbrae for
//! area lights. Whether a segment is blocked is decided by an
//! [Occluder] (usually the [Scene](crate::core::scene::Scene)).

// others
use smallvec::SmallVec;
// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::{Float, Spectrum};
use crate::core::rng::Rng;
use crate::lights::area::AreaLight;
use crate::lights::areaspot::AreaSpotLight;
use crate::lights::point::PointLight;
use crate::lights::spot::SpotLight;

pub type LightSamples = SmallVec<[Point3f; 1]>;

/// Answers whether anything blocks the straight segment between two
/// points.
pub trait Occluder {
    fn is_occluded(&self, from: &Point3f, to: &Point3f, time: Float) -> bool;
}

#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Area(AreaLight),
    Spot(SpotLight),
    AreaSpot(AreaSpotLight),
}

impl Light {
    pub fn intensity(&self) -> Spectrum {
        match self {
            Light::Point(l) => l.intensity,
            Light::Area(l) => l.intensity,
            Light::Spot(l) => l.intensity,
            Light::AreaSpot(l) => l.area.intensity,
        }
    }
    /// The position, or the centre for area lights.
    pub fn position(&self) -> Point3f {
        match self {
            Light::Point(l) => l.position,
            Light::Area(l) => l.position,
            Light::Spot(l) => l.position,
            Light::AreaSpot(l) => l.area.position,
        }
    }
    pub fn n_samples(&self) -> usize {
        match self {
            Light::Point(_) | Light::Spot(_) => 1,
            Light::Area(l) => l.n_samples(),
            Light::AreaSpot(l) => l.area.n_samples(),
        }
    }
    /// Deterministic sample points (cell centres for area lights).
    pub fn samples(&self) -> LightSamples {
        match self {
            Light::Point(l) => smallvec::smallvec![l.position],
            Light::Spot(l) => smallvec::smallvec![l.position],
            Light::Area(l) => l.samples(None),
            Light::AreaSpot(l) => l.area.samples(None),
        }
    }
    /// Like [Light::samples], but every area light sample is moved to
    /// a random spot inside its cell.
    pub fn samples_jittered(&self, rng: &mut Rng) -> LightSamples {
        match self {
            Light::Area(l) => l.samples(Some(rng)),
            Light::AreaSpot(l) => l.area.samples(Some(rng)),
            _ => self.samples(),
        }
    }
    /// Fraction of the light's samples hidden from *point*, between
    /// 0 (fully lit) and 1 (fully in shadow).
    pub fn occlusion(&self, point: &Point3f, occluder: &dyn Occluder, time: Float) -> Float {
        occlusion_of(&self.samples(), point, occluder, time)
    }
    /// Angular attenuation of spot lights, 1 for all others.
    pub fn falloff(&self, point: &Point3f) -> Float {
        match self {
            Light::Point(_) | Light::Area(_) => 1.0 as Float,
            Light::Spot(l) => l.falloff(point),
            Light::AreaSpot(l) => l.falloff(point),
        }
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<AreaLight> for Light {
    fn from(l: AreaLight) -> Self {
        Light::Area(l)
    }
}

impl From<SpotLight> for Light {
    fn from(l: SpotLight) -> Self {
        Light::Spot(l)
    }
}

impl From<AreaSpotLight> for Light {
    fn from(l: AreaSpotLight) -> Self {
        Light::AreaSpot(l)
    }
}

/// Share of *samples* the occluder hides from *point*.
pub fn occlusion_of(samples: &[Point3f], point: &Point3f, occluder: &dyn Occluder, time: Float) -> Float {
    if samples.is_empty() {
        return 0.0 as Float;
    }
    let occluded: usize = samples
        .iter()
        .filter(|sample| occluder.is_occluded(point, sample, time))
        .count();
    occluded as Float / samples.len() as Float
}
