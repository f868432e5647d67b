//! # Scene
//!
//! Once all shapes and lights are assembled they are stored in the
//! **Scene** object. The shapes end up as the children of one root
//! group, the aggregate, which is subdivided into a bounding volume
//! hierarchy when the scene is created. From then on the scene is
//! read-only and can be shared between threads.

// others
use log::info;
// pbrt
use crate::core::error::{KernelError, Result};
use crate::core::geometry::{Bounds3f, Point3f, Ray, Vector3f};
use crate::core::interaction::Intersections;
use crate::core::light::{Light, Occluder};
use crate::core::paramset::ParamSet;
use crate::core::pbrt::{Float, EPSILON};
use crate::core::shape::Shape;

/// Default group size for the hierarchy.
pub const DEFAULT_MAX_NODE_PRIMS: usize = 4;

#[derive(Debug, Clone)]
pub struct Scene {
    pub aggregate: Shape,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Put *shapes* into one root group and subdivide it until no
    /// group holds more than *max_node_prims* children.
    pub fn new(shapes: Vec<Shape>, lights: Vec<Light>, max_node_prims: usize) -> Self {
        let n_shapes: usize = shapes.len();
        let mut aggregate: Shape = Shape::group(shapes);
        aggregate.divide(max_node_prims.max(1));
        info!(
            "scene with {} shapes and {} lights, bounds {:?}",
            n_shapes,
            lights.len(),
            aggregate.bounds()
        );
        Scene { aggregate, lights }
    }
    /// Like [Scene::new], with the group size read from the
    /// `"maxnodeprims"` parameter.
    pub fn create(shapes: Vec<Shape>, lights: Vec<Light>, ps: &ParamSet) -> Result<Self> {
        let max_node_prims: i32 = ps.find_one_int("maxnodeprims", DEFAULT_MAX_NODE_PRIMS as i32);
        if max_node_prims < 1 {
            return Err(KernelError::invalid(
                "maxnodeprims",
                format!("{} is not a positive group size", max_node_prims),
            ));
        }
        Ok(Scene::new(shapes, lights, max_node_prims as usize))
    }
    pub fn world_bound(&self) -> Bounds3f {
        self.aggregate.parent_space_bounds()
    }
    /// All intersections of the ray with the scene, sorted.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        self.aggregate.intersect(ray)
    }
    /// Is there a shadow casting surface strictly between the ray
    /// origin and the distance *max_t*?
    pub fn intersect_p(&self, ray: &Ray, max_t: Float) -> bool {
        self.aggregate
            .intersect(ray)
            .iter()
            .any(|x| x.t > 0.0 as Float && x.t < max_t && x.shape.material().casts_shadow)
    }
}

impl Occluder for Scene {
    fn is_occluded(&self, from: &Point3f, to: &Point3f, time: Float) -> bool {
        let v: Vector3f = *to - *from;
        let distance: Float = v.length();
        if distance < EPSILON {
            return false;
        }
        let ray: Ray = Ray::new(*from, v / distance).with_time(time);
        self.intersect_p(&ray, distance)
    }
}
