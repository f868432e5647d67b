//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean design. Every shape does its math in its own
//! canonical object space; the **Shape** wrapper in this module owns
//! the transformation into that space and is the only place which
//! applies it.
//!
//! The set of shapes is closed (see [ShapeKind]), so dispatch is a
//! `match` instead of a virtual call:
//!
//! - [Sphere](crate::shapes::sphere::Sphere)
//! - [Plane](crate::shapes::plane::Plane)
//! - [Cube](crate::shapes::cube::Cube)
//! - [Cylinder](crate::shapes::cylinder::Cylinder)
//! - [Cone](crate::shapes::cone::Cone)
//! - [Triangle](crate::shapes::triangle::Triangle) and
//!   [SmoothTriangle](crate::shapes::triangle::SmoothTriangle)
//! - [Torus](crate::shapes::torus::Torus)
//! - [Group](crate::accelerators::group::Group), a node of the
//!   bounding volume hierarchy
//! - [Csg](crate::shapes::csg::Csg), a boolean combination of two
//!   shapes
//!
//! Groups and CSG nodes own their children. A child knows the id of
//! its parent and caches the composition of all ancestor transforms,
//! which is everything it ever needs to look upwards for.
//!
//! ```rust
//! use rs_raykernel::core::geometry::{Point3f, Ray, Vector3f};
//! use rs_raykernel::core::shape::Shape;
//!
//! let sphere = Shape::sphere();
//! let ray = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
//! let xs = sphere.intersect(&ray);
//! assert_eq!(xs.len(), 2);
//! assert_eq!(xs[0].t, 4.0);
//! assert_eq!(xs[1].t, 6.0);
//! ```

// std
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
// others
use log::warn;
// pbrt
use crate::accelerators::group::Group;
use crate::core::error::Result;
use crate::core::geometry::{Bounds3f, Normal3f, Point2f, Point3f, Ray};
use crate::core::interaction::{Intersection, Intersections};
use crate::core::material::Material;
use crate::core::pbrt::{Float, EPSILON};
use crate::core::transform::Transform;
use crate::shapes::cone::Cone;
use crate::shapes::csg::{Csg, CsgOperation};
use crate::shapes::cube::Cube;
use crate::shapes::cylinder::Cylinder;
use crate::shapes::plane::Plane;
use crate::shapes::sphere::Sphere;
use crate::shapes::torus::Torus;
use crate::shapes::triangle::{SmoothTriangle, Triangle};
use crate::shapes::LocalHits;

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    fn next() -> Self {
        ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum ShapeKind {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
    Cylinder(Cylinder),
    Cone(Cone),
    Triangle(Triangle),
    SmoothTriangle(SmoothTriangle),
    Torus(Torus),
    Group(Group),
    Csg(Csg),
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Sphere(_) => "sphere",
            ShapeKind::Plane(_) => "plane",
            ShapeKind::Cube(_) => "cube",
            ShapeKind::Cylinder(_) => "cylinder",
            ShapeKind::Cone(_) => "cone",
            ShapeKind::Triangle(_) => "triangle",
            ShapeKind::SmoothTriangle(_) => "smoothtriangle",
            ShapeKind::Torus(_) => "torus",
            ShapeKind::Group(_) => "group",
            ShapeKind::Csg(_) => "csg",
        }
    }
}

pub struct Shape {
    id: ShapeId,
    object_to_world: Transform,
    world_to_object: Transform,
    /// composition of all ancestor transforms
    parent_to_world: Transform,
    /// `parent_to_world * object_to_world`
    world_transform: Transform,
    material: Arc<Material>,
    parent: Option<ShapeId>,
    kind: ShapeKind,
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("object_to_world", &self.object_to_world)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Clone for Shape {
    /// A clone is a new shape: it gets a fresh id, and the children of
    /// a cloned Group or CSG node are re-linked to it.
    fn clone(&self) -> Self {
        let mut shape = Shape {
            id: ShapeId::next(),
            object_to_world: self.object_to_world,
            world_to_object: self.world_to_object,
            parent_to_world: self.parent_to_world,
            world_transform: self.world_transform,
            material: self.material.clone(),
            parent: self.parent,
            kind: self.kind.clone(),
        };
        shape.adopt_children();
        shape
    }
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        let mut shape = Shape {
            id: ShapeId::next(),
            object_to_world: Transform::default(),
            world_to_object: Transform::default(),
            parent_to_world: Transform::default(),
            world_transform: Transform::default(),
            material: Arc::new(Material::default()),
            parent: None,
            kind,
        };
        shape.adopt_children();
        shape
    }
    pub fn sphere() -> Self {
        Shape::new(ShapeKind::Sphere(Sphere::default()))
    }
    pub fn glass_sphere() -> Self {
        Shape::sphere().with_material(
            Material::default()
                .with_transparency(1.0)
                .with_refractive_index(1.5),
        )
    }
    pub fn plane() -> Self {
        Shape::new(ShapeKind::Plane(Plane::default()))
    }
    pub fn cube() -> Self {
        Shape::new(ShapeKind::Cube(Cube::default()))
    }
    /// Unit radius cylinder around the y axis, infinite and open.
    pub fn cylinder() -> Self {
        Shape::new(ShapeKind::Cylinder(Cylinder::default()))
    }
    pub fn truncated_cylinder(minimum: Float, maximum: Float, closed: bool) -> Result<Self> {
        Ok(Shape::new(ShapeKind::Cylinder(Cylinder::new(
            minimum, maximum, closed,
        )?)))
    }
    /// Double-napped cone around the y axis, apex at the origin,
    /// infinite and open.
    pub fn cone() -> Self {
        Shape::new(ShapeKind::Cone(Cone::default()))
    }
    pub fn truncated_cone(minimum: Float, maximum: Float, closed: bool) -> Result<Self> {
        Ok(Shape::new(ShapeKind::Cone(Cone::new(minimum, maximum, closed)?)))
    }
    pub fn triangle(p1: Point3f, p2: Point3f, p3: Point3f) -> Result<Self> {
        Ok(Shape::new(ShapeKind::Triangle(Triangle::new(p1, p2, p3)?)))
    }
    pub fn smooth_triangle(
        p1: Point3f,
        p2: Point3f,
        p3: Point3f,
        n1: Normal3f,
        n2: Normal3f,
        n3: Normal3f,
    ) -> Result<Self> {
        Ok(Shape::new(ShapeKind::SmoothTriangle(SmoothTriangle::new(
            p1, p2, p3, n1, n2, n3,
        )?)))
    }
    /// Torus in the xz plane around the y axis.
    pub fn torus(major_radius: Float, minor_radius: Float) -> Result<Self> {
        Ok(Shape::new(ShapeKind::Torus(Torus::new(
            major_radius,
            minor_radius,
        )?)))
    }
    pub fn group(children: Vec<Shape>) -> Self {
        Shape::new(ShapeKind::Group(Group::new(children)))
    }
    /// Put pre-built triangles (or any other shapes) from a mesh into
    /// one Group.
    pub fn triangle_mesh(triangles: Vec<Shape>) -> Self {
        Shape::group(triangles)
    }
    pub fn csg(operation: CsgOperation, left: Shape, right: Shape) -> Self {
        Shape::new(ShapeKind::Csg(Csg::new(operation, left, right)))
    }
    pub fn union(left: Shape, right: Shape) -> Self {
        Shape::csg(CsgOperation::Union, left, right)
    }
    pub fn intersection(left: Shape, right: Shape) -> Self {
        Shape::csg(CsgOperation::Intersection, left, right)
    }
    pub fn difference(left: Shape, right: Shape) -> Self {
        Shape::csg(CsgOperation::Difference, left, right)
    }
    /// Replace the object to world transformation. Meant to be called
    /// while assembling a scene, before the shape is handed to a
    /// parent.
    pub fn with_transform(mut self, object_to_world: Transform) -> Self {
        self.object_to_world = object_to_world;
        self.world_to_object = object_to_world.inverse();
        self.world_transform = self.parent_to_world * self.object_to_world;
        self.adopt_children();
        self
    }
    /// Replace the material. Groups and CSG nodes pass it on to all of
    /// their descendants.
    pub fn with_material(mut self, material: Material) -> Self {
        self.set_material(Arc::new(material));
        self
    }
    fn set_material(&mut self, material: Arc<Material>) {
        match &mut self.kind {
            ShapeKind::Group(group) => {
                for child in group.children_mut() {
                    child.set_material(material.clone());
                }
            }
            ShapeKind::Csg(csg) => {
                csg.left_mut().set_material(material.clone());
                csg.right_mut().set_material(material.clone());
            }
            _ => {}
        }
        self.material = material;
    }
    pub fn id(&self) -> ShapeId {
        self.id
    }
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn object_to_world(&self) -> &Transform {
        &self.object_to_world
    }
    pub fn world_to_object(&self) -> &Transform {
        &self.world_to_object
    }
    /// All ancestor transforms composed with the shape's own.
    pub fn world_transform(&self) -> &Transform {
        &self.world_transform
    }
    /// Id of the enclosing Group or CSG node, if any.
    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }
    pub fn as_group(&self) -> Option<&Group> {
        match &self.kind {
            ShapeKind::Group(group) => Some(group),
            _ => None,
        }
    }
    pub fn as_csg(&self) -> Option<&Csg> {
        match &self.kind {
            ShapeKind::Csg(csg) => Some(csg),
            _ => None,
        }
    }
    /// Link this shape (and its whole subtree) to a new parent.
    /// Replaces any earlier link.
    pub(crate) fn set_parent(&mut self, parent: ShapeId, parent_to_world: &Transform) {
        self.parent = Some(parent);
        self.parent_to_world = *parent_to_world;
        self.world_transform = self.parent_to_world * self.object_to_world;
        self.adopt_children();
    }
    fn adopt_children(&mut self) {
        let id: ShapeId = self.id;
        let world: Transform = self.world_transform;
        match &mut self.kind {
            ShapeKind::Group(group) => {
                for child in group.children_mut() {
                    child.set_parent(id, &world);
                }
            }
            ShapeKind::Csg(csg) => {
                csg.left_mut().set_parent(id, &world);
                csg.right_mut().set_parent(id, &world);
            }
            _ => {}
        }
    }
    /// Add a child to a Group. Calling this on anything else is a
    /// programming error.
    pub fn add_child(&mut self, mut child: Shape) {
        let id: ShapeId = self.id;
        let world: Transform = self.world_transform;
        match &mut self.kind {
            ShapeKind::Group(group) => {
                child.set_parent(id, &world);
                group.push(child);
            }
            other => panic!("add_child() called on a {}, not a group", other.name()),
        }
    }
    /// Solid shapes enclose a volume; crossing one of their surfaces
    /// flips between inside and outside.
    pub fn is_solid(&self) -> bool {
        match &self.kind {
            ShapeKind::Sphere(_) | ShapeKind::Cube(_) | ShapeKind::Torus(_) => true,
            ShapeKind::Cylinder(c) => c.is_solid(),
            ShapeKind::Cone(c) => c.is_solid(),
            ShapeKind::Plane(_) | ShapeKind::Triangle(_) | ShapeKind::SmoothTriangle(_) => false,
            ShapeKind::Group(group) => group.children().iter().all(|c| c.is_solid()),
            ShapeKind::Csg(csg) => csg.left().is_solid() && csg.right().is_solid(),
        }
    }
    /// Is *other* this very shape or one of its descendants?
    pub fn includes(&self, other: &Shape) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match &self.kind {
            ShapeKind::Group(group) => group.children().iter().any(|c| c.includes(other)),
            ShapeKind::Csg(csg) => csg.left().includes(other) || csg.right().includes(other),
            _ => false,
        }
    }
    /// Intersect a world (or parent) space ray with the shape. The
    /// result is sorted by distance and may contain negative distances.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let local_ray: Ray = self.world_to_object.transform_ray(ray);
        self.local_intersect(&local_ray)
    }
    /// Intersection in object space.
    pub fn local_intersect(&self, ray: &Ray) -> Intersections<'_> {
        let hits: LocalHits = match &self.kind {
            ShapeKind::Sphere(s) => s.intersect(ray),
            ShapeKind::Plane(s) => s.intersect(ray),
            ShapeKind::Cube(s) => s.intersect(ray),
            ShapeKind::Cylinder(s) => s.intersect(ray),
            ShapeKind::Cone(s) => s.intersect(ray),
            ShapeKind::Triangle(s) => s.intersect(ray),
            ShapeKind::SmoothTriangle(s) => s.intersect(ray),
            ShapeKind::Torus(s) => s.intersect(ray),
            ShapeKind::Group(group) => return group.intersect(ray),
            ShapeKind::Csg(csg) => return csg.intersect(ray),
        };
        let mut xs: Intersections<'_> = hits
            .iter()
            .map(|hit| Intersection::new(hit.t, self, hit.uv))
            .collect();
        Intersection::sort(&mut xs);
        xs
    }
    /// Surface normal at a world space point, normalized. The *uv*
    /// coordinates of the hit are only used by smooth triangles.
    pub fn normal_at(&self, world_point: &Point3f, uv: Option<Point2f>) -> Normal3f {
        let local_point: Point3f = self.world_transform.inverse().transform_point(world_point);
        let mut local_normal: Normal3f = self.local_normal(&local_point, uv);
        if let Some(perturbation) = self.material.normal_perturbation() {
            local_normal = local_normal + Normal3f::from(perturbation(&local_point));
        }
        let world_normal: Normal3f = self.world_transform.transform_normal(&local_normal);
        let length: Float = world_normal.length();
        if length < EPSILON {
            warn!(
                "degenerate normal on {} {} at {:?}",
                self.kind.name(),
                self.id,
                world_point
            );
            return world_normal;
        }
        world_normal / length
    }
    /// Normal in object space, not necessarily normalized. Groups and
    /// CSG nodes have no surface of their own, asking them is a
    /// programming error.
    pub fn local_normal(&self, p: &Point3f, uv: Option<Point2f>) -> Normal3f {
        match &self.kind {
            ShapeKind::Sphere(s) => s.normal(p),
            ShapeKind::Plane(s) => s.normal(p),
            ShapeKind::Cube(s) => s.normal(p),
            ShapeKind::Cylinder(s) => s.normal(p),
            ShapeKind::Cone(s) => s.normal(p),
            ShapeKind::Triangle(s) => s.normal(p),
            ShapeKind::SmoothTriangle(s) => s.normal(p, uv),
            ShapeKind::Torus(s) => s.normal(p),
            other => panic!("local_normal() called on a {}, which has no surface", other.name()),
        }
    }
    /// Bounding box in object space.
    pub fn bounds(&self) -> Bounds3f {
        match &self.kind {
            ShapeKind::Sphere(s) => s.object_bound(),
            ShapeKind::Plane(s) => s.object_bound(),
            ShapeKind::Cube(s) => s.object_bound(),
            ShapeKind::Cylinder(s) => s.object_bound(),
            ShapeKind::Cone(s) => s.object_bound(),
            ShapeKind::Triangle(s) => s.object_bound(),
            ShapeKind::SmoothTriangle(s) => s.object_bound(),
            ShapeKind::Torus(s) => s.object_bound(),
            ShapeKind::Group(group) => group.bounds(),
            ShapeKind::Csg(csg) => csg.bounds(),
        }
    }
    /// Bounding box in the space of the parent.
    pub fn parent_space_bounds(&self) -> Bounds3f {
        self.object_to_world.transform_bounds(&self.bounds())
    }
    /// Subdivide every Group in this subtree until no node holds more
    /// than *threshold* children (or cannot be split any further).
    pub fn divide(&mut self, threshold: usize) {
        let id: ShapeId = self.id;
        let world: Transform = self.world_transform;
        match &mut self.kind {
            ShapeKind::Group(group) => group.divide(threshold, id, &world),
            ShapeKind::Csg(csg) => {
                csg.left_mut().divide(threshold);
                csg.right_mut().divide(threshold);
            }
            _ => {}
        }
    }
}
