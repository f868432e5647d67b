//! # rs_raykernel
//!
//! The geometric intersection and direct-illumination kernel of a
//! ray tracer. Scene assembly, cameras, image output and the full
//! recursive colour loop live elsewhere; this crate answers two
//! questions for them:
//!
//! 1. Given a world space ray, which surfaces does it hit and where?
//! 2. Given a hit and the lights of a scene, what colour is directly
//!    reflected towards the eye?
//!
//! The building blocks, from the bottom up:
//!
//! - [core::geometry] and [core::transform]: points, vectors,
//!   normals, rays, bounding boxes and 4x4 transformations.
//! - [core::shape]: the shape contract, dispatching statically over
//!   the primitives in [shapes] and the composites in
//!   [accelerators::group] and [shapes::csg].
//! - [core::material], [core::texture] and [textures]: surface
//!   descriptions and procedural patterns.
//! - [core::light], [lights] and [core::reflection]: light sources,
//!   soft shadow sampling and the Phong model.
//! - [core::scene] and [integrators]: a frozen scene and direct
//!   lighting of a single ray (or a batch of them in parallel).

#[macro_use]
extern crate impl_ops;

pub mod accelerators;
pub mod core;
pub mod integrators;
pub mod lights;
pub mod shapes;
pub mod textures;
