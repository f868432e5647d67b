//! Core data types and the contracts the rest of the kernel builds
//! on.

pub mod api;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod light;
pub mod material;
pub mod paramset;
pub mod pbrt;
pub mod polynomial;
pub mod reflection;
pub mod rng;
pub mod scene;
pub mod shape;
pub mod spectrum;
pub mod texture;
pub mod transform;
