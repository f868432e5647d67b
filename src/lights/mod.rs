//! The light sources of the kernel, wrapped by
//! [Light](crate::core::light::Light):
//!
//! - PointLight
//! - AreaLight
//! - SpotLight
//! - AreaSpotLight

pub mod area;
pub mod areaspot;
pub mod point;
pub mod spot;
