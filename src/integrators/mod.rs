//! An integrator turns rays into colours.
//!
//! ## Direct Lighting
//!
//! The **DirectLightingIntegrator** accounts only for direct lighting,
//! light that has traveled directly from a light source to the point
//! being shaded. Reflection and refraction are left to a recursive
//! renderer built on top of it; the prepared hit
//! ([SurfaceInteraction](crate::core::interaction::SurfaceInteraction))
//! carries everything such a renderer needs.

pub mod directlighting;
