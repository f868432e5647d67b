//! Procedural patterns. Each one combines two child patterns (which
//! may be solid colours or patterns themselves) and evaluates them at
//! a point in its own pattern space.
//!
//! - StripePattern
//! - GradientPattern
//! - RadialGradientPattern
//! - RingPattern
//! - CheckerPattern
//! - BlendPattern
//! - PerturbPattern

pub mod blend;
pub mod checkerboard;
pub mod gradient;
pub mod perturb;
pub mod ring;
pub mod stripe;
