//! Decorative full-viewport background: particle field, pointer glow, gradient orbs.

mod component;
pub mod orbs;
pub mod spring;

pub use component::{AnimatedBackground, GradientOrbs, MouseGlow};
