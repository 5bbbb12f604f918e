//! Animated particle field background.
//!
//! Renders drifting particles on an HTML canvas with:
//! - Lines between particles that fade out with distance
//! - Lines to the pointer and optional pointer repulsion
//! - Reflecting or wrapping viewport edges
//! - Light/dark palettes that swap without restarting the simulation
//!
//! # Example
//!
//! ```ignore
//! use portfolio_web::components::particle_field::{FieldConfig, ParticleField, ThemeMode};
//!
//! let (theme, _) = signal(ThemeMode::Dark);
//! view! { <ParticleField theme=theme config=FieldConfig::constellation() /> }
//! ```

mod component;
pub mod config;
pub mod engine;
pub mod particles;
pub mod render;
pub mod theme;

pub use component::ParticleField;
pub use config::{BoundaryPolicy, FieldConfig, Interaction};
pub use engine::{FieldEngine, FieldEvent};
pub use theme::{Color, FieldTheme, ThemeMode};
