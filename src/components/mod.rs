//! UI components.

pub mod frame_loop;
pub mod overlay;
pub mod particle_field;
pub mod pointer;
pub mod sections;
