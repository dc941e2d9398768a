//! Page rendering
//!
//! Composes the UI context into the two text rows of the panel LCD.
//! Rendering is pure; the caller decides when to push a screen out.

pub mod renderer;
pub mod screen;

pub use renderer::Renderer;
pub use screen::{Row, Screen};
