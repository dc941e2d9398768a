//! Panel configuration
//!
//! Deployment parameters with their built-in defaults. The firmware
//! generates a [`PanelConfig`] constant from `panel.toml` at build time.

pub mod types;

pub use types::*;
