//! Panel configuration
//!
//! `PANEL_CONFIG` is generated by build.rs from panel.toml.

use triphase_core::config::{DisplayConfig, PanelConfig, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));
