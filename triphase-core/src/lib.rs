//! Board-agnostic core logic for the inverter operator panel
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Settings model (frequency, phase enables, sequence, fan)
//! - Configuration state machine (pages, browse/edit, commit)
//! - Button decoding (edges, long press, settle windows)
//! - Timing helpers (blink, press duration)
//! - Output mapping for the control and indicator lines
//! - Page rendering into a 16x2 character screen
//! - Display trait implemented by the LCD driver

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod fault;
pub mod input;
pub mod outputs;
pub mod settings;
pub mod state;
pub mod timing;
pub mod traits;
pub mod ui;

pub use controller::{Panel, PollOutcome};
