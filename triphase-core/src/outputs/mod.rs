//! Output line mapping
//!
//! Pure functions from panel state to the levels of the control and
//! indicator lines. Driving the pins is left to the driver crate.

pub mod frame;
pub mod indicators;

pub use frame::{OutputFrame, OutputLine};
pub use indicators::Indicators;
