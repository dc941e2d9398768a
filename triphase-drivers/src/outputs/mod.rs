//! Output line drivers
//!
//! Write the levels computed in `triphase_core::outputs` onto GPIO pins.

pub mod indicators;
pub mod sync;

pub use indicators::IndicatorLeds;
pub use sync::OutputSynchronizer;
