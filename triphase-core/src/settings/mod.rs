//! Inverter settings
//!
//! The committed [`Settings`] are the only values mirrored to the
//! control lines. Edits happen on an [`EditBuffer`] and reach the
//! committed copy through a single whole-value commit.

pub mod edit;
pub mod types;

pub use edit::{Adjust, EditBuffer};
pub use types::{
    ConfigItem, FanState, Frequency, Phase, PhaseMask, PhaseSequence, Settings, DISABLED_PHASE,
};
