//! Configuration state machine
//!
//! Page navigation, browse/edit sub-states and commit semantics.
//! The whole UI context is one value that is passed in and returned
//! by every transition.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{SubState, Transition, UiMode, UiState};
