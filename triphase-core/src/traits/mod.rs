//! Hardware abstraction traits
//!
//! The interface between the panel logic and the display driver.

pub mod display;

pub use display::{CharDisplay, DisplayError, DisplayExt, DISPLAY_COLUMNS, DISPLAY_ROWS};
