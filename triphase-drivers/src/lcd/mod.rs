//! Character LCD drivers
//!
//! The panel uses a 16x2 HD44780-compatible module with a PCF8574 I2C
//! backpack. The expander's eight port bits are wired as:
//!
//! ```text
//! P7 P6 P5 P4 | P3        | P2 | P1 | P0
//! D7 D6 D5 D4 | backlight | EN | RW | RS
//! ```
//!
//! RW is held low; the driver never reads the busy flag and relies on
//! fixed delays instead.

pub mod hd44780;

pub use hd44780::Lcd;

use triphase_core::traits::DisplayError;

/// Register select: 0 = command, 1 = data
pub const RS: u8 = 0x01;

/// Enable strobe
pub const ENABLE: u8 = 0x04;

/// Backlight transistor
pub const BACKLIGHT: u8 = 0x08;

/// Data nibble occupies P4-P7
pub const DATA_SHIFT: u8 = 4;

// Instructions
pub const CMD_CLEAR: u8 = 0x01;
pub const CMD_HOME: u8 = 0x02;
/// Entry mode: increment, no shift
pub const CMD_ENTRY_MODE: u8 = 0x06;
/// Display on, cursor off, blink off
pub const CMD_DISPLAY_ON: u8 = 0x0C;
/// 4-bit interface, 2 lines, 5x8 font
pub const CMD_FUNCTION_SET: u8 = 0x28;
/// DDRAM address of row 0, column 0
pub const ROW0_ADDRESS: u8 = 0x80;
/// DDRAM address of row 1, column 0
pub const ROW1_ADDRESS: u8 = 0xC0;

/// Init nibble selecting 8-bit mode
pub const NIBBLE_8BIT: u8 = 0x03;
/// Init nibble selecting 4-bit mode
pub const NIBBLE_4BIT: u8 = 0x02;

// Timing minimums from the HD44780 datasheet
/// Wait after power-up before the first write
pub const POWER_ON_DELAY_MS: u32 = 50;
/// Wait after each init nibble
pub const INIT_NIBBLE_DELAY_MS: u32 = 5;
/// Enable pulse width and post-strobe hold
pub const STROBE_HOLD_US: u32 = 50;
/// Execution time of clear and home
pub const SLOW_COMMAND_DELAY_MS: u32 = 2;
/// Commands below this value are slow (clear, home)
pub const SLOW_COMMAND_LIMIT: u8 = 0x04;

/// LCD driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// The expander write failed; the operation was abandoned
    Bus(E),
    /// Cursor position outside 16x2
    OutOfRange,
}

impl<E> From<LcdError<E>> for DisplayError {
    fn from(err: LcdError<E>) -> Self {
        match err {
            LcdError::Bus(_) => DisplayError::Transport,
            LcdError::OutOfRange => DisplayError::OutOfRange,
        }
    }
}
