//! RP2040-specific HAL for the operator panel
//!
//! Implements the shared `triphase-hal` traits over embassy-rp's
//! blocking drivers:
//!
//! - GPIO outputs (control lines, LEDs) and inputs (buttons)
//! - I2C master writes to the LCD expander

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{RpInput, RpOutput};
pub use i2c::RpI2c;

// Re-export shared traits from triphase-hal for convenience
pub use triphase_hal::{I2cBus, I2cBusError, I2cConfig, InputPin, OutputPin};
