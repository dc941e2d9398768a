//! GPIO wrappers

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use triphase_hal::{InputPin, OutputPin};

/// Push-pull output
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure a pin as output, starting low
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Button input
///
/// Buttons pull the line high when pressed, so the pin idles on the
/// internal pull-down.
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Configure a pin as input with pull-down
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Down),
        }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
