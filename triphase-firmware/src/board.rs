//! Board bring-up
//!
//! Pin assignment for the panel PCB:
//!
//! | Function | GPIO |
//! |---|---|
//! | Buttons back / fwd / up / down / select | 2 / 3 / 4 / 5 / 6 |
//! | Normal / fault / config LEDs | 10 / 11 / 12 |
//! | Phase LEDs A / B / C | 28 / 27 / 26 |
//! | Phase selects A / B / C | 18 / 17 / 16 |
//! | Fan LEDs | 1 / 0 / 9 |
//! | Frequency / sequence / fan control | 21 / 20 / 19 |
//! | LCD I2C1 SDA / SCL | 14 / 15 |

use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::I2C1;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use triphase_core::config::DisplayConfig;
use triphase_core::input::ButtonLevels;
use triphase_drivers::lcd::Lcd;
use triphase_drivers::outputs::{IndicatorLeds, OutputSynchronizer};
use triphase_hal_rp2040::{I2cConfig, InputPin, RpI2c, RpInput, RpOutput};

/// The character display as wired on this board
pub type PanelLcd = Lcd<RpI2c<'static, I2C1>, Delay>;

/// Front-panel buttons
pub struct Buttons {
    back: RpInput,
    forward: RpInput,
    up: RpInput,
    down: RpInput,
    select: RpInput,
}

impl Buttons {
    /// Sample every button once
    pub fn read(&self) -> ButtonLevels {
        ButtonLevels {
            back: self.back.is_high(),
            forward: self.forward.is_high(),
            up: self.up.is_high(),
            down: self.down.is_high(),
            select: self.select.is_high(),
        }
    }
}

/// Everything the panel loop drives
pub struct Board {
    pub buttons: Buttons,
    pub outputs: OutputSynchronizer<RpOutput>,
    pub indicators: IndicatorLeds<RpOutput>,
    pub lcd: PanelLcd,
}

/// Configure every pin and the display bus
///
/// Outputs start low; the caller writes the startup frame.
pub fn init(p: Peripherals, display: &DisplayConfig) -> Board {
    let buttons = Buttons {
        back: RpInput::new(p.PIN_2),
        forward: RpInput::new(p.PIN_3),
        up: RpInput::new(p.PIN_4),
        down: RpInput::new(p.PIN_5),
        select: RpInput::new(p.PIN_6),
    };

    // Same order as OutputLine::ALL
    let outputs = OutputSynchronizer::new([
        RpOutput::new(p.PIN_28),
        RpOutput::new(p.PIN_27),
        RpOutput::new(p.PIN_26),
        RpOutput::new(p.PIN_18),
        RpOutput::new(p.PIN_17),
        RpOutput::new(p.PIN_16),
        RpOutput::new(p.PIN_21),
        RpOutput::new(p.PIN_20),
        RpOutput::new(p.PIN_19),
    ]);

    let indicators = IndicatorLeds::new(
        [
            RpOutput::new(p.PIN_1),
            RpOutput::new(p.PIN_0),
            RpOutput::new(p.PIN_9),
        ],
        RpOutput::new(p.PIN_10),
        RpOutput::new(p.PIN_12),
        RpOutput::new(p.PIN_11),
    );

    let bus_config = I2cConfig {
        address: display.address,
        frequency: display.i2c_frequency,
    };
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, RpI2c::<I2C1>::config(&bus_config));
    let lcd = Lcd::new(RpI2c::new(i2c), Delay, bus_config.address);

    Board {
        buttons,
        outputs,
        indicators,
        lcd,
    }
}
