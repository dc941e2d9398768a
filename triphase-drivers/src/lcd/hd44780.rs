//! HD44780 over a PCF8574 expander, 4-bit mode
//!
//! Every byte goes out as two nibbles, high first. Each nibble is three
//! expander writes: the data byte, the same byte with EN set, and the
//! byte again with EN cleared, holding 50 µs after each edge.

use embedded_hal::delay::DelayNs;
use triphase_core::traits::{CharDisplay, DisplayError, DISPLAY_COLUMNS, DISPLAY_ROWS};
use triphase_hal::I2cBus;

use super::{
    LcdError, BACKLIGHT, CMD_CLEAR, CMD_DISPLAY_ON, CMD_ENTRY_MODE, CMD_FUNCTION_SET, CMD_HOME,
    DATA_SHIFT, ENABLE, INIT_NIBBLE_DELAY_MS, NIBBLE_4BIT, NIBBLE_8BIT, POWER_ON_DELAY_MS,
    ROW0_ADDRESS, ROW1_ADDRESS, RS, SLOW_COMMAND_DELAY_MS, SLOW_COMMAND_LIMIT, STROBE_HOLD_US,
};

/// Character shown for anything the ROM cannot display
const REPLACEMENT: u8 = b'?';

/// 16x2 LCD on an I2C backpack
pub struct Lcd<I2C, D> {
    bus: I2C,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I2C: I2cBus, D: DelayNs> Lcd<I2C, D> {
    /// Create a driver for the expander at `address`
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(bus: I2C, delay: D, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
            backlight: true,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Leaves the display on, cleared, cursor hidden, auto-increment.
    pub fn init(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        // Three 8-bit selects resync the controller from any state
        for _ in 0..3 {
            self.write_nibble(NIBBLE_8BIT, false)?;
            self.delay.delay_ms(INIT_NIBBLE_DELAY_MS);
        }
        self.write_nibble(NIBBLE_4BIT, false)?;
        self.delay.delay_ms(INIT_NIBBLE_DELAY_MS);

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_CLEAR)?;
        self.command(CMD_ENTRY_MODE)
    }

    /// Clear the display and home the cursor
    pub fn clear(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.command(CMD_CLEAR)
    }

    /// Home the cursor without clearing
    pub fn home(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.command(CMD_HOME)
    }

    /// Move the cursor; nothing is sent for an off-screen position
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError<I2C::Error>> {
        if col >= DISPLAY_COLUMNS || row >= DISPLAY_ROWS {
            return Err(LcdError::OutOfRange);
        }
        let base = if row == 0 { ROW0_ADDRESS } else { ROW1_ADDRESS };
        self.command(base + col)
    }

    /// Write text at the cursor
    ///
    /// Printable ASCII is sent as-is; anything else becomes `?`.
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError<I2C::Error>> {
        for c in text.chars() {
            let byte = if c.is_ascii_graphic() || c == ' ' {
                c as u8
            } else {
                REPLACEMENT
            };
            self.data(byte)?;
        }
        Ok(())
    }

    /// Send an instruction byte
    pub fn command(&mut self, command: u8) -> Result<(), LcdError<I2C::Error>> {
        self.write_byte(command, false)?;
        if command < SLOW_COMMAND_LIMIT {
            self.delay.delay_ms(SLOW_COMMAND_DELAY_MS);
        }
        Ok(())
    }

    /// Send a data byte (one character)
    pub fn data(&mut self, byte: u8) -> Result<(), LcdError<I2C::Error>> {
        self.write_byte(byte, true)
    }

    /// Switch the backlight; applied with the next expander write
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.bus, self.delay)
    }

    fn write_byte(&mut self, byte: u8, data: bool) -> Result<(), LcdError<I2C::Error>> {
        self.write_nibble(byte >> 4, data)?;
        self.write_nibble(byte & 0x0F, data)
    }

    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), LcdError<I2C::Error>> {
        let mut port = (nibble & 0x0F) << DATA_SHIFT;
        if self.backlight {
            port |= BACKLIGHT;
        }
        if data {
            port |= RS;
        }

        self.expander_write(port)?;
        self.expander_write(port | ENABLE)?;
        self.delay.delay_us(STROBE_HOLD_US);
        self.expander_write(port & !ENABLE)?;
        self.delay.delay_us(STROBE_HOLD_US);
        Ok(())
    }

    fn expander_write(&mut self, port: u8) -> Result<(), LcdError<I2C::Error>> {
        self.bus
            .write_byte(self.address, port)
            .map_err(LcdError::Bus)
    }
}

impl<I2C: I2cBus, D: DelayNs> CharDisplay for Lcd<I2C, D> {
    fn init(&mut self) -> Result<(), DisplayError> {
        Lcd::init(self).map_err(DisplayError::from)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        Lcd::clear(self).map_err(DisplayError::from)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        Lcd::set_cursor(self, col, row).map_err(DisplayError::from)
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        Lcd::write_str(self, text).map_err(DisplayError::from)
    }
}
