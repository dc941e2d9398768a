//! I2C bus abstractions
//!
//! The panel only ever talks to one write-only device (the LCD's I/O
//! expander), so the trait is reduced to the blocking master write.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte (one expander port update)
    fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), Self::Error> {
        self.write(address, &[byte])
    }
}

/// Error from I2C operations
///
/// Chip HALs map their native error types onto this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge its address or a data byte
    Nack,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Bus fault (stuck line, misplaced start/stop)
    Bus,
    /// Address outside the 7-bit range or reserved
    InvalidAddress,
    /// Other error
    Other,
}

/// I2C configuration for one attached device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// 7-bit device address
    pub address: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            address: 0x27,      // PCF8574 backpack, A0-A2 pulled high
            frequency: 400_000, // 400kHz fast mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD_HZ: u32 = 100_000;

    /// Fast mode (400 kHz)
    pub const FAST_HZ: u32 = 400_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pcf8574_fast_mode() {
        let config = I2cConfig::default();
        assert_eq!(config.address, 0x27);
        assert_eq!(config.frequency, I2cConfig::FAST_HZ);
    }
}
