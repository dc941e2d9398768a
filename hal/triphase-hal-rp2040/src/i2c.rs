//! Blocking I2C master

use embassy_rp::i2c::{AbortReason, Blocking, Config, Error, I2c, Instance};
use triphase_hal::{I2cBus, I2cBusError, I2cConfig};

/// I2C master on one RP2040 controller
pub struct RpI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    /// Wrap an already configured blocking controller
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }

    /// Controller configuration for a device
    pub fn config(device: &I2cConfig) -> Config {
        let mut config = Config::default();
        config.frequency = device.frequency;
        config
    }
}

impl<T: Instance> I2cBus for RpI2c<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.blocking_write(address, data).map_err(map_error)
    }
}

fn map_error(err: Error) -> I2cBusError {
    match err {
        Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
        Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
        Error::Abort(_) => I2cBusError::Bus,
        Error::AddressOutOfRange(_) | Error::AddressReserved(_) => I2cBusError::InvalidAddress,
        _ => I2cBusError::Other,
    }
}
