//! Error types for the Qwiic Button driver.

use core::fmt;

/// Errors that can occur when communicating with the Qwiic Button.
#[derive(Debug)]
pub enum Error<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// No device acknowledged at the configured address.
    NoDevice,

    /// A device answered, but its ID register did not read back as the
    /// expected Qwiic Button identity (0x5D). Carries the value found.
    InvalidDeviceId(u8),

    /// Requested I2C address outside the re-programmable range 0x08-0x77.
    InvalidAddress(u8),
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::NoDevice => write!(f, "no device acknowledged at the configured address"),
            Error::InvalidDeviceId(id) => {
                write!(f, "unexpected device ID 0x{:02X} (expected 0x5D)", id)
            }
            Error::InvalidAddress(addr) => {
                write!(f, "I2C address 0x{:02X} outside valid range 0x08-0x77", addr)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::NoDevice => defmt::write!(f, "no device at configured address"),
            Error::InvalidDeviceId(id) => defmt::write!(f, "unexpected device ID {=u8:#04x}", id),
            Error::InvalidAddress(addr) => defmt::write!(f, "invalid I2C address {=u8:#04x}", addr),
        }
    }
}
