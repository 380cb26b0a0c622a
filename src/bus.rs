//! Low-level register transport.
//!
//! Wraps an `embedded-hal` I2C peripheral with the three access widths the
//! Qwiic Button register map uses: single bytes, little-endian 16-bit
//! words, and 4-byte timestamp blocks. Unlike Seesaw-style firmwares the
//! button needs no delay between the register-address write and the data
//! read, so every read is a single combined `write_read` transaction.
//!
//! This module is crate-private; consumers interact with
//! [`QwiicButton`](crate::QwiicButton) instead.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::error::Error;

/// Register transport bound to one device address.
///
/// Owns the I2C peripheral and the (mutable) 7-bit address; the address is
/// only changed by [`QwiicButton::set_address`](crate::QwiicButton::set_address)
/// after the device has accepted the corresponding register write.
pub(crate) struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterBus<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Current 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Retarget the transport to a new address. Callers must only do this
    /// after the device itself has been moved (see `set_address`).
    pub fn retarget(&mut self, address: u8) {
        self.address = address;
    }

    /// Consume the transport and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Presence
    // -----------------------------------------------------------------------

    /// Probe for a device at the current address with a zero-length write.
    ///
    /// An address NACK means "nothing there" and maps to `Ok(false)`; any
    /// other bus error is a transport failure and is propagated, so callers
    /// can tell an absent device from a broken bus.
    pub fn probe(&mut self) -> Result<bool, Error<I2C::Error>> {
        match self.i2c.write(self.address, &[]) {
            Ok(()) => Ok(true),
            Err(e) => match e.kind() {
                ErrorKind::NoAcknowledge(_) => Ok(false),
                _ => Err(Error::I2c(e)),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Typed register access
    // -----------------------------------------------------------------------

    /// Read a single register byte.
    pub fn read_u8(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    /// Write a single register byte.
    pub fn write_u8(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    /// Read a 16-bit little-endian register.
    pub fn read_u16(&mut self, register: u8) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Write a 16-bit register, low byte first.
    pub fn write_u16(&mut self, register: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_le_bytes();
        self.i2c.write(self.address, &[register, bytes[0], bytes[1]])?;
        Ok(())
    }

    /// Read a 32-bit register as a 4-byte block, least-significant byte
    /// first: `value = b0 + b1·2^8 + b2·2^16 + b3·2^24`.
    pub fn read_u32(&mut self, register: u8) -> Result<u32, Error<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}
