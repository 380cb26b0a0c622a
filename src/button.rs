//! High-level interface for the SparkFun Qwiic Button.
//!
//! [`QwiicButton`] wraps the low-level register transport with address
//! validation, identity checking, status decoding, and the queue and LED
//! configuration protocols.

use embedded_hal::i2c::I2c;

use crate::bus::RegisterBus;
use crate::error::Error;
use crate::queue::EventQueue;
use crate::registers::{
    BUTTON_DEBOUNCE_TIME, BUTTON_STATUS, CLICKED_QUEUE_STATUS, DEFAULT_ADDRESS, DEVICE_ID,
    FIRMWARE_MAJOR, FIRMWARE_MINOR, I2C_ADDRESS, ID, INTERRUPT_CONFIG, LED_BRIGHTNESS,
    LED_PULSE_CYCLE_TIME, LED_PULSE_GRANULARITY, LED_PULSE_OFF_TIME, MAX_ADDRESS, MIN_ADDRESS,
    PRESSED_QUEUE_STATUS,
};
use crate::status::{ButtonStatus, InterruptConfig};

/// LED pulse configuration.
///
/// Four independent fields, no cross-field invariants. The default is the
/// LED off with the standard granularity of 1 step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// LED intensity, 0 (off) to 255 (maximum).
    pub brightness: u8,
    /// Total pulse cycle time in milliseconds; 0 disables pulsing.
    pub cycle_time_ms: u16,
    /// Off time between pulses in milliseconds.
    pub off_time_ms: u16,
    /// Resolution of the pulse engine in steps.
    pub granularity: u8,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::OFF
    }
}

impl LedConfig {
    /// Everything zeroed: LED off.
    pub const OFF: Self = Self {
        brightness: 0,
        cycle_time_ms: 0,
        off_time_ms: 0,
        granularity: 1,
    };

    /// Solid (non-pulsing) LED at the given brightness.
    pub const fn solid(brightness: u8) -> Self {
        Self {
            brightness,
            ..Self::OFF
        }
    }
}

/// High-level interface for the SparkFun Qwiic Button.
///
/// Provides validated methods for the button's register-mapped event
/// protocol: press/click status, interrupt configuration, debounce, the
/// two hardware timestamp queues, and the LED pulse engine.
///
/// # Example
///
/// ```no_run
/// use embedded_hal::i2c::I2c;
/// use qwiic_button::{Error, QwiicButton};
///
/// // `i2c` is any `embedded-hal` I2C implementation
/// fn run<I2C: I2c>(i2c: I2C) -> Result<(), Error<I2C::Error>> {
///     let mut button = QwiicButton::new(i2c);
///     button.init()?;
///
///     if button.is_pressed()? {
///         button.led_on(128)?;
///     }
///     Ok(())
/// }
/// ```
pub struct QwiicButton<I2C> {
    bus: RegisterBus<I2C>,
}

impl<I2C> QwiicButton<I2C>
where
    I2C: I2c,
{
    /// Create a handle at the factory-default address (0x6F).
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access;
    ///   use an `embedded-hal-bus` adapter or a `&mut` reborrow to share
    ///   one bus between handles)
    pub fn new(i2c: I2C) -> Self {
        Self {
            bus: RegisterBus::new(i2c, DEFAULT_ADDRESS),
        }
    }

    /// Create a handle at a non-default address, e.g. for a second button
    /// on the same bus.
    ///
    /// # Errors
    /// [`Error::InvalidAddress`] if `address` is outside 0x08-0x77; no bus
    /// traffic is issued in that case.
    pub fn with_address(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            return Err(Error::InvalidAddress(address));
        }
        Ok(Self {
            bus: RegisterBus::new(i2c, address),
        })
    }

    /// Current 7-bit device address this handle talks to.
    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    /// Consume the handle and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.bus.release()
    }

    // -----------------------------------------------------------------------
    // Connectivity and identity
    // -----------------------------------------------------------------------

    /// Probe whether any device acknowledges at the current address.
    ///
    /// Touches no registers; a NACK yields `Ok(false)` while a genuine bus
    /// fault is returned as [`Error::I2c`].
    pub fn is_connected(&mut self) -> Result<bool, Error<I2C::Error>> {
        self.bus.probe()
    }

    /// Initialize the device: probe for presence, then verify the ID
    /// register reads back the Qwiic Button identity (0x5D).
    ///
    /// This is the mandatory first call; register contents observed before
    /// a successful `init` are undefined.
    ///
    /// # Errors
    /// * [`Error::NoDevice`] — nothing acknowledged at this address
    /// * [`Error::InvalidDeviceId`] — a device answered but is not a
    ///   Qwiic Button
    /// * [`Error::I2c`] — bus fault during the probe or the ID read
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        if !self.is_connected()? {
            return Err(Error::NoDevice);
        }

        let id = self.bus.read_u8(ID)?;
        if id != DEVICE_ID {
            return Err(Error::InvalidDeviceId(id));
        }
        Ok(())
    }

    /// Firmware revision as a 16-bit value: major in the high byte, minor
    /// in the low byte.
    pub fn firmware_version(&mut self) -> Result<u16, Error<I2C::Error>> {
        let major = self.bus.read_u8(FIRMWARE_MAJOR)?;
        let minor = self.bus.read_u8(FIRMWARE_MINOR)?;
        Ok(u16::from_be_bytes([major, minor]))
    }

    // -----------------------------------------------------------------------
    // Address management
    // -----------------------------------------------------------------------

    /// Re-program the device to a new 7-bit I2C address.
    ///
    /// The range check happens before any bus traffic; the handle's stored
    /// address is committed only once the device has accepted the write,
    /// so a transport failure leaves the handle pointing at the old
    /// address. The change takes effect on the device immediately;
    /// re-validating with [`init`](Self::init) at the new address is the
    /// caller's responsibility.
    ///
    /// # Errors
    /// * [`Error::InvalidAddress`] if `new_address` is outside 0x08-0x77
    /// * [`Error::I2c`] on communication failure (address unchanged)
    pub fn set_address(&mut self, new_address: u8) -> Result<(), Error<I2C::Error>> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&new_address) {
            return Err(Error::InvalidAddress(new_address));
        }

        self.bus.write_u8(I2C_ADDRESS, new_address)?;
        self.bus.retarget(new_address);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Event status
    // -----------------------------------------------------------------------

    /// Read and decode the full status byte in one bus transaction.
    ///
    /// The three event bits are independent; use this when more than one
    /// of them matters so they come from the same instant.
    pub fn status(&mut self) -> Result<ButtonStatus, Error<I2C::Error>> {
        Ok(ButtonStatus::from_raw(self.bus.read_u8(BUTTON_STATUS)?))
    }

    /// True if the button is pressed right now.
    ///
    /// Always issues a fresh status read; a cached answer could silently
    /// miss a momentary press.
    pub fn is_pressed(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.is_pressed())
    }

    /// True if the button has been clicked (pressed and released) since
    /// the event bits were last cleared.
    pub fn has_been_clicked(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.has_been_clicked())
    }

    /// True if a press or click event is waiting to be serviced.
    pub fn is_event_available(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.is_event_available())
    }

    /// Reset all three event bits with a single full-overwrite write.
    ///
    /// No read-modify-write: this operation owns every bit of the status
    /// register.
    pub fn clear_event_bits(&mut self) -> Result<(), Error<I2C::Error>> {
        self.bus.write_u8(BUTTON_STATUS, ButtonStatus::CLEARED.raw())
    }

    // -----------------------------------------------------------------------
    // Interrupt configuration
    // -----------------------------------------------------------------------

    /// Read and decode the interrupt enable register.
    pub fn interrupt_config(&mut self) -> Result<InterruptConfig, Error<I2C::Error>> {
        Ok(InterruptConfig::from_raw(self.bus.read_u8(INTERRUPT_CONFIG)?))
    }

    /// Enable the interrupt fired while the button is pressed.
    ///
    /// Read-modify-write: the clicked-interrupt bit is preserved. If the
    /// read fails nothing is written; if the write fails the hardware
    /// state is unknown and should be re-queried.
    pub fn enable_pressed_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_interrupt_config(|cfg| cfg.with_pressed_enabled(true))
    }

    /// Disable the pressed interrupt, preserving the clicked bit.
    pub fn disable_pressed_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_interrupt_config(|cfg| cfg.with_pressed_enabled(false))
    }

    /// Enable the interrupt fired when the button is clicked.
    pub fn enable_clicked_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_interrupt_config(|cfg| cfg.with_clicked_enabled(true))
    }

    /// Disable the clicked interrupt, preserving the pressed bit.
    pub fn disable_clicked_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_interrupt_config(|cfg| cfg.with_clicked_enabled(false))
    }

    /// Restore the interrupt configuration to its default (both sources
    /// enabled) and clear the event status bits.
    ///
    /// A full reset, so the enable register is written in one shot rather
    /// than read-modify-written.
    pub fn reset_interrupt_config(&mut self) -> Result<(), Error<I2C::Error>> {
        self.bus
            .write_u8(INTERRUPT_CONFIG, InterruptConfig::BOTH_ENABLED.raw())?;
        self.clear_event_bits()
    }

    fn update_interrupt_config(
        &mut self,
        f: impl FnOnce(InterruptConfig) -> InterruptConfig,
    ) -> Result<(), Error<I2C::Error>> {
        let current = self.interrupt_config()?;
        self.bus.write_u8(INTERRUPT_CONFIG, f(current).raw())
    }

    // -----------------------------------------------------------------------
    // Debounce
    // -----------------------------------------------------------------------

    /// Current debounce time in milliseconds.
    pub fn debounce_time(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.bus.read_u16(BUTTON_DEBOUNCE_TIME)
    }

    /// Set the debounce time in milliseconds. The register is 16 bits, so
    /// the `u16` parameter is also the upper bound the firmware accepts.
    pub fn set_debounce_time(&mut self, time_ms: u16) -> Result<(), Error<I2C::Error>> {
        self.bus.write_u16(BUTTON_DEBOUNCE_TIME, time_ms)
    }

    // -----------------------------------------------------------------------
    // Event queues
    // -----------------------------------------------------------------------

    /// Controller for the queue of press-event timestamps.
    ///
    /// # Example
    /// ```no_run
    /// use embedded_hal::i2c::I2c;
    /// use qwiic_button::{Error, QwiicButton};
    ///
    /// fn drain<I2C: I2c>(button: &mut QwiicButton<I2C>) -> Result<(), Error<I2C::Error>> {
    ///     let mut presses = button.pressed_queue();
    ///     while !presses.is_empty()? {
    ///         let _ms_ago = presses.pop()?;
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn pressed_queue(&mut self) -> EventQueue<'_, I2C> {
        EventQueue::new(&mut self.bus, PRESSED_QUEUE_STATUS)
    }

    /// Controller for the queue of click-event timestamps.
    pub fn clicked_queue(&mut self) -> EventQueue<'_, I2C> {
        EventQueue::new(&mut self.bus, CLICKED_QUEUE_STATUS)
    }

    // -----------------------------------------------------------------------
    // LED pulse engine
    // -----------------------------------------------------------------------

    /// Apply an LED pulse configuration.
    ///
    /// Four independent register writes with no atomicity across them; a
    /// transport failure partway through leaves the earlier fields applied
    /// and is reported without rollback.
    pub fn configure_led(&mut self, config: LedConfig) -> Result<(), Error<I2C::Error>> {
        self.bus.write_u8(LED_BRIGHTNESS, config.brightness)?;
        self.bus.write_u8(LED_PULSE_GRANULARITY, config.granularity)?;
        self.bus
            .write_u16(LED_PULSE_CYCLE_TIME, config.cycle_time_ms)?;
        self.bus.write_u16(LED_PULSE_OFF_TIME, config.off_time_ms)
    }

    /// Turn the LED on solid at the given brightness.
    ///
    /// Sugar for [`configure_led`](Self::configure_led) with zero timing
    /// fields.
    pub fn led_on(&mut self, brightness: u8) -> Result<(), Error<I2C::Error>> {
        self.configure_led(LedConfig::solid(brightness))
    }

    /// Turn the LED off.
    pub fn led_off(&mut self) -> Result<(), Error<I2C::Error>> {
        self.configure_led(LedConfig::OFF)
    }
}
