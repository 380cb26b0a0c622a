//! Register address constants for the SparkFun Qwiic Button.
//!
//! The button firmware exposes a flat, byte-addressable register map.
//! Registers are 1 byte unless noted; 2-byte registers are little-endian
//! (low byte first) and the 4-byte queue timestamp registers are read as a
//! block, least-significant byte first.

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Device ID register (read-only).
pub const ID: u8 = 0x00;

/// Firmware minor revision register.
pub const FIRMWARE_MINOR: u8 = 0x01;

/// Firmware major revision register.
pub const FIRMWARE_MAJOR: u8 = 0x02;

/// Value the ID register must report for a genuine Qwiic Button.
pub const DEVICE_ID: u8 = 0x5D;

// ---------------------------------------------------------------------------
// Event status and configuration
// ---------------------------------------------------------------------------

/// Button status register: event-available, pressed, and clicked bits.
/// See [`ButtonStatus`](crate::ButtonStatus) for the bit layout.
pub const BUTTON_STATUS: u8 = 0x03;

/// Interrupt enable register: clicked and pressed interrupt enable bits.
pub const INTERRUPT_CONFIG: u8 = 0x04;

/// Debounce time in milliseconds (16-bit, little-endian).
pub const BUTTON_DEBOUNCE_TIME: u8 = 0x05;

// ---------------------------------------------------------------------------
// Event queues
// ---------------------------------------------------------------------------
//
// Each queue occupies a contiguous register group: a status byte at the
// base address, the "front" (most recent) timestamp at base + 1, and the
// "back" (oldest) timestamp at base + 5. Both timestamps are 32-bit
// millisecond counters.

/// Base register of the press-event queue group.
pub const PRESSED_QUEUE_STATUS: u8 = 0x07;

/// Base register of the click-event queue group.
pub const CLICKED_QUEUE_STATUS: u8 = 0x10;

/// Offset from a queue's status register to its front (newest) timestamp.
pub const QUEUE_FRONT_OFFSET: u8 = 0x01;

/// Offset from a queue's status register to its back (oldest) timestamp.
pub const QUEUE_BACK_OFFSET: u8 = 0x05;

// ---------------------------------------------------------------------------
// LED pulse engine
// ---------------------------------------------------------------------------

/// LED brightness (0-255).
pub const LED_BRIGHTNESS: u8 = 0x19;

/// LED pulse granularity in steps per cycle.
pub const LED_PULSE_GRANULARITY: u8 = 0x1A;

/// LED pulse cycle time in milliseconds (16-bit, little-endian).
pub const LED_PULSE_CYCLE_TIME: u8 = 0x1B;

/// LED pulse off time in milliseconds (16-bit, little-endian).
pub const LED_PULSE_OFF_TIME: u8 = 0x1D;

// ---------------------------------------------------------------------------
// Bus addressing
// ---------------------------------------------------------------------------

/// I2C address configuration register. Writing a new 7-bit address here
/// takes effect on the device immediately.
pub const I2C_ADDRESS: u8 = 0x1F;

/// Factory-default 7-bit I2C address of the Qwiic Button.
pub const DEFAULT_ADDRESS: u8 = 0x6F;

/// Lowest 7-bit address the device may be re-programmed to.
pub const MIN_ADDRESS: u8 = 0x08;

/// Highest 7-bit address the device may be re-programmed to.
pub const MAX_ADDRESS: u8 = 0x77;
