//! Hardware FIFO queue controller.
//!
//! The button firmware keeps two independent timestamp queues (one for
//! press events, one for click events) with identical register layouts at
//! different base addresses. [`EventQueue`] is the one controller for that
//! layout; [`QwiicButton`](crate::QwiicButton) instantiates it twice via
//! [`pressed_queue`](crate::QwiicButton::pressed_queue) and
//! [`clicked_queue`](crate::QwiicButton::clicked_queue).
//!
//! Each queue group is: status byte at the base address, the "front"
//! (most recent) timestamp at base + 1, and the "back" (oldest) timestamp
//! at base + 5. Timestamps are unsigned 32-bit millisecond counters that
//! wrap after roughly 49.7 days; the wrap is a property of the counter,
//! not an error.

use embedded_hal::i2c::I2c;

use crate::bus::RegisterBus;
use crate::error::Error;
use crate::registers::{QUEUE_BACK_OFFSET, QUEUE_FRONT_OFFSET};
use crate::status::QueueStatus;

/// Borrowing view over one of the button's two hardware FIFO queues.
///
/// Obtained from [`QwiicButton::pressed_queue`](crate::QwiicButton::pressed_queue)
/// or [`QwiicButton::clicked_queue`](crate::QwiicButton::clicked_queue);
/// the borrow ties the view to the device handle so the two queues can
/// never race each other within one handle.
pub struct EventQueue<'a, I2C> {
    bus: &'a mut RegisterBus<I2C>,
    base: u8,
}

impl<'a, I2C> EventQueue<'a, I2C>
where
    I2C: I2c,
{
    pub(crate) fn new(bus: &'a mut RegisterBus<I2C>, base: u8) -> Self {
        Self { bus, base }
    }

    /// Read and decode this queue's status byte.
    pub fn status(&mut self) -> Result<QueueStatus, Error<I2C::Error>> {
        Ok(QueueStatus::from_raw(self.bus.read_u8(self.base)?))
    }

    /// True if the queue has no room for further events.
    pub fn is_full(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.is_full())
    }

    /// True if the queue holds no events.
    pub fn is_empty(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.status()?.is_empty())
    }

    /// Milliseconds since the most recently enqueued event.
    pub fn time_since_last(&mut self) -> Result<u32, Error<I2C::Error>> {
        self.bus.read_u32(self.base + QUEUE_FRONT_OFFSET)
    }

    /// Milliseconds since the oldest still-queued event.
    pub fn time_since_first(&mut self) -> Result<u32, Error<I2C::Error>> {
        self.bus.read_u32(self.base + QUEUE_BACK_OFFSET)
    }

    /// Remove the oldest event and return its timestamp (milliseconds
    /// since that event, i.e. the value [`time_since_first`] reported just
    /// before removal).
    ///
    /// The timestamp is captured before anything is mutated, so the value
    /// returned always belongs to the element actually being removed. The
    /// removal itself sets the pop-request bit in the queue status byte,
    /// preserving the full/empty bits as read; the firmware dequeues and
    /// clears the bit on its own, and this driver does not poll for that.
    ///
    /// Popping an empty queue is not guarded here: what the firmware
    /// returns for an empty queue is the firmware's contract.
    ///
    /// Note that capture and pop-request are two separate bus
    /// transactions; callers sharing one queue across contexts must
    /// serialize their access (see the crate docs).
    ///
    /// [`time_since_first`]: Self::time_since_first
    pub fn pop(&mut self) -> Result<u32, Error<I2C::Error>> {
        let timestamp = self.time_since_first()?;

        let status = self.status()?;
        self.bus
            .write_u8(self.base, status.with_pop_request().raw())?;

        Ok(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use crate::registers;
    use crate::testbus::FakeBus;
    use crate::QwiicButton;

    const ADDR: u8 = registers::DEFAULT_ADDRESS;

    const PRESSED_BASE: usize = registers::PRESSED_QUEUE_STATUS as usize;
    const CLICKED_BASE: usize = registers::CLICKED_QUEUE_STATUS as usize;

    fn set_u32(regs: &mut [u8], at: usize, value: u32) {
        regs[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    // ── Status decode ────────────────────────────────────────────────

    #[test]
    fn full_and_empty_come_from_the_queue_status_bits() {
        let mut bus = FakeBus::with_button(ADDR);
        bus.device_mut(ADDR).regs[PRESSED_BASE] = 0b01;
        bus.device_mut(ADDR).regs[CLICKED_BASE] = 0b10;

        let mut button = QwiicButton::new(&mut bus);
        assert!(button.pressed_queue().is_full().unwrap());
        assert!(!button.pressed_queue().is_empty().unwrap());
        assert!(button.clicked_queue().is_empty().unwrap());
        assert!(!button.clicked_queue().is_full().unwrap());
    }

    // ── Timestamp reconstruction ─────────────────────────────────────

    #[test]
    fn timestamps_are_reconstructed_least_significant_byte_first() {
        let mut bus = FakeBus::with_button(ADDR);
        {
            let regs = &mut bus.device_mut(ADDR).regs;
            // front = most recent, back = oldest
            regs[PRESSED_BASE + 1..PRESSED_BASE + 5]
                .copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
            regs[PRESSED_BASE + 5..PRESSED_BASE + 9]
                .copy_from_slice(&[0x10, 0x00, 0x00, 0x00]);
        }

        let mut button = QwiicButton::new(&mut bus);
        assert_eq!(button.pressed_queue().time_since_last().unwrap(), 0x04030201);
        assert_eq!(button.pressed_queue().time_since_first().unwrap(), 16);
    }

    #[test]
    fn timestamp_wraparound_boundary_is_a_plain_value() {
        let mut bus = FakeBus::with_button(ADDR);
        set_u32(&mut bus.device_mut(ADDR).regs, CLICKED_BASE + 5, u32::MAX);

        let mut button = QwiicButton::new(&mut bus);
        assert_eq!(
            button.clicked_queue().time_since_first().unwrap(),
            4_294_967_295
        );
    }

    // ── Pop protocol ─────────────────────────────────────────────────

    #[test]
    fn pop_returns_the_back_timestamp_captured_before_the_request() {
        let mut bus = FakeBus::with_button(ADDR);
        set_u32(&mut bus.device_mut(ADDR).regs, PRESSED_BASE + 5, 16);
        bus.device_mut(ADDR).regs[PRESSED_BASE] = 0b01; // full, not empty

        {
            let mut button = QwiicButton::new(&mut bus);
            assert_eq!(button.pressed_queue().pop().unwrap(), 16);
        }

        // The write-back set the pop-request bit and preserved the
        // full/empty bits exactly as read.
        assert_eq!(bus.device(ADDR).regs[PRESSED_BASE], 0b101);
    }

    #[test]
    fn pop_uses_its_own_queue_registers() {
        let mut bus = FakeBus::with_button(ADDR);
        {
            let regs = &mut bus.device_mut(ADDR).regs;
            set_u32(regs, PRESSED_BASE + 5, 1_000);
            set_u32(regs, CLICKED_BASE + 5, 2_000);
        }

        {
            let mut button = QwiicButton::new(&mut bus);
            assert_eq!(button.pressed_queue().pop().unwrap(), 1_000);
            assert_eq!(button.clicked_queue().pop().unwrap(), 2_000);
        }

        // Each pop requested on its own status register only.
        assert_eq!(bus.device(ADDR).regs[PRESSED_BASE], 0b100);
        assert_eq!(bus.device(ADDR).regs[CLICKED_BASE], 0b100);
    }
}
