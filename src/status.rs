//! Pure decoders for the button's packed status bytes.
//!
//! Three registers pack several flags into the low bits of one byte. Each
//! gets a copy-type newtype with mask-and-shift accessors and merge-style
//! `with_*` mutators that leave unrelated bits untouched. Nothing in this
//! module touches the bus; decode as many fields as you like from one raw
//! byte, in any order, and the answers never change.

/// Decoded view of the `BUTTON_STATUS` register.
///
/// Bit layout (higher bits reserved):
/// - bit 0 — an event (press or click) has occurred and not been cleared
/// - bit 1 — the button is currently pressed
/// - bit 2 — the button has been clicked since the last clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStatus(u8);

impl ButtonStatus {
    const EVENT_AVAILABLE: u8 = 1 << 0;
    const PRESSED: u8 = 1 << 1;
    const CLICKED: u8 = 1 << 2;

    /// Status byte with all event bits cleared.
    pub const CLEARED: Self = Self(0);

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True if a press or click event is waiting to be serviced.
    pub const fn is_event_available(self) -> bool {
        self.0 & Self::EVENT_AVAILABLE != 0
    }

    /// True if the button was down when the status byte was captured.
    pub const fn is_pressed(self) -> bool {
        self.0 & Self::PRESSED != 0
    }

    /// True if a full click has completed since the last clear.
    pub const fn has_been_clicked(self) -> bool {
        self.0 & Self::CLICKED != 0
    }
}

/// Decoded view of a queue status register. The pressed and clicked
/// queues share this layout at different base addresses.
///
/// Bit layout (higher bits reserved):
/// - bit 0 — queue is full
/// - bit 1 — queue is empty
/// - bit 2 — pop request; the host sets it to dequeue the oldest element
///   and the firmware clears it once serviced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueStatus(u8);

impl QueueStatus {
    const FULL: u8 = 1 << 0;
    const EMPTY: u8 = 1 << 1;
    const POP_REQUEST: u8 = 1 << 2;

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_full(self) -> bool {
        self.0 & Self::FULL != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 & Self::EMPTY != 0
    }

    /// Return a copy with the pop-request bit set and the full/empty bits
    /// exactly as read. This is the byte written back during a pop.
    pub const fn with_pop_request(self) -> Self {
        Self(self.0 | Self::POP_REQUEST)
    }
}

/// Decoded view of the `INTERRUPT_CONFIG` register.
///
/// Bit layout: bit 0 enables the clicked interrupt, bit 1 the pressed
/// interrupt. Toggling one bit must not disturb the other, hence the
/// merge-style mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig(u8);

impl InterruptConfig {
    const CLICKED_ENABLE: u8 = 1 << 0;
    const PRESSED_ENABLE: u8 = 1 << 1;

    /// Factory default: both interrupt sources enabled.
    pub const BOTH_ENABLED: Self = Self(Self::CLICKED_ENABLE | Self::PRESSED_ENABLE);

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn pressed_enabled(self) -> bool {
        self.0 & Self::PRESSED_ENABLE != 0
    }

    pub const fn clicked_enabled(self) -> bool {
        self.0 & Self::CLICKED_ENABLE != 0
    }

    /// Copy with the pressed-interrupt enable bit set or cleared; the
    /// clicked bit is preserved as-is.
    pub const fn with_pressed_enabled(self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | Self::PRESSED_ENABLE)
        } else {
            Self(self.0 & !Self::PRESSED_ENABLE)
        }
    }

    /// Copy with the clicked-interrupt enable bit set or cleared; the
    /// pressed bit is preserved as-is.
    pub const fn with_clicked_enabled(self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | Self::CLICKED_ENABLE)
        } else {
            Self(self.0 & !Self::CLICKED_ENABLE)
        }
    }
}
