//! Driver for the SparkFun Qwiic Button.
//!
//! This crate provides an `embedded-hal` I2C driver for the SparkFun
//! Qwiic Button, a button breakout whose firmware timestamps press and
//! click events and holds them in two hardware FIFO queues.
//!
//! # Architecture
//!
//! The crate is split into focused layers:
//!
//! - **`bus`** (crate-private) — Low-level register transport handling the
//!   three access widths of the register map (byte, little-endian word,
//!   4-byte timestamp block) and device presence probing.
//! - **[`ButtonStatus`] / [`QueueStatus`] / [`InterruptConfig`]** — Pure
//!   mask-and-shift decoders for the packed status bytes.
//! - **[`EventQueue`]** — One parametrized controller for the two
//!   structurally identical hardware queues, including the pop-request
//!   protocol.
//! - **[`QwiicButton`]** (public entry point) — Validated high-level API:
//!   identity check, address management, event status, interrupts,
//!   debounce, and the LED pulse engine.
//!
//! # Quick start
//!
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use qwiic_button::{Error, QwiicButton};
//!
//! fn run<I2C: I2c>(i2c: I2C) -> Result<(), Error<I2C::Error>> {
//!     // Construct with any `embedded-hal` I2C implementation
//!     let mut button = QwiicButton::new(i2c);
//!     button.init()?;
//!
//!     if button.has_been_clicked()? {
//!         // Drain the click-event queue
//!         let mut clicks = button.clicked_queue();
//!         while !clicks.is_empty()? {
//!             let _ms_ago = clicks.pop()?;
//!         }
//!         button.clear_event_bits()?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! Every operation is a blocking bus transaction (or a short sequence of
//! them) with no background activity. The pop protocol and the interrupt
//! read-modify-writes span more than one bus transaction and are not
//! atomic on the wire, so callers sharing one bus across threads must
//! serialize access themselves, e.g. with `embedded-hal-bus` adapters.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on the error
//!   and status types for embedded logging.

#![no_std]

pub use button::{LedConfig, QwiicButton};
pub use error::Error;
pub use queue::EventQueue;
pub use registers::DEFAULT_ADDRESS;
pub use status::{ButtonStatus, InterruptConfig, QueueStatus};

mod bus;
mod button;
mod error;
mod queue;
mod registers;
mod status;

#[cfg(test)]
mod testbus;
