//! In-memory I2C bus for host-side protocol tests.
//!
//! Models up to two register-file devices on one bus so the driver's wire
//! protocol can be asserted transaction by transaction: every write lands
//! in a plain byte array, unknown addresses NACK, and a switch can force
//! hard bus faults.

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::registers;

/// One past the highest register address (`I2C_ADDRESS` = 0x1F).
pub const REG_FILE_SIZE: usize = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    /// No device acknowledged the address.
    Nack,
    /// Hard bus fault, distinct from a NACK.
    Fault,
}

impl i2c::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        match self {
            FakeError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            FakeError::Fault => ErrorKind::Bus,
        }
    }
}

pub struct FakeDevice {
    pub address: u8,
    pub regs: [u8; REG_FILE_SIZE],
}

impl FakeDevice {
    /// A factory-fresh Qwiic Button at the given address: correct ID,
    /// everything else zeroed.
    pub fn button(address: u8) -> Self {
        let mut regs = [0u8; REG_FILE_SIZE];
        regs[registers::ID as usize] = registers::DEVICE_ID;
        Self { address, regs }
    }
}

pub struct FakeBus {
    devices: [Option<FakeDevice>; 2],
    /// Count of register write transactions (probes and reads excluded).
    pub writes: usize,
    /// When set, every transaction fails with a hard bus fault.
    pub fail_all: bool,
}

impl FakeBus {
    /// An empty bus: every address NACKs.
    pub fn new() -> Self {
        Self {
            devices: [None, None],
            writes: 0,
            fail_all: false,
        }
    }

    /// A bus with one factory-fresh button on it.
    pub fn with_button(address: u8) -> Self {
        let mut bus = Self::new();
        bus.attach(FakeDevice::button(address));
        bus
    }

    pub fn attach(&mut self, device: FakeDevice) {
        let slot = self
            .devices
            .iter_mut()
            .find(|slot| slot.is_none())
            .expect("fake bus holds at most two devices");
        *slot = Some(device);
    }

    pub fn device(&self, address: u8) -> &FakeDevice {
        self.devices
            .iter()
            .flatten()
            .find(|dev| dev.address == address)
            .expect("no fake device at address")
    }

    pub fn device_mut(&mut self, address: u8) -> &mut FakeDevice {
        self.devices
            .iter_mut()
            .flatten()
            .find(|dev| dev.address == address)
            .expect("no fake device at address")
    }
}

impl ErrorType for FakeBus {
    type Error = FakeError;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_all {
            return Err(FakeError::Fault);
        }

        let device = self
            .devices
            .iter_mut()
            .flatten()
            .find(|dev| dev.address == address)
            .ok_or(FakeError::Nack)?;

        // The first byte of a non-empty write selects the register;
        // subsequent data bytes and reads walk the register file.
        let mut pointer = 0usize;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    // A zero-length write is an address probe.
                    if let Some((reg, data)) = bytes.split_first() {
                        pointer = *reg as usize;
                        if !data.is_empty() {
                            self.writes += 1;
                        }
                        for byte in data {
                            device.regs[pointer] = *byte;
                            pointer += 1;
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for slot in buffer.iter_mut() {
                        *slot = device.regs[pointer];
                        pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
