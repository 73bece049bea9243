//! Simulated register bank
//!
//! A host-side stand-in for the SCI. Register state lives in cells so a test
//! can hand `&SimulatedBank` to the driver and still play the hardware side
//! (raise status bits, deliver bytes) through the same reference.

use core::cell::Cell;

use crate::bank::RegisterBank;
use crate::regs::{Register, StatusFlags};

/// In-memory SCI register bank that counts driver writes
#[derive(Debug)]
pub struct SimulatedBank {
    regs: [Cell<u8>; Register::COUNT],
    writes: Cell<usize>,
}

impl Default for SimulatedBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBank {
    /// Create a bank in its power-on state
    pub fn new() -> Self {
        let bank = Self {
            regs: core::array::from_fn(|_| Cell::new(0)),
            writes: Cell::new(0),
        };
        bank.set(Register::Status, StatusFlags::RESET.bits());
        bank
    }

    /// Peek at a register without going through the driver
    pub fn get(&self, reg: Register) -> u8 {
        self.regs[reg.offset()].get()
    }

    /// Poke a register without counting it as a driver write
    pub fn set(&self, reg: Register, value: u8) {
        self.regs[reg.offset()].set(value);
    }

    /// Current status register contents
    pub fn status(&self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.get(Register::Status))
    }

    /// Hardware side: assert status bits
    pub fn raise(&self, flags: StatusFlags) {
        self.set(Register::Status, self.get(Register::Status) | flags.bits());
    }

    /// Hardware side: deassert status bits
    pub fn lower(&self, flags: StatusFlags) {
        self.set(Register::Status, self.get(Register::Status) & !flags.bits());
    }

    /// Hardware side: latch an incoming byte and flag it as available
    pub fn deliver(&self, byte: u8) {
        self.set(Register::ReceiveData, byte);
        self.raise(StatusFlags::RDRF);
    }

    /// Hardware side: shift out the transmit register and report ready again
    ///
    /// Returns the byte that was on its way out.
    pub fn complete_transmit(&self) -> u8 {
        self.raise(StatusFlags::TDRE);
        self.get(Register::TransmitData)
    }

    /// Number of writes issued through [`RegisterBank`]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl RegisterBank for &SimulatedBank {
    fn read(&self, reg: Register) -> u8 {
        self.get(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.writes.set(self.writes.get() + 1);
        self.set(reg, value);
    }
}

impl RegisterBank for SimulatedBank {
    fn read(&self, reg: Register) -> u8 {
        self.get(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.writes.set(self.writes.get() + 1);
        self.set(reg, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let bank = SimulatedBank::new();
        assert!(bank.status().contains(StatusFlags::TDRE));
        assert!(!bank.status().contains(StatusFlags::RDRF));
        assert_eq!(bank.write_count(), 0);
    }

    #[test]
    fn test_deliver_sets_receive_ready() {
        let bank = SimulatedBank::new();
        bank.deliver(0x5A);
        assert_eq!(bank.get(Register::ReceiveData), 0x5A);
        assert!(bank.status().contains(StatusFlags::RDRF));
    }

    #[test]
    fn test_writes_are_counted_but_pokes_are_not() {
        let mut bank = SimulatedBank::new();
        bank.set(Register::Mode, 1);
        assert_eq!(bank.write_count(), 0);

        bank.write(Register::Mode, 2);
        (&bank).write(Register::BitRate, 3);
        assert_eq!(bank.write_count(), 2);
        assert_eq!(bank.get(Register::Mode), 2);
        assert_eq!(bank.get(Register::BitRate), 3);
    }

    #[test]
    fn test_complete_transmit_reasserts_ready() {
        let bank = SimulatedBank::new();
        bank.set(Register::TransmitData, b'Q');
        bank.lower(StatusFlags::TDRE);

        assert_eq!(bank.complete_transmit(), b'Q');
        assert!(bank.status().contains(StatusFlags::TDRE));
    }
}
