//! Register bank abstraction
//!
//! Every SCI register is one byte wide. Implementations must perform each
//! access exactly once and in program order (volatile semantics).

use crate::regs::Register;

/// Byte-wide access to the serial register bank
pub trait RegisterBank {
    /// Read a register
    fn read(&self, reg: Register) -> u8;

    /// Write a register
    fn write(&mut self, reg: Register, value: u8);

    /// Read-modify-write a register
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl<T: RegisterBank + ?Sized> RegisterBank for &mut T {
    fn read(&self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value);
    }
}
