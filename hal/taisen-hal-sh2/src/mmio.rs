//! Memory-mapped SCI register bank
//!
//! The SH-2 on-chip SCI sits at a fixed address in the on-chip peripheral
//! area. Every access is a single byte-wide volatile load or store.

use core::ptr::{read_volatile, write_volatile};

use taisen_hal::{Register, RegisterBank};

/// Base address of the SCI register block (SMR)
pub const SCI_BASE: usize = 0xFFFF_FE00;

/// Volatile register bank at a fixed address
#[derive(Debug)]
pub struct MmioBank {
    base: usize,
}

impl MmioBank {
    /// Create a bank rooted at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of an SCI register block that stays mapped
    /// for the lifetime of the bank, and no other code may access that block
    /// while the bank exists.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Create the bank for the on-chip SCI
    ///
    /// # Safety
    ///
    /// Must only be called on SH-2 hardware, and at most once.
    pub const unsafe fn sci() -> Self {
        Self::new(SCI_BASE)
    }

    /// Address of a register in this bank
    pub const fn address(&self, reg: Register) -> usize {
        self.base + reg.offset()
    }
}

impl RegisterBank for MmioBank {
    fn read(&self, reg: Register) -> u8 {
        // SAFETY: the constructor contract guarantees the block is mapped
        // and exclusively owned; registers are byte wide.
        unsafe { read_volatile(self.address(reg) as *const u8) }
    }

    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: see `read`.
        unsafe { write_volatile(self.address(reg) as *mut u8, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sci_register_addresses() {
        let bank = unsafe { MmioBank::sci() };
        assert_eq!(bank.address(Register::Mode), 0xFFFF_FE00);
        assert_eq!(bank.address(Register::BitRate), 0xFFFF_FE01);
        assert_eq!(bank.address(Register::Control), 0xFFFF_FE02);
        assert_eq!(bank.address(Register::TransmitData), 0xFFFF_FE03);
        assert_eq!(bank.address(Register::Status), 0xFFFF_FE04);
        assert_eq!(bank.address(Register::ReceiveData), 0xFFFF_FE05);
    }

    #[test]
    fn test_volatile_access_on_host_memory() {
        let mut block = [0u8; Register::COUNT];
        let mut bank = unsafe { MmioBank::new(block.as_mut_ptr() as usize) };

        bank.write(Register::Control, 0x30);
        bank.modify(Register::Status, |v| v | 0x80);

        assert_eq!(bank.read(Register::Control), 0x30);
        assert_eq!(bank.read(Register::Status), 0x80);
        assert_eq!(block[2], 0x30);
        assert_eq!(block[4], 0x80);
    }
}
