//! Typed SCI register access
//!
//! Wraps a [`RegisterBank`] and keeps the bit masks of each register next
//! to the register they belong to, so a status bit can never be written
//! into the control register by accident.

use crate::bank::RegisterBank;
use crate::regs::{ControlFlags, Register, StatusFlags};

/// Typed view over the SCI register bank
#[derive(Debug)]
pub struct SciRegisters<B> {
    bank: B,
}

impl<B: RegisterBank> SciRegisters<B> {
    /// Wrap a register bank
    pub fn new(bank: B) -> Self {
        Self { bank }
    }

    /// Read the status register
    pub fn status(&self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.bank.read(Register::Status))
    }

    /// Clear the given status bits, leaving all others untouched
    ///
    /// The status register is cleared by writing 0 to a bit after it has
    /// been read as 1, hence the read-modify-write.
    pub fn clear_status(&mut self, flags: StatusFlags) {
        self.bank
            .modify(Register::Status, |value| value & !flags.bits());
    }

    /// Read the control register
    pub fn control(&self) -> ControlFlags {
        ControlFlags::from_bits_retain(self.bank.read(Register::Control))
    }

    /// Overwrite the control register
    pub fn set_control(&mut self, flags: ControlFlags) {
        self.bank.write(Register::Control, flags.bits());
    }

    /// Set control bits, leaving all others untouched
    pub fn enable(&mut self, flags: ControlFlags) {
        self.bank
            .modify(Register::Control, |value| value | flags.bits());
    }

    /// Read the mode register
    pub fn mode(&self) -> u8 {
        self.bank.read(Register::Mode)
    }

    /// Overwrite the mode register
    pub fn set_mode(&mut self, mode: u8) {
        self.bank.write(Register::Mode, mode);
    }

    /// Read the bit rate register
    pub fn bit_rate(&self) -> u8 {
        self.bank.read(Register::BitRate)
    }

    /// Overwrite the bit rate register
    pub fn set_bit_rate(&mut self, divisor: u8) {
        self.bank.write(Register::BitRate, divisor);
    }

    /// Write a byte to the transmit data register
    pub fn write_data(&mut self, byte: u8) {
        self.bank.write(Register::TransmitData, byte);
    }

    /// Read the receive data register
    pub fn read_data(&self) -> u8 {
        self.bank.read(Register::ReceiveData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulatedBank;

    #[test]
    fn test_clear_status_only_touches_requested_bits() {
        let bank = SimulatedBank::new();
        bank.raise(StatusFlags::RDRF | StatusFlags::FER | StatusFlags::PER);
        let mut regs = SciRegisters::new(&bank);

        regs.clear_status(StatusFlags::FER);

        let status = regs.status();
        assert!(!status.contains(StatusFlags::FER));
        assert!(status.contains(StatusFlags::RDRF));
        assert!(status.contains(StatusFlags::PER));
        assert!(status.contains(StatusFlags::TDRE));
    }

    #[test]
    fn test_enable_preserves_other_control_bits() {
        let bank = SimulatedBank::new();
        bank.set(Register::Control, 0x03);
        let mut regs = SciRegisters::new(&bank);

        regs.enable(ControlFlags::TE | ControlFlags::RE);

        assert_eq!(regs.control().bits(), 0x33);
    }

    #[test]
    fn test_data_registers_are_separate() {
        let bank = SimulatedBank::new();
        let mut regs = SciRegisters::new(&bank);

        regs.write_data(b'T');
        bank.set(Register::ReceiveData, b'R');

        assert_eq!(bank.get(Register::TransmitData), b'T');
        assert_eq!(regs.read_data(), b'R');
    }

    #[test]
    fn test_accessors_hit_the_right_register() {
        let bank = SimulatedBank::new();
        let mut regs = SciRegisters::new(&bank);

        regs.set_mode(0x12);
        regs.set_bit_rate(0x34);
        regs.set_control(ControlFlags::TE);

        assert_eq!(bank.get(Register::Mode), 0x12);
        assert_eq!(bank.get(Register::BitRate), 0x34);
        assert_eq!(bank.get(Register::Control), 0x20);
        assert_eq!(regs.mode(), 0x12);
        assert_eq!(regs.bit_rate(), 0x34);
    }
}
