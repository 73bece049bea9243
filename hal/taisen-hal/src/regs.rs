//! SCI register map
//!
//! Byte offsets and bit fields of the serial communication interface.
//! Offsets are relative to the register bank base address.

use bitflags::bitflags;

/// Serial register identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Serial mode register (SMR)
    Mode,
    /// Bit rate register (BRR)
    BitRate,
    /// Serial control register (SCR)
    Control,
    /// Transmit data register (TDR)
    TransmitData,
    /// Serial status register (SSR)
    Status,
    /// Receive data register (RDR)
    ReceiveData,
}

impl Register {
    /// Number of registers in the bank
    pub const COUNT: usize = 6;

    /// All registers in address order
    pub const ALL: [Register; Register::COUNT] = [
        Register::Mode,
        Register::BitRate,
        Register::Control,
        Register::TransmitData,
        Register::Status,
        Register::ReceiveData,
    ];

    /// Byte offset from the bank base address
    pub const fn offset(self) -> usize {
        match self {
            Register::Mode => 0x00,
            Register::BitRate => 0x01,
            Register::Control => 0x02,
            Register::TransmitData => 0x03,
            Register::Status => 0x04,
            Register::ReceiveData => 0x05,
        }
    }
}

bitflags! {
    /// Serial status register (SSR) flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        /// Transmit data register empty (transmit-ready)
        const TDRE = 1 << 7;
        /// Receive data register full (receive-ready)
        const RDRF = 1 << 6;
        /// Overrun error
        const ORER = 1 << 5;
        /// Framing error
        const FER = 1 << 4;
        /// Parity error
        const PER = 1 << 3;
        // Remaining bits (TEND, MPB, MPBT) are kept but not interpreted
        const _ = !0;
    }
}

impl StatusFlags {
    /// All line-error bits
    pub const LINE_ERRORS: StatusFlags = StatusFlags::ORER
        .union(StatusFlags::FER)
        .union(StatusFlags::PER);

    /// Power-on value of the status register (TDRE and TEND set)
    pub const RESET: StatusFlags = StatusFlags::from_bits_retain(0x84);
}

bitflags! {
    /// Serial control register (SCR) flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ControlFlags: u8 {
        /// Transmit enable
        const TE = 1 << 5;
        /// Receive enable
        const RE = 1 << 4;
        const _ = !0;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SSR({=u8:#04x})", self.bits());
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ControlFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SCR({=u8:#04x})", self.bits());
    }
}
