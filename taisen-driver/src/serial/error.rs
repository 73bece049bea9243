//! Serial port error types

use core::fmt;

use taisen_hal::StatusFlags;

/// Call-level failure of a transfer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Port used before `initialize`
    NotInitialized,
    /// Hardware not ready this tick (transmit busy or no byte received)
    NotReady,
}

impl SerialError {
    /// Returns true if polling again on a later tick can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SerialError::NotReady)
    }
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialError::NotInitialized => f.write_str("serial port not initialized"),
            SerialError::NotReady => f.write_str("serial port not ready"),
        }
    }
}

/// Line fault detected by the receiver
///
/// Reported through callbacks, never as a transfer failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// A byte arrived before the previous one was read (ORER)
    Overrun,
    /// Stop bit missing (FER)
    Framing,
    /// Parity mismatch (PER)
    Parity,
}

impl LineError {
    /// All kinds, in the order a receive poll evaluates them
    pub const ALL: [LineError; 3] = [LineError::Overrun, LineError::Framing, LineError::Parity];

    /// Status register bit signalling this error
    pub fn status_flag(self) -> StatusFlags {
        match self {
            LineError::Overrun => StatusFlags::ORER,
            LineError::Framing => StatusFlags::FER,
            LineError::Parity => StatusFlags::PER,
        }
    }

    /// Slot index for per-kind tables
    pub fn index(self) -> usize {
        match self {
            LineError::Overrun => 0,
            LineError::Framing => 1,
            LineError::Parity => 2,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Overrun => f.write_str("Overrun (ORER) error detected"),
            LineError::Framing => f.write_str("Framing (FER) error detected"),
            LineError::Parity => f.write_str("Parity (PER) error detected"),
        }
    }
}
