//! Periodic heartbeat generator
//!
//! Emits the next character of a fixed message once every `period` ticks.
//! It does not look at the line: a character the transmitter could not
//! take is simply replaced by the next one a period later.

use heapless::Vec;

use crate::config::{ConfigError, MAX_MESSAGE_LEN};

/// Default heartbeat message, sent one character at a time
pub const HEARTBEAT_MESSAGE: &[u8] = b"LOOC si sihT ";

/// Ticks between heartbeat characters
pub const HEARTBEAT_PERIOD: u32 = 256;

/// Heartbeat state: message and cursor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Heartbeat {
    message: Vec<u8, MAX_MESSAGE_LEN>,
    cursor: usize,
    period: u32,
}

impl Default for Heartbeat {
    fn default() -> Self {
        let mut message = Vec::new();
        // The default message always fits
        let _ = message.extend_from_slice(HEARTBEAT_MESSAGE);
        Self {
            message,
            cursor: 0,
            period: HEARTBEAT_PERIOD,
        }
    }
}

impl Heartbeat {
    /// Create a heartbeat for `message`, one character every `period` ticks
    pub fn new(message: &[u8], period: u32) -> Result<Self, ConfigError> {
        if message.is_empty() {
            return Err(ConfigError::EmptyMessage);
        }
        if period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        let message = Vec::from_slice(message).map_err(|_| ConfigError::MessageTooLong)?;

        Ok(Self {
            message,
            cursor: 0,
            period,
        })
    }

    /// Advance one tick
    ///
    /// Returns the emitted character when `frame` falls on a period
    /// boundary, `None` otherwise.
    ///
    /// A free-running `u32` counter only keeps an even cadence across its
    /// wrap when `period` divides 2^32. Callers with other periods pass the
    /// frame number modulo `period`, as [`ModemLink`](crate::ModemLink) does.
    pub fn tick(&mut self, frame: u32) -> Option<u8> {
        if frame % self.period != 0 {
            return None;
        }

        let byte = *self.message.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.message.len();
        Some(byte)
    }

    /// Index of the next character to emit
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The full message
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Ticks between emissions
    pub fn period(&self) -> u32 {
        self.period
    }
}
