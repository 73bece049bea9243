//! SCI serial port driver
//!
//! Asynchronous 8N1 operation at the default (full clock) bit rate.
//! Transmit and receive are polled: the driver never waits for the
//! transceiver and never queues. A caller that gets
//! [`SerialError::NotReady`] simply tries again on its next tick.

use embedded_hal::delay::DelayNs;
use taisen_hal::{ControlFlags, RegisterBank, SciRegisters, StatusFlags};

use super::error::{LineError, SerialError};

/// Line settle time after reset (ns), at least one bit-time at the default rate
pub const SETTLE_NS: u32 = 5_000;

/// Bit rate register value selecting the full hardware clock
pub const DEFAULT_BIT_RATE: u8 = 0;

/// Mode register value for asynchronous 8N1
const MODE_ASYNC_8N1: u8 = 0;

/// Handler invoked when the receiver reports a line error
///
/// Implemented for every `Fn()` closure, so a plain closure reference can be
/// registered directly.
pub trait LineErrorHandler {
    /// Called synchronously from inside [`SerialPort::recv_byte`]
    fn on_line_error(&self);
}

impl<F: Fn()> LineErrorHandler for F {
    fn on_line_error(&self) {
        self()
    }
}

/// Registered error handler reference
pub type ErrorCallback<'a> = &'a dyn LineErrorHandler;

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortState {
    /// `initialize` has not run yet
    #[default]
    Uninitialized,
    /// Transmitter and receiver enabled
    Ready,
}

/// Polled serial port
///
/// Owns the register bank, the settle delay and the error callback slots.
pub struct SerialPort<'a, B, D> {
    regs: SciRegisters<B>,
    delay: D,
    settle_ns: u32,
    state: PortState,
    /// Indexed by [`LineError::index`]
    callbacks: [Option<ErrorCallback<'a>>; 3],
}

impl<'a, B: RegisterBank, D: DelayNs> SerialPort<'a, B, D> {
    /// Create an uninitialized port
    pub fn new(bank: B, delay: D) -> Self {
        Self::with_settle_time(bank, delay, SETTLE_NS)
    }

    /// Create an uninitialized port with a custom settle time
    pub fn with_settle_time(bank: B, delay: D, settle_ns: u32) -> Self {
        Self {
            regs: SciRegisters::new(bank),
            delay,
            settle_ns,
            state: PortState::Uninitialized,
            callbacks: [None; 3],
        }
    }

    /// Bring up the transceiver
    ///
    /// Runs once. Calling it again on a ready port returns without
    /// touching any register.
    pub fn initialize(&mut self) {
        if self.state == PortState::Ready {
            return;
        }

        self.regs.set_control(ControlFlags::empty());
        self.regs.set_mode(MODE_ASYNC_8N1);
        self.regs.set_bit_rate(DEFAULT_BIT_RATE);

        // Let the line idle for at least one bit before enabling
        self.delay.delay_ns(self.settle_ns);

        self.regs.enable(ControlFlags::TE | ControlFlags::RE);
        self.state = PortState::Ready;
    }

    /// Register line error handlers
    ///
    /// Each `Some` replaces the handler for that kind; `None` keeps
    /// whatever was registered before.
    pub fn register_error_callbacks(
        &mut self,
        overrun: Option<ErrorCallback<'a>>,
        framing: Option<ErrorCallback<'a>>,
        parity: Option<ErrorCallback<'a>>,
    ) {
        let updates = [
            (LineError::Overrun, overrun),
            (LineError::Framing, framing),
            (LineError::Parity, parity),
        ];

        for (kind, callback) in updates {
            if let Some(callback) = callback {
                self.callbacks[kind.index()] = Some(callback);
            }
        }
    }

    /// Check whether a handler is registered for `kind`
    pub fn has_error_callback(&self, kind: LineError) -> bool {
        self.callbacks[kind.index()].is_some()
    }

    /// Offer one byte to the transmitter
    ///
    /// Fails with `NotReady` while the previous byte is still in the
    /// transmit register.
    pub fn send_byte(&mut self, data: u8) -> Result<(), SerialError> {
        self.ensure_ready()?;

        if !self.regs.status().contains(StatusFlags::TDRE) {
            return Err(SerialError::NotReady);
        }

        self.regs.write_data(data);
        // Busy until the hardware sets TDRE again
        self.regs.clear_status(StatusFlags::TDRE);

        Ok(())
    }

    /// Poll the receiver for one byte
    ///
    /// Line errors are checked and cleared first, on every call, and their
    /// handlers run before data availability is looked at. They never turn
    /// into a failure of this call.
    pub fn recv_byte(&mut self) -> Result<u8, SerialError> {
        self.ensure_ready()?;

        for kind in LineError::ALL {
            let flag = kind.status_flag();
            if self.regs.status().contains(flag) {
                self.regs.clear_status(flag);

                if let Some(callback) = self.callbacks[kind.index()] {
                    callback.on_line_error();
                }
            }
        }

        if !self.regs.status().contains(StatusFlags::RDRF) {
            return Err(SerialError::NotReady);
        }

        let data = self.regs.read_data();
        self.regs.clear_status(StatusFlags::RDRF);

        Ok(data)
    }

    /// Current lifecycle state
    pub fn state(&self) -> PortState {
        self.state
    }

    /// Returns true once `initialize` has run
    pub fn is_ready(&self) -> bool {
        self.state == PortState::Ready
    }

    /// Read-only access to the typed registers
    pub fn registers(&self) -> &SciRegisters<B> {
        &self.regs
    }

    fn ensure_ready(&self) -> Result<(), SerialError> {
        match self.state {
            PortState::Ready => Ok(()),
            PortState::Uninitialized => Err(SerialError::NotInitialized),
        }
    }
}
