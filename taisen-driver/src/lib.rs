//! Serial port driver
//!
//! This crate provides the polled driver for the SCI transceiver on top
//! of the register traits in `taisen-hal`:
//!
//! - One-time initialization with a settle wait
//! - Non-blocking single-byte transmit and receive
//! - Overrun, framing and parity detection with per-kind callbacks
//!
//! Every call is a single attempt. A `NotReady` result means "try again
//! next tick"; nothing here blocks or retries.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod serial;

pub use serial::{ErrorCallback, LineError, LineErrorHandler, PortState, SerialError, SerialPort};
