//! Polled SCI serial port

pub mod error;
pub mod port;

pub use error::{LineError, SerialError};
pub use port::{ErrorCallback, LineErrorHandler, PortState, SerialPort, DEFAULT_BIT_RATE, SETTLE_NS};
