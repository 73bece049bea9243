//! Demo byte link over the Taisen serial port
//!
//! A deliberately small protocol used to exercise the driver: raw bytes,
//! no framing, no checksums, no retransmission.
//!
//! - [`heartbeat`] - one character of a fixed message every 256 ticks
//! - [`encoder`] - controller button to byte mapping
//! - [`history`] - sliding window of recently sent/received bytes
//! - [`app`] - the four per-tick entry points the host scheduler calls
//!
//! # Features
//!
//! - `defmt` - logging and `defmt::Format` for public types
//! - `serde` - `Serialize`/`Deserialize` for [`LinkConfig`]. Always on for
//!   this crate's tests, which store configs with `postcard` and `toml`.
//!
//! # Tick order
//!
//! ```text
//! recv_poll ─▶ send_poll ─▶ input_poll ─▶ render
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod display;
pub mod encoder;
pub mod heartbeat;
pub mod history;
pub mod latch;

pub use app::{ModemLink, HISTORY_LEN};
pub use config::{ConfigError, LinkConfig};
pub use display::{DisplayError, LinkDisplay};
pub use encoder::{encode, KEY_MAP};
pub use heartbeat::{Heartbeat, HEARTBEAT_MESSAGE, HEARTBEAT_PERIOD};
pub use history::HistoryBuffer;
pub use latch::{LatchSlot, LineErrorLatch};
