//! SH-2 specific HAL for the Taisen serial link
//!
//! This crate provides the memory-mapped implementation of the
//! `taisen-hal` register bank for the SH-2 on-chip serial communication
//! interface, plus a busy-wait delay for the line settle time.
//!
//! # Usage
//!
//! ```ignore
//! let bank = unsafe { MmioBank::sci() };
//! let port = SerialPort::new(bank, SpinDelay::default());
//! ```

#![no_std]

pub mod delay;
pub mod mmio;

pub use delay::{SpinDelay, DEFAULT_CPU_HZ};
pub use mmio::{MmioBank, SCI_BASE};
