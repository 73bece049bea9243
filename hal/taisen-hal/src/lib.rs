//! Taisen Hardware Abstraction Layer
//!
//! This crate defines the register map of the on-chip serial communication
//! interface (SCI) and the traits through which the driver reaches it. The
//! chip-specific crate provides the volatile memory-mapped implementation;
//! tests use [`sim::SimulatedBank`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (taisen-link)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  taisen-driver (SerialPort)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  taisen-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ taisen-hal-   │       │ SimulatedBank │
//! │    sh2        │       │  (host tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bank::RegisterBank`] - Byte-wide register access
//! - [`input::InputSource`] - Controller signal polling

#![no_std]
#![deny(unsafe_code)]

pub mod bank;
pub mod input;
pub mod regs;
pub mod sci;
pub mod sim;

// Re-export key types at crate root for convenience
pub use bank::RegisterBank;
pub use input::{ControllerId, InputSource, Signal};
pub use regs::{ControlFlags, Register, StatusFlags};
pub use sci::SciRegisters;
pub use sim::SimulatedBank;
