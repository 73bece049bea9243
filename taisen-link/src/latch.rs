//! Line error latch
//!
//! Remembers which line errors the driver reported so the render step can
//! show them until the next heartbeat goes out. Each kind has its own
//! [`LatchSlot`], which is what gets registered with the driver.

use core::cell::Cell;

use taisen_driver::{LineError, LineErrorHandler};

/// One latched flag, usable as a driver error callback
#[derive(Debug, Default)]
pub struct LatchSlot {
    raised: Cell<bool>,
}

impl LatchSlot {
    /// Create a cleared slot
    pub const fn new() -> Self {
        Self {
            raised: Cell::new(false),
        }
    }

    /// Returns true if the error was reported since the last clear
    pub fn is_raised(&self) -> bool {
        self.raised.get()
    }
}

impl LineErrorHandler for LatchSlot {
    fn on_line_error(&self) {
        self.raised.set(true);
    }
}

/// Latched overrun, framing and parity reports
#[derive(Debug, Default)]
pub struct LineErrorLatch {
    slots: [LatchSlot; 3],
}

impl LineErrorLatch {
    /// Create a latch with nothing raised
    pub const fn new() -> Self {
        Self {
            slots: [LatchSlot::new(), LatchSlot::new(), LatchSlot::new()],
        }
    }

    /// Slot for one error kind
    pub fn slot(&self, kind: LineError) -> &LatchSlot {
        &self.slots[kind.index()]
    }

    /// Returns true if `kind` was reported since the last clear
    pub fn is_raised(&self, kind: LineError) -> bool {
        self.slot(kind).is_raised()
    }

    /// Clear `kind`, returning whether it was raised
    pub fn take(&self, kind: LineError) -> bool {
        self.slot(kind).raised.replace(false)
    }

    /// Returns true if any kind is raised
    pub fn any(&self) -> bool {
        self.slots.iter().any(LatchSlot::is_raised)
    }

    /// Drop all latched reports
    pub fn clear(&self) {
        for slot in &self.slots {
            slot.raised.set(false);
        }
    }
}
