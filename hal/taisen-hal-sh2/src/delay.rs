//! Busy-wait delay
//!
//! There is no free-running timer reserved for the link, so short waits
//! spin. Each iteration costs at least one CPU cycle, which makes the
//! computed iteration count a lower bound on the requested time.

use embedded_hal::delay::DelayNs;

/// SH-2 master clock on NTSC units (Hz)
pub const DEFAULT_CPU_HZ: u32 = 28_636_360;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Spin-loop delay calibrated to a CPU frequency
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinDelay {
    cpu_hz: u32,
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_HZ)
    }
}

impl SpinDelay {
    /// Create a delay for a CPU running at `cpu_hz`
    pub const fn new(cpu_hz: u32) -> Self {
        Self { cpu_hz }
    }

    /// Number of spin iterations covering `ns` nanoseconds (rounded up)
    pub fn cycles_for(&self, ns: u32) -> u64 {
        (u64::from(ns) * u64::from(self.cpu_hz)).div_ceil(NANOS_PER_SECOND)
    }
}

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        for _ in 0..self.cycles_for(ns) {
            core::hint::spin_loop();
        }
    }
}
