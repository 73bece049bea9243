//! Sliding-window byte history
//!
//! Keeps the last `N` bytes seen on one direction of the link for display.
//! Index 0 is always the newest byte. The buffer is never resized: it starts
//! zero-filled and every insert pushes the oldest byte out of the tail.

/// Fixed-capacity history of link bytes, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HistoryBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HistoryBuffer<N> {
    /// Create a zero-filled buffer
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Insert a byte at the front, discarding the oldest
    pub fn insert(&mut self, value: u8) {
        let Some(tail) = N.checked_sub(1) else {
            return;
        };
        self.bytes.copy_within(..tail, 1);
        self.bytes[0] = value;
    }

    /// Byte at `index` (0 = newest)
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Most recently inserted byte
    pub fn newest(&self) -> u8 {
        self.bytes.first().copied().unwrap_or(0)
    }

    /// All bytes, newest first
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate bytes, newest first
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    /// Number of slots (always `N`)
    pub const fn capacity(&self) -> usize {
        N
    }
}
