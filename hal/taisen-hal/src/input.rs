//! Controller input abstraction
//!
//! The input collaborator is polled once per tick. Only digital signals
//! are modelled; analog axes are out of scope.

/// Controller port number (0 = first pad)
pub type ControllerId = u8;

/// Digital controller signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Up,
    Down,
    Left,
    Right,
    Start,
    A,
    B,
    C,
    X,
    Y,
    Z,
    /// Left shoulder trigger
    L,
    /// Right shoulder trigger
    R,
}

/// Source of controller input
///
/// Implementations query whatever the platform uses for pad state.
pub trait InputSource {
    /// Check whether a controller is connected on the given port
    fn is_available(&self, _controller: ControllerId) -> bool {
        true
    }

    /// Check whether a signal is currently held down
    fn is_signal_active(&self, controller: ControllerId, signal: Signal) -> bool;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_available(&self, controller: ControllerId) -> bool {
        (**self).is_available(controller)
    }

    fn is_signal_active(&self, controller: ControllerId, signal: Signal) -> bool {
        (**self).is_signal_active(controller, signal)
    }
}
