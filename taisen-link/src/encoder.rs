//! Controller input to link byte
//!
//! One byte per tick at most: the first held signal in [`KEY_MAP`] order
//! wins.

use taisen_hal::{ControllerId, InputSource, Signal};

/// Signal to byte mapping, in priority order
pub const KEY_MAP: [(Signal, u8); 13] = [
    (Signal::Right, b'r'),
    (Signal::Left, b'l'),
    (Signal::Down, b'd'),
    (Signal::Up, b'u'),
    (Signal::Start, b'S'),
    (Signal::A, b'A'),
    (Signal::B, b'B'),
    (Signal::C, b'C'),
    (Signal::X, b'X'),
    (Signal::Y, b'Y'),
    (Signal::Z, b'Z'),
    (Signal::L, b'L'),
    (Signal::R, b'R'),
];

/// Map the current input state of `controller` to a byte
///
/// Returns `None` when the controller is not connected or nothing mapped
/// is held. Signals after the first active one are not queried.
pub fn encode<I: InputSource + ?Sized>(input: &I, controller: ControllerId) -> Option<u8> {
    if !input.is_available(controller) {
        return None;
    }

    KEY_MAP
        .iter()
        .find(|(signal, _)| input.is_signal_active(controller, *signal))
        .map(|&(_, byte)| byte)
}
