//! Dial-up modem demo
//!
//! Ties the driver, heartbeat, input encoder and the two history buffers
//! together behind the four entry points the host scheduler calls once per
//! frame, in this order:
//!
//! 1. [`ModemLink::recv_poll`]
//! 2. [`ModemLink::send_poll`]
//! 3. [`ModemLink::input_poll`]
//! 4. [`ModemLink::render`]
//!
//! The frame counter advances at the end of `render`, so the first frame is
//! frame 0 and carries the first heartbeat character.
//!
//! Line errors stay on screen until a heartbeat goes out. A heartbeat only
//! clears errors reported before its own frame: an error picked up by the
//! same frame's `recv_poll` is still shown.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;
use taisen_driver::{LineError, PortState, SerialError, SerialPort};
use taisen_hal::{ControllerId, InputSource, RegisterBank};

use crate::config::{ConfigError, LinkConfig};
use crate::display::{DisplayError, LinkDisplay};
use crate::encoder::encode;
use crate::heartbeat::Heartbeat;
use crate::history::HistoryBuffer;
use crate::latch::LineErrorLatch;

/// Bytes kept per direction
pub const HISTORY_LEN: usize = 16;

// Screen layout, in character cells
const LABEL_COL: u8 = 1;
const TITLE: (u8, u8) = (11, 2);
const PORT_STATE_ROW: u8 = 4;
const SEND_ROW: u8 = 18;
const RECV_ROW: u8 = 20;
const BYTES_COL: u8 = 7;
const HELP_ROW: u8 = 22;
const ERROR_ROW: u8 = 25;
const BLANK_LINE: &str = "                             ";

/// The modem demo: one serial port, one heartbeat, two histories
pub struct ModemLink<'a, B, D> {
    port: SerialPort<'a, B, D>,
    latch: &'a LineErrorLatch,
    heartbeat: Heartbeat,
    controller: ControllerId,
    send_history: HistoryBuffer<HISTORY_LEN>,
    recv_history: HistoryBuffer<HISTORY_LEN>,
    /// Errors carried over from earlier frames, by `LineError::index`
    reported: [bool; LineError::ALL.len()],
    frame: u32,
    /// Frame number modulo the heartbeat period
    phase: u32,
}

impl<'a, B: RegisterBank, D: DelayNs> ModemLink<'a, B, D> {
    /// Bring up `port` with the default heartbeat and controller 0
    ///
    /// Line errors reported by the port are latched in `latch`.
    pub fn new(port: SerialPort<'a, B, D>, latch: &'a LineErrorLatch) -> Self {
        Self::build(port, latch, Heartbeat::default(), 0)
    }

    /// Bring up `port` with a custom configuration
    pub fn with_config(
        port: SerialPort<'a, B, D>,
        latch: &'a LineErrorLatch,
        config: &LinkConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let heartbeat =
            Heartbeat::new(config.heartbeat_message.as_bytes(), config.heartbeat_period)?;

        Ok(Self::build(port, latch, heartbeat, config.controller))
    }

    fn build(
        mut port: SerialPort<'a, B, D>,
        latch: &'a LineErrorLatch,
        heartbeat: Heartbeat,
        controller: ControllerId,
    ) -> Self {
        port.initialize();
        port.register_error_callbacks(
            Some(latch.slot(LineError::Overrun)),
            Some(latch.slot(LineError::Framing)),
            Some(latch.slot(LineError::Parity)),
        );
        info!("Modem link up, heartbeat every {=u32} frames", heartbeat.period());

        Self {
            port,
            latch,
            heartbeat,
            controller,
            send_history: HistoryBuffer::new(),
            recv_history: HistoryBuffer::new(),
            reported: [false; LineError::ALL.len()],
            frame: 0,
            phase: 0,
        }
    }

    /// Receive-poll entry point
    ///
    /// Records the byte if one arrived. Errors still latched from earlier
    /// frames are carried aside first, so the latch holds only what this
    /// poll reports.
    pub fn recv_poll(&mut self) {
        for kind in LineError::ALL {
            if self.latch.take(kind) {
                self.reported[kind.index()] = true;
            }
        }

        match self.port.recv_byte() {
            Ok(byte) => {
                trace!("RX {=u8:#04x}", byte);
                self.recv_history.insert(byte);
            }
            Err(SerialError::NotReady) => {}
            Err(e) => {
                debug!("RX skipped: {}", e);
            }
        }
    }

    /// Transmit-poll entry point: heartbeat
    pub fn send_poll(&mut self) {
        let Some(byte) = self.heartbeat.tick(self.phase) else {
            return;
        };

        trace!("Heartbeat {=u8:#04x}", byte);
        if self.transmit(byte) {
            // Errors from this frame's receive poll are still in the latch
            self.reported = [false; LineError::ALL.len()];
        }
    }

    /// Input-sampling entry point
    pub fn input_poll<I: InputSource + ?Sized>(&mut self, input: &I) {
        if let Some(byte) = encode(input, self.controller) {
            self.transmit(byte);
        }
    }

    /// Render entry point
    ///
    /// Skips drawing when the display is not ready. Ends the frame either way.
    pub fn render<V: LinkDisplay + ?Sized>(&mut self, display: &mut V) -> Result<(), DisplayError> {
        let result = if display.is_ready() {
            self.draw(display)
        } else {
            Ok(())
        };

        self.frame = self.frame.wrapping_add(1);
        self.phase = (self.phase + 1) % self.heartbeat.period();
        result
    }

    /// Bytes handed to the transmitter, newest first
    pub fn send_history(&self) -> &HistoryBuffer<HISTORY_LEN> {
        &self.send_history
    }

    /// Bytes read from the receiver, newest first
    pub fn recv_history(&self) -> &HistoryBuffer<HISTORY_LEN> {
        &self.recv_history
    }

    /// Driver lifecycle state
    pub fn port_state(&self) -> PortState {
        self.port.state()
    }

    /// The serial port
    pub fn port(&self) -> &SerialPort<'a, B, D> {
        &self.port
    }

    /// Heartbeat generator state
    pub fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    /// Returns true if `kind` is currently shown on the error rows
    pub fn shows_line_error(&self, kind: LineError) -> bool {
        self.reported[kind.index()] || self.latch.is_raised(kind)
    }

    /// Current frame number
    pub fn frame(&self) -> u32 {
        self.frame
    }

    fn transmit(&mut self, byte: u8) -> bool {
        match self.port.send_byte(byte) {
            Ok(()) => {
                self.send_history.insert(byte);
                true
            }
            Err(e) => {
                debug!("TX dropped {=u8:#04x}: {}", byte, e);
                false
            }
        }
    }

    fn draw<V: LinkDisplay + ?Sized>(&self, display: &mut V) -> Result<(), DisplayError> {
        display.draw_text(TITLE.0, TITLE.1, "Dial-Up Modem Demo")?;

        let state = match self.port.state() {
            PortState::Ready => "Port: ready  ",
            PortState::Uninitialized => "Port: offline",
        };
        display.draw_text(LABEL_COL, PORT_STATE_ROW, state)?;

        draw_history(display, SEND_ROW, "Send:", &self.send_history)?;
        draw_history(display, RECV_ROW, "Recv:", &self.recv_history)?;

        let mut line: String<32> = String::new();
        display.draw_text(LABEL_COL, HELP_ROW, "Press buttons to send data")?;
        let _ = write!(line, "Heartbeat char every {}", self.heartbeat.period());
        display.draw_text(LABEL_COL, HELP_ROW + 1, &line)?;
        display.draw_text(LABEL_COL, HELP_ROW + 2, "frames. Full clock rate 8N1")?;

        for (row, kind) in (ERROR_ROW..).zip(LineError::ALL) {
            line.clear();
            if self.shows_line_error(kind) {
                let _ = write!(line, "{}", kind);
                display.draw_text(LABEL_COL, row, &line)?;
            } else {
                display.draw_text(LABEL_COL, row, BLANK_LINE)?;
            }
        }

        Ok(())
    }
}

fn draw_history<V: LinkDisplay + ?Sized, const N: usize>(
    display: &mut V,
    row: u8,
    label: &str,
    history: &HistoryBuffer<N>,
) -> Result<(), DisplayError> {
    display.draw_text(LABEL_COL, row, label)?;

    let mut cell = [0u8; 4];
    for (col, byte) in (BYTES_COL..).step_by(2).zip(history.iter()) {
        display.draw_text(col, row, glyph(byte).encode_utf8(&mut cell))?;
    }

    Ok(())
}

/// Printable form of a link byte; anything else shows as a space
fn glyph(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        char::from(byte)
    } else {
        ' '
    }
}
