//! Display collaborator
//!
//! The link only ever prints short text at character cells. How the text
//! reaches the screen (VDP text layer, debug console, test recorder) is up
//! to the implementation.

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates
    InvalidCoordinates,
}

/// Character-cell text output
pub trait LinkDisplay {
    /// Draw text with its first character at (`col`, `row`)
    fn draw_text(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError>;

    /// Check if the display can take output this tick
    ///
    /// The link skips drawing rather than wait when this returns false.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: LinkDisplay + ?Sized> LinkDisplay for &mut T {
    fn draw_text(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        (**self).draw_text(col, row, text)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
