//! Character display trait for the 16x2 panel LCD

use crate::ui::Screen;

/// Visible columns
pub const DISPLAY_COLUMNS: u8 = 16;

/// Visible rows
pub const DISPLAY_ROWS: u8 = 2;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus write failed; what the display shows is unknown
    Transport,
    /// Cursor position outside the visible area
    OutOfRange,
}

/// Trait for a text-only character display
///
/// Writes are fire-and-forget: nothing is read back from the panel.
pub trait CharDisplay {
    /// Run the power-on initialization sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: column (0-15)
    /// - `row`: row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor
    ///
    /// Characters outside printable ASCII are sent as `?`.
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait for drawing whole screens
pub trait DisplayExt: CharDisplay {
    /// Write text at a position
    fn text_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_str(text)
    }

    /// Overwrite both rows with a screen
    ///
    /// Each row is padded to the full width, so no clear (and its
    /// settle delay) is needed between frames.
    fn draw_screen(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        for row in 0..DISPLAY_ROWS {
            let line = screen.padded_row(row);
            self.text_at(0, row, line.as_str())?;
        }
        Ok(())
    }
}

impl<T: CharDisplay + ?Sized> DisplayExt for T {}
