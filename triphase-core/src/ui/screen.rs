//! Two-row text buffer

use heapless::String;

use crate::traits::display::{DISPLAY_COLUMNS, DISPLAY_ROWS};

const COLUMNS: usize = DISPLAY_COLUMNS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// One display row
pub type Row = String<COLUMNS>;

/// Contents of the 16x2 display
///
/// Each stored character is one display cell: printable ASCII is kept,
/// anything else is stored as `?`. Text past the last column is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    rows: [Row; ROWS],
}

impl Screen {
    /// Create an empty screen
    pub const fn new() -> Self {
        Self {
            rows: [String::new(), String::new()],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Replace a whole row
    pub fn set_row(&mut self, row: u8, text: &str) {
        if let Some(line) = self.rows.get_mut(row as usize) {
            line.clear();
            push_truncated(line, text);
        }
    }

    /// Write text starting at a column
    ///
    /// Anything already at or after `col` is replaced; a gap before
    /// `col` is filled with spaces.
    pub fn write_at(&mut self, col: u8, row: u8, text: &str) {
        let Some(line) = self.rows.get_mut(row as usize) else {
            return;
        };
        let col = (col as usize).min(COLUMNS);
        while line.len() > col {
            line.pop();
        }
        while line.len() < col {
            if line.push(' ').is_err() {
                break;
            }
        }
        push_truncated(line, text);
    }

    /// Text of a row, without trailing padding
    pub fn row(&self, row: u8) -> &str {
        self.rows
            .get(row as usize)
            .map(|line| line.as_str())
            .unwrap_or("")
    }

    /// A row padded with spaces to the full width
    pub fn padded_row(&self, row: u8) -> Row {
        let mut line = Row::new();
        push_truncated(&mut line, self.row(row));
        while line.push(' ').is_ok() {}
        line
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored in place of characters the display cannot show
const REPLACEMENT: char = '?';

fn push_truncated(line: &mut Row, text: &str) {
    for c in text.chars() {
        let cell = if c.is_ascii_graphic() || c == ' ' {
            c
        } else {
            REPLACEMENT
        };
        if line.push(cell).is_err() {
            break;
        }
    }
}
