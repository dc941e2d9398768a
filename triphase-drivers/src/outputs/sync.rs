//! Control-line synchronizer
//!
//! GPIO writes on the panel MCU are one pin at a time, so a frame cannot
//! be applied atomically. Lines are written break-before-make: every
//! line that ends low is written first, then every line that ends high.
//! During the write an observer can only see a subset of the target's
//! asserted lines, never an extra line asserted.

use triphase_core::outputs::{OutputFrame, OutputLine};
use triphase_hal::OutputPin;

/// Drives the nine control lines from committed settings
pub struct OutputSynchronizer<P> {
    /// Pins in [`OutputLine::ALL`] order
    pins: [P; OutputLine::COUNT],
    current: Option<OutputFrame>,
}

impl<P: OutputPin> OutputSynchronizer<P> {
    /// Take ownership of the pins, indexed by [`OutputLine::index`]
    ///
    /// The pins are left untouched until the first [`apply`](Self::apply).
    pub fn new(pins: [P; OutputLine::COUNT]) -> Self {
        Self {
            pins,
            current: None,
        }
    }

    /// Write a complete frame
    pub fn apply(&mut self, frame: &OutputFrame) {
        for (line, high) in frame.iter() {
            if !high {
                self.pins[line.index()].set_low();
            }
        }
        for (line, high) in frame.iter() {
            if high {
                self.pins[line.index()].set_high();
            }
        }
        self.current = Some(*frame);
    }

    /// Last frame written, if any
    pub fn current(&self) -> Option<&OutputFrame> {
        self.current.as_ref()
    }

    /// Level currently driven on one line
    pub fn line_is_high(&self, line: OutputLine) -> bool {
        self.pins[line.index()].is_set_high()
    }
}
