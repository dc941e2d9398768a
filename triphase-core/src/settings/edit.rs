//! In-progress edit buffer
//!
//! A working copy of the committed settings taken when an edit session
//! starts. Only fields the operator touches diverge from the snapshot.

use super::types::{ConfigItem, Phase, Settings};

/// Direction of a direct adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adjust {
    Increase,
    Decrease,
}

/// Working copy of the settings plus the phase cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditBuffer {
    working: Settings,
    cursor: Phase,
    /// Phase flipped by the most recent select press, if any
    last_toggle: Option<Phase>,
}

impl EditBuffer {
    /// Snapshot the committed settings, cursor on phase A
    pub const fn from_committed(committed: &Settings) -> Self {
        Self {
            working: *committed,
            cursor: Phase::A,
            last_toggle: None,
        }
    }

    /// The working settings
    pub const fn settings(&self) -> &Settings {
        &self.working
    }

    /// Phase the cursor is on
    pub const fn cursor(&self) -> Phase {
        self.cursor
    }

    /// Apply an up/down adjustment to a directly adjusted item
    ///
    /// Every directly adjusted item has a two-value domain, so both
    /// directions flip the value. The phase item is not adjusted this way.
    pub fn adjust(&mut self, item: ConfigItem, _direction: Adjust) {
        match item {
            ConfigItem::Frequency => {
                self.working.frequency = self.working.frequency.toggled();
            }
            ConfigItem::PhaseSequence => {
                self.working.sequence = self.working.sequence.toggled();
            }
            ConfigItem::Fan => {
                self.working.fan = self.working.fan.toggled();
            }
            ConfigItem::PhaseEnable => {}
        }
    }

    /// Move the phase cursor, wrapping
    pub fn move_cursor(&mut self, forward: bool) {
        self.cursor = if forward {
            self.cursor.next()
        } else {
            self.cursor.prev()
        };
    }

    /// Flip the phase under the cursor
    pub fn toggle_phase(&mut self) {
        self.working.phases = self.working.phases.toggled(self.cursor);
        self.last_toggle = Some(self.cursor);
    }

    /// Undo the flip made by the most recent select press
    ///
    /// Used when that press turns out to be a long-press confirm.
    pub fn revert_last_toggle(&mut self) {
        if let Some(phase) = self.last_toggle.take() {
            self.working.phases = self.working.phases.toggled(phase);
        }
    }

    /// Consume the buffer, yielding the full working copy
    pub const fn into_settings(self) -> Settings {
        self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::{FanState, Frequency, PhaseMask, PhaseSequence};

    #[test]
    fn test_snapshot_equals_committed() {
        let committed = Settings {
            frequency: Frequency::Hz50,
            phases: PhaseMask::from_bits(0b101),
            sequence: PhaseSequence::Acb,
            fan: FanState::On,
        };
        let buffer = EditBuffer::from_committed(&committed);
        assert_eq!(*buffer.settings(), committed);
        assert_eq!(buffer.cursor(), Phase::A);
    }

    #[test]
    fn test_adjust_touches_only_its_field() {
        let committed = Settings::default();
        let mut buffer = EditBuffer::from_committed(&committed);

        buffer.adjust(ConfigItem::Frequency, Adjust::Increase);
        assert_eq!(buffer.settings().frequency, Frequency::Hz50);
        assert_eq!(buffer.settings().phases, committed.phases);
        assert_eq!(buffer.settings().sequence, committed.sequence);
        assert_eq!(buffer.settings().fan, committed.fan);

        buffer.adjust(ConfigItem::Frequency, Adjust::Decrease);
        assert_eq!(buffer.settings().frequency, Frequency::Hz60);
    }

    #[test]
    fn test_adjust_ignores_phase_item() {
        let mut buffer = EditBuffer::from_committed(&Settings::default());
        buffer.adjust(ConfigItem::PhaseEnable, Adjust::Increase);
        assert_eq!(*buffer.settings(), Settings::default());
    }

    #[test]
    fn test_cursor_toggle() {
        let mut buffer = EditBuffer::from_committed(&Settings::default());
        buffer.move_cursor(true);
        buffer.move_cursor(true);
        assert_eq!(buffer.cursor(), Phase::C);

        buffer.toggle_phase();
        assert_eq!(buffer.settings().phases.bits(), 0b011);

        buffer.move_cursor(true);
        assert_eq!(buffer.cursor(), Phase::A);
        buffer.move_cursor(false);
        assert_eq!(buffer.cursor(), Phase::C);
    }

    #[test]
    fn test_revert_last_toggle_only_once() {
        let mut buffer = EditBuffer::from_committed(&Settings::default());
        buffer.toggle_phase();
        assert_eq!(buffer.settings().phases.bits(), 0b110);

        buffer.revert_last_toggle();
        assert_eq!(buffer.settings().phases, PhaseMask::ALL);

        buffer.revert_last_toggle();
        assert_eq!(buffer.settings().phases, PhaseMask::ALL);
    }
}
