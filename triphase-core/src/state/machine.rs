//! State machine definition
//!
//! The UI is a function of (mode, selected item, sub-state, committed
//! settings) and an event. An edit buffer exists only inside
//! [`SubState::Editing`], so "editing outside CONFIG" cannot be
//! represented, and every path out of `Editing` goes through
//! [`UiState::commit`].

use super::events::Event;
use crate::settings::{Adjust, ConfigItem, EditBuffer, Settings};

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiMode {
    /// Live status of the committed settings
    #[default]
    Status,
    /// Configuration items
    Config,
    /// Fault message from the fault collaborator
    Fault,
}

impl UiMode {
    /// Next page, wrapping
    pub const fn next(self) -> Self {
        match self {
            UiMode::Status => UiMode::Config,
            UiMode::Config => UiMode::Fault,
            UiMode::Fault => UiMode::Status,
        }
    }

    /// Previous page, wrapping
    pub const fn prev(self) -> Self {
        match self {
            UiMode::Status => UiMode::Fault,
            UiMode::Config => UiMode::Status,
            UiMode::Fault => UiMode::Config,
        }
    }
}

/// Browse/edit sub-state of the config page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubState {
    /// Navigating among items (the only sub-state outside CONFIG)
    #[default]
    Browsing,
    /// Editing the selected item
    Editing(EditBuffer),
}

/// Complete UI context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    mode: UiMode,
    item: ConfigItem,
    sub: SubState,
    committed: Settings,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// The next context
    pub state: UiState,
    /// New committed settings, present only if this event committed
    pub committed: Option<Settings>,
}

impl Transition {
    const fn stay(state: UiState) -> Self {
        Self {
            state,
            committed: None,
        }
    }
}

impl UiState {
    /// Initial context: STATUS page, first item, browsing
    pub const fn new(committed: Settings) -> Self {
        Self {
            mode: UiMode::Status,
            item: ConfigItem::Frequency,
            sub: SubState::Browsing,
            committed,
        }
    }

    /// Current page
    pub const fn mode(&self) -> UiMode {
        self.mode
    }

    /// Selected config item
    pub const fn item(&self) -> ConfigItem {
        self.item
    }

    /// Committed settings
    pub const fn committed(&self) -> &Settings {
        &self.committed
    }

    /// Live edit buffer, if an edit session is open
    pub const fn edit_buffer(&self) -> Option<&EditBuffer> {
        match &self.sub {
            SubState::Editing(buffer) => Some(buffer),
            SubState::Browsing => None,
        }
    }

    /// Check if an edit session is open
    pub const fn is_editing(&self) -> bool {
        matches!(self.sub, SubState::Editing(_))
    }

    /// Check if the phase item is being edited
    pub const fn is_editing_phases(&self) -> bool {
        self.is_editing() && self.item.uses_cursor()
    }

    /// Process an event and return the next context
    ///
    /// Events that do not apply to the current (mode, sub-state) leave
    /// the context unchanged.
    pub fn transition(self, event: Event) -> Transition {
        use Event::*;
        use SubState::*;

        let on_config = self.mode == UiMode::Config;
        let cursor_item = self.item.uses_cursor();

        match (self.sub, event) {
            // Browsing, any page
            (Browsing, NextPage) => Transition::stay(self.with_mode(self.mode.next())),
            (Browsing, PrevPage) => Transition::stay(self.with_mode(self.mode.prev())),
            (Browsing, ForceMode(mode)) => Transition::stay(self.with_mode(mode)),

            // Browsing, config page
            (Browsing, ItemNext) if on_config => Transition::stay(Self {
                item: self.item.next(),
                ..self
            }),
            (Browsing, ItemPrev) if on_config => Transition::stay(Self {
                item: self.item.prev(),
                ..self
            }),
            (Browsing, BeginEdit) if on_config => Transition::stay(Self {
                sub: Editing(EditBuffer::from_committed(&self.committed)),
                ..self
            }),

            // Editing: commit paths
            (Editing(buffer), Confirm) => self.commit(buffer),
            (Editing(mut buffer), LongPress) => {
                // The long press's own select edge toggled a phase; that
                // press is a confirm gesture, not an edit
                buffer.revert_last_toggle();
                self.commit(buffer)
            }
            (Editing(buffer), ForceMode(mode)) if mode != self.mode => {
                let committed = self.commit(buffer);
                Transition {
                    state: committed.state.with_mode(mode),
                    ..committed
                }
            }

            // Editing: direct adjustment
            (Editing(mut buffer), Increase) if !cursor_item => {
                buffer.adjust(self.item, Adjust::Increase);
                Transition::stay(self.with_buffer(buffer))
            }
            (Editing(mut buffer), Decrease) if !cursor_item => {
                buffer.adjust(self.item, Adjust::Decrease);
                Transition::stay(self.with_buffer(buffer))
            }

            // Editing: phase cursor and toggle
            (Editing(mut buffer), CursorNext) if cursor_item => {
                buffer.move_cursor(true);
                Transition::stay(self.with_buffer(buffer))
            }
            (Editing(mut buffer), CursorPrev) if cursor_item => {
                buffer.move_cursor(false);
                Transition::stay(self.with_buffer(buffer))
            }
            (Editing(mut buffer), TogglePhase) if cursor_item => {
                buffer.toggle_phase();
                Transition::stay(self.with_buffer(buffer))
            }

            // Default: stay in current state
            _ => Transition::stay(self),
        }
    }

    /// Copy the whole edit buffer into the committed settings and
    /// return to browsing
    fn commit(self, buffer: EditBuffer) -> Transition {
        let committed = buffer.into_settings();
        Transition {
            state: Self {
                sub: SubState::Browsing,
                committed,
                ..self
            },
            committed: Some(committed),
        }
    }

    fn with_mode(self, mode: UiMode) -> Self {
        Self { mode, ..self }
    }

    fn with_buffer(self, buffer: EditBuffer) -> Self {
        Self {
            sub: SubState::Editing(buffer),
            ..self
        }
    }
}
