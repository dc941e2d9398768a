//! Events that drive the configuration state machine

use super::machine::UiMode;

/// Decoded operator and system events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Page navigation (browsing only)
    /// Forward button: next page
    NextPage,
    /// Back button: previous page
    PrevPage,

    // Config page, browsing
    /// Down button: next config item
    ItemNext,
    /// Up button: previous config item
    ItemPrev,
    /// Select pressed on an item: open an edit session
    BeginEdit,

    // Config page, editing
    /// Back or forward while editing: commit
    Confirm,
    /// Up button on a directly adjusted item
    Increase,
    /// Down button on a directly adjusted item
    Decrease,
    /// Up button on the phase item
    CursorNext,
    /// Down button on the phase item
    CursorPrev,
    /// Select press edge on the phase item
    TogglePhase,
    /// Select released after the long-press threshold: commit
    LongPress,

    // System
    /// Mode change requested outside the button path
    ForceMode(UiMode),
}

impl Event {
    /// Page navigation events
    pub fn is_navigation(&self) -> bool {
        matches!(self, Event::NextPage | Event::PrevPage)
    }

    /// Events that mutate the edit buffer
    pub fn is_adjustment(&self) -> bool {
        matches!(
            self,
            Event::Increase
                | Event::Decrease
                | Event::CursorNext
                | Event::CursorPrev
                | Event::TogglePhase
        )
    }

    /// Events that end an edit session from the operator side
    pub fn is_commit_trigger(&self) -> bool {
        matches!(self, Event::Confirm | Event::LongPress)
    }
}
