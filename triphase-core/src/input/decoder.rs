//! Button levels to state-machine events
//!
//! The decoder looks at the context as it was before the poll and emits
//! the events that context calls for, in the order the buttons are
//! examined: page buttons, then up/down, then select edges. The state
//! machine drops any event that no longer applies once an earlier event
//! in the same poll has been applied.

use heapless::Vec;

use super::edge::{Edge, EdgeDetector};
use super::ButtonLevels;
use crate::config::TimingConfig;
use crate::state::{Event, UiMode, UiState};
use crate::timing::{PressKind, PressTimer, SettleWindow};

/// Upper bound of events produced by one poll
pub const MAX_EVENTS_PER_POLL: usize = 4;

/// Events decoded from one poll, in application order
pub type Events = Vec<Event, MAX_EVENTS_PER_POLL>;

/// Button decoder with its settle window and select tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDecoder {
    timing: TimingConfig,
    settle: SettleWindow,
    select: EdgeDetector,
    press: PressTimer,
}

impl ButtonDecoder {
    pub const fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            settle: SettleWindow::new(),
            select: EdgeDetector::new(),
            press: PressTimer::new(timing.long_press_ms),
        }
    }

    /// Decode one poll of button levels
    pub fn decode(&mut self, levels: &ButtonLevels, now_ms: u32, state: &UiState) -> Events {
        let mut events = Events::new();
        let settling = self.settle.is_settling(now_ms);
        let select_edge = self.select.update(levels.select);

        if state.is_editing() {
            let confirmed = !settling && levels.page_pressed();
            if confirmed {
                push(&mut events, Event::Confirm);
                self.settle.arm(now_ms, self.timing.page_settle_ms);
            } else if !settling {
                self.decode_adjust(levels, now_ms, state, &mut events);
            }

            match select_edge {
                Edge::Rising if !confirmed => {
                    self.press.press(now_ms);
                    if state.is_editing_phases() {
                        push(&mut events, Event::TogglePhase);
                        self.settle.arm(now_ms, self.timing.toggle_settle_ms);
                    }
                }
                Edge::Falling => {
                    if self.press.release(now_ms) == Some(PressKind::Long) && !confirmed {
                        push(&mut events, Event::LongPress);
                        self.settle.arm(now_ms, self.timing.page_settle_ms);
                    }
                }
                _ => {}
            }
        } else {
            if !settling {
                self.decode_browse(levels, now_ms, state, &mut events);
            }

            match select_edge {
                Edge::Rising if state.mode() == UiMode::Config => {
                    // This press opens the edit; it is never timed
                    self.press.cancel();
                    push(&mut events, Event::BeginEdit);
                    self.settle.arm(now_ms, self.timing.page_settle_ms);
                }
                Edge::Falling => self.press.cancel(),
                _ => {}
            }
        }

        events
    }

    /// Forget settle windows and any press being timed
    pub fn reset(&mut self) {
        self.settle.clear();
        self.press.cancel();
    }

    /// Check whether level-read buttons are currently ignored
    pub fn is_settling(&self, now_ms: u32) -> bool {
        self.settle.is_settling(now_ms)
    }

    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    fn decode_browse(
        &mut self,
        levels: &ButtonLevels,
        now_ms: u32,
        state: &UiState,
        events: &mut Events,
    ) {
        if levels.back {
            push(events, Event::PrevPage);
            self.settle.arm(now_ms, self.timing.page_settle_ms);
        } else if levels.forward {
            push(events, Event::NextPage);
            self.settle.arm(now_ms, self.timing.page_settle_ms);
        } else if state.mode() == UiMode::Config {
            if levels.up {
                push(events, Event::ItemPrev);
                self.settle.arm(now_ms, self.timing.item_settle_ms);
            } else if levels.down {
                push(events, Event::ItemNext);
                self.settle.arm(now_ms, self.timing.item_settle_ms);
            }
        }
    }

    fn decode_adjust(
        &mut self,
        levels: &ButtonLevels,
        now_ms: u32,
        state: &UiState,
        events: &mut Events,
    ) {
        let cursor_item = state.item().uses_cursor();
        let event = if levels.up {
            if cursor_item {
                Event::CursorNext
            } else {
                Event::Increase
            }
        } else if levels.down {
            if cursor_item {
                Event::CursorPrev
            } else {
                Event::Decrease
            }
        } else {
            return;
        };

        push(events, event);
        self.settle.arm(now_ms, self.timing.adjust_settle_ms);
    }
}

fn push(events: &mut Events, event: Event) {
    // At most three events per poll are possible
    let _ = events.push(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;
    use crate::settings::{ConfigItem, Settings};

    fn decoder() -> ButtonDecoder {
        ButtonDecoder::new(TimingConfig::DEFAULT)
    }

    fn config_page() -> UiState {
        UiState::new(Settings::default())
            .transition(Event::NextPage)
            .state
    }

    fn editing(item: ConfigItem) -> UiState {
        let mut state = config_page();
        while state.item() != item {
            state = state.transition(Event::ItemNext).state;
        }
        state.transition(Event::BeginEdit).state
    }

    #[test]
    fn test_page_buttons_browse() {
        let mut decoder = decoder();
        let state = UiState::default();

        let events = decoder.decode(&ButtonLevels::only(Button::Forward), 0, &state);
        assert_eq!(events.as_slice(), &[Event::NextPage]);

        // Held through the settle window: ignored
        let events = decoder.decode(&ButtonLevels::only(Button::Forward), 100, &state);
        assert!(events.is_empty());

        // Still held after the window: repeats
        let events = decoder.decode(&ButtonLevels::only(Button::Back), 200, &state);
        assert_eq!(events.as_slice(), &[Event::PrevPage]);
    }

    #[test]
    fn test_up_down_only_on_config_page() {
        let mut decoder = decoder();
        let events = decoder.decode(&ButtonLevels::only(Button::Down), 0, &UiState::default());
        assert!(events.is_empty());

        let events = decoder.decode(&ButtonLevels::only(Button::Down), 0, &config_page());
        assert_eq!(events.as_slice(), &[Event::ItemNext]);
        assert!(decoder.is_settling(149));
        assert!(!decoder.is_settling(150));

        let events = decoder.decode(&ButtonLevels::only(Button::Up), 150, &config_page());
        assert_eq!(events.as_slice(), &[Event::ItemPrev]);
    }

    #[test]
    fn test_select_begins_edit_once() {
        let mut decoder = decoder();
        let state = config_page();
        let select = ButtonLevels::only(Button::Select);

        let events = decoder.decode(&select, 0, &state);
        assert_eq!(events.as_slice(), &[Event::BeginEdit]);

        let editing = state.transition(Event::BeginEdit).state;
        // Held well past the long-press threshold and released
        assert!(decoder.decode(&select, 300, &editing).is_empty());
        assert!(decoder.decode(&select, 900, &editing).is_empty());
        assert!(decoder
            .decode(&ButtonLevels::RELEASED, 1000, &editing)
            .is_empty());
    }

    #[test]
    fn test_select_ignored_off_config() {
        let mut decoder = decoder();
        let events = decoder.decode(&ButtonLevels::only(Button::Select), 0, &UiState::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_editing_maps_buttons() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::Frequency);

        let events = decoder.decode(&ButtonLevels::only(Button::Up), 0, &state);
        assert_eq!(events.as_slice(), &[Event::Increase]);
        let events = decoder.decode(&ButtonLevels::only(Button::Down), 120, &state);
        assert_eq!(events.as_slice(), &[Event::Decrease]);
        let events = decoder.decode(&ButtonLevels::only(Button::Forward), 240, &state);
        assert_eq!(events.as_slice(), &[Event::Confirm]);

        let phases = editing(ConfigItem::PhaseEnable);
        let events = decoder.decode(&ButtonLevels::only(Button::Up), 1000, &phases);
        assert_eq!(events.as_slice(), &[Event::CursorNext]);
        let events = decoder.decode(&ButtonLevels::only(Button::Down), 1120, &phases);
        assert_eq!(events.as_slice(), &[Event::CursorPrev]);
    }

    #[test]
    fn test_toggle_is_edge_triggered() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::PhaseEnable);
        let select = ButtonLevels::only(Button::Select);

        let mut toggles = 0;
        for poll in 0..6 {
            let events = decoder.decode(&select, poll * 80, &state);
            toggles += events.iter().filter(|e| **e == Event::TogglePhase).count();
        }
        assert_eq!(toggles, 1);
    }

    #[test]
    fn test_long_press_on_release() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::Fan);
        let select = ButtonLevels::only(Button::Select);

        assert!(decoder.decode(&select, 0, &state).is_empty());
        assert!(decoder.decode(&select, 400, &state).is_empty());
        let events = decoder.decode(&ButtonLevels::RELEASED, 640, &state);
        assert_eq!(events.as_slice(), &[Event::LongPress]);
    }

    #[test]
    fn test_short_press_does_not_commit() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::Fan);
        decoder.decode(&ButtonLevels::only(Button::Select), 0, &state);
        let events = decoder.decode(&ButtonLevels::RELEASED, 320, &state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_toggle_settle_gates_level_buttons_only() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::PhaseEnable);

        let events = decoder.decode(&ButtonLevels::only(Button::Select), 0, &state);
        assert_eq!(events.as_slice(), &[Event::TogglePhase]);

        // Up inside the toggle window is ignored
        let mut levels = ButtonLevels::only(Button::Up);
        levels.select = false;
        assert!(decoder.decode(&levels, 50, &state).is_empty());

        // A new select press inside the window still toggles
        let events = decoder.decode(&ButtonLevels::only(Button::Select), 60, &state);
        assert_eq!(events.as_slice(), &[Event::TogglePhase]);
    }

    #[test]
    fn test_confirm_takes_precedence_over_adjust() {
        let mut decoder = decoder();
        let state = editing(ConfigItem::Fan);
        let levels = ButtonLevels {
            back: true,
            up: true,
            ..ButtonLevels::RELEASED
        };
        let events = decoder.decode(&levels, 0, &state);
        assert_eq!(events.as_slice(), &[Event::Confirm]);
    }

    #[test]
    fn test_reset_clears_settle() {
        let mut decoder = decoder();
        decoder.decode(&ButtonLevels::only(Button::Forward), 0, &UiState::default());
        assert!(decoder.is_settling(10));
        decoder.reset();
        assert!(!decoder.is_settling(10));
    }
}
