//! Property tests for the configuration state machine and the panel

use proptest::prelude::*;

use triphase_core::config::TimingConfig;
use triphase_core::input::{Button, ButtonLevels};
use triphase_core::outputs::{OutputFrame, OutputLine};
use triphase_core::settings::{
    ConfigItem, FanState, Frequency, Phase, PhaseMask, PhaseSequence, Settings,
};
use triphase_core::state::{Event, UiMode, UiState};
use triphase_core::Panel;

/// Gap between operator actions, longer than any settle window
const STEP_MS: u32 = 300;

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (any::<bool>(), 0u8..8, any::<bool>(), any::<bool>()).prop_map(|(hz60, bits, acb, fan)| {
        Settings {
            frequency: if hz60 { Frequency::Hz60 } else { Frequency::Hz50 },
            phases: PhaseMask::from_bits(bits),
            sequence: if acb {
                PhaseSequence::Acb
            } else {
                PhaseSequence::Abc
            },
            fan: if fan { FanState::On } else { FanState::Off },
        }
    })
}

fn item_strategy() -> impl Strategy<Value = ConfigItem> {
    prop::sample::select(ConfigItem::ALL.to_vec())
}

fn edit_event_strategy() -> impl Strategy<Value = Event> {
    prop::sample::select(vec![
        Event::Increase,
        Event::Decrease,
        Event::CursorNext,
        Event::CursorPrev,
        Event::TogglePhase,
        Event::ItemNext,
        Event::BeginEdit,
    ])
}

/// In-edit button actions that never commit
#[derive(Debug, Clone, Copy)]
enum Action {
    Up,
    Down,
    Tap,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Up), Just(Action::Down), Just(Action::Tap)]
}

fn editing(settings: Settings, item: ConfigItem) -> UiState {
    let mut state = UiState::new(settings).transition(Event::NextPage).state;
    while state.item() != item {
        state = state.transition(Event::ItemNext).state;
    }
    state.transition(Event::BeginEdit).state
}

/// Drives a panel with discrete presses on a simulated clock
struct Operator {
    panel: Panel,
    now: u32,
}

impl Operator {
    fn new(settings: Settings) -> Self {
        Self {
            panel: Panel::with_settings(settings, TimingConfig::DEFAULT, 0),
            now: 0,
        }
    }

    fn tap(&mut self, button: Button) -> Option<Settings> {
        self.now += STEP_MS;
        let first = self.panel.poll(&ButtonLevels::only(button), self.now);
        let second = self.panel.poll(&ButtonLevels::RELEASED, self.now + 50);
        first.committed.or(second.committed)
    }

    fn hold_select(&mut self, duration_ms: u32) -> Option<Settings> {
        self.now += STEP_MS;
        let select = ButtonLevels::only(Button::Select);
        let mut committed = self.panel.poll(&select, self.now).committed;
        let mut held = 0;
        while held + 80 < duration_ms {
            held += 80;
            committed = committed.or(self.panel.poll(&select, self.now + held).committed);
        }
        self.now += duration_ms;
        committed.or(self.panel.poll(&ButtonLevels::RELEASED, self.now).committed)
    }

    fn open_edit(&mut self, item: ConfigItem) {
        self.tap(Button::Forward);
        while self.panel.state().item() != item {
            self.tap(Button::Down);
        }
        self.tap(Button::Select);
        assert!(self.panel.state().is_editing());
    }

    fn act(&mut self, action: Action) {
        let committed = match action {
            Action::Up => self.tap(Button::Up),
            Action::Down => self.tap(Button::Down),
            Action::Tap => self.tap(Button::Select),
        };
        assert_eq!(committed, None);
    }
}

proptest! {
    #[test]
    fn test_output_frame_matches_mapping(settings in settings_strategy()) {
        let frame = OutputFrame::from_settings(&settings);
        prop_assert_eq!(frame.level(OutputLine::FrequencySelect), settings.frequency == Frequency::Hz60);
        prop_assert_eq!(frame.level(OutputLine::SequenceSelect), settings.sequence == PhaseSequence::Acb);
        prop_assert_eq!(frame.level(OutputLine::FanControl), settings.fan == FanState::On);
        for phase in Phase::ALL {
            let enabled = settings.phases.is_enabled(phase);
            prop_assert_eq!(frame.level(OutputLine::PhaseLed(phase)), enabled);
            prop_assert_eq!(frame.level(OutputLine::PhaseSelect(phase)), enabled);
        }
    }

    #[test]
    fn test_commit_copies_whole_buffer(
        settings in settings_strategy(),
        item in item_strategy(),
        events in prop::collection::vec(edit_event_strategy(), 0..16),
    ) {
        let mut state = editing(settings, item);
        for event in events {
            let result = state.transition(event);
            prop_assert_eq!(result.committed, None);
            state = result.state;
        }

        let buffer = *state.edit_buffer().unwrap().settings();
        prop_assert_eq!(*state.committed(), settings);

        let result = state.transition(Event::Confirm);
        prop_assert_eq!(result.committed, Some(buffer));
        prop_assert_eq!(*result.state.committed(), buffer);
    }

    #[test]
    fn test_confirm_without_edits_is_noop(settings in settings_strategy(), item in item_strategy()) {
        let result = editing(settings, item).transition(Event::Confirm);
        prop_assert_eq!(result.committed, Some(settings));
    }

    #[test]
    fn test_page_navigation_blocked_while_editing(
        item in item_strategy(),
        forward in prop::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut state = editing(Settings::default(), item);
        for f in forward {
            let event = if f { Event::NextPage } else { Event::PrevPage };
            state = state.transition(event).state;
            prop_assert_eq!(state.mode(), UiMode::Config);
            prop_assert!(state.is_editing());
        }
    }

    #[test]
    fn test_long_press_equals_confirm(
        settings in settings_strategy(),
        item in item_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..10),
    ) {
        let mut confirm = Operator::new(settings);
        confirm.open_edit(item);
        let mut long = Operator::new(settings);
        long.open_edit(item);

        for action in &actions {
            confirm.act(*action);
            long.act(*action);
        }

        let by_confirm = confirm.tap(Button::Back);
        let by_long_press = long.hold_select(700);

        prop_assert!(by_confirm.is_some());
        prop_assert_eq!(by_confirm, by_long_press);
        prop_assert!(!long.panel.state().is_editing());
    }

    #[test]
    fn test_held_toggle_flips_once(polls in 2usize..40) {
        let mut operator = Operator::new(Settings::default());
        operator.open_edit(ConfigItem::PhaseEnable);

        let start = operator.now + STEP_MS;
        let select = ButtonLevels::only(Button::Select);
        for poll in 0..polls {
            // Stays below the long-press threshold
            operator.panel.poll(&select, start + (poll as u32) * 10);
        }

        let buffer = *operator.panel.state().edit_buffer().unwrap().settings();
        prop_assert_eq!(buffer.phases, PhaseMask::ALL.toggled(Phase::A));
    }
}
