//! Panel orchestrator
//!
//! Ties the decoder, the state machine, the blink and the renderer into
//! the per-poll sequence: decode buttons, apply events (committing if
//! asked), then derive indicators and the screen. Driving pins and the
//! LCD stays with the caller so this runs unchanged on the host.

use crate::config::TimingConfig;
use crate::fault::FaultState;
use crate::input::{ButtonDecoder, ButtonLevels, Events};
use crate::outputs::{Indicators, OutputFrame};
use crate::settings::Settings;
use crate::state::{Event, UiMode, UiState};
use crate::timing::Blink;
use crate::ui::{Renderer, Screen};

/// What one poll did
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Events decoded this poll, in application order
    pub events: Events,
    /// Settings committed this poll
    pub committed: Option<Settings>,
}

impl PollOutcome {
    /// Control-line levels to write, if this poll committed
    pub fn frame(&self) -> Option<OutputFrame> {
        self.committed.as_ref().map(OutputFrame::from_settings)
    }
}

/// The operator panel
pub struct Panel {
    state: UiState,
    decoder: ButtonDecoder,
    blink: Blink,
    fault: FaultState,
    renderer: Renderer,
}

impl Panel {
    /// Create a panel with default settings on the STATUS page
    pub fn new(timing: TimingConfig, now_ms: u32) -> Self {
        Self::with_settings(Settings::default(), timing, now_ms)
    }

    /// Create a panel starting from the given committed settings
    pub fn with_settings(settings: Settings, timing: TimingConfig, now_ms: u32) -> Self {
        Self {
            state: UiState::new(settings),
            decoder: ButtonDecoder::new(timing),
            blink: Blink::new(timing.blink_period_ms, now_ms),
            fault: FaultState::default(),
            renderer: Renderer::new(),
        }
    }

    /// Output frame for the initial committed settings
    pub fn startup_frame(&self) -> OutputFrame {
        OutputFrame::from_settings(self.state.committed())
    }

    /// Run one poll with the current button levels
    pub fn poll(&mut self, levels: &ButtonLevels, now_ms: u32) -> PollOutcome {
        let events = self.decoder.decode(levels, now_ms, &self.state);

        let mut committed = None;
        for event in events.iter() {
            if let Some(settings) = self.apply(*event, now_ms) {
                committed = Some(settings);
            }
        }

        self.blink.update(now_ms);

        PollOutcome { events, committed }
    }

    /// Change page from outside the button path
    ///
    /// An open edit is committed first; the returned frame must be
    /// written out like any other commit.
    pub fn force_mode(&mut self, mode: UiMode, now_ms: u32) -> Option<OutputFrame> {
        let committed = self.apply(Event::ForceMode(mode), now_ms);
        if committed.is_some() {
            self.decoder.reset();
        }
        committed.as_ref().map(OutputFrame::from_settings)
    }

    /// Store the latest fault report
    pub fn set_fault(&mut self, fault: FaultState) {
        self.fault = fault;
    }

    pub fn fault(&self) -> &FaultState {
        &self.fault
    }

    /// Current UI context
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Indicator LED levels for the current context
    pub fn indicators(&self) -> Indicators {
        Indicators::from_state(&self.state, &self.fault)
    }

    /// Render the current page
    pub fn render(&mut self) -> &Screen {
        self.renderer
            .render(&self.state, &self.fault, self.blink.is_visible())
    }

    fn apply(&mut self, event: Event, now_ms: u32) -> Option<Settings> {
        let was_editing = self.state.is_editing();
        let transition = self.state.transition(event);
        self.state = transition.state;

        if !was_editing && self.state.is_editing() {
            // Show the value immediately when an edit opens
            self.blink.restart(now_ms);
        }

        transition.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;
    use crate::outputs::OutputLine;
    use crate::settings::{ConfigItem, Frequency};

    fn press(panel: &mut Panel, button: Button, at: u32) -> PollOutcome {
        let outcome = panel.poll(&ButtonLevels::only(button), at);
        panel.poll(&ButtonLevels::RELEASED, at + 1);
        outcome
    }

    #[test]
    fn test_startup_frame_matches_defaults() {
        let panel = Panel::new(TimingConfig::DEFAULT, 0);
        let frame = panel.startup_frame();
        assert!(frame.level(OutputLine::FrequencySelect));
        assert!(!frame.level(OutputLine::FanControl));
    }

    #[test]
    fn test_frequency_scenario() {
        let mut panel = Panel::new(TimingConfig::DEFAULT, 0);

        press(&mut panel, Button::Forward, 0);
        assert_eq!(panel.state().mode(), UiMode::Config);

        press(&mut panel, Button::Select, 300);
        assert!(panel.state().is_editing());
        assert_eq!(panel.state().item(), ConfigItem::Frequency);

        press(&mut panel, Button::Up, 600);
        let outcome = press(&mut panel, Button::Back, 900);

        let committed = outcome.committed.unwrap();
        assert_eq!(committed.frequency, Frequency::Hz50);
        let frame = outcome.frame().unwrap();
        assert!(!frame.level(OutputLine::FrequencySelect));
        assert_eq!(panel.state().mode(), UiMode::Config);
        assert!(!panel.state().is_editing());
    }

    #[test]
    fn test_force_mode_commits_and_frames() {
        let mut panel = Panel::new(TimingConfig::DEFAULT, 0);
        press(&mut panel, Button::Forward, 0);
        press(&mut panel, Button::Select, 300);

        let frame = panel.force_mode(UiMode::Fault, 400);
        assert!(frame.is_some());
        assert_eq!(panel.state().mode(), UiMode::Fault);
        assert!(!panel.state().is_editing());

        assert_eq!(panel.force_mode(UiMode::Status, 500), None);
    }

    #[test]
    fn test_render_follows_state() {
        let mut panel = Panel::new(TimingConfig::DEFAULT, 0);
        assert_eq!(panel.render().row(0), "FRQ=60Hz FAN=OFF");

        panel.set_fault(FaultState::new("GATE DRIVE"));
        press(&mut panel, Button::Back, 0);
        assert_eq!(panel.render().row(1), "GATE DRIVE");
        assert!(panel.indicators().fault);
        assert!(!panel.indicators().normal);
    }

    #[test]
    fn test_edit_value_visible_on_entry() {
        let mut panel = Panel::new(TimingConfig::DEFAULT, 0);
        press(&mut panel, Button::Forward, 0);
        // Blink would be in its hidden phase at 250..500
        press(&mut panel, Button::Select, 260);
        assert_eq!(panel.render().row(0), "CFG:FREQ =60Hz");
    }
}
