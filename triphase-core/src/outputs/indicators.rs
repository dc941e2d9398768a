//! Panel indicator LEDs

use crate::fault::FaultState;
use crate::state::{UiMode, UiState};

/// Indicator LED levels for one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicators {
    /// Three fan LEDs, driven together
    pub fan: bool,
    /// Off the config page and no fault
    pub normal: bool,
    /// On the config page
    pub config: bool,
    /// Fault reported
    pub fault: bool,
}

impl Indicators {
    /// Derive the indicators from the UI context and fault report
    ///
    /// While editing, the fan LEDs follow the edit buffer so the operator
    /// sees the value before it is committed.
    pub fn from_state(state: &UiState, fault: &FaultState) -> Self {
        let fan = match state.edit_buffer() {
            Some(buffer) => buffer.settings().fan.is_on(),
            None => state.committed().fan.is_on(),
        };
        let on_config = state.mode() == UiMode::Config;

        Self {
            fan,
            normal: !on_config && !fault.active,
            config: on_config,
            fault: fault.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ConfigItem, Settings};
    use crate::state::Event;

    #[test]
    fn test_status_page_no_fault() {
        let indicators = Indicators::from_state(&UiState::default(), &FaultState::default());
        assert!(indicators.normal);
        assert!(!indicators.config);
        assert!(!indicators.fault);
        assert!(!indicators.fan);
    }

    #[test]
    fn test_fault_clears_normal() {
        let fault = FaultState::new("DC BUS OV");
        let indicators = Indicators::from_state(&UiState::default(), &fault);
        assert!(!indicators.normal);
        assert!(indicators.fault);
    }

    #[test]
    fn test_fan_leds_follow_edit_buffer() {
        let mut state = UiState::new(Settings::default())
            .transition(Event::NextPage)
            .state;
        while state.item() != ConfigItem::Fan {
            state = state.transition(Event::ItemNext).state;
        }
        state = state.transition(Event::BeginEdit).state;
        state = state.transition(Event::Increase).state;

        let indicators = Indicators::from_state(&state, &FaultState::default());
        assert!(indicators.fan);
        assert!(indicators.config);
        assert!(!indicators.normal);
        assert!(!state.committed().fan.is_on());
    }
}
