//! Committed settings to control-line levels

use crate::settings::{FanState, Frequency, Phase, PhaseSequence, Settings};

/// Lines mirrored from the committed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    /// Phase enable indicator LED
    PhaseLed(Phase),
    /// Phase selection control (always equal to the LED)
    PhaseSelect(Phase),
    /// High = 60 Hz
    FrequencySelect,
    /// High = ACB
    SequenceSelect,
    /// High = fan on
    FanControl,
}

impl OutputLine {
    pub const COUNT: usize = 9;

    /// Every line, in the order the pins are wired up
    pub const ALL: [OutputLine; Self::COUNT] = [
        OutputLine::PhaseLed(Phase::A),
        OutputLine::PhaseLed(Phase::B),
        OutputLine::PhaseLed(Phase::C),
        OutputLine::PhaseSelect(Phase::A),
        OutputLine::PhaseSelect(Phase::B),
        OutputLine::PhaseSelect(Phase::C),
        OutputLine::FrequencySelect,
        OutputLine::SequenceSelect,
        OutputLine::FanControl,
    ];

    /// Position of this line in [`ALL`](Self::ALL)
    pub const fn index(self) -> usize {
        match self {
            OutputLine::PhaseLed(phase) => phase.index(),
            OutputLine::PhaseSelect(phase) => 3 + phase.index(),
            OutputLine::FrequencySelect => 6,
            OutputLine::SequenceSelect => 7,
            OutputLine::FanControl => 8,
        }
    }
}

/// One consistent snapshot of every control-line level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFrame {
    levels: [bool; OutputLine::COUNT],
}

impl OutputFrame {
    /// Map committed settings to line levels
    pub fn from_settings(settings: &Settings) -> Self {
        let mut levels = [false; OutputLine::COUNT];
        for phase in Phase::ALL {
            let enabled = settings.phases.is_enabled(phase);
            levels[OutputLine::PhaseLed(phase).index()] = enabled;
            levels[OutputLine::PhaseSelect(phase).index()] = enabled;
        }
        levels[OutputLine::FrequencySelect.index()] = settings.frequency == Frequency::Hz60;
        levels[OutputLine::SequenceSelect.index()] = settings.sequence == PhaseSequence::Acb;
        levels[OutputLine::FanControl.index()] = settings.fan == FanState::On;
        Self { levels }
    }

    /// Level of one line
    pub const fn level(&self, line: OutputLine) -> bool {
        self.levels[line.index()]
    }

    /// Lines and levels, in wiring order
    pub fn iter(&self) -> impl Iterator<Item = (OutputLine, bool)> + '_ {
        OutputLine::ALL.iter().map(|line| (*line, self.level(*line)))
    }

    /// Lines whose level differs from `other`
    pub fn changed_from<'a>(&'a self, other: &'a OutputFrame) -> impl Iterator<Item = OutputLine> + 'a {
        OutputLine::ALL
            .iter()
            .copied()
            .filter(move |line| self.level(*line) != other.level(*line))
    }
}

impl From<&Settings> for OutputFrame {
    fn from(settings: &Settings) -> Self {
        Self::from_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PhaseMask;

    #[test]
    fn test_default_frame() {
        let frame = OutputFrame::from_settings(&Settings::default());
        for phase in Phase::ALL {
            assert!(frame.level(OutputLine::PhaseLed(phase)));
            assert!(frame.level(OutputLine::PhaseSelect(phase)));
        }
        assert!(frame.level(OutputLine::FrequencySelect));
        assert!(!frame.level(OutputLine::SequenceSelect));
        assert!(!frame.level(OutputLine::FanControl));
    }

    #[test]
    fn test_selects_mirror_leds() {
        let settings = Settings {
            frequency: Frequency::Hz50,
            phases: PhaseMask::from_bits(0b011),
            sequence: PhaseSequence::Acb,
            fan: FanState::On,
        };
        let frame = OutputFrame::from_settings(&settings);
        assert_eq!(
            [
                frame.level(OutputLine::PhaseSelect(Phase::A)),
                frame.level(OutputLine::PhaseSelect(Phase::B)),
                frame.level(OutputLine::PhaseSelect(Phase::C)),
            ],
            [true, true, false]
        );
        assert!(!frame.level(OutputLine::PhaseLed(Phase::C)));
        assert!(!frame.level(OutputLine::FrequencySelect));
        assert!(frame.level(OutputLine::SequenceSelect));
        assert!(frame.level(OutputLine::FanControl));
    }

    #[test]
    fn test_line_indices_are_unique() {
        for (position, line) in OutputLine::ALL.iter().enumerate() {
            assert_eq!(line.index(), position);
        }
    }

    #[test]
    fn test_changed_lines() {
        let before = OutputFrame::from_settings(&Settings::default());
        let after = OutputFrame::from_settings(&Settings {
            frequency: Frequency::Hz50,
            ..Settings::default()
        });
        let mut changed = after.changed_from(&before);
        assert_eq!(changed.next(), Some(OutputLine::FrequencySelect));
        assert_eq!(changed.next(), None);
    }
}
