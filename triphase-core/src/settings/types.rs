//! Settings value types
//!
//! Every field has a closed domain: two frequencies, three phase bits,
//! two sequences, two fan states. Nothing outside these sets can be
//! constructed, so no validation is ever needed downstream.

/// Inverter output frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frequency {
    /// 50 Hz mains
    Hz50,
    /// 60 Hz mains
    #[default]
    Hz60,
}

impl Frequency {
    /// Frequency in hertz
    pub const fn hz(self) -> u16 {
        match self {
            Frequency::Hz50 => 50,
            Frequency::Hz60 => 60,
        }
    }

    /// The other frequency
    ///
    /// The domain has no ordering, so both adjustment directions flip.
    pub const fn toggled(self) -> Self {
        match self {
            Frequency::Hz50 => Frequency::Hz60,
            Frequency::Hz60 => Frequency::Hz50,
        }
    }
}

/// One of the three inverter output phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    A,
    B,
    C,
}

impl Phase {
    /// All phases in display order
    pub const ALL: [Phase; 3] = [Phase::A, Phase::B, Phase::C];

    /// Position of this phase (A = 0)
    pub const fn index(self) -> usize {
        match self {
            Phase::A => 0,
            Phase::B => 1,
            Phase::C => 2,
        }
    }

    /// Letter shown on the display when the phase is enabled
    pub const fn letter(self) -> char {
        match self {
            Phase::A => 'A',
            Phase::B => 'B',
            Phase::C => 'C',
        }
    }

    /// Next phase, wrapping C -> A
    pub const fn next(self) -> Self {
        match self {
            Phase::A => Phase::B,
            Phase::B => Phase::C,
            Phase::C => Phase::A,
        }
    }

    /// Previous phase, wrapping A -> C
    pub const fn prev(self) -> Self {
        match self {
            Phase::A => Phase::C,
            Phase::B => Phase::A,
            Phase::C => Phase::B,
        }
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Placeholder shown for a disabled phase
pub const DISABLED_PHASE: char = '-';

/// Set of enabled phases (bit 0 = A, bit 1 = B, bit 2 = C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseMask(u8);

impl PhaseMask {
    const VALID_BITS: u8 = 0b111;

    /// All three phases enabled
    pub const ALL: Self = Self(Self::VALID_BITS);

    /// No phase enabled
    pub const NONE: Self = Self(0);

    /// Build a mask from raw bits; bits above C are discarded
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    /// Raw bits (always within `0b111`)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether a phase is enabled
    pub const fn is_enabled(self, phase: Phase) -> bool {
        self.0 & phase.bit() != 0
    }

    /// Mask with one phase flipped
    pub const fn toggled(self, phase: Phase) -> Self {
        Self(self.0 ^ phase.bit())
    }

    /// Per-phase levels in A, B, C order
    pub const fn levels(self) -> [bool; 3] {
        [
            self.is_enabled(Phase::A),
            self.is_enabled(Phase::B),
            self.is_enabled(Phase::C),
        ]
    }

    /// Three-character pattern, e.g. `A-C`
    pub fn pattern(self) -> [u8; 3] {
        let mut out = [DISABLED_PHASE as u8; 3];
        for phase in Phase::ALL {
            if self.is_enabled(phase) {
                out[phase.index()] = phase.letter() as u8;
            }
        }
        out
    }
}

impl Default for PhaseMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Phase rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseSequence {
    /// Forward rotation
    #[default]
    Abc,
    /// Reverse rotation (B and C swapped)
    Acb,
}

impl PhaseSequence {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            PhaseSequence::Abc => "ABC",
            PhaseSequence::Acb => "ACB",
        }
    }

    /// The other sequence
    pub const fn toggled(self) -> Self {
        match self {
            PhaseSequence::Abc => PhaseSequence::Acb,
            PhaseSequence::Acb => PhaseSequence::Abc,
        }
    }
}

/// Cooling fan state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanState {
    #[default]
    Off,
    On,
}

impl FanState {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            FanState::Off => "OFF",
            FanState::On => "ON",
        }
    }

    /// The other state
    pub const fn toggled(self) -> Self {
        match self {
            FanState::Off => FanState::On,
            FanState::On => FanState::Off,
        }
    }

    /// Check if the fan runs
    pub const fn is_on(self) -> bool {
        matches!(self, FanState::On)
    }
}

/// Complete inverter configuration
///
/// As committed, this is the single source of truth mirrored to the
/// control lines and the status page. It is not persisted: every boot
/// starts from `Default` (60 Hz, all phases, ABC, fan off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Output frequency
    pub frequency: Frequency,
    /// Enabled phases
    pub phases: PhaseMask,
    /// Phase rotation
    pub sequence: PhaseSequence,
    /// Fan state
    pub fan: FanState,
}

/// Editable configuration items, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigItem {
    #[default]
    Frequency,
    PhaseEnable,
    PhaseSequence,
    Fan,
}

impl ConfigItem {
    /// All items in page order
    pub const ALL: [ConfigItem; 4] = [
        ConfigItem::Frequency,
        ConfigItem::PhaseEnable,
        ConfigItem::PhaseSequence,
        ConfigItem::Fan,
    ];

    /// Next item, wrapping
    pub const fn next(self) -> Self {
        match self {
            ConfigItem::Frequency => ConfigItem::PhaseEnable,
            ConfigItem::PhaseEnable => ConfigItem::PhaseSequence,
            ConfigItem::PhaseSequence => ConfigItem::Fan,
            ConfigItem::Fan => ConfigItem::Frequency,
        }
    }

    /// Previous item, wrapping
    pub const fn prev(self) -> Self {
        match self {
            ConfigItem::Frequency => ConfigItem::Fan,
            ConfigItem::PhaseEnable => ConfigItem::Frequency,
            ConfigItem::PhaseSequence => ConfigItem::PhaseEnable,
            ConfigItem::Fan => ConfigItem::PhaseSequence,
        }
    }

    /// Short name shown on the config page
    pub const fn label(self) -> &'static str {
        match self {
            ConfigItem::Frequency => "FREQ",
            ConfigItem::PhaseEnable => "PHASE",
            ConfigItem::PhaseSequence => "SEQ",
            ConfigItem::Fan => "FAN",
        }
    }

    /// Phase enables are edited with a cursor and toggle,
    /// everything else with direct up/down adjustment
    pub const fn uses_cursor(self) -> bool {
        matches!(self, ConfigItem::PhaseEnable)
    }
}
