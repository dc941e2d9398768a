//! Configuration type definitions

/// Default PCF8574 backpack address
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x27;

/// Default I2C clock (fast mode)
pub const DEFAULT_I2C_FREQUENCY: u32 = 400_000;

/// Character display transport settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the expander
    pub address: u8,
    /// Bus clock in Hz
    pub i2c_frequency: u32,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        address: DEFAULT_DISPLAY_ADDRESS,
        i2c_frequency: DEFAULT_I2C_FREQUENCY,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Every duration used by the panel, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Ignore window after a page change, edit entry or confirm
    pub page_settle_ms: u32,
    /// Ignore window after moving between config items
    pub item_settle_ms: u32,
    /// Ignore window after a value adjustment or cursor move
    pub adjust_settle_ms: u32,
    /// Ignore window after a phase toggle
    pub toggle_settle_ms: u32,
    /// Half-period of the edit blink
    pub blink_period_ms: u32,
    /// Select hold time that counts as a long press
    pub long_press_ms: u32,
    /// Main loop cadence
    pub poll_interval_ms: u32,
    /// How long the boot splash stays up
    pub splash_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        page_settle_ms: 200,
        item_settle_ms: 150,
        adjust_settle_ms: 120,
        toggle_settle_ms: 100,
        blink_period_ms: 250,
        long_press_ms: 600,
        poll_interval_ms: 80,
        splash_ms: 800,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    pub display: DisplayConfig,
    pub timing: TimingConfig,
}

impl PanelConfig {
    pub const DEFAULT: Self = Self {
        display: DisplayConfig::DEFAULT,
        timing: TimingConfig::DEFAULT,
    };
}
