//! Panel indicator LEDs

use triphase_core::outputs::Indicators;
use triphase_hal::OutputPin;

/// Fan, normal, config and fault LEDs
pub struct IndicatorLeds<P> {
    fan: [P; 3],
    normal: P,
    config: P,
    fault: P,
}

impl<P: OutputPin> IndicatorLeds<P> {
    pub fn new(fan: [P; 3], normal: P, config: P, fault: P) -> Self {
        Self {
            fan,
            normal,
            config,
            fault,
        }
    }

    /// Drive every LED to the given levels
    pub fn apply(&mut self, indicators: &Indicators) {
        for led in &mut self.fan {
            led.set_state(indicators.fan);
        }
        self.normal.set_state(indicators.normal);
        self.config.set_state(indicators.config);
        self.fault.set_state(indicators.fault);
    }

    /// Levels currently driven
    pub fn current(&self) -> Indicators {
        Indicators {
            fan: self.fan[0].is_set_high(),
            normal: self.normal.is_set_high(),
            config: self.config.is_set_high(),
            fault: self.fault.is_set_high(),
        }
    }
}
