//! Press-duration measurement

use super::elapsed_ms;

/// Classification of a completed press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Measures one press from its press edge to its release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressTimer {
    threshold_ms: u32,
    pressed_at: Option<u32>,
}

impl PressTimer {
    pub const fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            pressed_at: None,
        }
    }

    /// Record the press edge
    pub fn press(&mut self, now_ms: u32) {
        self.pressed_at = Some(now_ms);
    }

    /// Record the release edge and classify the press
    ///
    /// Returns `None` if no press was being timed.
    pub fn release(&mut self, now_ms: u32) -> Option<PressKind> {
        let start = self.pressed_at.take()?;
        if elapsed_ms(now_ms, start) >= self.threshold_ms {
            Some(PressKind::Long)
        } else {
            Some(PressKind::Short)
        }
    }

    /// Stop timing without classifying
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}
