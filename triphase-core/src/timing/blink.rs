//! Periodic on/off flag for flashing the value under edit

use super::deadline_reached;

/// Deadline-driven blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    period_ms: u32,
    deadline: u32,
    visible: bool,
}

impl Blink {
    /// Create a blink that starts visible and first flips at `now_ms + period_ms`
    pub const fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            deadline: now_ms.wrapping_add(period_ms),
            visible: true,
        }
    }

    /// Advance to `now_ms`, returning true if the phase flipped
    ///
    /// At most one flip per call; a late poll reschedules from `now_ms`
    /// instead of catching up.
    pub fn update(&mut self, now_ms: u32) -> bool {
        if deadline_reached(now_ms, self.deadline) {
            self.visible = !self.visible;
            self.deadline = now_ms.wrapping_add(self.period_ms);
            true
        } else {
            false
        }
    }

    /// Force the visible phase and restart the period
    pub fn restart(&mut self, now_ms: u32) {
        self.visible = true;
        self.deadline = now_ms.wrapping_add(self.period_ms);
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }
}
