//! Ignore window after an accepted input

use super::elapsed_ms;

/// Holds off level-read buttons for a while after an accepted press
///
/// The window length depends on the kind of interaction that armed it,
/// so it is passed to [`arm`](Self::arm) rather than stored up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettleWindow {
    armed: Option<(u32, u32)>,
}

impl SettleWindow {
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Start a window of `duration_ms` at `now_ms`
    ///
    /// A longer window already running is kept.
    pub fn arm(&mut self, now_ms: u32, duration_ms: u32) {
        if self.remaining(now_ms) < duration_ms {
            self.armed = Some((now_ms, duration_ms));
        }
    }

    /// Check whether inputs are still being ignored
    pub fn is_settling(&self, now_ms: u32) -> bool {
        self.remaining(now_ms) > 0
    }

    /// Milliseconds left in the window (0 when idle)
    pub fn remaining(&self, now_ms: u32) -> u32 {
        match self.armed {
            Some((start, duration)) => duration.saturating_sub(elapsed_ms(now_ms, start)),
            None => 0,
        }
    }

    pub fn clear(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_window_never_settles() {
        let window = SettleWindow::new();
        assert!(!window.is_settling(0));
        assert!(!window.is_settling(123_456));
    }

    #[test]
    fn test_window_expires() {
        let mut window = SettleWindow::new();
        window.arm(1000, 200);
        assert!(window.is_settling(1000));
        assert!(window.is_settling(1199));
        assert!(!window.is_settling(1200));
        assert_eq!(window.remaining(1150), 50);
    }

    #[test]
    fn test_shorter_arm_keeps_longer_window() {
        let mut window = SettleWindow::new();
        window.arm(0, 200);
        window.arm(50, 100);
        assert!(window.is_settling(180));

        window.arm(180, 150);
        assert!(window.is_settling(300));
        assert!(!window.is_settling(330));
    }

    #[test]
    fn test_window_across_clock_wrap() {
        let mut window = SettleWindow::new();
        window.arm(u32::MAX - 50, 120);
        assert!(window.is_settling(30));
        assert!(!window.is_settling(70));
    }

    #[test]
    fn test_clear() {
        let mut window = SettleWindow::new();
        window.arm(0, 200);
        window.clear();
        assert!(!window.is_settling(10));
    }
}
