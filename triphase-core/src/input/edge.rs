//! Per-button press/release edge detection

/// Edge seen on one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    None,
    /// Released -> pressed
    Rising,
    /// Pressed -> released
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum EdgeState {
    #[default]
    Idle,
    Pressed,
}

/// Two-state press tracker
///
/// A button held across any number of polls yields exactly one
/// `Rising`; the next `Rising` needs an intervening release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    state: EdgeState,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            state: EdgeState::Idle,
        }
    }

    /// Feed the current level, returning the edge it produced
    pub fn update(&mut self, pressed: bool) -> Edge {
        match (self.state, pressed) {
            (EdgeState::Idle, true) => {
                self.state = EdgeState::Pressed;
                Edge::Rising
            }
            (EdgeState::Pressed, false) => {
                self.state = EdgeState::Idle;
                Edge::Falling
            }
            _ => Edge::None,
        }
    }

    pub const fn is_pressed(&self) -> bool {
        matches!(self.state, EdgeState::Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_gives_single_rising_edge() {
        let mut detector = EdgeDetector::new();
        assert_eq!(detector.update(true), Edge::Rising);
        for _ in 0..10 {
            assert_eq!(detector.update(true), Edge::None);
        }
        assert!(detector.is_pressed());
        assert_eq!(detector.update(false), Edge::Falling);
        assert_eq!(detector.update(false), Edge::None);
        assert_eq!(detector.update(true), Edge::Rising);
    }
}
