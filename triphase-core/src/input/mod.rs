//! Button input decoding
//!
//! Five active-high buttons are sampled once per poll. Back, forward, up
//! and down are level-read and rate-limited by a settle window; select is
//! edge-tracked so toggles and long presses are counted once per press.

pub mod decoder;
pub mod edge;

pub use decoder::{ButtonDecoder, Events, MAX_EVENTS_PER_POLL};
pub use edge::{Edge, EdgeDetector};

/// Front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Back,
    Forward,
    Up,
    Down,
    Select,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Back,
        Button::Forward,
        Button::Up,
        Button::Down,
        Button::Select,
    ];
}

/// Instantaneous button levels for one poll (true = pressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub back: bool,
    pub forward: bool,
    pub up: bool,
    pub down: bool,
    pub select: bool,
}

impl ButtonLevels {
    /// Nothing pressed
    pub const RELEASED: Self = Self {
        back: false,
        forward: false,
        up: false,
        down: false,
        select: false,
    };

    /// Levels with exactly one button pressed
    pub const fn only(button: Button) -> Self {
        let mut levels = Self::RELEASED;
        match button {
            Button::Back => levels.back = true,
            Button::Forward => levels.forward = true,
            Button::Up => levels.up = true,
            Button::Down => levels.down = true,
            Button::Select => levels.select = true,
        }
        levels
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Back => self.back,
            Button::Forward => self.forward,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Select => self.select,
        }
    }

    /// Either page button
    pub const fn page_pressed(&self) -> bool {
        self.back || self.forward
    }

    pub const fn any(&self) -> bool {
        self.back || self.forward || self.up || self.down || self.select
    }
}
