//! Screen rendering
//!
//! Builds the screen for each page.
//!
//! ```text
//! STATUS   |FRQ=60Hz FAN=OFF|     CONFIG  |CFG:PHASE=A-C >C|
//!          |SEQ=ABC PH=ABC  |             |U/D:pos SEL:tog |
//! ```

use heapless::String;

use super::screen::{Row, Screen};
use crate::fault::FaultState;
use crate::settings::{ConfigItem, Settings};
use crate::state::{UiMode, UiState};

/// Column where the config value starts
pub const VALUE_COLUMN: u8 = 9;

/// Column of the phase cursor marker while editing phases
pub const CURSOR_COLUMN: u8 = 14;

/// Hint while browsing config items
pub const HINT_BROWSE: &str = "SEL:edit U/D:itm";

/// Hint while editing the phase enables
pub const HINT_EDIT_PHASES: &str = "U/D:pos SEL:tog";

/// Hint while editing any other item
pub const HINT_EDIT_VALUE: &str = "U/D:adj <>:save";

/// Screen renderer for the panel pages
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a new renderer
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render the boot splash
    pub fn render_splash(&mut self, title: &str, version: &str) {
        self.screen.clear();
        self.screen.set_row(0, title);
        self.screen.set_row(1, version);
    }

    /// Render whichever page the context is on
    ///
    /// `blink_visible` only matters while editing: when false the value
    /// under edit is left blank.
    pub fn render(&mut self, state: &UiState, fault: &FaultState, blink_visible: bool) -> &Screen {
        match state.mode() {
            UiMode::Status => self.render_status(state.committed()),
            UiMode::Config => self.render_config(state, blink_visible),
            UiMode::Fault => self.render_fault(fault),
        }
        &self.screen
    }

    /// Render the live status of the committed settings
    pub fn render_status(&mut self, settings: &Settings) {
        self.screen.clear();

        let mut line = Row::new();
        let _ = write_to_row(
            &mut line,
            format_args!(
                "FRQ={}Hz FAN={}",
                settings.frequency.hz(),
                settings.fan.label()
            ),
        );
        self.screen.set_row(0, &line);

        line.clear();
        let _ = write_to_row(
            &mut line,
            format_args!(
                "SEQ={} PH={}",
                settings.sequence.label(),
                PhasePattern(settings),
            ),
        );
        self.screen.set_row(1, &line);
    }

    /// Render the config page
    ///
    /// Browsing shows the committed value of the selected item; editing
    /// shows the edit buffer.
    pub fn render_config(&mut self, state: &UiState, blink_visible: bool) {
        self.screen.clear();

        let item = state.item();
        let mut title = Row::new();
        let _ = title.push_str("CFG:");
        let _ = title.push_str(item.label());
        self.screen.set_row(0, &title);

        match state.edit_buffer() {
            Some(buffer) => {
                if blink_visible {
                    let value = format_value(item, buffer.settings());
                    self.screen.write_at(VALUE_COLUMN, 0, &value);
                }
                if item.uses_cursor() {
                    let mut marker = Row::new();
                    let _ = marker.push('>');
                    let _ = marker.push(buffer.cursor().letter());
                    self.screen.write_at(CURSOR_COLUMN, 0, &marker);
                    self.screen.set_row(1, HINT_EDIT_PHASES);
                } else {
                    self.screen.set_row(1, HINT_EDIT_VALUE);
                }
            }
            None => {
                let value = format_value(item, state.committed());
                self.screen.write_at(VALUE_COLUMN, 0, &value);
                self.screen.set_row(1, HINT_BROWSE);
            }
        }
    }

    /// Render the fault page
    pub fn render_fault(&mut self, fault: &FaultState) {
        self.screen.clear();
        self.screen.set_row(0, "FAULT!");
        self.screen.set_row(1, &fault.message);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format one item's value as `=<value>`
pub fn format_value(item: ConfigItem, settings: &Settings) -> String<8> {
    let mut out = String::new();
    let _ = match item {
        ConfigItem::Frequency => write_to(&mut out, format_args!("={}Hz", settings.frequency.hz())),
        ConfigItem::PhaseEnable => write_to(&mut out, format_args!("={}", PhasePattern(settings))),
        ConfigItem::PhaseSequence => {
            write_to(&mut out, format_args!("={}", settings.sequence.label()))
        }
        ConfigItem::Fan => write_to(&mut out, format_args!("={}", settings.fan.label())),
    };
    out
}

/// Displays the phase mask as e.g. `A-C`
struct PhasePattern<'a>(&'a Settings);

impl core::fmt::Display for PhasePattern<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in self.0.phases.pattern() {
            core::fmt::Write::write_char(f, byte as char)?;
        }
        Ok(())
    }
}

fn write_to_row(s: &mut Row, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

fn write_to(s: &mut String<8>, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}
