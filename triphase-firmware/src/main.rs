//! Triphase - Inverter Operator Panel Firmware
//!
//! Four buttons and a 16x2 LCD in front of an RP2040 that drives the
//! inverter's phase, frequency, sequence and fan control lines.
//!
//! The whole panel is one polling loop: sample buttons, run the panel
//! state machine, write outputs on commit, refresh LEDs and redraw the
//! display when its content changed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use triphase_core::outputs::OutputFrame;
use triphase_core::state::UiMode;
use triphase_core::traits::DisplayExt;
use triphase_core::ui::{Renderer, Screen};
use triphase_core::Panel;

use crate::board::Board;
use crate::channels::FAULT_REPORT;
use crate::config::PANEL_CONFIG;

mod board;
mod channels;
mod config;

const SPLASH_TITLE: &str = "TRIPHASE PANEL";
const SPLASH_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Milliseconds since boot, wrapping
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Triphase panel starting...");

    let p = embassy_rp::init(Default::default());
    let config = PANEL_CONFIG;
    let timing = config.timing;
    info!(
        "Display at {:#x}, {} Hz; poll every {} ms",
        config.display.address, config.display.i2c_frequency, timing.poll_interval_ms
    );

    let mut board = board::init(p, &config.display);
    info!("Peripherals initialized");

    let mut panel = Panel::new(timing, now_ms());

    // Control lines reflect the defaults before anything else happens
    let frame = panel.startup_frame();
    board.outputs.apply(&frame);
    board.indicators.apply(&panel.indicators());
    info!("Startup outputs: {}", frame);

    if let Err(e) = board.lcd.init() {
        warn!("LCD init failed: {}", e);
    }

    let mut splash = Renderer::new();
    splash.render_splash(SPLASH_TITLE, SPLASH_VERSION);
    if let Err(e) = board.lcd.draw_screen(splash.screen()) {
        warn!("Splash draw failed: {}", e);
    }
    Timer::after_millis(timing.splash_ms as u64).await;

    info!("Panel ready");
    run(&mut board, &mut panel, timing.poll_interval_ms).await
}

/// The dispatch loop
async fn run(board: &mut Board, panel: &mut Panel, poll_interval_ms: u32) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(poll_interval_ms as u64));
    // Screen last written successfully; None forces a redraw
    let mut shown: Option<Screen> = None;

    loop {
        let now = now_ms();

        if let Some(report) = FAULT_REPORT.try_take() {
            let raised = report.active && !panel.fault().active;
            info!("Fault report: active={} {}", report.active, report.message.as_str());
            panel.set_fault(report);
            if raised {
                if let Some(frame) = panel.force_mode(UiMode::Fault, now) {
                    info!("Edit committed on fault");
                    apply_frame(board, &frame);
                }
            }
        }

        let levels = board.buttons.read();
        let outcome = panel.poll(&levels, now);
        for event in outcome.events.iter() {
            if event.is_commit_trigger() {
                info!("Commit requested: {}", event);
            } else if event.is_navigation() {
                debug!("Page: {}", event);
            } else if event.is_adjustment() {
                debug!("Edit: {}", event);
            } else {
                debug!("Event: {}", event);
            }
        }

        if let Some(frame) = outcome.frame() {
            info!("Committed: {}", outcome.committed);
            apply_frame(board, &frame);
        }

        board.indicators.apply(&panel.indicators());

        let screen = panel.render();
        if shown.as_ref() != Some(screen) {
            match board.lcd.draw_screen(screen) {
                Ok(()) => shown = Some(screen.clone()),
                Err(e) => {
                    warn!("Display update failed: {}", e);
                    shown = None;
                }
            }
        }

        ticker.next().await;
    }
}

/// Write a commit frame and log the lines it changes
fn apply_frame(board: &mut Board, frame: &OutputFrame) {
    if let Some(previous) = board.outputs.current().copied() {
        for line in frame.changed_from(&previous) {
            debug!("{} -> {}", line, frame.level(line));
        }
    }
    board.outputs.apply(frame);
}
