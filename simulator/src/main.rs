//! Trainspotter simulator for desktop.
//!
//! Runs the device's screens in an `embedded-graphics-simulator` window: the
//! boot animation and welcome screen, then the departure board fed by a
//! background poller thread. Closing the window exits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod cli;
mod poller;
mod timing;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trainspotter_common::Board;
use trainspotter_common::colors::BLACK;
use trainspotter_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use trainspotter_common::layout::ascii_train_offsets;
use trainspotter_common::schedule::frames;
use trainspotter_common::screens::{draw_ascii_train, draw_frame, draw_welcome};

use crate::cli::Args;
use crate::poller::{SharedBoard, snapshot};
use crate::timing::{ASCII_FRAME, EVENT_TICK, SPLASH_HOLD};

type Display = SimulatorDisplay<Rgb565>;

/// Show the current display contents for `duration`, pumping window events.
///
/// Returns `false` if the window was closed.
fn present_for(
    display: &Display,
    window: &mut Window,
    duration: Duration,
) -> bool {
    window.update(display);
    let start = Instant::now();
    loop {
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return false;
        }
        let elapsed = start.elapsed();
        if elapsed >= duration {
            return true;
        }
        thread::sleep(EVENT_TICK.min(duration - elapsed));
    }
}

/// ASCII train animation followed by the welcome screen.
fn run_boot(
    display: &mut Display,
    window: &mut Window,
) -> bool {
    for offset in ascii_train_offsets(SCREEN_WIDTH) {
        draw_ascii_train(display, offset);
        if !present_for(display, window, ASCII_FRAME) {
            return false;
        }
    }

    draw_welcome(display);
    present_for(display, window, SPLASH_HOLD)
}

/// Render passes over the shared board until the window is closed.
fn run_board(
    display: &mut Display,
    window: &mut Window,
    shared: &SharedBoard,
) {
    loop {
        let board = snapshot(shared);
        for frame in frames(&board) {
            draw_frame(display, &frame);
            if !present_for(display, window, Duration::from_millis(frame.hold_ms())) {
                return;
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut display: Display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Trainspotter", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    if !args.skip_boot && !run_boot(&mut display, &mut window) {
        return Ok(());
    }

    let shared: SharedBoard = Arc::new(Mutex::new(Board::Waiting));
    poller::spawn(args.url.clone(), args.poll_interval(), Arc::clone(&shared))?;

    run_board(&mut display, &mut window, &shared);
    info!("Window closed");
    Ok(())
}
