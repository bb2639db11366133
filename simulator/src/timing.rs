//! Timing constants for the simulator.
//!
//! The shared schedule is in milliseconds for `no_std`; these are the
//! `std::time::Duration` forms used by the desktop loop.

use std::time::Duration;

use trainspotter_common::schedule::{ASCII_FRAME_MS, SPLASH_HOLD_MS};

/// How often window events are pumped while a screen is held.
pub const EVENT_TICK: Duration = Duration::from_millis(16);

/// Upper bound on one proxy request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Welcome screen.
pub const SPLASH_HOLD: Duration = Duration::from_millis(SPLASH_HOLD_MS);

/// Pause between ASCII train frames.
pub const ASCII_FRAME: Duration = Duration::from_millis(ASCII_FRAME_MS);
