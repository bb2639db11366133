//! Shared board model, layout and drawing for the Trainspotter display.
//!
//! This crate contains the platform-agnostic code used by both the Pico W
//! firmware and the desktop simulator:
//!
//! - [`board`]: The cached departures snapshot and its JSON decoding
//! - [`layout`]: Pixel layout of the departure row and text screens
//! - [`schedule`]: Render pass frames and timing
//! - [`screens`]: Full-screen drawing routines
//! - [`widgets`]: Train, station and track icons
//! - [`text`]: Truncating writes and word wrap for fixed-capacity strings
//! - [`colors`], [`styles`], [`config`]: Constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free: all text and lists live in
//! `heapless` containers with the capacities from [`config`]. Tests run with
//! `std` enabled (via `cfg_attr`) so they can use the standard harness.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod board;
pub mod colors;
pub mod config;
pub mod layout;
pub mod schedule;
pub mod screens;
pub mod styles;
pub mod text;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use board::{Board, Destination};
