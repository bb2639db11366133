//! Trainspotter firmware library - testable modules for the Pico W display.
//!
//! This library contains the logic that can be tested on the host machine.
//! The binary (`main.rs`) uses it and adds the embedded-specific code: Wi-Fi,
//! the ST7789 driver and the Embassy tasks.
//!
//! # Testing
//!
//! `.cargo/config.toml` defaults to the RP2040 target, so pass the host triple:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target aarch64-apple-darwin      # macOS (Apple silicon)
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod indicator;
pub mod poll;
