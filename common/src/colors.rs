//! Color constants for the departure board.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7789 and requires no conversion when writing
//! to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background of every screen.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text, track and train outlines.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow (31, 63, 0). Train headlights.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Light steel blue for train bodies.
/// RGB565: (18, 40, 26).
pub const TRAIN_BODY: Rgb565 = Rgb565::new(18, 40, 26);

/// Dark gray for windows, doors and wheels.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Brick orange for the station roof.
/// RGB565: (26, 24, 4).
pub const ROOF: Rgb565 = Rgb565::new(26, 24, 4);

/// Warm beige for the station walls.
/// RGB565: (28, 52, 20).
pub const WALL: Rgb565 = Rgb565::new(28, 52, 20);
