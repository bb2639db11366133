//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const`, so every draw call references a
//! style stored in read-only data instead of building one. Layout code that has
//! to measure text uses the matching `*_FONT` reference.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned text positioned by its top edge. All board text uses this so
/// layout math works on top-left corners.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Fonts (for measuring)
// =============================================================================

/// Full-screen message font (10x20 pixels, 24 columns on the Display Pack).
pub const MESSAGE_FONT: &MonoFont = &FONT_10X20;

/// ETA label font under each train (6x10 pixels).
pub const ETA_FONT: &MonoFont = &FONT_6X10;

/// Welcome screen font (`ProFont` 24pt).
pub const WELCOME_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// White text for full-screen messages.
pub const MESSAGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// White text for the destination label.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// White text for ETA labels.
pub const ETA_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// White text for the welcome screen.
pub const WELCOME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// White text for the ASCII train art.
pub const ASCII_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, WHITE);
