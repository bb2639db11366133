//! Pixel layout for the departure row and the text screens.
//!
//! All positions are top-left corners in display coordinates. Everything here is
//! plain integer math so the drawing code in [`crate::screens`] stays a thin
//! layer over `embedded-graphics`.
//!
//! # Departure Row
//!
//! ```text
//!  Berryessa
//!
//!  [5]        [2]   [0]  ___
//! ==========================|  |
//!   5          2     0      |__|
//! ```
//!
//! The track runs across the middle of the screen and stops at the station on the
//! right. Trains are spread along the track by ETA: the farthest train sits at the
//! left edge and a train that is leaving sits right next to the station.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::config::{
    ASCII_TRAIN_COLS,
    ASCII_TRAIN_ROW_HEIGHT,
    ASCII_TRAIN_STEP,
    ASCII_TRAIN_TOP,
    ETA_LABEL_GAP,
    MAX_ETAS,
    MAX_MESSAGE_LINES,
    STATION_MARGIN,
    STATION_SIZE,
    TRAIN_ICON_SIZE,
    WELCOME_LINE_GAP,
};
use crate::text::wrap_words;

// =============================================================================
// Text Measurement
// =============================================================================

/// Width in pixels of `text` rendered in a monospace font.
pub fn text_width(
    font: &MonoFont<'_>,
    text: &str,
) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Number of characters of `font` that fit in `width` pixels.
pub fn chars_per_line(
    font: &MonoFont<'_>,
    width: u32,
) -> usize {
    let advance = font.character_size.width + font.character_spacing;
    if advance == 0 {
        return 0;
    }
    ((width + font.character_spacing) / advance) as usize
}

/// X that horizontally centers `text_width` pixels on the display.
pub fn centered_x(
    display_width: u32,
    text_width: u32,
) -> i32 {
    (display_width as i32 - text_width as i32) / 2
}

// =============================================================================
// Departure Row
// =============================================================================

/// Y of the track line, halfway down the display.
pub const fn track_y(display_height: u32) -> i32 { (display_height / 2) as i32 }

/// X where the track ends at the station.
pub const fn track_end_x(display_width: u32) -> i32 { display_width as i32 - STATION_SIZE as i32 }

/// Top-left corner of the station icon, centered on the track near the right edge.
pub const fn station_origin(
    display_width: u32,
    display_height: u32,
) -> Point {
    Point::new(
        display_width as i32 - STATION_SIZE as i32 - STATION_MARGIN as i32,
        track_y(display_height) - (STATION_SIZE / 2) as i32,
    )
}

/// Rightmost x of a train icon, leaving room for the station.
pub const fn max_train_x(display_width: u32) -> i32 {
    display_width as i32 - TRAIN_ICON_SIZE as i32 - STATION_SIZE as i32 - STATION_MARGIN as i32
}

/// Horizontal position of a train icon.
///
/// Linear in the ETA: `eta_max` maps to x = 0 and an ETA of 0 maps to `max_x`.
/// When every train is leaving (`eta_max == 0`) all of them sit at `max_x`.
pub fn train_x(
    eta: u16,
    eta_max: u16,
    max_x: i32,
) -> i32 {
    if eta_max == 0 {
        return max_x;
    }
    let remaining = i32::from(eta_max - eta.min(eta_max));
    remaining * max_x / i32::from(eta_max)
}

/// Placement of one train icon and its ETA label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainSlot {
    /// Minutes until arrival.
    pub eta: u16,
    /// Top-left of the train icon.
    pub icon: Point,
    /// Top-left of the ETA label.
    pub label: Point,
}

/// Lay out the trains of one destination along the track.
///
/// `etas` must be sorted ascending (as [`crate::board::Destination`] keeps them).
/// `label_font` is the font the ETA labels are drawn with.
pub fn train_slots(
    etas: &[u16],
    display_width: u32,
    display_height: u32,
    label_font: &MonoFont<'_>,
) -> Vec<TrainSlot, MAX_ETAS> {
    let mut slots = Vec::new();
    let Some(&eta_max) = etas.last() else {
        return slots;
    };

    let max_x = max_train_x(display_width);
    let icon_y = track_y(display_height) - (TRAIN_ICON_SIZE / 2) as i32;
    let label_y = icon_y + TRAIN_ICON_SIZE as i32 + ETA_LABEL_GAP;

    for &eta in etas.iter().take(MAX_ETAS) {
        let x = train_x(eta, eta_max, max_x);
        let mut digits: heapless::String<5> = heapless::String::new();
        core::fmt::write(&mut digits, format_args!("{eta}")).ok();
        let label_x = x + (TRAIN_ICON_SIZE as i32 - text_width(label_font, &digits) as i32) / 2;
        slots
            .push(TrainSlot {
                eta,
                icon: Point::new(x, icon_y),
                label: Point::new(label_x, label_y),
            })
            .ok();
    }
    slots
}

// =============================================================================
// Message Screen
// =============================================================================

/// Wrapped lines of a full-screen message and where the first one goes.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageLayout<'a> {
    /// Lines in display order.
    pub lines: Vec<&'a str, MAX_MESSAGE_LINES>,
    /// Top edge of the first line.
    pub top: i32,
    /// Distance between line tops.
    pub line_height: i32,
}

/// Wrap `message` to the display width and place it vertically.
///
/// The leftover vertical space is split one third above, two thirds below, which
/// keeps short messages visually above center.
pub fn message_layout<'a>(
    message: &'a str,
    font: &MonoFont<'_>,
    display_width: u32,
    display_height: u32,
) -> MessageLayout<'a> {
    let lines: Vec<&str, MAX_MESSAGE_LINES> = wrap_words(message, chars_per_line(font, display_width));
    let line_height = font.character_size.height as i32;
    let block_height = lines.len() as i32 * line_height;
    let top = ((display_height as i32 - block_height) / 3).max(0);
    MessageLayout {
        lines,
        top,
        line_height,
    }
}

// =============================================================================
// Welcome Screen
// =============================================================================

/// Tops of the two welcome lines, centered as a block with a fixed gap.
pub fn welcome_tops(
    display_height: u32,
    line_height: u32,
) -> (i32, i32) {
    let line_height = line_height as i32;
    let first = (display_height as i32 - (2 * line_height + WELCOME_LINE_GAP)) / 2;
    (first, first + line_height + WELCOME_LINE_GAP)
}

// =============================================================================
// ASCII Train Animation
// =============================================================================

/// Top-left of one ASCII-art character when the art is drawn at `offset_x`.
///
/// Columns are spread across the full display width regardless of font width.
pub fn ascii_cell(
    display_width: u32,
    offset_x: i32,
    row: usize,
    col: usize,
) -> Point {
    let x = (col as u32 * display_width / ASCII_TRAIN_COLS) as i32 + offset_x;
    let y = ASCII_TRAIN_TOP + row as i32 * ASCII_TRAIN_ROW_HEIGHT;
    Point::new(x, y)
}

/// Horizontal offsets of the boot animation frames: the train enters from the
/// left edge and leaves past the right edge.
pub fn ascii_train_offsets(display_width: u32) -> impl Iterator<Item = i32> {
    let width = display_width as i32;
    (-width..width + 5).step_by(ASCII_TRAIN_STEP)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_panel_track_and_train_limits() {
        assert_eq!(track_y(SCREEN_HEIGHT), 67);
        assert_eq!(max_train_x(SCREEN_WIDTH), 172);
    }

    #[test]
    fn test_station_and_track_geometry() {
        assert_eq!(track_y(135), 67);
        assert_eq!(track_end_x(240), 200);
        assert_eq!(station_origin(240, 135), Point::new(196, 47));
    }

    #[test]
    fn test_train_x_endpoints() {
        // Farthest train at the left edge, leaving train next to the station
        assert_eq!(train_x(20, 20, 172), 0);
        assert_eq!(train_x(0, 20, 172), 172);
    }

    #[test]
    fn test_train_x_is_linear_and_truncates() {
        assert_eq!(train_x(10, 20, 172), 86);
        // (27 - 5) / 27 * 172 = 140.148...
        assert_eq!(train_x(5, 27, 172), 140);
    }

    #[test]
    fn test_train_x_all_leaving() {
        assert_eq!(train_x(0, 0, 172), 172);
    }

    #[test]
    fn test_train_x_clamps_eta_above_max() {
        assert_eq!(train_x(30, 20, 172), 0);
    }

    #[test]
    fn test_train_slots() {
        let slots = train_slots(&[0, 5, 10], 240, 135, &FONT_6X10);
        assert_eq!(slots.len(), 3);

        assert_eq!(slots[0].icon, Point::new(172, 55));
        assert_eq!(slots[1].icon, Point::new(86, 55));
        assert_eq!(slots[2].icon, Point::new(0, 55));

        // One digit is 6px wide: (24 - 6) / 2 = 9
        assert_eq!(slots[0].label, Point::new(181, 83));
        // Two digits are 12px wide: (24 - 12) / 2 = 6
        assert_eq!(slots[2].label, Point::new(6, 83));
    }

    #[test]
    fn test_train_slots_empty() {
        assert!(train_slots(&[], 240, 135, &FONT_6X10).is_empty());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(&FONT_10X20, ""), 0);
        assert_eq!(text_width(&FONT_10X20, "Error"), 50);
        assert_eq!(chars_per_line(&FONT_10X20, 240), 24);
        assert_eq!(centered_x(240, 50), 95);
    }

    #[test]
    fn test_message_layout_single_line() {
        let layout = message_layout("Asking BART", &FONT_10X20, 240, 135);
        assert_eq!(layout.lines.as_slice(), &["Asking BART"]);
        // (135 - 20) / 3
        assert_eq!(layout.top, 38);
        assert_eq!(layout.line_height, 20);
    }

    #[test]
    fn test_message_layout_wraps() {
        let layout = message_layout("Asking BART for train ETAs...", &FONT_10X20, 240, 135);
        assert_eq!(layout.lines.as_slice(), &["Asking BART for train", "ETAs..."]);
        // (135 - 40) / 3
        assert_eq!(layout.top, 31);
    }

    #[test]
    fn test_message_layout_never_starts_above_screen() {
        let long = "word ".repeat(60);
        let layout = message_layout(&long, &FONT_10X20, 240, 135);
        assert_eq!(layout.lines.len(), MAX_MESSAGE_LINES);
        assert_eq!(layout.top, 0);
    }

    #[test]
    fn test_welcome_tops() {
        // Two 28px lines plus a 6px gap centered in 135px
        assert_eq!(welcome_tops(135, 28), (36, 70));
    }

    #[test]
    fn test_ascii_cell() {
        assert_eq!(ascii_cell(240, 0, 0, 0), Point::new(0, 16));
        // 10 * 240 / 34 = 70.58
        assert_eq!(ascii_cell(240, -5, 2, 10), Point::new(65, 32));
    }

    #[test]
    fn test_ascii_train_offsets() {
        let offsets: std::vec::Vec<i32> = ascii_train_offsets(240).collect();
        assert_eq!(offsets.first(), Some(&-240));
        assert_eq!(offsets.last(), Some(&240));
        assert_eq!(offsets.len(), 49);
    }
}
