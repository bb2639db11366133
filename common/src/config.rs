//! Display, layout and capacity constants.
//!
//! Layout values that only depend on the panel size are computed at compile time
//! as `const`. The functions in [`crate::layout`] take the size as a parameter so
//! the simulator can run at other resolutions, but the firmware always passes
//! [`SCREEN_WIDTH`] and [`SCREEN_HEIGHT`].

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni Pico Display Pack: 240x135)
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 135;

// =============================================================================
// Board Capacities
// =============================================================================

/// Maximum number of destinations kept from one response.
pub const MAX_DESTINATIONS: usize = 8;

/// Maximum number of ETAs kept per destination (the soonest ones win).
pub const MAX_ETAS: usize = 6;

/// Maximum destination name length in bytes.
pub const NAME_LEN: usize = 32;

/// Maximum error message length in bytes.
pub const ERROR_LEN: usize = 96;

/// Scratch space for decoding one JSON string with escapes. Any single string
/// in a response must fit before it is truncated to the limits above.
pub const UNESCAPE_BUFFER_LEN: usize = 512;

/// Maximum length of any full-screen message (error text plus prefix).
pub const MESSAGE_LEN: usize = ERROR_LEN + 8;

/// Maximum number of wrapped lines on the message screen.
pub const MAX_MESSAGE_LINES: usize = 8;

// =============================================================================
// Departure Row Geometry
// =============================================================================

/// Station icon width and height in pixels.
pub const STATION_SIZE: u32 = 40;

/// Train icon width and height in pixels.
pub const TRAIN_ICON_SIZE: u32 = 24;

/// Gap between the station icon and the right edge, and between the nearest
/// train and the station.
pub const STATION_MARGIN: u32 = 4;

/// Track line thickness in pixels.
pub const TRACK_THICKNESS: u32 = 2;

/// Gap between a train icon and its ETA label.
pub const ETA_LABEL_GAP: i32 = 4;

/// Top edge of the destination label.
pub const LABEL_TOP: i32 = 5;

// =============================================================================
// Text Screens
// =============================================================================

/// Vertical gap between the two welcome lines.
pub const WELCOME_LINE_GAP: i32 = 6;

/// Columns in every row of the ASCII train art.
pub const ASCII_TRAIN_COLS: u32 = 34;

/// Row pitch of the ASCII train art.
pub const ASCII_TRAIN_ROW_HEIGHT: i32 = 8;

/// Top edge of the ASCII train during the boot animation.
pub const ASCII_TRAIN_TOP: i32 = 16;

/// Horizontal distance the ASCII train moves per animation frame.
pub const ASCII_TRAIN_STEP: usize = 10;
