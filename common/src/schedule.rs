//! What the renderer shows for a board, and for how long.
//!
//! One pass over a board yields either a single message frame or one frame per
//! destination. The renderer draws each frame, holds it, then takes a fresh
//! copy of the board and starts the next pass.

use heapless::String;

use crate::board::{Board, Destination};
use crate::config::MESSAGE_LEN;

// =============================================================================
// Timing
// =============================================================================

/// Delay between polls of the proxy.
pub const POLL_INTERVAL_MS: u64 = 20_000;

/// How long each destination row stays on screen.
pub const ROW_HOLD_MS: u64 = 4_000;

/// How long a status message stays before the board is re-read.
pub const MESSAGE_HOLD_MS: u64 = 1_000;

/// Welcome screen and "connected" screen duration.
pub const SPLASH_HOLD_MS: u64 = 2_000;

/// Delay between network join attempts.
pub const CONNECT_RETRY_MS: u64 = 1_000;

/// Delay between frames of the startup ASCII train.
pub const ASCII_FRAME_MS: u64 = 5;

/// Indicator fade step duration.
pub const FADE_STEP_MS: u64 = 50;

// =============================================================================
// Frames
// =============================================================================

/// One screen of a render pass.
#[derive(Debug, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Full-screen text.
    Message(String<MESSAGE_LEN>),
    /// One destination row.
    Row(&'a Destination),
}

impl Frame<'_> {
    /// Time to keep this frame on screen.
    pub const fn hold_ms(&self) -> u64 {
        match self {
            Self::Message(_) => MESSAGE_HOLD_MS,
            Self::Row(_) => ROW_HOLD_MS,
        }
    }
}

/// Iterator over the frames of one render pass.
pub struct Frames<'a> {
    message: Option<String<MESSAGE_LEN>>,
    rows: core::slice::Iter<'a, Destination>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(message) = self.message.take() {
            return Some(Frame::Message(message));
        }
        self.rows.next().map(Frame::Row)
    }
}

/// Frames for one pass over `board`.
pub fn frames(board: &Board) -> Frames<'_> {
    Frames {
        message: board.message(),
        rows: board.destinations().iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_is_one_message() {
        let board = Board::Waiting;
        let all: std::vec::Vec<_> = frames(&board).collect();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0], Frame::Message(board.message().unwrap()));
        assert_eq!(all[0].hold_ms(), MESSAGE_HOLD_MS);
    }

    #[test]
    fn test_error_is_one_message() {
        let board = Board::error("No station data found");
        let all: std::vec::Vec<_> = frames(&board).collect();

        assert_eq!(all.len(), 1);
        match &all[0] {
            Frame::Message(text) => assert_eq!(text.as_str(), "Error: No station data found"),
            Frame::Row(_) => panic!("expected a message frame"),
        }
    }

    #[test]
    fn test_empty_departures_is_one_message() {
        let board = Board::from_json(b"{}");
        assert_eq!(frames(&board).count(), 1);
    }

    #[test]
    fn test_one_row_per_destination_in_order() {
        let board = Board::from_json(br#"{"Richmond": ["4"], "Antioch": ["Leaving", "9"]}"#);
        let names: std::vec::Vec<_> = frames(&board)
            .map(|frame| {
                assert_eq!(frame.hold_ms(), ROW_HOLD_MS);
                match frame {
                    Frame::Row(destination) => destination.name.as_str(),
                    Frame::Message(_) => panic!("expected row frames"),
                }
            })
            .collect();

        assert_eq!(names, ["Richmond", "Antioch"]);
    }
}
