//! Full-screen renderings shared by the firmware and the simulator.
//!
//! Every function clears the target and draws one complete screen; the caller
//! flushes or presents it. Screens size themselves from the draw target's
//! bounding box.

mod ascii_train;
mod departures;
mod message;
mod welcome;

pub use ascii_train::{TRAIN_ASCII, draw_ascii_train};
pub use departures::draw_departure_row;
pub use message::draw_message;
pub use welcome::{CONNECTED_MESSAGE, connecting_message, draw_welcome};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::schedule::Frame;

/// Draw one frame of a render pass.
pub fn draw_frame<D>(
    display: &mut D,
    frame: &Frame<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match frame {
        Frame::Message(message) => draw_message(display, message),
        Frame::Row(destination) => draw_departure_row(display, destination),
    }
}
