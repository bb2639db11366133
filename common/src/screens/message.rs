//! Wrapped full-screen text: status, errors and connection progress.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::layout::message_layout;
use crate::styles::{MESSAGE_FONT, MESSAGE_STYLE, TOP_LEFT};

/// Clear the display and draw `message` word-wrapped, a third of the way down.
pub fn draw_message<D>(
    display: &mut D,
    message: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = display.bounding_box().size;
    display.clear(BLACK).ok();

    let layout = message_layout(message, MESSAGE_FONT, size.width, size.height);
    for (i, line) in layout.lines.iter().enumerate() {
        let y = layout.top + i as i32 * layout.line_height;
        Text::with_text_style(line, Point::new(0, y), MESSAGE_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}
