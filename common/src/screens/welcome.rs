//! Welcome and network connection screens.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BLACK;
use crate::layout::{centered_x, text_width, welcome_tops};
use crate::styles::{TOP_LEFT, WELCOME_FONT, WELCOME_STYLE};

const WELCOME_LINES: [&str; 2] = ["Welcome to", "Trainspotter!"];

/// Base text of the connection screen; dots are appended while waiting.
const CONNECTING_MESSAGE: &str = "Waiting for connection";

/// Shown once the network is up.
pub const CONNECTED_MESSAGE: &str = "Successfully connected to the internet!";

/// Clear the display and draw the two centered welcome lines.
pub fn draw_welcome<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = display.bounding_box().size;
    display.clear(BLACK).ok();

    let (first, second) = welcome_tops(size.height, WELCOME_FONT.character_size.height);
    for (line, y) in WELCOME_LINES.iter().zip([first, second]) {
        let x = centered_x(size.width, text_width(WELCOME_FONT, line));
        Text::with_text_style(line, Point::new(x, y), WELCOME_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

/// Connection progress text for attempt `attempt`: zero to three trailing dots, cycling.
pub fn connecting_message(attempt: usize) -> String<32> {
    let mut message: String<32> = String::new();
    message.push_str(CONNECTING_MESSAGE).ok();
    for _ in 0..attempt % 4 {
        message.push('.').ok();
    }
    message
}
