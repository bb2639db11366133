//! ASCII-art train for the boot animation.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::layout::ascii_cell;
use crate::styles::{ASCII_STYLE, TOP_LEFT};

/// Train art, 13 rows of 34 columns.
pub const TRAIN_ASCII: [&str; 13] = [
    "  :----------------------------:. ",
    "+@%############################%@+",
    "@@.   .....   ......   .....    @@",
    "@@.  *@@%@@# .@@%%@@. *@@%@@#   @@",
    "@@.  *@+ =@# .@@  @@. *@+ =@#   @@",
    "@@.  +@@@@@*  @@@@@@. +@@@@@*   @@",
    "@@.                             @@",
    "@@.                             @@",
    "%@+----------------------------+@%",
    " =%@@##@@@%#@@@****%@@##@@@%#@@%= ",
    "  %@-  *@#  -@%    %@-  *@#  -@%  ",
    "  :@@##@@@%#@@-    :@@##@@@%#@@-  ",
    "    :--. .--:        :--. .--:    ",
];

/// Clear the display and draw one animation frame with the art shifted by `offset_x`.
pub fn draw_ascii_train<D>(
    display: &mut D,
    offset_x: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let width = display.bounding_box().size.width;
    display.clear(BLACK).ok();

    let mut glyph = [0u8; 4];
    for (row, line) in TRAIN_ASCII.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            Text::with_text_style(
                c.encode_utf8(&mut glyph),
                ascii_cell(width, offset_x, row, col),
                ASCII_STYLE,
                TOP_LEFT,
            )
            .draw(display)
            .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::ASCII_TRAIN_COLS;
    use crate::test_support::Canvas;

    #[test]
    fn test_art_rows_have_equal_width() {
        for line in TRAIN_ASCII {
            assert_eq!(line.chars().count(), ASCII_TRAIN_COLS as usize);
        }
    }

    #[test]
    fn test_frame_off_screen_is_blank() {
        let mut canvas = Canvas::filled(240, 135, WHITE);
        draw_ascii_train(&mut canvas, -240);
        assert_eq!(canvas.count(WHITE), 0);
    }

    #[test]
    fn test_frame_on_screen_draws_art() {
        let mut canvas = Canvas::new(240, 135);
        draw_ascii_train(&mut canvas, 0);
        // Art spans rows 16..120
        assert!(canvas.count_in(0, 16, 240, 104, WHITE) > 0);
        assert_eq!(canvas.count_in(0, 0, 240, 16, WHITE), 0);
    }
}
