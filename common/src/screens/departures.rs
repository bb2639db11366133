//! One destination row: label, track, station and approaching trains.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::board::Destination;
use crate::colors::BLACK;
use crate::config::LABEL_TOP;
use crate::layout::{station_origin, track_end_x, track_y, train_slots};
use crate::styles::{ETA_FONT, ETA_STYLE, LABEL_STYLE, TOP_LEFT};
use crate::widgets::{draw_station, draw_track, draw_train};

/// Clear the display and draw one destination with its trains.
///
/// Trains are placed by [`train_slots`]: the farthest train at the left edge,
/// a leaving train right next to the station.
pub fn draw_departure_row<D>(
    display: &mut D,
    destination: &Destination,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = display.bounding_box().size;
    display.clear(BLACK).ok();

    Text::with_text_style(&destination.name, Point::new(0, LABEL_TOP), LABEL_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    let track = track_y(size.height);
    draw_track(display, track, track_end_x(size.width));
    draw_station(display, station_origin(size.width, size.height));

    for slot in train_slots(&destination.etas, size.width, size.height, ETA_FONT) {
        draw_train(display, slot.icon);

        let mut label: String<5> = String::new();
        write!(label, "{}", slot.eta).ok();
        Text::with_text_style(&label, slot.label, ETA_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{ROOF, TRAIN_BODY, WHITE};
    use crate::test_support::Canvas;

    fn destination(etas: &[u16]) -> Destination {
        let mut destination = Destination::new("Berryessa");
        for &eta in etas {
            destination.insert_eta(eta);
        }
        destination
    }

    #[test]
    fn test_row_draws_label_track_and_station() {
        let mut canvas = Canvas::new(240, 135);
        draw_departure_row(&mut canvas, &destination(&[]));

        // Label in the top band
        assert!(canvas.count_in(0, 0, 240, 40, WHITE) > 0);
        // Track around the middle line, stopping before the station
        assert!(canvas.count_in(0, 65, 190, 5, WHITE) > 0);
        assert_eq!(canvas.count_in(236, 60, 4, 15, WHITE), 0);
        // Station roof near the right edge
        assert!(canvas.count_in(196, 47, 40, 40, ROOF) > 0);
        // No trains
        assert_eq!(canvas.count(TRAIN_BODY), 0);
    }

    #[test]
    fn test_row_places_trains_by_eta() {
        let mut canvas = Canvas::new(240, 135);
        draw_departure_row(&mut canvas, &destination(&[0, 10]));

        // ETA 10 is the farthest: left edge. ETA 0 sits next to the station.
        assert!(canvas.count_in(0, 55, 24, 24, TRAIN_BODY) > 0);
        assert!(canvas.count_in(172, 55, 24, 24, TRAIN_BODY) > 0);
        assert_eq!(canvas.count_in(60, 55, 80, 24, TRAIN_BODY), 0);

        // ETA labels under the icons
        assert!(canvas.count_in(0, 83, 24, 10, WHITE) > 0);
        assert!(canvas.count_in(172, 83, 24, 10, WHITE) > 0);
    }

    #[test]
    fn test_row_with_all_trains_leaving() {
        let mut canvas = Canvas::new(240, 135);
        draw_departure_row(&mut canvas, &destination(&[0, 0]));
        assert!(canvas.count_in(172, 55, 24, 24, TRAIN_BODY) > 0);
        assert_eq!(canvas.count_in(0, 55, 160, 24, TRAIN_BODY), 0);
    }
}
