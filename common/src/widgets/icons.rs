//! Train, station and track drawn from primitives.
//!
//! Icons are built from rectangles, circles and a triangle so they need no image
//! decoder or asset files. Offsets are relative to the icon's top-left corner.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    CornerRadii,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    RoundedRectangle,
    Triangle,
};

use crate::colors::{GRAY, ROOF, TRAIN_BODY, WALL, WHITE, YELLOW};
use crate::config::{STATION_SIZE, TRACK_THICKNESS};

const TRAIN_BODY_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(TRAIN_BODY)
    .stroke_color(WHITE)
    .stroke_width(1)
    .build();
const WHEEL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(GRAY)
    .stroke_color(WHITE)
    .stroke_width(1)
    .build();
const GRAY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);
const YELLOW_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(YELLOW);
const ROOF_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ROOF);
const WALL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WALL);
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, TRACK_THICKNESS);

// Train icon (24x24), facing right towards the station
const TRAIN_BODY_POS: Point = Point::new(1, 3);
const TRAIN_BODY_SIZE: Size = Size::new(22, 15);
const TRAIN_WINDOWS: [Point; 3] = [Point::new(4, 6), Point::new(10, 6), Point::new(16, 6)];
const TRAIN_WINDOW_SIZE: Size = Size::new(4, 4);
const TRAIN_HEADLIGHT_POS: Point = Point::new(19, 13);
const TRAIN_HEADLIGHT_SIZE: Size = Size::new(2, 2);
const TRAIN_WHEELS: [Point; 2] = [Point::new(4, 18), Point::new(15, 18)];
const TRAIN_WHEEL_DIAMETER: u32 = 5;

// Station icon (40x40)
const ROOF_LEFT: Point = Point::new(0, 14);
const ROOF_PEAK: Point = Point::new(STATION_SIZE as i32 / 2, 2);
const ROOF_RIGHT: Point = Point::new(STATION_SIZE as i32 - 1, 14);
const WALL_POS: Point = Point::new(4, 14);
const WALL_SIZE: Size = Size::new(STATION_SIZE - 8, 24);
const DOOR_POS: Point = Point::new(16, 24);
const DOOR_SIZE: Size = Size::new(8, 14);
const STATION_WINDOWS: [Point; 2] = [Point::new(7, 19), Point::new(27, 19)];
const STATION_WINDOW_SIZE: Size = Size::new(6, 6);
const PLATFORM_POS: Point = Point::new(0, STATION_SIZE as i32 - 2);
const PLATFORM_SIZE: Size = Size::new(STATION_SIZE, 2);

/// Draw a train icon with its top-left corner at `origin`.
pub fn draw_train<D>(
    display: &mut D,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::new(
        Rectangle::new(origin + TRAIN_BODY_POS, TRAIN_BODY_SIZE),
        CornerRadii::new(Size::new(4, 4)),
    )
    .into_styled(TRAIN_BODY_STYLE)
    .draw(display)
    .ok();

    for window in TRAIN_WINDOWS {
        Rectangle::new(origin + window, TRAIN_WINDOW_SIZE)
            .into_styled(GRAY_FILL)
            .draw(display)
            .ok();
    }

    Rectangle::new(origin + TRAIN_HEADLIGHT_POS, TRAIN_HEADLIGHT_SIZE)
        .into_styled(YELLOW_FILL)
        .draw(display)
        .ok();

    for wheel in TRAIN_WHEELS {
        Circle::new(origin + wheel, TRAIN_WHEEL_DIAMETER)
            .into_styled(WHEEL_STYLE)
            .draw(display)
            .ok();
    }
}

/// Draw the station icon with its top-left corner at `origin`.
pub fn draw_station<D>(
    display: &mut D,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(origin + ROOF_LEFT, origin + ROOF_PEAK, origin + ROOF_RIGHT)
        .into_styled(ROOF_FILL)
        .draw(display)
        .ok();

    Rectangle::new(origin + WALL_POS, WALL_SIZE)
        .into_styled(WALL_FILL)
        .draw(display)
        .ok();

    Rectangle::new(origin + DOOR_POS, DOOR_SIZE)
        .into_styled(GRAY_FILL)
        .draw(display)
        .ok();

    for window in STATION_WINDOWS {
        Rectangle::new(origin + window, STATION_WINDOW_SIZE)
            .into_styled(GRAY_FILL)
            .draw(display)
            .ok();
    }

    Rectangle::new(origin + PLATFORM_POS, PLATFORM_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
}

/// Draw the horizontal track from the left edge to `end_x` at height `y`.
pub fn draw_track<D>(
    display: &mut D,
    y: i32,
    end_x: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(0, y), Point::new(end_x, y))
        .into_styled(TRACK_STYLE)
        .draw(display)
        .ok();
}
