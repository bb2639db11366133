//! Icons and track drawing for the departure row.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod icons;

pub use icons::{draw_station, draw_track, draw_train};
