//! Green indicator LED fade levels.
//!
//! The LED glows while the device talks to the network: it fades up before a
//! request and back down after it. Levels are PWM compare values on a 0..=255
//! scale with the output inverted (the LED is active low).

/// PWM counter wrap value.
pub const PWM_TOP: u16 = 255;

/// Brightest level reached by a pulse.
pub const PEAK_LEVEL: u8 = 9;

/// Levels stepped through when turning the indicator on (1 to peak).
pub fn fade_in() -> impl Iterator<Item = u8> { 1..=PEAK_LEVEL }

/// Levels stepped through when turning it off (peak down to 0).
pub fn fade_out() -> impl Iterator<Item = u8> { (0..=PEAK_LEVEL).rev() }

/// PWM compare value for a level.
pub const fn compare_for(level: u8) -> u16 {
    if level as u16 > PWM_TOP { PWM_TOP } else { level as u16 }
}
