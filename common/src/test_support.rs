//! In-memory draw target for drawing tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;

/// Framebuffer that records every pixel and ignores out-of-bounds writes,
/// like the ST7789 renderer does.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self::filled(width, height, BLACK)
    }

    pub fn filled(
        width: u32,
        height: u32,
        color: Rgb565,
    ) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Count pixels of `color` in the whole canvas.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Count pixels of `color` in the `w` x `h` area at (`x`, `y`).
    pub fn count_in(
        &self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: Rgb565,
    ) -> usize {
        let mut count = 0;
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                if self.pixel(px, py) == color {
                    count += 1;
                }
            }
        }
        count
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height {
                let idx = (point.y as u32 * self.width + point.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
