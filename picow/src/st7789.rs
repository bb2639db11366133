//! Async ST7789 display driver for the Pico Display Pack (240x135) on embassy-rp.
//!
//! One static RGB565 framebuffer (64,800 bytes) is drawn into and then pushed
//! to the panel with a single DMA transfer. Screens change at most every few
//! hundred milliseconds, so there is no second buffer.
//!
//! # Architecture
//!
//! - [`St7789Renderer`]: Implements `DrawTarget`, writes to the framebuffer
//! - [`St7789Flusher`]: Owns the SPI peripheral, handles init and DMA transfers
//! - [`Display`]: Pairs the two so callers draw a screen and flush it in one call

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Config as SpiConfig, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use trainspotter_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use trainspotter_picow::config::{DISPLAY_SPI_HZ, PANEL_COL_OFFSET, PANEL_ROW_OFFSET};

/// Display dimensions (landscape, rotated 180°).
pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// Static framebuffer (64,800 bytes).
static mut FRAMEBUFFER: [u8; BUFFER_SIZE] = [0u8; BUFFER_SIZE];

/// SPI settings for the panel. Reset is tied to RUN, so there is no reset pin.
pub fn spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = DISPLAY_SPI_HZ;
    config
}

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MY: u8 = 0x80; // Row address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_ML: u8 = 0x10; // Vertical refresh order

/// ST7789 flusher - owns SPI and handles async DMA transfers.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    /// Create a new flusher from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display hardware.
    pub async fn init(&mut self) {
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        self.write_command(SLPOUT).await;
        Timer::after_millis(10).await;

        // RGB565
        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // Landscape, rotated 180° so the USB port points up
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MY | MADCTL_MV | MADCTL_ML]).await;

        // Inversion on (required for this panel)
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        // The window never changes, so set it once
        self.set_window(PANEL_COL_OFFSET, PANEL_ROW_OFFSET, WIDTH as u16, HEIGHT as u16)
            .await;
    }

    /// Send a command byte (DC low, CS low during transfer).
    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the drawing window in panel coordinates.
    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(RASET).await;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Push a full framebuffer to the panel via DMA.
    pub async fn flush_buffer(
        &mut self,
        buffer: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}

/// ST7789 renderer - implements `DrawTarget` over the framebuffer.
pub struct St7789Renderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> St7789Renderer<'a> {
    /// Create a new renderer targeting the given framebuffer.
    pub fn new(framebuffer: &'a mut [u8]) -> Self { Self { framebuffer } }

    #[inline]
    fn write_pixel(
        &mut self,
        x: usize,
        y: usize,
        color: Rgb565,
    ) {
        let idx = (y * WIDTH + x) * 2;
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        self.framebuffer[idx] = bytes[0];
        self.framebuffer[idx + 1] = bytes[1];
    }
}

impl OriginDimensions for St7789Renderer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for St7789Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.x < WIDTH as i32 && point.y >= 0 && point.y < HEIGHT as i32 {
                self.write_pixel(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y as usize * WIDTH + x_start) * 2;
            for pixel in self.framebuffer[row_start..row_start + width * 2].chunks_exact_mut(2) {
                pixel.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(())
    }
}

/// Framebuffer plus flusher: draw a whole screen, then show it.
pub struct Display {
    flusher: St7789Flusher<'static>,
    framebuffer: &'static mut [u8],
}

impl Display {
    /// Take ownership of the static framebuffer.
    ///
    /// # Safety
    /// Must only be called once; the returned value is the framebuffer's only user.
    pub unsafe fn new(flusher: St7789Flusher<'static>) -> Self {
        let framebuffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        Self { flusher, framebuffer }
    }

    /// Draw into the framebuffer with `draw`, then push it to the panel.
    pub async fn show<F>(
        &mut self,
        draw: F,
    ) where
        F: FnOnce(&mut St7789Renderer<'_>),
    {
        {
            let mut renderer = St7789Renderer::new(&mut *self.framebuffer);
            draw(&mut renderer);
        }
        self.flusher.flush_buffer(&*self.framebuffer).await;
    }
}
