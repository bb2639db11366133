//! Hardware and network configuration.
//!
//! # Pin mapping (Pico W + Pimoroni Pico Display Pack)
//!
//! | Function | GPIO |
//! |----------|------|
//! | Display DC | 16 |
//! | Display CS | 17 |
//! | Display SCLK (SPI0) | 18 |
//! | Display MOSI (SPI0) | 19 |
//! | Backlight | 20 |
//! | RGB LED red / green / blue (active low) | 6 / 7 / 8 |
//! | CYW43 power / CS / DIO / CLK | 23 / 25 / 24 / 29 |

// =============================================================================
// Display
// =============================================================================

/// SPI clock for the ST7789 (datasheet maximum 62.5 MHz).
pub const DISPLAY_SPI_HZ: u32 = 62_500_000;

/// First panel column of the visible 240-pixel window.
///
/// The ST7789 RAM is 240x320; the 1.14" panel shows a 240x135 slice of it.
pub const PANEL_COL_OFFSET: u16 = 40;

/// First panel row of the visible 135-pixel window, mounted upside down.
pub const PANEL_ROW_OFFSET: u16 = 52;

/// Backlight PWM wrap value.
pub const BACKLIGHT_PWM_TOP: u16 = 255;

/// Backlight compare value: half brightness.
pub const BACKLIGHT_COMPARE: u16 = BACKLIGHT_PWM_TOP.div_ceil(2);

// =============================================================================
// CYW43 firmware blobs
// =============================================================================
//
// The blobs are flashed separately with probe-rs (see README) so the firmware
// image stays small. Lengths must match the flashed files.

/// Flash address of `43439A0.bin`.
pub const WIFI_FIRMWARE_ADDR: usize = 0x1010_0000;

/// Length of `43439A0.bin` in bytes.
pub const WIFI_FIRMWARE_LEN: usize = 230_321;

/// Flash address of `43439A0_clm.bin`.
pub const WIFI_CLM_ADDR: usize = 0x1014_0000;

/// Length of `43439A0_clm.bin` in bytes.
pub const WIFI_CLM_LEN: usize = 4_752;

// =============================================================================
// HTTP
// =============================================================================

/// Receive buffer for the proxy response (headers plus body).
pub const HTTP_RX_BUFFER_SIZE: usize = 4096;

/// TLS record buffers, used when the proxy URL is `https://`.
pub const TLS_BUFFER_SIZE: usize = 16_640;

/// Sockets reserved in the network stack (DHCP, DNS, one HTTP connection).
pub const NET_SOCKETS: usize = 4;

/// Upper bound on a single proxy request, including DNS and TLS.
pub const HTTP_TIMEOUT_SECS: u64 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_window_fits_controller_ram() {
        assert!(PANEL_COL_OFFSET as u32 + trainspotter_common::config::SCREEN_WIDTH <= 320);
        assert!(PANEL_ROW_OFFSET as u32 + trainspotter_common::config::SCREEN_HEIGHT <= 240);
    }

    #[test]
    fn test_backlight_is_half_duty() {
        assert_eq!(BACKLIGHT_COMPARE, 128);
        assert_eq!(u32::from(BACKLIGHT_COMPARE) * 2, u32::from(BACKLIGHT_PWM_TOP) + 1);
    }

    #[test]
    fn test_blobs_do_not_overlap() {
        assert!(WIFI_FIRMWARE_ADDR + WIFI_FIRMWARE_LEN <= WIFI_CLM_ADDR);
    }
}
