//! Trainspotter firmware for Raspberry Pi Pico W (RP2040)
//!
//! Shows upcoming BART departures on the Pimoroni Pico Display Pack.
//!
//! # Architecture
//!
//! After the boot screens and Wi-Fi join, two tasks share one cached [`Board`]
//! behind a mutex:
//! - Poll task: fetches the proxy every 20 s and swaps in the decoded board
//! - Main task (render loop): copies the board out and cycles through its screens
//!
//! Neither task holds the lock across a network request or a screen hold, so
//! the renderer always shows the most recently published board.
//!
//! # Build-time settings
//!
//! `WIFI_SSID`, `WIFI_PASSWORD` and `TRAINSPOTTER_URL` are read with `env!`
//! when the firmware is compiled.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod led;
mod net;
mod st7789;

use cyw43::{Control, JoinOptions};
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH1, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::Spi;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use rand_core::RngCore;
use static_cell::{ConstStaticCell, StaticCell};
use trainspotter_common::Board;
use trainspotter_common::layout::ascii_train_offsets;
use trainspotter_common::schedule::{
    ASCII_FRAME_MS,
    CONNECT_RETRY_MS,
    POLL_INTERVAL_MS,
    SPLASH_HOLD_MS,
    frames,
};
use trainspotter_common::screens::{
    CONNECTED_MESSAGE,
    connecting_message,
    draw_ascii_train,
    draw_frame,
    draw_message,
    draw_welcome,
};
use trainspotter_picow::config::{
    BACKLIGHT_COMPARE,
    BACKLIGHT_PWM_TOP,
    NET_SOCKETS,
    WIFI_CLM_ADDR,
    WIFI_CLM_LEN,
    WIFI_FIRMWARE_ADDR,
    WIFI_FIRMWARE_LEN,
};
use {defmt_rtt as _, panic_probe as _};

use crate::led::Indicator;
use crate::net::{HttpBuffers, fetch_board};
use crate::st7789::{Display, St7789Flusher, WIDTH, spi_config};

const WIFI_SSID: &str = env!("WIFI_SSID");
const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");
const PROXY_URL: &str = env!("TRAINSPOTTER_URL");

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

// =============================================================================
// Shared State
// =============================================================================

/// Latest board published by the poll task. Starts as `Waiting`.
static BOARD: Mutex<CriticalSectionRawMutex, Board> = Mutex::new(Board::Waiting);

/// HTTP receive and TLS buffers (about 37 KB), placed in .bss.
static HTTP_BUFFERS: ConstStaticCell<HttpBuffers> = ConstStaticCell::new(HttpBuffers::new());

// =============================================================================
// Tasks
// =============================================================================

#[embassy_executor::task]
async fn cyw43_task(runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH1>>) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! { runner.run().await }

/// Poll the proxy forever and publish each result.
#[embassy_executor::task]
async fn poll_task(
    stack: Stack<'static>,
    mut indicator: Indicator<'static>,
    buffers: &'static mut HttpBuffers,
) {
    info!("Poll task started");

    loop {
        indicator.turn_on().await;
        let board = fetch_board(stack, PROXY_URL, RoscRng.next_u64(), buffers).await;
        indicator.turn_off().await;

        match &board {
            Board::Departures(list) => info!("Fetched {} destinations", list.len()),
            Board::Error(message) => warn!("Board error: {}", message.as_str()),
            Board::Waiting => {}
        }

        *BOARD.lock().await = board;

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Cycle through the screens of whatever board is currently published.
///
/// Runs on the main task, which also keeps the LED, backlight and Wi-Fi control
/// handles alive.
async fn render_loop(mut display: Display) -> ! {
    info!("Render loop started");

    loop {
        // Copy out so the lock is released before drawing
        let board = BOARD.lock().await.clone();

        for frame in frames(&board) {
            display.show(|renderer| draw_frame(renderer, &frame)).await;
            Timer::after_millis(frame.hold_ms()).await;
        }
    }
}

// =============================================================================
// Boot and Connection Screens
// =============================================================================

/// LED flash, ASCII train and welcome screen.
async fn boot_sequence(
    display: &mut Display,
    indicator: &mut Indicator<'static>,
) {
    indicator.flash().await;

    for offset in ascii_train_offsets(WIDTH as u32) {
        display.show(|renderer| draw_ascii_train(renderer, offset)).await;
        Timer::after_millis(ASCII_FRAME_MS).await;
    }

    display.show(|renderer| draw_welcome(renderer)).await;
    Timer::after_millis(SPLASH_HOLD_MS).await;
}

/// One "Waiting for connection" frame with the LED pulsing.
async fn show_waiting(
    display: &mut Display,
    indicator: &mut Indicator<'static>,
    attempt: usize,
) {
    indicator.turn_on().await;
    let message = connecting_message(attempt);
    display.show(|renderer| draw_message(renderer, &message)).await;
    indicator.turn_off().await;
}

/// Join the access point and wait for DHCP, showing progress on screen.
async fn connect(
    control: &mut Control<'static>,
    stack: Stack<'static>,
    display: &mut Display,
    indicator: &mut Indicator<'static>,
) {
    let mut attempt = 0usize;

    loop {
        show_waiting(display, indicator, attempt).await;
        match control
            .join(WIFI_SSID, JoinOptions::new(WIFI_PASSWORD.as_bytes()))
            .await
        {
            Ok(()) => break,
            Err(err) => warn!("Join failed with status {}", err.status),
        }
        attempt += 1;
        Timer::after_millis(CONNECT_RETRY_MS).await;
    }
    info!("Joined {}, waiting for DHCP", WIFI_SSID);

    while !stack.is_config_up() {
        attempt += 1;
        show_waiting(display, indicator, attempt).await;
        Timer::after_millis(CONNECT_RETRY_MS).await;
    }

    display
        .show(|renderer| draw_message(renderer, CONNECTED_MESSAGE))
        .await;
    if let Some(config) = stack.config_v4() {
        info!("IP address: {}, gateway: {}", config.address, config.gateway);
    }
    Timer::after_millis(SPLASH_HOLD_MS).await;
}

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"trainspotter"),
    embassy_rp::binary_info::rp_program_description!(c"BART departures on the Pico Display Pack"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Trainspotter starting...");
    let p = embassy_rp::init(Default::default());

    // RGB LED (active-low): red and blue stay off, green is the indicator
    // Display Pack: Red=6, Green=7, Blue=8
    let _led_r = Output::new(p.PIN_6, Level::High);
    let _led_b = Output::new(p.PIN_8, Level::High);
    let mut indicator = Indicator::new(Pwm::new_output_b(p.PWM_SLICE3, p.PIN_7, PwmConfig::default()));

    // Display Pack pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    // Backlight at half brightness (PWM slice 2, channel A)
    let mut backlight_config = PwmConfig::default();
    backlight_config.top = BACKLIGHT_PWM_TOP;
    backlight_config.compare_a = BACKLIGHT_COMPARE;
    let _backlight = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, backlight_config);

    // TX-only SPI with DMA (display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config());
    let mut flusher = St7789Flusher::new(spi, dc, cs);
    flusher.init().await;

    // SAFETY: Only one Display instance exists
    let mut display = unsafe { Display::new(flusher) };
    info!("Display initialized");

    boot_sequence(&mut display, &mut indicator).await;

    // CYW43 firmware blobs live in flash at fixed addresses (see README)
    // SAFETY: The regions are flashed before the firmware runs and never written
    let fw = unsafe { core::slice::from_raw_parts(WIFI_FIRMWARE_ADDR as *const u8, WIFI_FIRMWARE_LEN) };
    let clm = unsafe { core::slice::from_raw_parts(WIFI_CLM_ADDR as *const u8, WIFI_CLM_LEN) };

    // Pico W wireless: PWR=23, CS=25, DIO=24, CLK=29
    let pwr = Output::new(p.PIN_23, Level::Low);
    let wifi_cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let wifi_spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        wifi_cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH1,
    );

    static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
    let (net_device, mut control, runner) = cyw43::new(CYW43_STATE.init(cyw43::State::new()), pwr, wifi_spi, fw).await;
    spawner.spawn(cyw43_task(runner)).unwrap();

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    static RESOURCES: StaticCell<StackResources<NET_SOCKETS>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        NetConfig::dhcpv4(Default::default()),
        RESOURCES.init(StackResources::new()),
        RoscRng.next_u64(),
    );
    spawner.spawn(net_task(runner)).unwrap();
    info!("Network stack spawned");

    connect(&mut control, stack, &mut display, &mut indicator).await;

    spawner
        .spawn(poll_task(stack, indicator, HTTP_BUFFERS.take()))
        .unwrap();
    info!("Poll task spawned");

    render_loop(display).await
}
