//! Command-line arguments.

use std::time::Duration;

use clap::Parser;
use trainspotter_common::schedule::POLL_INTERVAL_MS;

/// Trainspotter simulator - the Pico Display Pack screens in a desktop window
///
/// Polls a running Trainspotter proxy and shows the same boot sequence and
/// departure screens as the device.
///
/// Examples:
///   simulator --url http://localhost:10000
///   simulator --url https://trainspotter.example.com --interval 5 --scale 4
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Proxy URL to poll
    #[arg(short, long, default_value = "http://localhost:10000", env = "TRAINSPOTTER_URL")]
    pub url: String,

    /// Seconds between polls
    #[arg(short, long, default_value_t = POLL_INTERVAL_MS / 1000, value_name = "SECS")]
    pub interval: u64,

    /// Window pixel scale
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Skip the boot animation and welcome screen
    #[arg(long)]
    pub skip_boot: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn poll_interval(&self) -> Duration { Duration::from_secs(self.interval.max(1)) }
}
