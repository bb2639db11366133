//! Network activity indicator on the Display Pack RGB LED.
//!
//! Only the green channel is driven; red and blue are held off by the caller.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use trainspotter_common::schedule::FADE_STEP_MS;
use trainspotter_picow::indicator::{PWM_TOP, compare_for, fade_in, fade_out};

/// Green LED on a PWM B output.
pub struct Indicator<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> Indicator<'d> {
    /// Wrap the green channel's PWM slice and switch the LED off.
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        // Active low: inverted output keeps the LED dark at compare 0
        config.invert_b = true;
        config.compare_b = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }

    fn set_level(
        &mut self,
        level: u8,
    ) {
        self.config.compare_b = compare_for(level);
        self.pwm.set_config(&self.config);
    }

    /// Fade the LED up.
    pub async fn turn_on(&mut self) {
        for level in fade_in() {
            self.set_level(level);
            Timer::after_millis(FADE_STEP_MS).await;
        }
    }

    /// Fade the LED down to off.
    pub async fn turn_off(&mut self) {
        for level in fade_out() {
            self.set_level(level);
            Timer::after_millis(FADE_STEP_MS).await;
        }
    }

    /// One full on-off flash.
    pub async fn flash(&mut self) {
        self.turn_on().await;
        self.turn_off().await;
    }
}
