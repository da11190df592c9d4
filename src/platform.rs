//! Collaborator interface between the portable logic and the hardware.
//!
//! The firmware implements [`Platform`] on top of the real drivers; tests
//! implement it with scripted input. Optional devices surface as `Option`s:
//! `None` means the device was absent at start-up and every caller skips it
//! for the rest of the session.

use rand::RngCore;

use crate::input::{AccelSample, RawSample};
use crate::ui::Frame;

/// Output channel for the LED bar.
pub trait LedBar {
    /// Number of LEDs in the bar.
    fn len(&self) -> usize;

    /// Stage a brightness (0..=255) for one LED. Out-of-range indices are
    /// ignored.
    fn set_led(&mut self, index: usize, brightness: u8);

    /// Latch staged values onto the LEDs.
    fn refresh(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage the same brightness on every LED.
    fn fill(&mut self, brightness: u8) {
        for i in 0..self.len() {
            self.set_led(i, brightness);
        }
    }
}

/// Everything the menu and apps need from the badge.
pub trait Platform {
    type Rng: RngCore;

    /// Milliseconds on a monotonic clock.
    fn now_ms(&self) -> u64;

    /// Block for one tick (or the remainder of a timed wait).
    fn wait_ms(&mut self, ms: u64);

    /// Latest joystick reading, or `None` without a joystick.
    fn sample_input(&mut self) -> Option<RawSample>;

    /// Latest accelerometer reading, or `None` without an accelerometer.
    fn sample_accelerometer(&mut self) -> Option<AccelSample>;

    /// Replace the display contents with `frame`.
    fn render(&mut self, frame: &Frame<'_>);

    /// The LED bar, or `None` without an LED controller.
    fn leds(&mut self) -> Option<&mut dyn LedBar>;

    fn rng(&mut self) -> &mut Self::Rng;
}
