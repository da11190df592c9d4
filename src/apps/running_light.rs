//! Running light: one bright LED chasing around the bar.
//!
//! Short press steps through the speed table, long press exits.

use crate::config::{APP_LONG_PRESS_MS, INPUT_DELAY_MS};
use crate::platform::{LedBar, Platform};
use crate::ui::{poll_button, Color, Frame, PressDetector, PressEvent};

/// Step periods, slowest first.
pub const SPEEDS_MS: [u64; 8] = [1000, 500, 250, 100, 50, 25, 10, 1];

const LED_ON: u8 = 100;
const LED_DIM: u8 = 5;

#[derive(Debug, Default)]
pub struct RunningLight {
    position: usize,
    speed: usize,
}

impl RunningLight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the LED lit by the next step.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn period_ms(&self) -> u64 {
        SPEEDS_MS[self.speed]
    }

    /// Move to the next speed, wrapping back to the slowest.
    pub fn faster(&mut self) {
        self.speed = (self.speed + 1) % SPEEDS_MS.len();
        debug!("Running light: {} ms", self.period_ms());
    }

    /// Light the current LED, dim the others and advance.
    pub fn step(&mut self, leds: &mut dyn LedBar) {
        let count = leds.len();
        if count == 0 {
            return;
        }
        for i in 0..count {
            leds.set_led(i, if i == self.position { LED_ON } else { LED_DIM });
        }
        leds.refresh();
        self.position = (self.position + 1) % count;
    }

    pub fn frame(&self) -> Frame<'static> {
        let mut frame = Frame::new();
        frame.text(0, 5, "Short press for speed.", Color::WHITE);
        frame.text(0, 20, "Long press to exit.", Color::WHITE);
        frame
    }
}

/// Run until a long press.
pub fn run<P: Platform>(platform: &mut P) {
    let mut light = RunningLight::new();
    let mut button = PressDetector::new(APP_LONG_PRESS_MS);
    button.await_release();
    platform.render(&light.frame());

    loop {
        if let Some(leds) = platform.leds() {
            light.step(leds);
        }

        // Wait out the step in short slices so presses stay responsive.
        let mut left = light.period_ms();
        while left > 0 {
            let slice = left.min(INPUT_DELAY_MS);
            platform.wait_ms(slice);
            left -= slice;
            match poll_button(platform, &mut button) {
                PressEvent::Short => {
                    light.faster();
                    break;
                }
                PressEvent::Long => return,
                PressEvent::None => {}
            }
        }
    }
}
