//! Eyes: two pupils that follow the joystick and the badge's tilt.
//!
//! The left pupil tracks the joystick, the right one the accelerometer.
//! Short press cycles the pupil color, long press exits. While the app runs
//! the LED bar shows a slow sine wave.

use core::f32::consts::TAU;

use crate::config::{APP_LONG_PRESS_MS, EYES_TICK_MS};
use crate::input::{AccelSample, RawSample};
use crate::platform::{LedBar, Platform};
use crate::ui::{Color, Frame, Primitive, PressDetector, PressEvent};

/// Pupil colors, cycled by short presses.
pub const PUPIL_COLORS: [Color; 7] = [
    Color(0x000000),
    Color(0xFF0000),
    Color(0xFFA000),
    Color(0xFFFF00),
    Color(0x00FF00),
    Color(0x0000FF),
    Color(0xFF00FF),
];

const PUPIL_RADIUS: i32 = 5;
const EYE_RADIUS: i32 = 24;

/// Resting pupil centers.
const JOYSTICK_EYE: (i32, i32) = (54, 38);
const ACCEL_EYE: (i32, i32) = (116, 36);

/// Deflection per pixel of pupil travel.
const JOYSTICK_SCALE: i32 = 32;
const ACCEL_SCALE: i32 = 64;

/// Phase advance per tick, and LED-to-LED phase offset.
const WAVE_STEP: f32 = 0.3;
const WAVE_SPREAD: f32 = 0.5;
const WAVE_MID: f32 = 127.0;

pub struct Eyes {
    color: usize,
    phase: f32,
    joystick: (i32, i32),
    accel: (i32, i32),
}

impl Default for Eyes {
    fn default() -> Self {
        Self::new()
    }
}

impl Eyes {
    pub fn new() -> Self {
        Self {
            color: 0,
            phase: 0.0,
            joystick: (0, 0),
            accel: (0, 0),
        }
    }

    pub fn pupil_color(&self) -> Color {
        PUPIL_COLORS[self.color]
    }

    pub fn next_color(&mut self) {
        self.color = (self.color + 1) % PUPIL_COLORS.len();
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn track_joystick(&mut self, sample: &RawSample) {
        self.joystick = (sample.x, sample.y);
    }

    pub fn track_accelerometer(&mut self, sample: &AccelSample) {
        self.accel = (i32::from(sample.x), i32::from(sample.y));
    }

    pub fn joystick_pupil(&self) -> (i32, i32) {
        (
            JOYSTICK_EYE.0 + self.joystick.0.div_euclid(JOYSTICK_SCALE),
            JOYSTICK_EYE.1 + self.joystick.1.div_euclid(JOYSTICK_SCALE),
        )
    }

    pub fn accel_pupil(&self) -> (i32, i32) {
        (
            ACCEL_EYE.0 + self.accel.0.div_euclid(ACCEL_SCALE),
            ACCEL_EYE.1 + self.accel.1.div_euclid(ACCEL_SCALE),
        )
    }

    /// Write one wave step to the LEDs and advance the phase.
    pub fn animate(&mut self, leds: &mut dyn LedBar) {
        for i in 0..leds.len() {
            leds.set_led(i, wave_level(self.phase, i));
        }
        leds.refresh();
        self.phase += WAVE_STEP;
        if self.phase > TAU {
            self.phase -= TAU;
        }
    }

    pub fn frame(&self) -> Frame<'static> {
        let mut frame = Frame::new();
        for (x, y) in [JOYSTICK_EYE, ACCEL_EYE] {
            frame.push(Primitive::Circle {
                x,
                y,
                radius: EYE_RADIUS,
                fill: Color::WHITE,
            });
        }
        for (x, y) in [self.joystick_pupil(), self.accel_pupil()] {
            frame.push(Primitive::Circle {
                x,
                y,
                radius: PUPIL_RADIUS,
                fill: self.pupil_color(),
            });
        }
        frame
    }
}

/// Brightness of LED `index` at `phase`: `127 + 127·sin(phase + 0.5·index)`.
pub fn wave_level(phase: f32, index: usize) -> u8 {
    let angle = phase + WAVE_SPREAD * index as f32;
    (WAVE_MID + WAVE_MID * libm::sinf(angle)) as u8
}

/// Run until a long press.
pub fn run<P: Platform>(platform: &mut P) {
    let mut eyes = Eyes::new();
    let mut button = PressDetector::new(APP_LONG_PRESS_MS);
    button.await_release();

    loop {
        if let Some(leds) = platform.leds() {
            eyes.animate(leds);
        }

        let event = match platform.sample_input() {
            Some(sample) => {
                eyes.track_joystick(&sample);
                button.observe(sample.button_down, sample.timestamp_ms)
            }
            None => button.observe(false, platform.now_ms()),
        };
        match event {
            PressEvent::Short => eyes.next_color(),
            PressEvent::Long => {
                debug!("Eyes: exit");
                return;
            }
            PressEvent::None => {}
        }

        if let Some(sample) = platform.sample_accelerometer() {
            eyes.track_accelerometer(&sample);
        }
        platform.render(&eyes.frame());
        platform.wait_ms(EYES_TICK_MS);
    }
}
