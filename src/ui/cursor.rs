//! Joystick-driven screen cursor.

use crate::config::{CURSOR_RADIUS, CURSOR_STEP_RATE, DISPLAY_HEIGHT, DISPLAY_WIDTH, JOY_MAX};
use crate::ui::Primitive;

/// Pointer position in display pixels, always within `[0, width] × [0, height]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    step_rate: i32,
}

impl Cursor {
    /// Cursor centered on a `width` × `height` area.
    pub const fn new(width: i32, height: i32, step_rate: i32) -> Self {
        Self {
            x: width / 2,
            y: height / 2,
            width,
            height,
            step_rate,
        }
    }

    /// Cursor for the badge display.
    pub const fn for_display() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, CURSOR_STEP_RATE)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn radius(&self) -> i32 {
        CURSOR_RADIUS
    }

    /// Move to an absolute position, clamped.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x.clamp(0, self.width);
        self.y = y.clamp(0, self.height);
    }

    /// Advance by one tick of joystick deflection.
    pub fn update(&mut self, deflection_x: i32, deflection_y: i32) {
        self.x = (self.x + self.step(deflection_x)).clamp(0, self.width);
        self.y = (self.y + self.step(deflection_y)).clamp(0, self.height);
    }

    /// Pixels to move for `deflection`, rounded half away from zero.
    fn step(&self, deflection: i32) -> i32 {
        let deflection = deflection.clamp(-JOY_MAX, JOY_MAX);
        let scaled = deflection * self.step_rate;
        let magnitude = (scaled.abs() + JOY_MAX / 2) / JOY_MAX;
        magnitude * scaled.signum()
    }

    pub fn glyph(&self) -> Primitive<'static> {
        Primitive::Cursor {
            x: self.x,
            y: self.y,
            radius: CURSOR_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let c = Cursor::for_display();
        assert_eq!(c.position(), (80, 40));
    }

    #[test]
    fn full_deflection_moves_step_rate() {
        let mut c = Cursor::for_display();
        c.update(512, -512);
        assert_eq!(c.position(), (90, 30));
    }

    #[test]
    fn partial_deflection_rounds() {
        let mut c = Cursor::for_display();
        // 128/512*10 = 2.5 -> 3, 25/512*10 = 0.49 -> 0
        c.update(128, 25);
        assert_eq!(c.position(), (83, 40));
        c.update(-128, -26);
        assert_eq!(c.position(), (80, 39));
    }

    #[test]
    fn zero_deflection_is_idempotent() {
        let mut c = Cursor::for_display();
        c.update(300, 300);
        let before = c.position();
        for _ in 0..10 {
            c.update(0, 0);
        }
        assert_eq!(c.position(), before);
    }

    #[test]
    fn clamps_to_display_bounds() {
        let mut c = Cursor::for_display();
        for _ in 0..100 {
            c.update(512, 512);
        }
        assert_eq!(c.position(), (DISPLAY_WIDTH, DISPLAY_HEIGHT));
        for _ in 0..100 {
            c.update(-512, -512);
        }
        assert_eq!(c.position(), (0, 0));
    }

    #[test]
    fn stays_in_bounds_for_any_deflection() {
        let mut c = Cursor::for_display();
        let inputs = [i32::MIN / 2, -100_000, -513, -1, 0, 1, 511, 513, 100_000, i32::MAX / 2];
        for &dx in &inputs {
            for &dy in inputs.iter().rev() {
                c.update(dx, dy);
                let (x, y) = c.position();
                assert!((0..=DISPLAY_WIDTH).contains(&x));
                assert!((0..=DISPLAY_HEIGHT).contains(&y));
            }
        }
    }

    #[test]
    fn set_position_clamps() {
        let mut c = Cursor::for_display();
        c.set_position(-5, 500);
        assert_eq!(c.position(), (0, DISPLAY_HEIGHT));
    }
}
