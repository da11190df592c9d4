//! Joystick button press classification.
//!
//! The joystick button is sampled once per tick. A press is registered on
//! the first tick it is seen down and classified by how long it was held:
//! released before the threshold is a `Short` press, held to the threshold
//! is a `Long` press. `Long` fires while the button is still down, so "hold
//! to exit" doesn't wait for the release.
//!
//! After a press is registered, nothing new can register until the button
//! has been seen released. That is the debounce: a held button, or one that
//! bounces while held, yields exactly one event.

/// Classified button event for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    None,
    Short,
    Long,
}

/// Short/long press state machine.
#[derive(Debug, Clone)]
pub struct PressDetector {
    is_down: bool,
    pressed_at: Option<u64>,
    awaiting_release: bool,
    long_press_ms: u64,
}

impl PressDetector {
    /// Create a detector that reports `Long` after `long_press_ms`.
    pub const fn new(long_press_ms: u64) -> Self {
        Self {
            is_down: false,
            pressed_at: None,
            awaiting_release: false,
            long_press_ms,
        }
    }

    pub fn long_press_ms(&self) -> u64 {
        self.long_press_ms
    }

    /// Whether the button was down at the last observation.
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Feed the current button level and classify.
    pub fn observe(&mut self, is_pressed: bool, now_ms: u64) -> PressEvent {
        self.is_down = is_pressed;
        if !is_pressed {
            self.awaiting_release = false;
        } else if self.pressed_at.is_none() && !self.awaiting_release {
            self.awaiting_release = true;
            self.pressed_at = Some(now_ms);
        }

        let Some(started) = self.pressed_at else {
            return PressEvent::None;
        };
        let held = now_ms.saturating_sub(started);

        if is_pressed {
            if held >= self.long_press_ms {
                self.pressed_at = None;
                return PressEvent::Long;
            }
            PressEvent::None
        } else {
            self.pressed_at = None;
            if held < self.long_press_ms {
                PressEvent::Short
            } else {
                PressEvent::Long
            }
        }
    }

    /// Drop any registered press and ignore the rest of the current one.
    ///
    /// Used when control changes hands, so the press that opened or closed
    /// a screen can't also act on the next one. If the button is already up
    /// the next observation clears the guard.
    pub fn await_release(&mut self) {
        self.pressed_at = None;
        self.awaiting_release = true;
    }
}
