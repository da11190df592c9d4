//! Input sampling - joystick, button and accelerometer readings.
//!
//! The joystick reports raw 16-bit axes and an active-low button byte.
//! [`RawSample::from_joystick`] folds that into the neutral frame used by the
//! rest of the firmware: deflection in roughly `[-JOY_MAX, JOY_MAX]`, +x to
//! the right, +y down the screen.

/// One joystick reading in the neutral frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i32,
    pub y: i32,
    pub button_down: bool,
    pub timestamp_ms: u64,
}

impl RawSample {
    /// A centered joystick with the button released.
    pub const fn neutral(timestamp_ms: u64) -> Self {
        Self {
            x: 0,
            y: 0,
            button_down: false,
            timestamp_ms,
        }
    }

    /// Normalize a raw joystick frame.
    ///
    /// The axes are scaled down by four (floor division) and y is flipped so
    /// that pushing the stick down moves the cursor down.
    pub fn from_joystick(raw: JoystickFrame, timestamp_ms: u64) -> Self {
        Self {
            x: i32::from(raw.x).div_euclid(4),
            y: (-i32::from(raw.y)).div_euclid(4),
            button_down: raw.button == 0,
            timestamp_ms,
        }
    }
}

/// Unprocessed joystick register block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickFrame {
    pub x: i16,
    pub y: i16,
    pub button: u8,
}

impl JoystickFrame {
    /// Size of the register block on the wire.
    pub const LEN: usize = 6;

    /// Parse `<i16 x, i16 y, u8 button, u8 reserved>` little-endian.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::LEN {
            return None;
        }
        Some(Self {
            x: i16::from_le_bytes([data[0], data[1]]),
            y: i16::from_le_bytes([data[2], data[3]]),
            button: data[4],
        })
    }
}

/// One accelerometer reading (12-bit signed, per axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}
