//! Unified error type for the badge firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target
//! logging.
//!
//! None of these are fatal: a missing device disables its subsystem for the
//! session, and layout errors are caught when a menu or board is built.
//! A cursor that maps to no menu row or board cell is not an error at all;
//! hit-tests return `None` and the press is ignored.

/// Optional devices on the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Device {
    Joystick,
    LedDriver,
    Accelerometer,
    Display,
}

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Devices
    /// The device did not answer at start-up; it stays disabled.
    DeviceAbsent(Device),

    /// An I²C transaction failed after the device was found.
    Bus,

    /// The device answered with an unexpected chip id.
    BadChipId(u8),

    // Layout
    /// The board needs more cells than `MAX_BOARD_CELLS`.
    BoardTooLarge,

    /// The mine count leaves no free cell on the board.
    TooManyMines,

    /// More rows than the two menu columns can hold.
    MenuFull,

    /// A zero or negative cell, row or column size.
    InvalidLayout,
}

impl Error {
    /// Attribute a bus failure during probing to the device being probed.
    pub fn absent(self, device: Device) -> Self {
        match self {
            Error::Bus => Error::DeviceAbsent(device),
            other => other,
        }
    }
}
