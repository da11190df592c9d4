//! I²C drivers for the badge peripherals.
//!
//! Generic over any embedded-hal 1.0 `I2c` so the same code runs against the
//! RP2040 bus (shared through `embedded-hal-bus`) and test doubles.
//!
//! Constructors probe the chip; a failed probe is reported as
//! [`Error::DeviceAbsent`](crate::error::Error::DeviceAbsent) and the caller
//! keeps running without that device.

pub mod is31fl3218;
pub mod joystick;
pub mod stk8321;

pub use is31fl3218::Is31fl3218;
pub use joystick::Joystick;
pub use stk8321::Stk8321;

#[cfg(test)]
mod test_bus;
