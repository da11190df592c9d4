//! Portable core of the badge firmware.
//!
//! Everything here runs both on the RP2040 and on the host: button
//! classification, the joystick cursor, the menu, the mini-apps and the I²C
//! drivers (generic over embedded-hal). Hardware access goes through the
//! [`platform::Platform`] trait, which the embedded binary implements.
//!
//! Usage: `cargo test` (host), `cargo run --release --features embedded`
//! (target, via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod apps;
pub mod config;
pub mod drivers;
pub mod error;
pub mod input;
pub mod platform;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - joystick frames through cursor and button
// ═══════════════════════════════════════════════════════════════════════════
