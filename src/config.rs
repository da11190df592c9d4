//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, bus addresses, display geometry and timing
//! parameters live here so they can be tuned in one place.

// Display

/// Landscape display size in pixels (ST7735R, 160×80).
pub const DISPLAY_WIDTH: i32 = 160;
pub const DISPLAY_HEIGHT: i32 = 80;

/// ST7735R panel offset on the 80×160 variant.
pub const DISPLAY_COL_OFFSET: u16 = 24;
pub const DISPLAY_ROW_OFFSET: u16 = 0;

/// Width of one glyph of the UI font, used to center text.
pub const FONT_WIDTH: i32 = 6;

// Joystick / cursor

/// Normalized joystick deflection range is `[-JOY_MAX, JOY_MAX]`.
pub const JOY_MAX: i32 = 512;

/// Cursor travel in pixels per tick at full deflection.
pub const CURSOR_STEP_RATE: i32 = 10;

/// Radius of the cursor glyph.
pub const CURSOR_RADIUS: i32 = 3;

// Timing

/// Tick period of the menu, the game and the running light (ms).
pub const INPUT_DELAY_MS: u64 = 50;

/// Tick period of the eyes animation (ms).
pub const EYES_TICK_MS: u64 = 25;

/// Long-press threshold inside apps (ms).
pub const APP_LONG_PRESS_MS: u64 = 400;

/// Long-press threshold of the top-level menu (ms).
pub const MENU_LONG_PRESS_MS: u64 = 1500;

/// How long the win/lose banner stays on screen (ms).
pub const BANNER_HOLD_MS: u64 = 3000;

// Menu layout

pub const MENU_TITLE: &str = "BSidesSLC 2022";
pub const MENU_TITLE_Y: i32 = 5;
pub const MENU_ROW_OFFSET: i32 = 20;
pub const MENU_ROW_HEIGHT: i32 = 15;
pub const MENU_ROWS_PER_COLUMN: usize = 5;
pub const MENU_COLUMN_WIDTH: i32 = 80;

/// Two columns of five rows.
pub const MAX_MENU_ROWS: usize = 2 * MENU_ROWS_PER_COLUMN;

// Minesweeper

pub const MINES_CELL_SIZE: i32 = 16;
pub const MINES_COUNT: usize = 7;

/// Upper bound on board cells; 160×80 with 16 px cells needs 50.
pub const MAX_BOARD_CELLS: usize = 64;

// LEDs

/// LEDs wired to the IS31FL3218 (channels 0..12 of 18).
pub const LED_COUNT: usize = 12;

// I2C addresses

pub const JOYSTICK_ADDR: u8 = 0x42;
pub const LED_DRIVER_ADDR: u8 = 0x54;
pub const ACCEL_ADDR: u8 = 0x0F;

/// I2C bus frequency (Hz).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// SPI clock for the display (Hz).
pub const DISPLAY_SPI_FREQUENCY_HZ: u32 = 32_000_000;

// GPIO pin assignments (RP2040 badge)
//
// These are logical names; the `embassy_rp::peripherals::*` pins are picked
// in `main.rs`.  Adjust for another board revision.
//
//   SPI0 SCK       → GP2
//   SPI0 MOSI      → GP3
//   Display DC     → GP5
//   Display RST    → GP6
//   Display CS     → GP7
//   Backlight      → GP8
//   I²C0 SDA       → GP16
//   I²C0 SCL       → GP17
