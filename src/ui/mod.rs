//! User interface subsystem - frame description, button and cursor input,
//! and the cursor-driven menu.
//!
//! Screens never draw directly. Each tick they build a [`Frame`] (a short
//! list of primitives) and hand it to the platform, which replaces whatever
//! was on the display with it.
//!
//! ## Components
//!
//! - **PressDetector**: short/long classification of the joystick button
//! - **Cursor**: joystick-driven pointer, clamped to the display
//! - **Menu**: labelled rows hit-tested against the cursor

pub mod cursor;
#[cfg(feature = "embedded")]
pub mod display;
pub mod menu;
pub mod press;

use heapless::Vec;

use crate::config::{DISPLAY_WIDTH, FONT_WIDTH};
use crate::platform::Platform;

pub use cursor::Cursor;
pub use menu::{Menu, MenuLayout, MenuStep};
pub use press::{PressDetector, PressEvent};

/// Most primitives a single frame can hold (a full board plus labels).
pub const MAX_PRIMITIVES: usize = 144;

/// 24-bit `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const RED: Color = Color(0xFF0000);
    pub const GREEN: Color = Color(0x00FF00);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const GRAY: Color = Color(0x808080);
    pub const DARK_GRAY: Color = Color(0x202020);
    pub const PINK: Color = Color(0xFF8080);

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

/// One drawable element. Coordinates are display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive<'a> {
    /// Filled rectangle, top-left anchored.
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Color,
    },
    /// Filled circle around a center point.
    Circle {
        x: i32,
        y: i32,
        radius: i32,
        fill: Color,
    },
    /// Single line of text; `y` is the vertical middle of the line.
    Text {
        x: i32,
        y: i32,
        text: &'a str,
        color: Color,
    },
    /// The cursor glyph, centered on the cursor position.
    Cursor { x: i32, y: i32, radius: i32 },
}

/// Everything that should be on screen after one render call.
#[derive(Debug, Default)]
pub struct Frame<'a> {
    items: Vec<Primitive<'a>, MAX_PRIMITIVES>,
}

impl<'a> Frame<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a primitive. Drops it if the frame is full.
    pub fn push(&mut self, primitive: Primitive<'a>) {
        if self.items.push(primitive).is_err() {
            warn!("Frame full, primitive dropped");
        }
    }

    pub fn text(&mut self, x: i32, y: i32, text: &'a str, color: Color) {
        self.push(Primitive::Text { x, y, text, color });
    }

    /// Text horizontally centered on the display.
    pub fn centered_text(&mut self, y: i32, text: &'a str, color: Color) {
        self.text(center_offset(text), y, text, color);
    }

    pub fn primitives(&self) -> &[Primitive<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the first text primitive with the given content.
    pub fn find_text(&self, needle: &str) -> Option<(i32, i32)> {
        self.items.iter().find_map(|p| match p {
            Primitive::Text { x, y, text, .. } if *text == needle => Some((*x, *y)),
            _ => None,
        })
    }
}

/// X position that centers `text` on the display.
pub fn center_offset(text: &str) -> i32 {
    (DISPLAY_WIDTH - text.len() as i32 * FONT_WIDTH) / 2
}

/// Run one tick of input: move the cursor and classify the button.
///
/// Without a joystick the cursor stays put and the button reads as released.
pub fn poll_input<P: Platform>(
    platform: &mut P,
    cursor: &mut Cursor,
    button: &mut PressDetector,
) -> PressEvent {
    match platform.sample_input() {
        Some(sample) => {
            cursor.update(sample.x, sample.y);
            button.observe(sample.button_down, sample.timestamp_ms)
        }
        None => button.observe(false, platform.now_ms()),
    }
}

/// Classify the button without moving any cursor.
pub fn poll_button<P: Platform>(platform: &mut P, button: &mut PressDetector) -> PressEvent {
    match platform.sample_input() {
        Some(sample) => button.observe(sample.button_down, sample.timestamp_ms),
        None => button.observe(false, platform.now_ms()),
    }
}
