//! ST7735 rendering of [`Frame`]s.
//!
//! Generic over any `embedded-graphics` RGB565 target, so the firmware hands
//! in the `mipidsi` display and nothing here knows about SPI.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::ui::{Color, Frame, Primitive};

const CURSOR_STROKE: u32 = 1;

/// Reduce a 24-bit color to the panel's 5-6-5 format.
pub fn rgb565(color: Color) -> Rgb565 {
    Rgb565::new(color.r() >> 3, color.g() >> 2, color.b() >> 3)
}

fn circle(x: i32, y: i32, radius: i32) -> Circle {
    Circle::with_center(Point::new(x, y), (2 * radius.max(0) + 1) as u32)
}

/// Clear the screen and draw `frame` in order.
pub fn draw<D>(target: &mut D, frame: &Frame<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(Rgb565::BLACK)?;

    for primitive in frame.primitives() {
        match *primitive {
            Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                Rectangle::new(
                    Point::new(x, y),
                    Size::new(width.max(0) as u32, height.max(0) as u32),
                )
                .into_styled(PrimitiveStyle::with_fill(rgb565(fill)))
                .draw(target)?;
            }
            Primitive::Circle { x, y, radius, fill } => {
                circle(x, y, radius)
                    .into_styled(PrimitiveStyle::with_fill(rgb565(fill)))
                    .draw(target)?;
            }
            Primitive::Text { x, y, text, color } => {
                let style = MonoTextStyle::new(&FONT_6X10, rgb565(color));
                Text::with_baseline(text, Point::new(x, y), style, Baseline::Middle).draw(target)?;
            }
            Primitive::Cursor { x, y, radius } => {
                circle(x, y, radius)
                    .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, CURSOR_STROKE))
                    .draw(target)?;
            }
        }
    }
    Ok(())
}
