//! Cursor-driven menu.
//!
//! Rows are laid out top to bottom in declaration order, five per column,
//! spilling into a second column. A short press hit-tests the cursor against
//! the rows and launches the row's action; a row without an action closes
//! the menu. Long presses are left to the apps ("hold to exit") and ignored
//! here.

use heapless::Vec;

use crate::config::{
    DISPLAY_WIDTH, INPUT_DELAY_MS, MAX_MENU_ROWS, MENU_COLUMN_WIDTH, MENU_ROWS_PER_COLUMN,
    MENU_ROW_HEIGHT, MENU_ROW_OFFSET, MENU_TITLE_Y,
};
use crate::error::Error;
use crate::platform::Platform;
use crate::ui::{poll_input, Color, Cursor, Frame, PressDetector, PressEvent};

/// Vertical offset from a row's top edge to the middle of its label.
const LABEL_Y_OFFSET: i32 = 5;

/// Row geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub title_y: i32,
    /// Top edge of the first row in each column.
    pub row_offset: i32,
    pub row_height: i32,
    pub rows_per_column: usize,
    pub column_width: i32,
    /// Right edge of the last column (inclusive).
    pub width: i32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            title_y: MENU_TITLE_Y,
            row_offset: MENU_ROW_OFFSET,
            row_height: MENU_ROW_HEIGHT,
            rows_per_column: MENU_ROWS_PER_COLUMN,
            column_width: MENU_COLUMN_WIDTH,
            width: DISPLAY_WIDTH,
        }
    }
}

/// A labelled row. `action == None` is the "back" row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRow<A> {
    pub label: &'static str,
    pub action: Option<A>,
}

/// What the menu wants after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep<A> {
    Idle,
    Launch(A),
    Exit,
}

pub struct Menu<A> {
    title: &'static str,
    rows: Vec<MenuRow<A>, MAX_MENU_ROWS>,
    layout: MenuLayout,
    cursor: Cursor,
    button: PressDetector,
}

impl<A: Copy> Menu<A> {
    /// Build a menu from `(label, action)` pairs in display order.
    pub fn new(
        title: &'static str,
        rows: &[(&'static str, Option<A>)],
        long_press_ms: u64,
    ) -> Result<Self, Error> {
        let mut list = Vec::new();
        for &(label, action) in rows {
            list.push(MenuRow { label, action })
                .map_err(|_| Error::MenuFull)?;
        }
        Ok(Self {
            title,
            rows: list,
            layout: MenuLayout::default(),
            cursor: Cursor::for_display(),
            button: PressDetector::new(long_press_ms),
        })
    }

    /// Replace the default geometry. Row, column and rows-per-column sizes
    /// must be positive.
    pub fn with_layout(mut self, layout: MenuLayout) -> Result<Self, Error> {
        if layout.rows_per_column == 0 || layout.row_height <= 0 || layout.column_width <= 0 {
            return Err(Error::InvalidLayout);
        }
        self.layout = layout;
        Ok(self)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn rows(&self) -> &[MenuRow<A>] {
        &self.rows
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Top-left corner of row `index`'s hit box.
    pub fn row_origin(&self, index: usize) -> (i32, i32) {
        let per_column = self.layout.rows_per_column;
        let column = (index / per_column) as i32;
        let row = (index % per_column) as i32;
        (
            column * self.layout.column_width,
            self.layout.row_offset + row * self.layout.row_height,
        )
    }

    /// Row under `(x, y)`, if any.
    pub fn row_at(&self, x: i32, y: i32) -> Option<usize> {
        let layout = &self.layout;
        if x < 0 || x > layout.width || y < layout.row_offset {
            return None;
        }
        // The last column runs up to the right edge inclusive.
        let last_column = (layout.width - 1) / layout.column_width;
        let column = (x / layout.column_width).min(last_column) as usize;
        let row = ((y - layout.row_offset) / layout.row_height) as usize;
        if row >= layout.rows_per_column {
            return None;
        }
        let index = column * layout.rows_per_column + row;
        (index < self.rows.len()).then_some(index)
    }

    /// React to one classified button event.
    pub fn select(&mut self, event: PressEvent) -> MenuStep<A> {
        if event != PressEvent::Short {
            return MenuStep::Idle;
        }
        let (x, y) = self.cursor.position();
        let Some(index) = self.row_at(x, y) else {
            return MenuStep::Idle;
        };
        let row = self.rows[index];
        debug!("Menu: row {} '{}'", index, row.label);
        match row.action {
            Some(action) => MenuStep::Launch(action),
            None => MenuStep::Exit,
        }
    }

    /// Title, rows and cursor.
    pub fn frame(&self) -> Frame<'static> {
        let mut frame = Frame::new();
        frame.centered_text(self.layout.title_y, self.title, Color::GREEN);
        for (i, row) in self.rows.iter().enumerate() {
            let (x, y) = self.row_origin(i);
            frame.text(x, y + LABEL_Y_OFFSET, row.label, Color::YELLOW);
        }
        frame.push(self.cursor.glyph());
        frame
    }

    /// Ignore whatever press is in flight, e.g. the one that opened the menu.
    pub fn drain(&mut self) {
        self.button.await_release();
    }

    /// Show the menu and dispatch selections until a back row is chosen.
    ///
    /// `launch` gets the cursor for the duration of the action; the menu
    /// takes it back, drains the button and redraws when it returns.
    pub fn run<P, F>(&mut self, platform: &mut P, mut launch: F)
    where
        P: Platform,
        F: FnMut(A, &mut P, &mut Cursor),
    {
        info!("Menu '{}' open", self.title);
        self.drain();
        platform.render(&self.frame());

        loop {
            platform.wait_ms(INPUT_DELAY_MS);
            let event = poll_input(platform, &mut self.cursor, &mut self.button);
            match self.select(event) {
                MenuStep::Idle => {}
                MenuStep::Launch(action) => {
                    launch(action, platform, &mut self.cursor);
                    self.drain();
                }
                MenuStep::Exit => {
                    info!("Menu '{}' closed", self.title);
                    return;
                }
            }
            platform.render(&self.frame());
        }
    }
}
