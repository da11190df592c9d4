//! Minesweeper.
//!
//! The board fills the display with 16 px cells (10×5 on the badge). A short
//! press reveals the cell under the cursor, a long press toggles a flag. The
//! LED bar doubles as a flag gauge: one lit LED per flag still available.
//!
//! Revealing a zero cell opens its whole zero region plus the numbered
//! border. The fill runs on a fixed-size worklist, and a cell is queued at
//! most once per reveal, so memory is bounded by the board size.

use heapless::Vec;
use rand::{Rng, RngCore};

use crate::config::{
    APP_LONG_PRESS_MS, BANNER_HOLD_MS, DISPLAY_HEIGHT, DISPLAY_WIDTH, INPUT_DELAY_MS,
    MAX_BOARD_CELLS, MINES_CELL_SIZE, MINES_COUNT,
};
use crate::error::Error;
use crate::platform::{LedBar, Platform};
use crate::ui::{poll_input, Color, Cursor, Frame, Primitive, PressDetector, PressEvent};

/// Neighbor counts as labels.
const DIGITS: [&str; 9] = ["0", "1", "2", "3", "4", "5", "6", "7", "8"];

/// Label position inside a cell.
const LABEL_X_OFFSET: i32 = 5;
const LABEL_Y_OFFSET: i32 = 6;

const BANNER_Y: i32 = 40;
const FLAG_LED_ON: u8 = 255;

/// Board geometry and difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinesConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub mine_count: usize,
}

impl Default for MinesConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            cell_size: MINES_CELL_SIZE,
            mine_count: MINES_COUNT,
        }
    }
}

impl MinesConfig {
    /// Whole cells across; zero for a non-positive cell size.
    pub fn columns(&self) -> usize {
        self.fit(self.width)
    }

    pub fn rows(&self) -> usize {
        self.fit(self.height)
    }

    fn fit(&self, span: i32) -> usize {
        if self.cell_size <= 0 {
            return 0;
        }
        (span / self.cell_size).max(0) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub is_mine: bool,
    /// Mines among the eight neighbors.
    pub neighbor_mines: u8,
    pub revealed: bool,
    pub flagged: bool,
}

/// Row-major grid of cells with mines placed and counted.
#[derive(Debug, Clone)]
pub struct Board {
    columns: usize,
    rows: usize,
    mines: usize,
    cells: Vec<Cell, MAX_BOARD_CELLS>,
}

impl Board {
    fn empty(columns: usize, rows: usize) -> Result<Self, Error> {
        if columns * rows > MAX_BOARD_CELLS {
            return Err(Error::BoardTooLarge);
        }
        let mut cells = Vec::new();
        for y in 0..rows {
            for x in 0..columns {
                let _ = cells.push(Cell {
                    x: x as u8,
                    y: y as u8,
                    ..Cell::default()
                });
            }
        }
        Ok(Self {
            columns,
            rows,
            mines: 0,
            cells,
        })
    }

    /// Place `mine_count` mines uniformly at random, without replacement.
    pub fn generate<R: RngCore + ?Sized>(
        columns: usize,
        rows: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut board = Self::empty(columns, rows)?;
        if mine_count >= board.len() {
            return Err(Error::TooManyMines);
        }

        let mut available: Vec<usize, MAX_BOARD_CELLS> = (0..board.len()).collect();
        for _ in 0..mine_count {
            let pick = rng.gen_range(0..available.len());
            let location = available.swap_remove(pick);
            board.place_mine(location % columns, location / columns);
        }
        Ok(board)
    }

    /// Board with mines at fixed `(x, y)` positions. Duplicates and
    /// out-of-range positions are skipped.
    pub fn with_mines(columns: usize, rows: usize, mines: &[(usize, usize)]) -> Result<Self, Error> {
        let mut board = Self::empty(columns, rows)?;
        if mines.len() >= board.len() {
            return Err(Error::TooManyMines);
        }
        for &(x, y) in mines {
            if board.contains(x, y) && !board.cells[board.index(x, y)].is_mine {
                board.place_mine(x, y);
            }
        }
        Ok(board)
    }

    fn place_mine(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index].is_mine = true;
        self.mines += 1;
        for (nx, ny) in self.neighbors(x, y) {
            let n = self.index(nx, ny);
            self.cells[n].neighbor_mines += 1;
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.contains(x, y).then(|| &self.cells[self.index(x, y)])
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let index = self.index(x, y);
        Some(&mut self.cells[index])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// In-bounds neighbors of `(x, y)`, excluding the cell itself.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (columns, rows) = (self.columns as i32, self.rows as i32);
        let (x, y) = (x as i32, y as i32);
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(move |&(nx, ny)| nx >= 0 && ny >= 0 && nx < columns && ny < rows)
            .map(|(nx, ny)| (nx as usize, ny as usize))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn banner(self) -> Option<&'static str> {
        match self {
            GameState::Playing => None,
            GameState::Won => Some("You won!"),
            GameState::Lost => Some("You lost!"),
        }
    }
}

/// One game session.
pub struct Minesweeper {
    board: Board,
    cell_size: i32,
    /// Mines minus flags placed; goes negative with too many flags.
    flags_left: i32,
    /// Safe cells still hidden.
    cells_left: usize,
    state: GameState,
    exploded: Option<(usize, usize)>,
}

impl Minesweeper {
    /// Start a game on `board` and light the flag gauge.
    pub fn new(
        board: Board,
        cell_size: i32,
        leds: Option<&mut (dyn LedBar + '_)>,
    ) -> Result<Self, Error> {
        if cell_size <= 0 {
            return Err(Error::InvalidLayout);
        }
        let flags_left = board.mine_count() as i32;
        let cells_left = board.len() - board.mine_count();
        info!(
            "Mines: {}x{} board, {} mines",
            board.columns(),
            board.rows(),
            board.mine_count()
        );
        if let Some(leds) = leds {
            show_flag_gauge(leds, flags_left);
        }
        Ok(Self {
            board,
            cell_size,
            flags_left,
            cells_left,
            state: GameState::Playing,
            exploded: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn flags_left(&self) -> i32 {
        self.flags_left
    }

    pub fn cells_left(&self) -> usize {
        self.cells_left
    }

    /// The mine that ended the game, if one did.
    pub fn exploded(&self) -> Option<(usize, usize)> {
        self.exploded
    }

    /// Board cell under a display position.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(usize, usize)> {
        if px < 0 || py < 0 {
            return None;
        }
        let (x, y) = ((px / self.cell_size) as usize, (py / self.cell_size) as usize);
        self.board.contains(x, y).then_some((x, y))
    }

    /// Apply one button event at the cursor position.
    pub fn handle(
        &mut self,
        event: PressEvent,
        cursor: (i32, i32),
        leds: Option<&mut (dyn LedBar + '_)>,
    ) -> GameState {
        let Some((x, y)) = self.cell_at(cursor.0, cursor.1) else {
            return self.state;
        };
        match event {
            PressEvent::Short => self.reveal(x, y, leds),
            PressEvent::Long => {
                self.toggle_flag(x, y, leds);
                self.state
            }
            PressEvent::None => self.state,
        }
    }

    /// Reveal `(x, y)`, flooding through zero cells.
    pub fn reveal(
        &mut self,
        x: usize,
        y: usize,
        mut leds: Option<&mut (dyn LedBar + '_)>,
    ) -> GameState {
        if self.state != GameState::Playing || !self.board.contains(x, y) {
            return self.state;
        }

        let mut queued = [false; MAX_BOARD_CELLS];
        let mut worklist: Vec<(usize, usize), MAX_BOARD_CELLS> = Vec::new();
        queued[self.board.index(x, y)] = true;
        let _ = worklist.push((x, y));

        while let Some((cx, cy)) = worklist.pop() {
            let index = self.board.index(cx, cy);
            let cell = self.board.cells[index];
            if cell.revealed {
                continue;
            }
            if cell.flagged {
                self.toggle_flag(cx, cy, leds.as_deref_mut());
            }
            if cell.is_mine {
                info!("Mines: hit mine at ({}, {})", cx, cy);
                self.exploded = Some((cx, cy));
                self.state = GameState::Lost;
                return self.state;
            }

            self.board.cells[index].revealed = true;
            self.cells_left -= 1;
            if cell.neighbor_mines == 0 {
                for (nx, ny) in self.board.neighbors(cx, cy) {
                    let n = self.board.index(nx, ny);
                    if !queued[n] && !self.board.cells[n].revealed {
                        queued[n] = true;
                        let _ = worklist.push((nx, ny));
                    }
                }
            }
        }

        if self.cells_left == 0 {
            info!("Mines: board cleared");
            self.state = GameState::Won;
        }
        self.state
    }

    /// Flag or unflag a hidden cell and update the gauge.
    pub fn toggle_flag(&mut self, x: usize, y: usize, leds: Option<&mut (dyn LedBar + '_)>) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(cell) = self.board.cell_mut(x, y) else {
            return;
        };
        if cell.revealed {
            return;
        }

        // The LED at index `flags_left` is the one that tracks this flag.
        let change = if cell.flagged {
            cell.flagged = false;
            let led = self.flags_left;
            self.flags_left += 1;
            (led, FLAG_LED_ON)
        } else {
            cell.flagged = true;
            self.flags_left -= 1;
            (self.flags_left, 0)
        };
        debug!("Mines: flag ({}, {}), {} left", x, y, self.flags_left);

        if let (Some(leds), (led, level)) = (leds, change) {
            if led >= 0 {
                leds.set_led(led as usize, level);
            }
            leds.refresh();
        }
    }

    /// Cells, labels and cursor.
    pub fn frame(&self, cursor: &Cursor) -> Frame<'static> {
        let mut frame = Frame::new();
        let size = self.cell_size;
        for cell in self.board.cells() {
            let (x, y) = (i32::from(cell.x) * size, i32::from(cell.y) * size);
            let fill = if self.exploded == Some((cell.x as usize, cell.y as usize)) {
                Color::RED
            } else if cell.revealed {
                Color::DARK_GRAY
            } else if cell.flagged {
                Color::PINK
            } else {
                Color::GRAY
            };
            frame.push(Primitive::Rect {
                x,
                y,
                width: size - 1,
                height: size - 1,
                fill,
            });
        }
        for cell in self.board.cells() {
            if cell.revealed && cell.neighbor_mines > 0 {
                frame.text(
                    i32::from(cell.x) * size + LABEL_X_OFFSET,
                    i32::from(cell.y) * size + LABEL_Y_OFFSET,
                    DIGITS[cell.neighbor_mines as usize],
                    Color::GREEN,
                );
            }
        }
        frame.push(cursor.glyph());
        frame
    }
}

/// Light one LED per flag still available, the rest off.
pub fn show_flag_gauge(leds: &mut dyn LedBar, flags_left: i32) {
    for i in 0..leds.len() {
        let level = if (i as i32) < flags_left { FLAG_LED_ON } else { 0 };
        leds.set_led(i, level);
    }
    leds.refresh();
}

/// Play one game on the display, then show the result and return.
pub fn run<P: Platform>(platform: &mut P, cursor: &mut Cursor) {
    let config = MinesConfig::default();
    let columns = config.columns();
    let rows = config.rows();
    let game = Board::generate(columns, rows, config.mine_count, platform.rng())
        .and_then(|board| Minesweeper::new(board, config.cell_size, platform.leds()));
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            warn!("Mines: cannot build board: {}", e);
            return;
        }
    };
    let mut button = PressDetector::new(APP_LONG_PRESS_MS);
    button.await_release();
    platform.render(&game.frame(cursor));

    loop {
        platform.wait_ms(INPUT_DELAY_MS);
        let event = poll_input(platform, cursor, &mut button);
        let state = game.handle(event, cursor.position(), platform.leds());
        if let Some(text) = state.banner() {
            let mut banner = Frame::new();
            banner.centered_text(BANNER_Y, text, Color::WHITE);
            platform.render(&banner);
            platform.wait_ms(BANNER_HOLD_MS);
            return;
        }
        platform.render(&game.frame(cursor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// LED bar that remembers the last level of each LED.
    struct Gauge {
        levels: [u8; 12],
        refreshes: usize,
    }

    impl Gauge {
        fn new() -> Self {
            Self {
                levels: [0xAA; 12],
                refreshes: 0,
            }
        }

        fn lit(&self) -> usize {
            self.levels.iter().filter(|&&l| l == FLAG_LED_ON).count()
        }
    }

    impl LedBar for Gauge {
        fn len(&self) -> usize {
            self.levels.len()
        }

        fn set_led(&mut self, index: usize, brightness: u8) {
            if let Some(level) = self.levels.get_mut(index) {
                *level = brightness;
            }
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    /// Seven mines in the three right-hand columns of a 10×5 board: every
    /// cell with x <= 5 is a zero cell and column 6 is its numbered border.
    const MINES: [(usize, usize); 7] = [(7, 0), (8, 1), (9, 2), (7, 3), (8, 4), (9, 0), (9, 4)];

    fn game(gauge: &mut Gauge) -> Minesweeper {
        let board = Board::with_mines(10, 5, &MINES).unwrap();
        Minesweeper::new(board, 16, Some(gauge)).unwrap()
    }

    #[test]
    fn generated_board_has_exact_mine_count() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = Board::generate(10, 5, 7, &mut rng).unwrap();
            let mines = board.cells().iter().filter(|c| c.is_mine).count();
            assert_eq!(mines, 7);
            assert_eq!(board.mine_count(), 7);
            assert_eq!(board.len(), 50);
        }
    }

    #[test]
    fn neighbor_counts_match_mines() {
        let mut rng = SmallRng::seed_from_u64(42);
        let board = Board::generate(10, 5, 7, &mut rng).unwrap();
        for cell in board.cells() {
            let expected = board
                .neighbors(cell.x as usize, cell.y as usize)
                .filter(|&(x, y)| board.cell(x, y).unwrap().is_mine)
                .count();
            assert_eq!(cell.neighbor_mines as usize, expected);
        }
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let board = Board::with_mines(10, 5, &[]).unwrap();
        assert_eq!(board.neighbors(0, 0).count(), 3);
        assert_eq!(board.neighbors(9, 4).count(), 3);
        assert_eq!(board.neighbors(5, 0).count(), 5);
        assert_eq!(board.neighbors(5, 2).count(), 8);
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(Board::generate(9, 8, 7, &mut rng).err(), Some(Error::BoardTooLarge));
        assert_eq!(Board::generate(2, 2, 4, &mut rng).err(), Some(Error::TooManyMines));
        assert_eq!(Board::with_mines(0, 0, &[]).err(), Some(Error::TooManyMines));
    }

    #[test]
    fn default_config_fits_display() {
        let config = MinesConfig::default();
        assert_eq!((config.columns(), config.rows()), (10, 5));
    }

    #[test]
    fn non_positive_cell_size_is_rejected() {
        for cell_size in [0, -16] {
            let config = MinesConfig {
                cell_size,
                ..MinesConfig::default()
            };
            assert_eq!((config.columns(), config.rows()), (0, 0));

            let mut gauge = Gauge::new();
            let board = Board::with_mines(10, 5, &MINES).unwrap();
            let game = Minesweeper::new(board, cell_size, Some(&mut gauge));
            assert_eq!(game.err(), Some(Error::InvalidLayout));
            // The gauge is left alone when the game never starts.
            assert_eq!(gauge.refreshes, 0);
        }
    }

    #[test]
    fn start_lights_one_led_per_mine() {
        let mut gauge = Gauge::new();
        let game = game(&mut gauge);
        assert_eq!(game.flags_left(), 7);
        assert_eq!(gauge.lit(), 7);
        assert_eq!(&gauge.levels[7..], &[0; 5]);
        assert_eq!(game.cells_left(), 43);
    }

    #[test]
    fn reveal_zero_cell_floods_region_and_border() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        assert_eq!(game.reveal(0, 0, None), GameState::Playing);

        let board = game.board();
        for cell in board.cells() {
            let should_be_open = cell.x <= 6;
            assert_eq!(cell.revealed, should_be_open, "cell ({}, {})", cell.x, cell.y);
        }
        assert_eq!(board.cell(0, 0).unwrap().neighbor_mines, 0);
        assert_eq!(board.cell(6, 0).unwrap().neighbor_mines, 1);
        assert_eq!(board.cell(6, 2).unwrap().neighbor_mines, 1);
        assert_eq!(board.cell(9, 1).unwrap().neighbor_mines, 3);
        assert_eq!(board.cell(8, 3).unwrap().neighbor_mines, 4);
        assert_eq!(game.cells_left(), 8);
    }

    #[test]
    fn reveal_numbered_cell_opens_only_that_cell() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        game.reveal(6, 0, None);
        let open = game.board().cells().iter().filter(|c| c.revealed).count();
        assert_eq!(open, 1);
        assert_eq!(game.cells_left(), 42);
    }

    #[test]
    fn re_reveal_is_a_no_op() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        game.reveal(0, 0, None);
        let left = game.cells_left();
        game.reveal(3, 3, None);
        game.reveal(6, 1, None);
        assert_eq!(game.cells_left(), left);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn first_mine_ends_the_game() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        assert_eq!(game.reveal(7, 0, None), GameState::Lost);
        assert_eq!(game.exploded(), Some((7, 0)));
        // Nothing else changes after the loss.
        assert_eq!(game.reveal(0, 0, None), GameState::Lost);
        assert!(!game.board().cell(0, 0).unwrap().revealed);
    }

    #[test]
    fn revealing_every_safe_cell_wins_regardless_of_flags() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        // Flag a safe cell and a mine; neither blocks the win.
        game.toggle_flag(8, 3, Some(&mut gauge));
        game.toggle_flag(9, 0, Some(&mut gauge));
        game.reveal(0, 0, Some(&mut gauge));
        let border = [(7, 1), (7, 2), (7, 4), (8, 0), (8, 2), (8, 3), (9, 1)];
        for (x, y) in border {
            assert_eq!(game.reveal(x, y, Some(&mut gauge)), GameState::Playing);
        }
        assert_eq!(game.reveal(9, 3, Some(&mut gauge)), GameState::Won);
        assert_eq!(game.cells_left(), 0);
        assert_eq!(game.state().banner(), Some("You won!"));
        // Revealing the flagged safe cell cleared its flag.
        assert!(!game.board().cell(8, 3).unwrap().flagged);
        assert_eq!(game.flags_left(), 6);
    }

    #[test]
    fn flag_twice_restores_counter_and_led() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        let before = gauge.levels;

        game.toggle_flag(2, 2, Some(&mut gauge));
        assert_eq!(game.flags_left(), 6);
        assert_eq!(gauge.levels[6], 0);
        assert!(game.board().cell(2, 2).unwrap().flagged);

        game.toggle_flag(2, 2, Some(&mut gauge));
        assert_eq!(game.flags_left(), 7);
        assert_eq!(gauge.levels, before);
        assert!(!game.board().cell(2, 2).unwrap().flagged);
    }

    #[test]
    fn flag_counter_may_go_negative() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        for x in 0..9 {
            game.toggle_flag(x, 1, Some(&mut gauge));
        }
        assert_eq!(game.flags_left(), -2);
        assert_eq!(gauge.lit(), 0);

        // Unflagging while negative leaves the LEDs dark until the count is back to zero.
        game.toggle_flag(0, 1, Some(&mut gauge));
        assert_eq!(gauge.lit(), 0);
        game.toggle_flag(1, 1, Some(&mut gauge));
        assert_eq!(game.flags_left(), 0);
        assert_eq!(gauge.lit(), 0);
        game.toggle_flag(2, 1, Some(&mut gauge));
        assert_eq!(game.flags_left(), 1);
        assert_eq!(gauge.levels[0], FLAG_LED_ON);
    }

    #[test]
    fn flagging_revealed_cell_is_a_no_op() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        game.reveal(6, 0, None);
        game.toggle_flag(6, 0, Some(&mut gauge));
        assert_eq!(game.flags_left(), 7);
        assert!(!game.board().cell(6, 0).unwrap().flagged);
    }

    #[test]
    fn presses_map_through_cursor_position() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        // Long press at pixel (40, 40) flags cell (2, 2).
        game.handle(PressEvent::Long, (40, 40), None);
        assert!(game.board().cell(2, 2).unwrap().flagged);
        // Short press at the right edge is outside the grid.
        assert_eq!(game.handle(PressEvent::Short, (160, 10), None), GameState::Playing);
        assert_eq!(game.cells_left(), 43);
        // Short press at (100, 70) reveals cell (6, 4).
        game.handle(PressEvent::Short, (100, 70), None);
        assert!(game.board().cell(6, 4).unwrap().revealed);
    }

    #[test]
    fn game_without_leds_still_plays() {
        let board = Board::with_mines(10, 5, &MINES).unwrap();
        let mut game = Minesweeper::new(board, 16, None).unwrap();
        game.toggle_flag(0, 0, None);
        assert_eq!(game.flags_left(), 6);
        assert_eq!(game.reveal(0, 0, None), GameState::Playing);
        assert_eq!(game.flags_left(), 7);
    }

    #[test]
    fn frame_shows_cells_labels_and_cursor() {
        let mut gauge = Gauge::new();
        let mut game = game(&mut gauge);
        game.reveal(0, 0, None);
        let frame = game.frame(&Cursor::for_display());
        // 50 cells + 5 labels on the border column + cursor
        assert_eq!(frame.len(), 56);
        assert_eq!(frame.find_text("1"), Some((6 * 16 + LABEL_X_OFFSET, LABEL_Y_OFFSET)));
    }
}
