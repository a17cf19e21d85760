//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! The game is drawn on a fixed `SCREEN_WIDTH x SCREEN_HEIGHT` logical screen
//! which is placed inside whatever viewport the terminal offers. This module
//! is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{palette, CellStyle, FrameBuffer};
use crate::types::{
    Cell, MenuOption, Outcome, Screen, ScoreRow, Symbol, CODE_LENGTH, MAX_ATTEMPTS,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the whole logical screen fits.
    pub fn fits_screen(&self) -> bool {
        self.width >= SCREEN_WIDTH && self.height >= SCREEN_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board layout on the logical screen.
const BOARD_Y: u16 = 3;
const ROW_STEP: u16 = 2;
const ROW_LABEL_X: u16 = 3;
const CELLS_X: u16 = 6;
const CELL_STEP: u16 = 4;
const PEGS_X: u16 = 25;
const STATUS_Y: u16 = BOARD_Y + ROW_STEP * MAX_ATTEMPTS as u16;
const HINT_Y: u16 = SCREEN_HEIGHT - 2;

const CODE_X: u16 = 20;

const CONTROLS_HELP: [(&str, &str); 6] = [
    ("UP/DOWN", "menu select"),
    ("LEFT/RIGHT", "move cursor"),
    ("SPACE", "cycle symbol"),
    ("ENTER", "submit / select"),
    ("ESC", "back to menu"),
    ("Q", "quit"),
];

/// A lightweight terminal renderer for the Mastermind session.
pub struct GameView {
    /// Symbol cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the logical screen inside `viewport`.
    pub fn screen_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(SCREEN_WIDTH) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(SCREEN_HEIGHT) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Terminal position of board cell (row, col), relative to the screen origin.
    pub fn cell_offset(&self, row: usize, col: usize) -> (u16, u16) {
        (
            CELLS_X + col as u16 * CELL_STEP,
            BOARD_Y + row as u16 * ROW_STEP,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if !viewport.fits_screen() {
            let style = CellStyle::ink(palette::FG_BRIGHT);
            fb.put_str(0, 0, "TERMINAL TOO SMALL", style);
            let x = fb.put_str(0, 1, "NEED ", style);
            let x = fb.put_u32(x, 1, SCREEN_WIDTH as u32, style);
            let x = fb.put_str(x, 1, "x", style);
            fb.put_u32(x, 1, SCREEN_HEIGHT as u32, style);
            return;
        }

        let (ox, oy) = self.screen_origin(viewport);
        fb.draw_box(ox, oy, SCREEN_WIDTH, SCREEN_HEIGHT, CellStyle::ink(palette::FG));

        match snap.screen {
            Screen::Menu => self.draw_menu(fb, snap, ox, oy),
            Screen::Playing => self.draw_playing(fb, snap, ox, oy),
            Screen::Controls => self.draw_controls(fb, ox, oy),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ox: u16, oy: u16) {
        let title = CellStyle::ink(palette::FG_BRIGHT).bold();
        let text = CellStyle::ink(palette::FG);
        let dim = CellStyle::ink(palette::FG_DIM);

        fb.put_str_centered(ox, SCREEN_WIDTH, oy + 3, "M A S T E R M I N D", title);

        // Alphabet strip under the title.
        let strip_w = Symbol::ALL.len() as u16 * CELL_STEP - (CELL_STEP - self.cell_w);
        let strip_x = ox + (SCREEN_WIDTH - strip_w) / 2;
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            self.draw_symbol(fb, strip_x + i as u16 * CELL_STEP, oy + 5, Some(*symbol), text);
        }

        for option in MenuOption::ALL {
            let y = oy + 8 + option.index() as u16 * 2;
            let selected = option == snap.menu_selection;
            let style = if selected { title } else { text };
            let x = ox + 14;
            if selected {
                fb.put_char(x - 2, y, '▶', title);
            }
            fb.put_str(x, y, option.label(), style);
        }

        let y = oy + STATUS_Y;
        let x = fb.put_str(ox + 3, y, "WON ", dim);
        let x = fb.put_u32(x, y, snap.rounds_won, dim);
        let x = fb.put_str(x, y, "  LOST ", dim);
        fb.put_u32(x, y, snap.rounds_lost, dim);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ox: u16, oy: u16) {
        let title = CellStyle::ink(palette::FG_BRIGHT).bold();
        let text = CellStyle::ink(palette::FG);
        let dim = CellStyle::ink(palette::FG_DIM);

        fb.put_str(ox + 2, oy + 1, "MASTERMIND", title);
        // Right-aligned against the border so long ids stay inside the box.
        let label_w = "ROUND ".len() as u16 + decimal_width(snap.round_id);
        let x = fb.put_str(ox + SCREEN_WIDTH - 1 - label_w, oy + 1, "ROUND ", dim);
        fb.put_u32(x, oy + 1, snap.round_id, dim);

        for row in 0..MAX_ATTEMPTS {
            let (cx, cy) = self.cell_offset(row, 0);
            let y = oy + cy;
            let exists = row < snap.row_count as usize;
            let is_active = exists && row == snap.cursor_row as usize;
            let label_style = if is_active && snap.playable() { title } else { dim };
            fb.put_u32(ox + ROW_LABEL_X, y, row as u32 + 1, label_style);

            let cells: [Cell; CODE_LENGTH] = if exists {
                snap.board[row]
            } else {
                [None; CODE_LENGTH]
            };
            for (col, cell) in cells.iter().enumerate() {
                let x = ox + cx + col as u16 * CELL_STEP;
                let under_cursor =
                    is_active && snap.playable() && col == snap.cursor_col as usize;
                let style = if !exists {
                    dim
                } else if under_cursor {
                    text.inverted()
                } else {
                    text
                };
                self.draw_symbol(fb, x, y, *cell, style);
                if under_cursor {
                    fb.fill_rect(x, y + 1, self.cell_w, 1, '▲', title);
                }
            }

            if let Some(score) = snap.scores[row] {
                self.draw_pegs(fb, ox + PEGS_X, y, score, text);
            }
        }

        let y = oy + STATUS_Y;
        match snap.outcome {
            Outcome::InProgress => {
                let x = fb.put_str(ox + 3, y, "ROW ", text);
                let x = fb.put_u32(x, y, snap.cursor_row as u32 + 1, text);
                let x = fb.put_str(x, y, "/", text);
                fb.put_u32(x, y, MAX_ATTEMPTS as u32, text);
                fb.put_str(ox + 3, oy + HINT_Y, "ENTER submit  ESC menu", dim);
            }
            Outcome::Won | Outcome::Lost => {
                let label = if snap.outcome == Outcome::Won { "SOLVED!" } else { "GAME OVER" };
                fb.put_str(ox + 3, y, label, title);
                if let Some(secret) = snap.revealed {
                    fb.put_str(ox + 14, y, "CODE", dim);
                    for (i, symbol) in secret.symbols().iter().enumerate() {
                        let x = ox + CODE_X + i as u16 * (self.cell_w + 1);
                        self.draw_symbol(fb, x, y, Some(*symbol), title);
                    }
                }
                fb.put_str(ox + 3, oy + HINT_Y, "ESC back to menu", dim);
            }
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        let title = CellStyle::ink(palette::FG_BRIGHT).bold();
        let text = CellStyle::ink(palette::FG);
        let dim = CellStyle::ink(palette::FG_DIM);

        fb.put_str_centered(ox, SCREEN_WIDTH, oy + 1, "CONTROLS", title);

        let mut y = oy + 3;
        for (key, action) in CONTROLS_HELP {
            fb.put_str(ox + 3, y, key, title);
            fb.put_str(ox + 16, y, action, text);
            y += 1;
        }

        y += 1;
        fb.put_str(ox + 3, y, "●", text);
        fb.put_str(ox + 5, y, "right symbol, right place", text);
        y += 1;
        fb.put_str(ox + 3, y, "○", text);
        fb.put_str(ox + 5, y, "right symbol, wrong place", text);
        y += 1;
        fb.put_str(ox + 3, y, "·", text);
        fb.put_str(ox + 5, y, "no match", text);

        fb.put_str(ox + 3, oy + HINT_Y, "ESC back", dim);
    }

    fn draw_symbol(&self, fb: &mut FrameBuffer, x: u16, y: u16, cell: Cell, style: CellStyle) {
        fb.fill_rect(x, y, self.cell_w, 1, symbol_glyph(cell), style);
    }

    fn draw_pegs(&self, fb: &mut FrameBuffer, x: u16, y: u16, score: ScoreRow, style: CellStyle) {
        let pegs = std::iter::repeat('●')
            .take(score.exact as usize)
            .chain(std::iter::repeat('○').take(score.partial as usize))
            .chain(std::iter::repeat('·').take(score.none as usize));
        for (i, ch) in pegs.enumerate() {
            fb.put_char(x + i as u16, y, ch, style);
        }
    }
}

fn decimal_width(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

/// Glyph used to draw a cell.
pub fn symbol_glyph(cell: Cell) -> char {
    match cell {
        None => '·',
        Some(Symbol::Blank) => '□',
        Some(Symbol::Vertical) => '║',
        Some(Symbol::Horizontal) => '═',
        Some(Symbol::Fill) => '█',
    }
}
