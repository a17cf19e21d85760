//! Board module - manages the guess grid and edit cursor
//!
//! The board holds up to `MAX_ATTEMPTS` rows of `CODE_LENGTH` cells. Only the
//! last row is ever editable; rows before it are submitted and frozen, rows
//! after it do not exist yet. Storage is a fixed-capacity `ArrayVec`, so the
//! board never allocates.
//!
//! The cursor is kept as a column index next to the rows. It is never written
//! into cell data.

use arrayvec::ArrayVec;

use crate::error::SubmitError;
use crate::types::{Cell, Symbol, CODE_LENGTH, MAX_ATTEMPTS};

/// A complete guess, ready for scoring.
pub type Guess = [Symbol; CODE_LENGTH];

/// One row of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GuessRow {
    cells: [Cell; CODE_LENGTH],
    submitted: bool,
}

impl GuessRow {
    /// Create a row of unset cells
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; CODE_LENGTH] {
        &self.cells
    }

    /// Get cell at column
    /// Returns None if out of bounds
    pub fn get(&self, col: usize) -> Option<Cell> {
        self.cells.get(col).copied()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// First unset column, if any
    pub fn first_unset(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_unset().is_none()
    }

    /// The row as a guess, if every cell is set
    pub fn guess(&self) -> Option<Guess> {
        let mut out = [Symbol::FIRST; CODE_LENGTH];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = (*cell)?;
        }
        Some(out)
    }
}

/// The guess board - rows of attempts plus the edit cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBoard {
    /// Never empty; the last row is the active one.
    rows: ArrayVec<GuessRow, MAX_ATTEMPTS>,
    active_col: usize,
}

impl GuessBoard {
    /// Create a board with one empty active row
    pub fn new() -> Self {
        let mut rows = ArrayVec::new();
        rows.push(GuessRow::new());
        Self {
            rows,
            active_col: 0,
        }
    }

    pub fn active_row(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn active_col(&self) -> usize {
        self.active_col
    }

    /// Cursor as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        (self.active_row(), self.active_col)
    }

    /// Submitted rows followed by the active row
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    pub fn active(&self) -> &GuessRow {
        &self.rows[self.active_row()]
    }

    fn active_mut(&mut self) -> &mut GuessRow {
        let idx = self.active_row();
        &mut self.rows[idx]
    }

    /// Number of submitted rows
    pub fn submitted_count(&self) -> usize {
        self.rows.iter().filter(|r| r.submitted).count()
    }

    /// The last attempt has been submitted; no further row can be created
    pub fn is_exhausted(&self) -> bool {
        self.rows.is_full() && self.active().submitted
    }

    /// Shift the cursor by `delta_col`, clamped to the row.
    /// Returns false when the cursor did not move (already at the boundary).
    pub fn move_cursor(&mut self, delta_col: i8) -> bool {
        let target = (self.active_col as i32 + delta_col as i32).clamp(0, CODE_LENGTH as i32 - 1);
        let target = target as usize;
        if target == self.active_col {
            return false;
        }
        self.active_col = target;
        true
    }

    /// Advance the symbol under the cursor through the cycle order.
    /// An unset cell is seeded with [`Symbol::FIRST`].
    /// Returns false if the active row is frozen.
    pub fn cycle_active_symbol(&mut self) -> bool {
        let col = self.active_col;
        let row = self.active_mut();
        if row.submitted {
            return false;
        }
        row.cells[col] = Some(match row.cells[col] {
            Some(symbol) => symbol.next(),
            None => Symbol::FIRST,
        });
        true
    }

    /// Freeze the active row and return it for scoring.
    ///
    /// The caller decides whether to [`advance_row`](Self::advance_row).
    pub fn submit_active_row(&mut self) -> Result<Guess, SubmitError> {
        let row_idx = self.active_row();
        let row = self.active_mut();
        if row.submitted {
            return Err(SubmitError::AlreadySubmitted { row: row_idx });
        }
        let Some(guess) = row.guess() else {
            let col = row.first_unset().unwrap_or_default();
            return Err(SubmitError::IncompleteRow { row: row_idx, col });
        };
        row.submitted = true;
        Ok(guess)
    }

    /// Open the next row, keeping the cursor column.
    /// Returns false at the last attempt, or if the active row is still editable.
    pub fn advance_row(&mut self) -> bool {
        if !self.active().submitted || self.rows.is_full() {
            return false;
        }
        self.rows.push(GuessRow::new());
        true
    }

    /// Clear all rows and put the cursor back at (0, 0)
    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push(GuessRow::new());
        self.active_col = 0;
    }

    /// Write a whole row directly (for testing)
    #[cfg(test)]
    pub fn fill_active(&mut self, guess: Guess) {
        self.active_mut().cells = guess.map(Some);
    }
}

impl Default for GuessBoard {
    fn default() -> Self {
        Self::new()
    }
}
