//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Round Parameters
//!
//! The round is fixed at compile time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CODE_LENGTH` | 4 | Cells per guess row (and symbols per secret) |
//! | `MAX_ATTEMPTS` | 6 | Guess rows before the round is lost |
//! | `SYMBOL_COUNT` | 4 | Size of the symbol alphabet |
//!
//! # Display
//!
//! The play field is a fixed-resolution logical screen modelled after a
//! 160x144 handheld display, drawn with one terminal cell per 4x8 pixels:
//!
//! - `SCREEN_WIDTH`: 40 columns
//! - `SCREEN_HEIGHT`: 18 rows
//! - `TICK_MS`: 16ms logical tick (~60 FPS)
//!
//! # Examples
//!
//! ```
//! use tui_mastermind_types::{Command, MenuOption, Symbol, CODE_LENGTH, MAX_ATTEMPTS};
//!
//! // Symbols cycle in a fixed order and wrap around
//! assert_eq!(Symbol::Blank.next(), Symbol::Vertical);
//! assert_eq!(Symbol::Fill.next(), Symbol::Blank);
//!
//! // Parse a command (case-insensitive)
//! assert_eq!(Command::from_str("cycleSymbol"), Some(Command::CycleSymbol));
//!
//! // Menu selection clamps at both ends
//! assert_eq!(MenuOption::Play.prev(), MenuOption::Play);
//! assert_eq!(MenuOption::Exit.next(), MenuOption::Exit);
//!
//! assert_eq!(CODE_LENGTH, 4);
//! assert_eq!(MAX_ATTEMPTS, 6);
//! ```

/// Number of cells in a guess row and symbols in a secret pattern.
pub const CODE_LENGTH: usize = 4;

/// Number of guess rows available before the round is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// Number of distinct symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Logical screen width in terminal columns (160px / 4).
pub const SCREEN_WIDTH: u16 = 40;

/// Logical screen height in terminal rows (144px / 8).
pub const SCREEN_HEIGHT: u16 = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_parameters_are_fixed() {
        assert_eq!(CODE_LENGTH, 4);
        assert_eq!(MAX_ATTEMPTS, 6);
        assert_eq!(SYMBOL_COUNT, 4);
        assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
    }

    #[test]
    fn symbol_index_matches_cycle_order() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn symbol_cycle_visits_every_symbol_once() {
        let mut s = Symbol::FIRST;
        let mut seen = [false; SYMBOL_COUNT];
        for _ in 0..SYMBOL_COUNT {
            assert!(!seen[s.index()]);
            seen[s.index()] = true;
            s = s.next();
        }
        assert_eq!(s, Symbol::FIRST);
        assert!(seen.iter().all(|v| *v));
    }

    #[test]
    fn command_string_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("submit"), Some(Command::Confirm));
        assert_eq!(Command::from_str("nope"), None);
    }

    #[test]
    fn score_row_sum_and_solved() {
        let solved = ScoreRow::new(4, 0);
        assert!(solved.is_solved());
        assert_eq!(solved.none, 0);

        let row = ScoreRow::new(1, 2);
        assert_eq!(row.none, 1);
        assert_eq!(row.exact + row.partial + row.none, CODE_LENGTH as u8);
        assert!(!row.is_solved());
    }

    #[test]
    fn score_row_clamps_oversized_counts() {
        let row = ScoreRow::new(3, 3);
        assert_eq!((row.exact, row.partial, row.none), (3, 1, 0));

        let row = ScoreRow::new(200, 200);
        assert_eq!((row.exact, row.partial, row.none), (4, 0, 0));
        assert!(row.is_solved());
    }

    #[test]
    fn outcome_finished_only_once_decided() {
        assert!(!Outcome::InProgress.is_finished());
        assert!(Outcome::Won.is_finished());
        assert!(Outcome::Lost.is_finished());
    }
}

/// The four guessable symbols.
///
/// Names follow the block patterns they are drawn with:
/// - **Blank**: empty box
/// - **Vertical**: vertical stripes
/// - **Horizontal**: horizontal stripes
/// - **Fill**: solid block
///
/// The cycle order is `Blank → Vertical → Horizontal → Fill → Blank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Blank,
    Vertical,
    Horizontal,
    Fill,
}

impl Symbol {
    /// Every symbol, in cycle order.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Blank,
        Symbol::Vertical,
        Symbol::Horizontal,
        Symbol::Fill,
    ];

    /// Symbol an unset cell is seeded with when first cycled.
    pub const FIRST: Symbol = Symbol::Blank;

    /// Position of this symbol in the cycle order (0..SYMBOL_COUNT).
    pub fn index(&self) -> usize {
        match self {
            Symbol::Blank => 0,
            Symbol::Vertical => 1,
            Symbol::Horizontal => 2,
            Symbol::Fill => 3,
        }
    }

    /// Next symbol in the cycle, wrapping after the last.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mastermind_types::Symbol;
    ///
    /// assert_eq!(Symbol::Vertical.next(), Symbol::Horizontal);
    /// assert_eq!(Symbol::Horizontal.next(), Symbol::Fill);
    /// assert_eq!(Symbol::Fill.next(), Symbol::Blank);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Symbol::Blank => Symbol::Vertical,
            Symbol::Vertical => Symbol::Horizontal,
            Symbol::Horizontal => Symbol::Fill,
            Symbol::Fill => Symbol::Blank,
        }
    }
}

/// A cell of a guess row
///
/// - `None`: unset
/// - `Some(Symbol)`: holds the symbol
pub type Cell = Option<Symbol>;

/// Discrete commands produced by the input source.
///
/// `Confirm` is context dependent: it selects the highlighted menu entry on
/// the menu screen and submits the active row on the play screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the menu selection up
    MoveUp,
    /// Move the menu selection down
    MoveDown,
    /// Move the edit cursor one cell left
    MoveCursorLeft,
    /// Move the edit cursor one cell right
    MoveCursorRight,
    /// Cycle the symbol under the edit cursor
    CycleSymbol,
    /// Confirm menu selection / submit the active row
    Confirm,
    /// Back out of the current screen
    Cancel,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 7] = [
        Command::MoveUp,
        Command::MoveDown,
        Command::MoveCursorLeft,
        Command::MoveCursorRight,
        Command::CycleSymbol,
        Command::Confirm,
        Command::Cancel,
    ];

    /// Parse command from string (case-insensitive)
    ///
    /// `"submit"` is accepted as an alias of `"confirm"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mastermind_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveCursorLeft"), Some(Command::MoveCursorLeft));
    /// assert_eq!(Command::from_str("SUBMIT"), Some(Command::Confirm));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Command::MoveUp),
            "movedown" => Some(Command::MoveDown),
            "movecursorleft" => Some(Command::MoveCursorLeft),
            "movecursorright" => Some(Command::MoveCursorRight),
            "cyclesymbol" => Some(Command::CycleSymbol),
            "confirm" | "submit" => Some(Command::Confirm),
            "cancel" => Some(Command::Cancel),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::MoveCursorLeft => "moveCursorLeft",
            Command::MoveCursorRight => "moveCursorRight",
            Command::CycleSymbol => "cycleSymbol",
            Command::Confirm => "confirm",
            Command::Cancel => "cancel",
        }
    }

    /// Stable bit index, used for per-tick de-duplication.
    pub fn bit(&self) -> u8 {
        match self {
            Command::MoveUp => 0,
            Command::MoveDown => 1,
            Command::MoveCursorLeft => 2,
            Command::MoveCursorRight => 3,
            Command::CycleSymbol => 4,
            Command::Confirm => 5,
            Command::Cancel => 6,
        }
    }
}

/// Top-level screens of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Controls,
}

/// Round outcome, tracked independently of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Whether the round has been decided (won or lost).
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuOption {
    #[default]
    Play,
    Controls,
    Exit,
}

impl MenuOption {
    /// Every entry, in display order.
    pub const ALL: [MenuOption; 3] = [MenuOption::Play, MenuOption::Controls, MenuOption::Exit];

    /// Entry above this one, clamped at the top.
    pub fn prev(&self) -> Self {
        match self {
            MenuOption::Play | MenuOption::Controls => MenuOption::Play,
            MenuOption::Exit => MenuOption::Controls,
        }
    }

    /// Entry below this one, clamped at the bottom.
    pub fn next(&self) -> Self {
        match self {
            MenuOption::Play => MenuOption::Controls,
            MenuOption::Controls | MenuOption::Exit => MenuOption::Exit,
        }
    }

    /// Position in the menu list.
    pub fn index(&self) -> usize {
        match self {
            MenuOption::Play => 0,
            MenuOption::Controls => 1,
            MenuOption::Exit => 2,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Play => "PLAY",
            MenuOption::Controls => "CONTROLS",
            MenuOption::Exit => "EXIT",
        }
    }
}

/// Result of evaluating one submitted row against the secret.
///
/// `exact + partial + none` is always [`CODE_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRow {
    /// Right symbol in the right position
    pub exact: u8,
    /// Right symbol in another position (multiset overlap)
    pub partial: u8,
    /// Pegs matching nothing
    pub none: u8,
}

impl ScoreRow {
    /// Build a score row; `none` is derived from the other two counts.
    ///
    /// Counts past [`CODE_LENGTH`] are clamped so the three fields still sum
    /// to it: `exact` first, then `partial`.
    pub fn new(exact: u8, partial: u8) -> Self {
        let total = CODE_LENGTH as u8;
        let exact = exact.min(total);
        let partial = partial.min(total - exact);
        Self {
            exact,
            partial,
            none: total - exact - partial,
        }
    }

    /// Whether this row cracked the code.
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}
