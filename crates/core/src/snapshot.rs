use crate::rng::SecretPattern;
use crate::types::{Cell, MenuOption, Outcome, Screen, ScoreRow, CODE_LENGTH, MAX_ATTEMPTS};

/// Read-only view of a session, pulled by the renderer once per tick.
///
/// Fixed-size and `Copy`: filling it never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub menu_selection: MenuOption,
    /// Board cells; only the first `row_count` rows exist.
    pub board: [[Cell; CODE_LENGTH]; MAX_ATTEMPTS],
    pub row_count: u8,
    pub cursor_row: u8,
    pub cursor_col: u8,
    /// Scores, index-aligned with submitted rows.
    pub scores: [Option<ScoreRow>; MAX_ATTEMPTS],
    pub outcome: Outcome,
    /// The secret, present only once the round has ended.
    pub revealed: Option<SecretPattern>,
    pub round_id: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.screen = Screen::Menu;
        self.menu_selection = MenuOption::Play;
        self.board = [[None; CODE_LENGTH]; MAX_ATTEMPTS];
        self.row_count = 0;
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scores = [None; MAX_ATTEMPTS];
        self.outcome = Outcome::InProgress;
        self.revealed = None;
        self.round_id = 0;
        self.rounds_won = 0;
        self.rounds_lost = 0;
    }

    /// Rows that exist on the board (submitted + active)
    pub fn rows(&self) -> &[[Cell; CODE_LENGTH]] {
        &self.board[..self.row_count as usize]
    }

    pub fn score_count(&self) -> usize {
        self.scores.iter().take_while(|s| s.is_some()).count()
    }

    /// Whether the player can still edit and submit rows
    pub fn playable(&self) -> bool {
        self.screen == Screen::Playing && self.outcome == Outcome::InProgress
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            screen: Screen::Menu,
            menu_selection: MenuOption::Play,
            board: [[None; CODE_LENGTH]; MAX_ATTEMPTS],
            row_count: 0,
            cursor_row: 0,
            cursor_col: 0,
            scores: [None; MAX_ATTEMPTS],
            outcome: Outcome::InProgress,
            revealed: None,
            round_id: 0,
            rounds_won: 0,
            rounds_lost: 0,
        };
        s.clear();
        s
    }
}
