//! Session module - the top-level game state machine
//!
//! Ties together the board, the secret, the evaluator and the round rules, and
//! owns the screen state (menu / playing / controls). The frame driver feeds
//! commands through [`GameSession::update`] once per tick and reads
//! [`GameSession::snapshot`] for rendering.
//!
//! Commands that make no sense in the current state are ignored. No sequence
//! of commands can leave the session in an invalid state.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::GuessBoard;
use crate::rng::{PatternGenerator, RandomSource, SecretPattern, SimpleRng};
use crate::scoring::score;
use crate::snapshot::SessionSnapshot;
use crate::types::*;

/// What the frame driver should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    Continue,
    /// "Exit" was confirmed on the menu
    Exit,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    generator: PatternGenerator<R>,
    /// None until the first round starts.
    secret: Option<SecretPattern>,
    board: GuessBoard,
    scores: ArrayVec<ScoreRow, MAX_ATTEMPTS>,
    screen: Screen,
    outcome: Outcome,
    menu_selection: MenuOption,
    /// Monotonic round id (increments each time a round starts).
    round_id: u32,
    rounds_won: u32,
    rounds_lost: u32,
}

impl GameSession<SimpleRng> {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_generator(PatternGenerator::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session drawing secrets from `source`
    pub fn with_source(source: R) -> Self {
        Self::with_generator(PatternGenerator::with_source(source))
    }

    fn with_generator(generator: PatternGenerator<R>) -> Self {
        Self {
            generator,
            secret: None,
            board: GuessBoard::new(),
            scores: ArrayVec::new(),
            screen: Screen::Menu,
            outcome: Outcome::InProgress,
            menu_selection: MenuOption::Play,
            round_id: 0,
            rounds_won: 0,
            rounds_lost: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn menu_selection(&self) -> MenuOption {
        self.menu_selection
    }

    pub fn board(&self) -> &GuessBoard {
        &self.board
    }

    pub fn scores(&self) -> &[ScoreRow] {
        &self.scores
    }

    pub fn secret(&self) -> Option<&SecretPattern> {
        self.secret.as_ref()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }

    /// Process one tick's worth of commands, in order.
    ///
    /// Stops at the first command that asks the caller to exit.
    pub fn update<I>(&mut self, commands: I) -> SessionSignal
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            if self.apply_command(command) == SessionSignal::Exit {
                return SessionSignal::Exit;
            }
        }
        SessionSignal::Continue
    }

    /// Apply a single command
    pub fn apply_command(&mut self, command: Command) -> SessionSignal {
        debug!(command = command.as_str(), screen = ?self.screen, "apply command");
        match self.screen {
            Screen::Menu => return self.apply_menu(command),
            Screen::Playing => self.apply_playing(command),
            Screen::Controls => self.apply_controls(command),
        }
        SessionSignal::Continue
    }

    fn apply_menu(&mut self, command: Command) -> SessionSignal {
        match command {
            Command::MoveUp => self.menu_selection = self.menu_selection.prev(),
            Command::MoveDown => self.menu_selection = self.menu_selection.next(),
            Command::Confirm => match self.menu_selection {
                MenuOption::Play => self.start_round(),
                MenuOption::Controls => self.screen = Screen::Controls,
                MenuOption::Exit => {
                    info!(
                        rounds_won = self.rounds_won,
                        rounds_lost = self.rounds_lost,
                        "exit selected"
                    );
                    return SessionSignal::Exit;
                }
            },
            Command::MoveCursorLeft
            | Command::MoveCursorRight
            | Command::CycleSymbol
            | Command::Cancel => {}
        }
        SessionSignal::Continue
    }

    fn apply_playing(&mut self, command: Command) {
        match command {
            Command::MoveCursorLeft => {
                self.board.move_cursor(-1);
            }
            Command::MoveCursorRight => {
                self.board.move_cursor(1);
            }
            Command::CycleSymbol => {
                if self.outcome == Outcome::InProgress {
                    self.board.cycle_active_symbol();
                }
            }
            Command::Confirm => {
                if self.outcome == Outcome::InProgress {
                    self.submit();
                }
            }
            Command::Cancel => {
                if self.outcome == Outcome::InProgress {
                    info!(round_id = self.round_id, "round abandoned");
                }
                self.reset_round();
                self.screen = Screen::Menu;
            }
            Command::MoveUp | Command::MoveDown => {}
        }
    }

    fn apply_controls(&mut self, command: Command) {
        if command == Command::Cancel {
            self.screen = Screen::Menu;
        }
    }

    /// Start a fresh round and switch to the play screen
    pub fn start_round(&mut self) {
        self.reset_round();
        self.round_id = self.round_id.wrapping_add(1);
        self.screen = Screen::Playing;
        info!(round_id = self.round_id, "round started");
    }

    /// New secret, cleared board and scores, outcome back to in-progress
    fn reset_round(&mut self) {
        self.secret = Some(self.generator.generate());
        self.board.reset();
        self.scores.clear();
        self.outcome = Outcome::InProgress;
    }

    /// Submit the active row. Returns false if the submission was ignored.
    fn submit(&mut self) -> bool {
        let Some(secret) = self.secret else {
            return false;
        };
        let row = self.board.active_row();

        let guess = match self.board.submit_active_row() {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, "submit ignored");
                return false;
            }
        };

        let result = score(&guess, &secret);
        self.scores.push(result);
        debug!(
            row,
            exact = result.exact,
            partial = result.partial,
            none = result.none,
            "row scored"
        );

        if result.is_solved() {
            self.outcome = Outcome::Won;
            self.rounds_won = self.rounds_won.wrapping_add(1);
            info!(round_id = self.round_id, attempts = row + 1, "round won");
        } else if row == MAX_ATTEMPTS - 1 {
            self.outcome = Outcome::Lost;
            self.rounds_lost = self.rounds_lost.wrapping_add(1);
            info!(round_id = self.round_id, "round lost");
        } else {
            self.board.advance_row();
        }

        true
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.screen = self.screen;
        out.menu_selection = self.menu_selection;

        out.board = [[None; CODE_LENGTH]; MAX_ATTEMPTS];
        for (dst, row) in out.board.iter_mut().zip(self.board.rows()) {
            *dst = *row.cells();
        }
        out.row_count = self.board.rows().len() as u8;
        let (cursor_row, cursor_col) = self.board.cursor();
        out.cursor_row = cursor_row as u8;
        out.cursor_col = cursor_col as u8;

        out.scores = [None; MAX_ATTEMPTS];
        for (dst, s) in out.scores.iter_mut().zip(self.scores.iter()) {
            *dst = Some(*s);
        }

        out.outcome = self.outcome;
        out.revealed = if self.outcome.is_finished() {
            self.secret
        } else {
            None
        };
        out.round_id = self.round_id;
        out.rounds_won = self.rounds_won;
        out.rounds_lost = self.rounds_lost;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the secret of the current round (for testing)
    #[cfg(test)]
    pub(crate) fn set_secret(&mut self, secret: SecretPattern) {
        self.secret = Some(secret);
    }
}
