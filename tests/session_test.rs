//! Session integration tests with a scripted random source.

use tui_mastermind::core::{GameSession, RandomSource, SessionSignal};
use tui_mastermind::types::{
    Command, MenuOption, Outcome, Screen, ScoreRow, Symbol, CODE_LENGTH, MAX_ATTEMPTS,
};

/// Replays a fixed list of symbol indices, wrapping around.
struct ScriptedSource {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    fn new(secrets: &[[Symbol; CODE_LENGTH]]) -> Self {
        let draws = secrets
            .iter()
            .flat_map(|s| s.iter().map(|sym| sym.index() as u32))
            .collect();
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_range(&mut self, max: u32) -> u32 {
        let v = self.draws[self.next % self.draws.len()] % max;
        self.next += 1;
        v
    }
}

fn session_with(secrets: &[[Symbol; CODE_LENGTH]]) -> GameSession<ScriptedSource> {
    GameSession::with_source(ScriptedSource::new(secrets))
}

/// Commands that type `guess` into the active row and leave the cursor at column 0.
fn row_commands(guess: [Symbol; CODE_LENGTH]) -> Vec<Command> {
    let mut cmds = Vec::new();
    for symbol in guess {
        cmds.extend(std::iter::repeat(Command::CycleSymbol).take(symbol.index() + 1));
        cmds.push(Command::MoveCursorRight);
    }
    cmds.extend(std::iter::repeat(Command::MoveCursorLeft).take(CODE_LENGTH));
    cmds
}

fn submit_row<R: RandomSource>(session: &mut GameSession<R>, guess: [Symbol; CODE_LENGTH]) {
    session.update(row_commands(guess));
    session.update([Command::Confirm]);
}

use Symbol::*;

const SECRET: [Symbol; CODE_LENGTH] = [Fill, Blank, Vertical, Horizontal];
const MISS: [Symbol; CODE_LENGTH] = [Blank, Blank, Blank, Blank];

#[test]
fn session_starts_on_menu_without_a_round() {
    let session = session_with(&[SECRET]);
    assert_eq!(session.screen(), Screen::Menu);
    assert_eq!(session.menu_selection(), MenuOption::Play);
    assert_eq!(session.round_id(), 0);
    assert!(session.secret().is_none());
}

#[test]
fn end_to_end_partial_match_keeps_round_going() {
    let mut session = session_with(&[SECRET]);
    assert_eq!(session.update([Command::Confirm]), SessionSignal::Continue);
    assert_eq!(session.screen(), Screen::Playing);
    assert_eq!(session.secret().map(|s| *s.symbols()), Some(SECRET));

    submit_row(&mut session, [Fill, Vertical, Blank, Horizontal]);

    assert_eq!(session.scores(), &[ScoreRow::new(2, 2)]);
    assert_eq!(session.scores()[0].none, 0);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.board().active_row(), 1);
}

#[test]
fn solving_on_last_attempt_wins() {
    let mut session = session_with(&[SECRET]);
    session.update([Command::Confirm]);

    for _ in 0..MAX_ATTEMPTS - 1 {
        submit_row(&mut session, MISS);
    }
    assert_eq!(session.outcome(), Outcome::InProgress);
    submit_row(&mut session, SECRET);

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.rounds_won(), 1);
    assert_eq!(session.scores().len(), MAX_ATTEMPTS);
}

#[test]
fn six_misses_lose_and_reveal_the_secret() {
    let mut session = session_with(&[SECRET]);
    session.update([Command::Confirm]);

    for _ in 0..MAX_ATTEMPTS {
        submit_row(&mut session, MISS);
    }

    assert_eq!(session.outcome(), Outcome::Lost);
    assert_eq!(session.rounds_lost(), 1);
    assert_eq!(session.snapshot().revealed.map(|s| *s.symbols()), Some(SECRET));

    // Further submits are ignored.
    session.update([Command::CycleSymbol, Command::Confirm]);
    assert_eq!(session.scores().len(), MAX_ATTEMPTS);
}

#[test]
fn incomplete_row_is_not_scored() {
    let mut session = session_with(&[SECRET]);
    session.update([Command::Confirm]);
    session.update([
        Command::CycleSymbol,
        Command::MoveCursorRight,
        Command::CycleSymbol,
        Command::Confirm,
    ]);

    assert!(session.scores().is_empty());
    assert_eq!(session.board().active_row(), 0);
    assert_eq!(session.outcome(), Outcome::InProgress);
}

#[test]
fn cancel_returns_to_menu_and_next_round_uses_a_new_secret() {
    let second = [Vertical, Vertical, Fill, Blank];
    let third = [Horizontal, Fill, Fill, Vertical];
    let mut session = session_with(&[SECRET, second, third]);
    session.update([Command::Confirm]);
    submit_row(&mut session, MISS);

    session.update([Command::Cancel]);
    assert_eq!(session.screen(), Screen::Menu);
    assert!(session.scores().is_empty());
    assert_eq!(session.board().rows().len(), 1);

    session.update([Command::Confirm]);
    assert_eq!(session.round_id(), 2);
    assert_eq!(session.screen(), Screen::Playing);
    // Cancel drew `second`; starting the new round drew `third`.
    assert_eq!(session.secret().map(|s| *s.symbols()), Some(third));
}

#[test]
fn controls_screen_round_trip() {
    let mut session = session_with(&[SECRET]);
    session.update([Command::MoveDown, Command::Confirm]);
    assert_eq!(session.screen(), Screen::Controls);

    session.update([Command::Confirm, Command::CycleSymbol]);
    assert_eq!(session.screen(), Screen::Controls);

    session.update([Command::Cancel]);
    assert_eq!(session.screen(), Screen::Menu);
    assert_eq!(session.menu_selection(), MenuOption::Controls);
}

#[test]
fn exit_stops_processing_the_batch() {
    let mut session = session_with(&[SECRET]);
    let signal = session.update([
        Command::MoveDown,
        Command::MoveDown,
        Command::MoveDown,
        Command::Confirm,
        Command::MoveUp,
    ]);

    assert_eq!(signal, SessionSignal::Exit);
    assert_eq!(session.menu_selection(), MenuOption::Exit);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut a = GameSession::new(777);
    let mut b = GameSession::new(777);
    for _ in 0..5 {
        a.update([Command::Confirm, Command::Cancel]);
        b.update([Command::Confirm, Command::Cancel]);
        a.update([Command::Confirm]);
        b.update([Command::Confirm]);
        assert_eq!(a.secret(), b.secret());
        a.update([Command::Cancel]);
        b.update([Command::Cancel]);
    }
}
