//! Key events flowing through the batch into a session, as the binary does it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_mastermind::core::{GameSession, SessionSignal};
use tui_mastermind::input::{handle_key_event, should_quit, CommandBatch};
use tui_mastermind::types::{Screen, Symbol};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn tick(session: &mut GameSession, batch: &mut CommandBatch, keys: &[KeyEvent]) -> SessionSignal {
    for key in keys {
        if let Some(cmd) = handle_key_event(*key) {
            batch.push(cmd);
        }
    }
    session.update(batch.drain())
}

#[test]
fn repeated_key_in_one_tick_counts_once() {
    let mut session = GameSession::new(9);
    let mut batch = CommandBatch::new();

    tick(&mut session, &mut batch, &[press(KeyCode::Enter)]);
    assert_eq!(session.screen(), Screen::Playing);

    tick(
        &mut session,
        &mut batch,
        &[press(KeyCode::Char(' ')), press(KeyCode::Char(' ')), press(KeyCode::Char('c'))],
    );
    assert_eq!(session.board().active().cells()[0], Some(Symbol::Blank));

    // Next tick cycles again.
    tick(&mut session, &mut batch, &[press(KeyCode::Char(' '))]);
    assert_eq!(session.board().active().cells()[0], Some(Symbol::Vertical));
}

#[test]
fn released_keys_do_nothing() {
    let mut session = GameSession::new(9);
    let mut batch = CommandBatch::new();

    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    tick(&mut session, &mut batch, &[release]);
    assert_eq!(session.screen(), Screen::Menu);
}

#[test]
fn menu_exit_via_keys() {
    let mut session = GameSession::new(9);
    let mut batch = CommandBatch::new();

    // Down repeated within one tick only moves once.
    tick(&mut session, &mut batch, &[press(KeyCode::Down), press(KeyCode::Down)]);
    tick(&mut session, &mut batch, &[press(KeyCode::Char('j'))]);
    let signal = tick(&mut session, &mut batch, &[press(KeyCode::Enter)]);
    assert_eq!(signal, SessionSignal::Exit);
}

#[test]
fn quit_keys_bypass_the_session() {
    assert!(should_quit(press(KeyCode::Char('q'))));
    assert_eq!(handle_key_event(press(KeyCode::Char('q'))), None);
}
