//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and scoring.
//! It has **zero dependencies** on terminal rendering or input devices, making it:
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Testable**: Every rule is unit tested
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Board, scores and snapshots use fixed-size storage
//!
//! # Module Structure
//!
//! - [`board`]: guess rows, edit cursor and row submission
//! - [`error`]: submission errors
//! - [`rng`]: random source and secret pattern generation
//! - [`scoring`]: exact / partial / none peg counting
//! - [`session`]: screen state machine and round rules
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - The secret is 4 symbols drawn uniformly from a 4-symbol alphabet, repeats allowed
//! - Each guess row is scored with exact and partial pegs
//! - 4 exact pegs win the round; 6 rows without a win lose it
//!
//! # Example
//!
//! ```
//! use tui_mastermind_core::{GameSession, SessionSignal};
//! use tui_mastermind_types::{Command, Screen};
//!
//! // Create a session and start a round from the menu
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.update([Command::Confirm]), SessionSignal::Continue);
//! assert_eq!(session.screen(), Screen::Playing);
//!
//! // Fill the first cell and move on
//! session.update([Command::CycleSymbol, Command::MoveCursorRight]);
//! assert_eq!(session.board().cursor(), (0, 1));
//!
//! // Submitting an incomplete row is ignored
//! session.update([Command::Confirm]);
//! assert!(session.scores().is_empty());
//! ```

pub mod board;
pub mod error;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_mastermind_types as types;

// Re-export commonly used types for convenience
pub use board::{Guess, GuessBoard, GuessRow};
pub use error::SubmitError;
pub use rng::{PatternGenerator, RandomSource, SecretPattern, SimpleRng};
pub use scoring::{score, score_symbols};
pub use session::{GameSession, SessionSignal};
pub use snapshot::SessionSnapshot;
