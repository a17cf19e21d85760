//! TUI Mastermind (workspace facade crate).
//!
//! Re-exports the member crates under `tui_mastermind::{core,input,term,types}`
//! and hosts the runtime configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_mastermind_core as core;
pub use tui_mastermind_input as input;
pub use tui_mastermind_term as term;
pub use tui_mastermind_types as types;

pub use config::AppConfig;
