//! Terminal front end for the Mastermind session.
//!
//! Renders `core::SessionSnapshot` into a plain framebuffer of styled cells and
//! flushes it to the terminal with crossterm. No widget toolkit is involved;
//! layout is fixed to the logical screen size from `types`.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_mastermind_core as core;
pub use tui_mastermind_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{symbol_glyph, AnchorY, GameView, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TITLE};
