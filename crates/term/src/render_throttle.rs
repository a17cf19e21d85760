//! Frame pacing for a mostly idle screen.
//!
//! Mastermind only changes in response to input, so most ticks would redraw an
//! identical frame. The throttle redraws as soon as the visible state changes
//! and otherwise refreshes at a slow keep-alive rate.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::SessionSnapshot;
use crate::game_view::Viewport;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_idle_interval_ms: u64) -> Self {
        Self {
            min_idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately on the first call and on fingerprint change,
    /// otherwise at most once per `min_idle_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_idle_interval_ms;
        if !(changed || stale) {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Make the next `should_render` call return true.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

/// Hash of everything that affects the rendered frame.
pub fn fingerprint(snap: &SessionSnapshot, viewport: Viewport) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    viewport.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;
    use crate::types::Command;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(5, 7));
        t.invalidate();
        assert!(t.should_render(6, 7));
        assert!(!t.should_render(7, 7));
    }

    #[test]
    fn fingerprint_tracks_visible_state() {
        let mut session = GameSession::new(3);
        let vp = Viewport::new(80, 24);
        let before = fingerprint(&session.snapshot(), vp);
        assert_eq!(before, fingerprint(&session.snapshot(), vp));

        session.update([Command::MoveDown]);
        assert_ne!(before, fingerprint(&session.snapshot(), vp));
        assert_ne!(
            fingerprint(&session.snapshot(), vp),
            fingerprint(&session.snapshot(), Viewport::new(81, 24))
        );
    }
}
