//! Render-on-change gate.
//!
//! The charades screens only change when the app state changes, so frames are
//! drawn when the state revision moves, plus a slow heartbeat repaint.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat_ms: u64,
    last_render_ms: u64,
    last_revision: Option<u64>,
}

impl RenderThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last_render_ms: 0,
            last_revision: None,
        }
    }

    /// Decide whether to draw a frame at `now_ms` for state `revision`.
    ///
    /// Always true for the first frame and whenever `revision` differs from
    /// the last drawn one; otherwise true at most once per heartbeat.
    pub fn should_render(&mut self, now_ms: u64, revision: u64) -> bool {
        let changed = self.last_revision != Some(revision);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.heartbeat_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_revision = Some(revision);
            return true;
        }
        false
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.last_revision = None;
    }
}
