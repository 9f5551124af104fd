//! Redraw gating for the terminal loop.
//!
//! A frame is worth flushing when the simulation advanced, the terminal changed
//! size, or the pause overlay toggled. While nothing changes (paused scene) the
//! gate still lets one frame through per idle interval so a garbled terminal heals.

use crate::scene_view::Viewport;

/// What a rendered frame depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameKey {
    pub version: u64,
    pub viewport: Viewport,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub struct RedrawGate {
    idle_interval_ms: u64,
    last_key: Option<FrameKey>,
    last_draw_ms: u64,
}

impl RedrawGate {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_key: None,
            last_draw_ms: 0,
        }
    }

    /// Decide whether to draw at `now_ms`; records the draw when it says yes.
    pub fn should_redraw(&mut self, now_ms: u64, key: FrameKey) -> bool {
        let changed = self.last_key != Some(key);
        let idle_elapsed = now_ms.saturating_sub(self.last_draw_ms) >= self.idle_interval_ms;
        if !changed && !idle_elapsed {
            return false;
        }
        self.last_key = Some(key);
        self.last_draw_ms = now_ms;
        true
    }

    /// Force the next call to draw.
    pub fn invalidate(&mut self) {
        self.last_key = None;
    }
}
