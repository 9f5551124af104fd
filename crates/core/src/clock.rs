//! Frame clock: turns host timestamps into simulation deltas.

/// Tracks the previous frame timestamp (seconds).
///
/// The first tick only establishes the baseline and yields no delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `timestamp` and return the time since the previous tick.
    ///
    /// The delta is returned as-is, including zero or negative values from a
    /// stalled or reordered host clock; `GridSimulation::update` ignores those.
    pub fn tick(&mut self, timestamp: f64) -> Option<f64> {
        let delta = self.last.map(|last| timestamp - last);
        self.last = Some(timestamp);
        delta
    }
}
