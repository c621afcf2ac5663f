/// Most ticks a single frame will run to catch up after a stall.
pub const MAX_CATCH_UP: u64 = 8;

/// Maps wall-clock time since start to the number of ticks owed.
///
/// The schedule is `elapsed * rate`, independent of how often frames are
/// drawn. Ticks beyond `MAX_CATCH_UP` in one frame are forfeited rather
/// than run later, so a long stall does not turn into a burst.
#[derive(Debug, Clone)]
pub struct TickClock {
    rate: f64,
    forfeited: u64,
}

impl TickClock {
    pub fn new(rate: f64) -> Self {
        Self { rate, forfeited: 0 }
    }

    /// Ticks to run this frame, given `elapsed_secs` since start and `done` ticks run so far.
    pub fn due(&mut self, elapsed_secs: f64, done: u64) -> u64 {
        let target = (elapsed_secs.max(0.0) * self.rate) as u64;
        let behind = target.saturating_sub(done + self.forfeited);
        if behind > MAX_CATCH_UP {
            self.forfeited += behind - MAX_CATCH_UP;
            return MAX_CATCH_UP;
        }
        behind
    }
}
