use std::time::{Duration, Instant};

/// Paces the simulation: one game frame per elapsed tick interval,
/// independent of how often the window redraws
pub struct Control {
    tick: Duration,
    last_update: Instant,
    // game frames performed since the last call to `play`
    game_frame_num: usize,
}

impl Control {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            last_update: Instant::now(),
            game_frame_num: 0,
        }
    }

    pub fn game_frame_num(&self) -> usize {
        self.game_frame_num
    }

    /// Called once per graphics frame, at most one game frame is
    /// granted per call so a stalled window never causes a burst
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    fn can_update_at(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update);
        if elapsed < self.tick {
            return false;
        }

        // keep the cadence when slightly late, re-anchor
        // when more than a whole tick was missed
        self.last_update = if elapsed < self.tick * 2 {
            self.last_update + self.tick
        } else {
            now
        };
        self.game_frame_num += 1;
        true
    }

    /// The first game frame happens a full tick after this call
    pub fn play(&mut self) {
        self.play_at(Instant::now())
    }

    fn play_at(&mut self, now: Instant) {
        self.last_update = now;
        self.game_frame_num = 0;
    }
}
