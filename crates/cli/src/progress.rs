//! Search observer: structured progress logging and wall-clock limit.

use std::time::{Duration, Instant};

use barter::api::{BestResult, Observer};

/// Nodes between two clock reads.
const CLOCK_STRIDE: u32 = 4096;

pub struct Progress {
    deadline: Option<Instant>,
    ticks: u32,
    expired: bool,
}

impl Progress {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            deadline: time_limit.map(|d| Instant::now() + d),
            ticks: 0,
            expired: false,
        }
    }
}

impl Observer for Progress {
    fn on_best(&mut self, best: &BestResult) {
        tracing::info!(
            count = best.count,
            moves = best.state.moves(),
            mask = %best.mask(),
            state = %best.state,
            "new best"
        );
    }

    fn should_stop(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if !self.expired {
            self.ticks += 1;
            if self.ticks >= CLOCK_STRIDE {
                self.ticks = 0;
                if Instant::now() >= deadline {
                    tracing::warn!("time limit reached, unwinding");
                    self.expired = true;
                }
            }
        }
        self.expired
    }
}
