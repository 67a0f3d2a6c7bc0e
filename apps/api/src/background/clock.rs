use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::timer::TimerGuard;

pub const TICK_PERIOD: Duration = Duration::from_millis(100);
/// Clock time added per tick.
pub const TICK_STEP: f32 = 0.1;

/// Drives the rotating gradient. Counts ticks rather than accumulating
/// floats so `time()` never drifts. Stops when dropped.
#[derive(Debug)]
pub struct AnimationClock {
    ticks: Arc<AtomicU64>,
    _timer: TimerGuard,
}

impl AnimationClock {
    pub fn start() -> Self {
        let ticks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&ticks);
        let timer = TimerGuard::every(TICK_PERIOD, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        Self {
            ticks,
            _timer: timer,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn time(&self) -> f32 {
        self.ticks() as f32 * TICK_STEP
    }
}
