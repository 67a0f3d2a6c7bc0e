#![allow(dead_code)]

//! Scoped timers. A `TimerGuard` owns the tokio task driving a callback and
//! aborts it when dropped, so a callback can never outlive its owner.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant};

#[derive(Debug)]
pub struct TimerGuard {
    handle: JoinHandle<()>,
}

impl TimerGuard {
    /// Runs `callback` once, `delay` after this call.
    pub fn after<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        // Deadline is fixed here, not when the task is first polled.
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            callback();
        });
        Self { handle }
    }

    /// Runs `callback` every `period`, first firing one period from now.
    pub fn every<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut ticks = interval_at(Instant::now() + period, period);
        let handle = tokio::spawn(async move {
            loop {
                ticks.tick().await;
                callback();
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
