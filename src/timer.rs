use std::time::{Duration, Instant};

/// A pausable stopwatch built on [`Instant`].
///
/// Elapsed time accumulates only between a `resume` and the matching `pause`,
/// so allocation and bookkeeping around the measured call stay off the clock.
#[derive(Debug, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears accumulated time and stops the clock.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running_since = None;
    }

    /// Starts (or restarts) the clock. Resuming an already-running stopwatch
    /// is a no-op.
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Stops the clock, folding the active interval into the accumulated total.
    pub fn pause(&mut self) {
        if let Some(started) = self.running_since.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Total accumulated time, including the active interval if running.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Accumulated milliseconds since the last reset.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1e3
    }
}
