//! Request pacing: a fixed minimum gap between consecutive fetch attempts.

use std::time::{Duration, Instant};

/// Enforces `interval` between the start of one request and the next.
///
/// The first call to `wait` never sleeps. Time already spent on the previous
/// request counts toward the interval.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the interval since the previous call has elapsed, then
    /// marks now as the start of the next request. Returns the time slept.
    pub fn wait(&mut self) -> Duration {
        let slept = match self.last {
            Some(prev) => {
                let remaining = self.interval.saturating_sub(prev.elapsed());
                if !remaining.is_zero() {
                    std::thread::sleep(remaining);
                }
                remaining
            }
            None => Duration::ZERO,
        };
        self.last = Some(Instant::now());
        slept
    }
}
