//! Bounded retry with deterministic exponential backoff.

use crate::scrape::error::ScrapeError;
use log::warn;
use std::thread;
use std::time::Duration;

/// Wraps a fetch-and-parse attempt with a fixed retry budget.
///
/// The delay after failed zero-indexed attempt `k` is `backoff · 2ᵏ`; with the
/// default one-second base that gives 1 s then 2 s between the three attempts.
/// There is no delay before the first attempt and none after the last failure.
///
/// Exhausting the budget is a valid, non-fatal outcome: [`RetryPolicy::run`]
/// returns the value type's empty sentinel instead of an error, so a dead
/// page costs the caller nothing but a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: usize,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

impl RetryPolicy {
    /// `attempts` is the total budget, first try included. `backoff` is the
    /// base delay doubled after each further failure; tests pass milliseconds
    /// here to keep the suite fast.
    pub fn new(attempts: usize, backoff: Duration) -> Self {
        Self { attempts, backoff }
    }

    /// Delay slept after failed zero-indexed attempt `attempt`, if another
    /// attempt remains.
    pub fn delay_after(&self, attempt: usize) -> Duration {
        self.backoff * 2u32.pow(attempt as u32)
    }

    /// Runs `attempt_fn` up to the attempt budget, sleeping the backoff delay
    /// between failures. Returns the first success, or `T::default()` once
    /// the budget is exhausted.
    pub fn run<T, F>(&self, label: &str, mut attempt_fn: F) -> T
    where
        T: Default,
        F: FnMut() -> Result<T, ScrapeError>,
    {
        for attempt in 0..self.attempts {
            match attempt_fn() {
                Ok(value) => return value,
                Err(err) => {
                    warn!("attempt {} of {} failed for {label}: {err}", attempt + 1, self.attempts);
                    if attempt + 1 < self.attempts {
                        let delay = self.delay_after(attempt);
                        warn!("retrying {label} in {delay:?}");
                        thread::sleep(delay);
                    }
                }
            }
        }
        warn!("exceeded retry budget for {label}, treating as empty");
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::error::ScrapeError;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(1))
    }

    #[test]
    fn test_default_delay_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(0), Duration::from_secs(1));
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
    }

    #[test]
    fn test_success_short_circuits() {
        let mut calls = 0;
        let result: u32 = fast_policy().run("page", || {
            calls += 1;
            Ok(7)
        });
        assert_eq!(result, 7);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_two_failures_then_success() {
        let mut calls = 0;
        let result: u32 = fast_policy().run("page", || {
            calls += 1;
            if calls < 3 {
                Err(ScrapeError::Parse("bad value".into()))
            } else {
                Ok(42)
            }
        });
        assert_eq!(result, 42);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_exhaustion_returns_empty_sentinel() {
        let mut calls = 0;
        let result: Vec<u32> = fast_policy().run("page", || {
            calls += 1;
            Err(ScrapeError::Parse("always".into()))
        });
        assert_eq!(calls, 3);
        assert_eq!(result, Vec::<u32>::default());
    }
}
