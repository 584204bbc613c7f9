//! Sliding-window admission control.
//!
//! One `RateLimiter` is created at server startup and shared across every
//! session as an `Arc`; it is the only cross-session mutable state in the
//! engine. The per-key timestamp windows live behind a single mutex so
//! check-and-record is atomic even when requests for the same logical
//! session race.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ahash::AHashMap;

/// Shared handle passed into each `TypingEngine`.
pub type SharedRateLimiter = Arc<RateLimiter>;

/// Per-key sliding-window rate limiter.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    windows: Mutex<AHashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(AHashMap::new()),
        }
    }

    pub fn shared(max_requests: usize, window: Duration) -> SharedRateLimiter {
        Arc::new(Self::new(max_requests, window))
    }

    /// Atomically prune the key's window, then either record the request
    /// and admit it, or deny without recording when the window is full.
    pub fn check_and_record(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = match self.windows.lock() {
            Ok(guard) => guard,
            // A poisoned lock means a panic elsewhere; admitting nothing
            // further is the conservative answer.
            Err(_) => return false,
        };
        let entries = windows.entry(key.to_string()).or_default();
        entries.retain(|t| now.duration_since(*t) < self.window);
        if entries.len() >= self.max_requests {
            return false;
        }
        entries.push(now);
        true
    }

    /// Drop a session's window (session teardown).
    pub fn forget(&self, key: &str) {
        if let Ok(mut windows) = self.windows.lock() {
            windows.remove(key);
        }
    }

    /// Number of keys currently tracked.
    pub fn tracked_sessions(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn admits_up_to_capacity_then_denies() {
        let limiter = RateLimiter::new(10, Duration::from_secs(1));
        for _ in 0..10 {
            assert!(limiter.check_and_record("session-a"));
        }
        assert!(!limiter.check_and_record("session-a"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));
        assert!(limiter.check_and_record("a"));
        assert!(!limiter.check_and_record("a"));
        assert!(limiter.check_and_record("b"));
    }

    #[test]
    fn admits_again_after_window_elapses() {
        let limiter = RateLimiter::new(2, Duration::from_millis(50));
        assert!(limiter.check_and_record("a"));
        assert!(limiter.check_and_record("a"));
        assert!(!limiter.check_and_record("a"));
        thread::sleep(Duration::from_millis(80));
        assert!(limiter.check_and_record("a"));
    }

    #[test]
    fn denied_requests_do_not_consume_quota() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));
        assert!(limiter.check_and_record("a"));
        for _ in 0..5 {
            assert!(!limiter.check_and_record("a"));
        }
        thread::sleep(Duration::from_millis(80));
        // Only the admitted request occupied the window.
        assert!(limiter.check_and_record("a"));
    }

    #[test]
    fn forget_drops_tracking() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));
        limiter.check_and_record("a");
        assert_eq!(limiter.tracked_sessions(), 1);
        limiter.forget("a");
        assert_eq!(limiter.tracked_sessions(), 0);
        assert!(limiter.check_and_record("a"));
    }

    #[test]
    fn concurrent_checks_never_over_admit() {
        let limiter = RateLimiter::shared(10, Duration::from_secs(5));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = Arc::clone(&limiter);
            handles.push(thread::spawn(move || {
                (0..10)
                    .filter(|_| limiter.check_and_record("shared"))
                    .count()
            }));
        }
        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(admitted, 10);
    }
}
