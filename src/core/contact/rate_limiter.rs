//! Per-client rate limiting for form submissions
//!
//! Each client address gets its own token bucket:
//! - a bucket starts full
//! - every submission takes one token
//! - tokens trickle back at a constant rate
//! - an empty bucket rejects the submission
//!
//! ```rust
//! use trustplane::core::contact::rate_limiter::ClientRateLimiter;
//! use std::time::Duration;
//!
//! let limiter = ClientRateLimiter::new(2, Duration::from_secs(60));
//! assert!(limiter.check("203.0.113.7"));
//! assert!(limiter.check("203.0.113.7"));
//! assert!(!limiter.check("203.0.113.7"));
//! assert!(limiter.check("198.51.100.1"));
//! ```

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Submissions a client may burst
pub const DEFAULT_BURST: u32 = 5;

/// Time for an empty bucket to fill up again
pub const DEFAULT_REFILL_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Token bucket
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_tokens: u32,
    current_tokens: f64,
    /// Tokens per second
    refill_rate: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// `max_tokens` capacity, refilled completely over `refill_interval`
    pub fn new(max_tokens: u32, refill_interval: Duration) -> Self {
        let refill_rate = max_tokens as f64 / refill_interval.as_secs_f64();
        Self {
            max_tokens,
            current_tokens: max_tokens as f64,
            refill_rate,
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();

        self.current_tokens =
            (self.current_tokens + elapsed * self.refill_rate).min(self.max_tokens as f64);
        self.last_refill = now;
    }

    /// Take `tokens` if available. Returns `false` (and takes nothing)
    /// when the bucket cannot cover them.
    pub fn check_and_consume(&mut self, tokens: u32) -> bool {
        self.refill();

        if self.current_tokens >= tokens as f64 {
            self.current_tokens -= tokens as f64;
            true
        } else {
            false
        }
    }

    pub fn current_tokens(&mut self) -> u32 {
        self.refill();
        self.current_tokens as u32
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn is_full(&mut self) -> bool {
        self.refill();
        self.current_tokens >= self.max_tokens as f64
    }
}

/// One [`RateLimiter`] per client key
#[derive(Debug)]
pub struct ClientRateLimiter {
    buckets: DashMap<String, RateLimiter>,
    burst: u32,
    refill_interval: Duration,
}

impl ClientRateLimiter {
    pub fn new(burst: u32, refill_interval: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            burst,
            refill_interval,
        }
    }

    /// Take one token for `client`
    pub fn check(&self, client: &str) -> bool {
        self.buckets
            .entry(client.to_string())
            .or_insert_with(|| RateLimiter::new(self.burst, self.refill_interval))
            .check_and_consume(1)
    }

    /// Drop buckets that have refilled completely; they carry no state
    pub fn prune(&self) {
        self.buckets.retain(|_, bucket| !bucket.is_full());
    }

    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for ClientRateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_BURST, DEFAULT_REFILL_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_rate_limiter_new() {
        let mut limiter = RateLimiter::new(5, Duration::from_secs(1));
        assert_eq!(limiter.max_tokens(), 5);
        assert_eq!(limiter.current_tokens(), 5);
        assert!(limiter.is_full());
    }

    #[test]
    fn test_rate_limiter_exhaust() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(limiter.check_and_consume(1));
        }
        assert!(!limiter.check_and_consume(1));
    }

    #[test]
    fn test_rate_limiter_exceed_capacity() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert!(!limiter.check_and_consume(4));
        assert_eq!(limiter.current_tokens(), 3);
    }

    #[test]
    fn test_rate_limiter_refill() {
        let mut limiter = RateLimiter::new(10, Duration::from_secs(1));
        assert!(limiter.check_and_consume(10));

        thread::sleep(Duration::from_millis(500));

        let tokens = limiter.current_tokens();
        assert!((4..=6).contains(&tokens));
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = ClientRateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.2"));
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn test_prune_keeps_limited_clients() {
        let limiter = ClientRateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.check("10.0.0.1"));

        limiter.prune();

        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_prune_drops_refilled_clients() {
        let limiter = ClientRateLimiter::new(1, Duration::from_millis(50));
        assert!(limiter.check("10.0.0.1"));

        thread::sleep(Duration::from_millis(100));
        limiter.prune();

        assert_eq!(limiter.tracked_clients(), 0);
        assert!(limiter.check("10.0.0.1"));
    }
}
