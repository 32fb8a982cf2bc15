//! Outbound request rate limiting.
//!
//! The Sumo Logic API enforces a per-account request budget, so the client
//! throttles itself rather than burning round trips on requests that would be
//! rejected. Slots are issued at a fixed interval (one minute divided by the
//! budget); there is no burst allowance and no retry logic here, only delay.
//!
//! The limiter is an explicit constructor dependency of the client instead of
//! a process-global. Clients that should share one budget are handed clones
//! of the same [`Arc`].

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Default request budget per minute, matching the API's account-level limit.
pub const DEFAULT_RATE_PER_MINUTE: u32 = 240;

/// Gate that callers pass through before every network call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimit: Send + Sync {
    /// Block until the next request slot is available.
    ///
    /// Never fails; the only effect is delay.
    async fn acquire(&self);
}

/// Fixed-interval rate limiter.
///
/// Callers are assigned slots in FIFO order of arrival at the internal lock;
/// consecutive slots are spaced exactly one interval apart, so no rolling
/// one-minute window ever contains more than the configured budget.
#[derive(Debug)]
pub struct IntervalLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl IntervalLimiter {
    /// Create a limiter issuing `budget` slots per minute.
    #[must_use]
    pub fn per_minute(budget: u32) -> Self {
        Self {
            interval: Duration::from_secs(60) / budget.max(1),
            next_slot: Mutex::new(None),
        }
    }

    /// Create a shareable limiter with the given per-minute budget.
    #[must_use]
    pub fn shared(budget: u32) -> Arc<Self> {
        Arc::new(Self::per_minute(budget))
    }

    /// The spacing between consecutive slots.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl RateLimit for IntervalLimiter {
    async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };
        // The lock is only held to claim the slot; waiting happens outside it
        // so later arrivals can claim their own (later) slots concurrently.
        sleep_until(slot).await;
    }
}
