//! Request Rate Limiting
//!
//! Gates outgoing requests against the Helix points-per-window quota.

use crate::config::RateLimitConfig;
use crate::error::{HelixError, Result};
use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Shared request gate enforcing a points-per-window quota.
///
/// All callers of one client share a single gate. A reservation that does
/// not fit in the current window suspends until the window rolls over;
/// nothing is ever dropped or rejected for mere exhaustion.
#[derive(Debug)]
pub struct RateLimiter {
    /// Quota ceiling per window
    max_points: u32,

    /// Length of one quota window
    window: Duration,

    /// Sleep between quota re-checks while a reservation waits
    poll_interval: Duration,

    /// Window counters, guarded as one unit
    state: Mutex<WindowState>,
}

#[derive(Debug)]
struct WindowState {
    /// Start of the current quota window
    window_start: Instant,

    /// Points consumed since `window_start`
    used_points: u32,
}

impl RateLimiter {
    /// Create a gate with a fresh window starting now
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_points: config.max_points,
            window: config.window,
            poll_interval: config.poll_interval,
            state: Mutex::new(WindowState {
                window_start: Instant::now(),
                used_points: 0,
            }),
        }
    }

    /// Reserve `cost` points, waiting out the current window if the quota
    /// is exhausted.
    ///
    /// A cost that can never fit (`cost >= max_points`) is rejected
    /// immediately with [`HelixError::CostExceedsQuota`] instead of
    /// re-blocking across every window reset.
    pub async fn reserve(&self, cost: u32) -> Result<()> {
        if cost >= self.max_points {
            return Err(HelixError::CostExceedsQuota {
                cost,
                max_points: self.max_points,
            });
        }

        let mut warned = false;

        loop {
            if self.try_reserve(cost) {
                return Ok(());
            }

            if !warned {
                tracing::warn!(
                    cost,
                    max_points = self.max_points,
                    "helix request quota reached, waiting for window reset"
                );
                warned = true;
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One check-and-increment attempt under the state lock.
    ///
    /// The lock is never held across a sleep, so concurrent reservations
    /// cannot race the read-modify-write of the counters.
    fn try_reserve(&self, cost: u32) -> bool {
        let mut state = self.state.lock();

        let now = Instant::now();
        if now > state.window_start + self.window {
            state.window_start = now;
            state.used_points = 0;
        }

        if state.used_points + cost < self.max_points {
            state.used_points += cost;
            return true;
        }

        false
    }

    /// Points consumed in the current window
    pub fn used_points(&self) -> u32 {
        self.state.lock().used_points
    }

    /// Quota ceiling per window
    pub fn max_points(&self) -> u32 {
        self.max_points
    }
}
