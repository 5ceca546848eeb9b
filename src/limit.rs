//! Fixed-window rate limiting keyed by caller IP and action name.
//!
//! Counters are in-process only and reset when the window lapses; nothing
//! survives a restart. The gate runs before any downstream work.
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct Window {
    started: Instant,
    count: u32,
}

pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    buckets: Mutex<HashMap<(IpAddr, &'static str), Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject one request for `(ip, action)`.
    ///
    /// `Err` carries the time remaining in the current window, suitable for a
    /// `Retry-After` header.
    pub async fn check(&self, ip: IpAddr, action: &'static str) -> Result<(), Duration> {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;
        let window = buckets
            .entry((ip, action))
            .or_insert(Window { started: now, count: 0 });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count >= self.max_requests {
            let retry_after = self.window - now.duration_since(window.started);
            return Err(retry_after);
        }

        window.count += 1;
        Ok(())
    }
}
