use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

const WINDOW_SECONDS: i64 = 60;

struct RequestWindow {
    count: AtomicU32,
    started_at: AtomicI64,
}

/// Per-IP fixed-window limiter for the public check endpoint.
///
/// Lock-free on the hot path; a periodic cleanup task drops windows
/// that have aged out so the map stays bounded by active clients.
pub struct RateLimiter {
    windows: DashMap<IpAddr, RequestWindow>,
    max_requests_per_minute: u32,
}

impl RateLimiter {
    pub fn new(max_requests_per_minute: u32) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests_per_minute,
        }
    }

    /// Count one request from `ip` and say whether it may proceed.
    pub fn allow(&self, ip: IpAddr, current_time: i64) -> bool {
        let entry = self.windows.entry(ip).or_insert_with(|| RequestWindow {
            count: AtomicU32::new(0),
            started_at: AtomicI64::new(current_time),
        });

        let window = entry.value();
        if current_time - window.started_at.load(Ordering::Relaxed) >= WINDOW_SECONDS {
            window.started_at.store(current_time, Ordering::Relaxed);
            window.count.store(1, Ordering::Relaxed);
            return true;
        }

        let count = window.count.fetch_add(1, Ordering::Relaxed) + 1;
        count <= self.max_requests_per_minute
    }

    pub fn cleanup_expired(&self, current_time: i64) {
        self.windows.retain(|_, window| {
            current_time - window.started_at.load(Ordering::Relaxed) < WINDOW_SECONDS
        });
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
