use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Lock-free counters for the verification surface
pub struct MetricsCollector {
    checks_total: AtomicU64,
    checks_matched: AtomicU64,
    checks_unmatched: AtomicU64,
    checks_malformed: AtomicU64,
    requests_blocked: AtomicU64,
    start_time: Instant,
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_seconds: u64,
    pub checks_total: u64,
    pub checks_matched: u64,
    pub checks_unmatched: u64,
    pub checks_malformed: u64,
    pub requests_blocked: u64,
    pub match_rate: f64,
    pub requests_per_second: f64,
    pub roster_members: usize,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            checks_total: AtomicU64::new(0),
            checks_matched: AtomicU64::new(0),
            checks_unmatched: AtomicU64::new(0),
            checks_malformed: AtomicU64::new(0),
            requests_blocked: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_matched(&self) {
        self.checks_total.fetch_add(1, Ordering::Relaxed);
        self.checks_matched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmatched(&self) {
        self.checks_total.fetch_add(1, Ordering::Relaxed);
        self.checks_unmatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed(&self) {
        self.checks_total.fetch_add(1, Ordering::Relaxed);
        self.checks_malformed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blocked(&self) {
        self.requests_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self, roster_members: usize) -> MetricsSnapshot {
        let total = self.checks_total.load(Ordering::Relaxed);
        let matched = self.checks_matched.load(Ordering::Relaxed);
        let uptime = self.start_time.elapsed().as_secs();

        MetricsSnapshot {
            uptime_seconds: uptime,
            checks_total: total,
            checks_matched: matched,
            checks_unmatched: self.checks_unmatched.load(Ordering::Relaxed),
            checks_malformed: self.checks_malformed.load(Ordering::Relaxed),
            requests_blocked: self.requests_blocked.load(Ordering::Relaxed),
            match_rate: if total > 0 {
                matched as f64 / total as f64
            } else {
                0.0
            },
            requests_per_second: if uptime > 0 {
                total as f64 / uptime as f64
            } else {
                0.0
            },
            roster_members,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = MetricsCollector::new();
        metrics.record_matched();
        metrics.record_matched();
        metrics.record_unmatched();
        metrics.record_malformed();
        metrics.record_blocked();

        let snapshot = metrics.get_snapshot(42);
        assert_eq!(snapshot.checks_total, 4);
        assert_eq!(snapshot.checks_matched, 2);
        assert_eq!(snapshot.checks_unmatched, 1);
        assert_eq!(snapshot.checks_malformed, 1);
        assert_eq!(snapshot.requests_blocked, 1);
        assert_eq!(snapshot.roster_members, 42);
        assert!((snapshot.match_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_snapshot_has_no_nan_rates() {
        let snapshot = MetricsCollector::new().get_snapshot(0);
        assert_eq!(snapshot.checks_total, 0);
        assert_eq!(snapshot.match_rate, 0.0);
        assert_eq!(snapshot.requests_per_second, 0.0);
    }

    #[test]
    fn test_blocked_requests_do_not_count_as_checks() {
        let metrics = MetricsCollector::new();
        metrics.record_blocked();
        let snapshot = metrics.get_snapshot(0);
        assert_eq!(snapshot.checks_total, 0);
        assert_eq!(snapshot.requests_blocked, 1);
    }
}
