// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::MetricsCollector;
use crate::roster::cache::RosterCache;
use crate::security::rate_limiter::RateLimiter;
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components accessed by request handlers. All
/// fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// Current roster, swapped atomically on reload
    pub roster: Arc<RosterCache>,

    /// Rate limiter for the public check endpoint
    pub rate_limiter: Arc<RateLimiter>,

    /// Metrics collector for tracking statistics
    pub metrics: Arc<MetricsCollector>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, roster: RosterCache) -> Self {
        let config = Arc::new(config);
        let rate_limiter = Arc::new(RateLimiter::new(config.performance.max_requests_per_minute));

        Self {
            roster: Arc::new(roster),
            rate_limiter,
            metrics: Arc::new(MetricsCollector::new()),
            config,
        }
    }
}
