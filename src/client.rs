//! Query Facade
//!
//! [`RugwatchClient`] is the one entry point callers use: cache hit
//! returns immediately, cache miss goes through the throttled scheduler.
//! Each client instance owns its own cache and queue; construct one per
//! app session and share it via `Arc` instead of relying on globals.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheStats, ReportCache};
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::fetcher::{ReportFetcher, RugcheckApi};
use crate::scheduler::ThrottledScheduler;
use crate::types::RiskReport;

/// Cache-backed, rate-limited risk report client.
pub struct RugwatchClient {
    cache: ReportCache,
    scheduler: ThrottledScheduler,
}

impl RugwatchClient {
    /// Production client talking to the RugCheck API.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_fetcher(Arc::new(RugcheckApi::new(config)), config.ttl, config.throttle_delay)
    }

    /// Client with an injected fetcher (tests use fakes here).
    pub fn with_fetcher(
        fetcher: Arc<dyn ReportFetcher>,
        ttl: Duration,
        throttle_delay: Duration,
    ) -> Self {
        let cache = ReportCache::with_ttl(ttl);
        let scheduler = ThrottledScheduler::with_throttle_delay(fetcher, cache.clone(), throttle_delay);
        Self { cache, scheduler }
    }

    /// Get the risk report for a mint, from cache when fresh.
    ///
    /// A fresh cache hit never touches the scheduler, no matter how many
    /// requests are queued. A miss enqueues exactly one upstream lookup
    /// (no per-key dedup) and waits for the worker to process it.
    ///
    /// `Ok(None)` means upstream has no usable data for this mint; the
    /// caller may retry later by calling again, which re-enters the queue
    /// since empty results are never cached.
    pub async fn get_report(&self, mint: &str, priority: bool) -> ClientResult<Option<RiskReport>> {
        if let Some(report) = self.cache.get(mint) {
            return Ok(Some(report));
        }

        debug!("🔁 Cache miss for {}, queueing fetch", mint);

        self.scheduler
            .enqueue(mint, priority)
            .await
            .unwrap_or_else(|_| Err(ClientError::queue_closed(mint)))
    }

    /// Cache statistics for monitoring.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Requests waiting in the queue (excludes the one in flight).
    pub fn pending_requests(&self) -> usize {
        self.scheduler.pending()
    }
}
