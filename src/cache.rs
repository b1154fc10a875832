//! In-Memory Report Cache
//!
//! Thread-safe TTL cache for fetched risk reports. Uses DashMap for
//! concurrent access without lock contention.
//!
//! Semantics:
//! - Entries are written only for successful fetches; "no data" results
//!   are never stored.
//! - A stale entry reads as a miss but is NOT evicted; the next
//!   successful `put` simply overwrites it.
//! - No capacity bound. The key space is the set of mints the caller
//!   tracks, which is small and caller-bounded, so TTL-on-read is enough.
//!
//! Mint addresses are case-sensitive base58, so keys are stored verbatim
//! with no normalization.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::CACHE_TTL;
use crate::types::RiskReport;

/// Cache entry with timestamp for TTL validation
#[derive(Clone, Debug)]
struct CacheEntry {
    report: RiskReport,
    fetched_at: Instant,
}

impl CacheEntry {
    fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// TTL cache mapping mint address -> risk report.
#[derive(Clone)]
pub struct ReportCache {
    store: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportCache {
    /// Create a cache with the default 1-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Create a cache with a custom TTL (tests use short ones).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            ttl,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a report if present and still fresh.
    ///
    /// Stale entries return None but stay in the map; a later `put`
    /// overwrites them.
    pub fn get(&self, mint: &str) -> Option<RiskReport> {
        match self.store.get(mint).map(|entry| (entry.age(), entry)) {
            Some((age, entry)) if age < self.ttl => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                let remaining = self.ttl - age;
                info!("✅ CACHE HIT: {} (fresh for {}s)", mint, remaining.as_secs());
                Some(entry.report.clone())
            }
            Some(_) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("📭 CACHE MISS (stale): {}", mint);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("📭 CACHE MISS: {}", mint);
                None
            }
        }
    }

    /// Store/overwrite the report for a mint with the current timestamp.
    pub fn put(&self, mint: &str, report: RiskReport) {
        let entry = CacheEntry {
            report,
            fetched_at: Instant::now(),
        };
        self.store.insert(mint.to_string(), entry);
        info!("💾 CACHE SET: {} (TTL: {}s)", mint, self.ttl.as_secs());
    }

    /// Get cache statistics.
    ///
    /// `entries` counts stale entries too, since nothing evicts them.
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            entries: self.store.len(),
            hits,
            misses,
            hit_rate,
        }
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_report(score: f64) -> RiskReport {
        RiskReport {
            score: score * 10.0,
            score_normalised: score,
            risks: vec![],
            rugged: false,
            mint: "So11111111111111111111111111111111111111112".to_string(),
            token_meta: None,
            top_holders: None,
            total_holders: None,
            total_market_liquidity: None,
        }
    }

    #[test]
    fn test_put_then_get_fresh() {
        let cache = ReportCache::new();
        cache.put("MINT_A", mock_report(42.0));

        let report = cache.get("MINT_A");
        assert!(report.is_some());
        assert_eq!(report.unwrap().score_normalised, 42.0);
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache = ReportCache::new();
        assert!(cache.get("MINT_UNKNOWN").is_none());
    }

    #[test]
    fn test_stale_entry_reads_as_miss_but_stays() {
        let cache = ReportCache::with_ttl(Duration::ZERO);
        cache.put("MINT_A", mock_report(10.0));

        // TTL of zero means the entry is stale on the very next read
        assert!(cache.get("MINT_A").is_none());
        // Not evicted: still counted in entries
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_put_overwrites_stale_entry() {
        let cache = ReportCache::with_ttl(Duration::from_secs(60));
        cache.put("MINT_A", mock_report(10.0));
        cache.put("MINT_A", mock_report(90.0));

        let report = cache.get("MINT_A").unwrap();
        assert_eq!(report.score_normalised, 90.0);
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let cache = ReportCache::new();
        cache.put("MintA", mock_report(5.0));
        assert!(cache.get("minta").is_none());
        assert!(cache.get("MintA").is_some());
    }

    #[test]
    fn test_stats_counts() {
        let cache = ReportCache::new();
        cache.put("MINT_A", mock_report(1.0));
        cache.get("MINT_A"); // HIT
        cache.get("MINT_B"); // MISS

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 50.0);
    }
}
