//! Integration tests for the rugwatch client
//!
//! Drives the public API end to end with fake fetchers: cache hits,
//! queue ordering, throttle spacing, and the upstream null-on-error
//! contract.

use async_trait::async_trait;
use eyre::Result;
use rugwatch::{
    ClientConfig, ReportCache, ReportFetcher, RiskReport, RugcheckApi, RugwatchClient,
    ThrottledScheduler, VerifyData, VerifyTokenParams,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn report(mint: &str, score: f64) -> RiskReport {
    RiskReport {
        score: score * 10.0,
        score_normalised: score,
        risks: vec![],
        rugged: false,
        mint: mint.to_string(),
        token_meta: None,
        top_holders: None,
        total_holders: None,
        total_market_liquidity: None,
    }
}

/// Fake upstream that records call order and rejects overlapping calls.
struct FakeUpstream {
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    /// Mints that resolve to "no data"
    empty_mints: Vec<String>,
}

impl FakeUpstream {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            empty_mints: vec![],
        }
    }

    fn with_empty(mints: &[&str]) -> Self {
        let mut upstream = Self::new();
        upstream.empty_mints = mints.iter().map(|m| m.to_string()).collect();
        upstream
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn call_order(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportFetcher for FakeUpstream {
    async fn fetch(&self, mint: &str) -> Result<Option<RiskReport>> {
        let previous = self.in_flight.fetch_add(1, Ordering::SeqCst);
        assert_eq!(previous, 0, "two fetches in flight at once");

        self.calls.lock().unwrap().push(mint.to_string());
        tokio::time::sleep(Duration::from_millis(30)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.empty_mints.iter().any(|m| m == mint) {
            Ok(None)
        } else {
            Ok(Some(report(mint, 42.0)))
        }
    }
}

fn client_with(upstream: Arc<FakeUpstream>) -> RugwatchClient {
    RugwatchClient::with_fetcher(
        upstream,
        Duration::from_secs(3600),
        Duration::from_millis(500),
    )
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_miss_then_cached_hit() {
    let upstream = Arc::new(FakeUpstream::new());
    let client = client_with(upstream.clone());

    let first = client.get_report("MINT_A", false).await.unwrap();
    let first = first.expect("report expected");
    assert_eq!(first.score_normalised, 42.0);
    assert!(!first.rugged);
    assert!(first.risks.is_empty());

    // Second call resolves from cache; upstream still at one call
    let second = client.get_report("MINT_A", false).await.unwrap();
    assert_eq!(second.unwrap().mint, "MINT_A");
    assert_eq!(upstream.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_no_data_is_not_cached_and_refetches() {
    let upstream = Arc::new(FakeUpstream::with_empty(&["GHOST"]));
    let client = client_with(upstream.clone());

    assert!(client.get_report("GHOST", false).await.unwrap().is_none());
    assert!(client.get_report("GHOST", false).await.unwrap().is_none());

    // Both calls went upstream: absence is never cached
    assert_eq!(upstream.call_count(), 2);
    assert_eq!(client.cache_stats().entries, 0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_misses_are_serialized() {
    let upstream = Arc::new(FakeUpstream::new());
    let client = Arc::new(client_with(upstream.clone()));

    let mut handles = Vec::new();
    for i in 0..5 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.get_report(&format!("MINT_{}", i), false).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }

    // FakeUpstream::fetch asserts no overlap; all five made it through
    assert_eq!(upstream.call_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_same_key_concurrent_misses_fetch_twice() {
    // No per-key dedup: two pending misses for one mint mean two calls
    let upstream = Arc::new(FakeUpstream::new());
    let client = Arc::new(client_with(upstream.clone()));

    let a = {
        let client = client.clone();
        tokio::spawn(async move { client.get_report("MINT_A", false).await })
    };
    let b = {
        let client = client.clone();
        tokio::spawn(async move { client.get_report("MINT_A", false).await })
    };

    assert!(a.await.unwrap().unwrap().is_some());
    assert!(b.await.unwrap().unwrap().is_some());
    assert_eq!(upstream.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_priority_request_served_before_queued_normals() {
    let upstream = Arc::new(FakeUpstream::new());
    let cache = ReportCache::new();
    let scheduler = ThrottledScheduler::with_throttle_delay(
        upstream.clone(),
        cache,
        Duration::from_millis(500),
    );

    // All three land in the queue before the worker task first runs
    // (enqueue never blocks); P1 then jumps to the front.
    let n1 = scheduler.enqueue("N1", false);
    let n2 = scheduler.enqueue("N2", false);
    let p1 = scheduler.enqueue("P1", true);

    let (r1, r2, r3) = tokio::join!(n1, n2, p1);
    assert!(r1.unwrap().is_ok());
    assert!(r2.unwrap().is_ok());
    assert!(r3.unwrap().is_ok());

    assert_eq!(upstream.call_order(), vec!["P1", "N1", "N2"]);
}

#[tokio::test]
async fn test_verification_rejected_locally_without_network() {
    // TEST-NET-1 address: a real request would stall well past this
    // test's runtime, so an instant None proves no call was attempted.
    let config = ClientConfig::default().with_base_url("http://192.0.2.1:9");
    let api = RugcheckApi::new(&config);

    let params = VerifyTokenParams {
        mint: "MINT_A".to_string(),
        payer: "payer".to_string(),
        signature: "sig".to_string(),
        data: VerifyData {
            description: "test token".to_string(),
            data_integrity_accepted: false,
            terms_accepted: true,
            sol_domain: None,
            links: None,
        },
    };

    let start = std::time::Instant::now();
    assert!(api.verify_token(&params).await.is_none());
    assert!(start.elapsed() < Duration::from_millis(200));
}
