//! Throttled Priority Scheduler
//!
//! Serializes all upstream RugCheck calls through a single cooperative
//! worker so the rate-limited API never sees two requests at once, and
//! enforces a minimum gap between completions.
//!
//! Queue discipline:
//! - Normal requests append to the back (FIFO).
//! - Priority requests insert at the very front, so the most recently
//!   enqueued priority item is served first (LIFO among priority items).
//!   Priority items as a class always run before queued normal items.
//! - No per-key dedup: two misses for the same mint queue two items and
//!   make two upstream calls.
//!
//! The deque and the worker-active flag live behind one mutex so the
//! idle-check and flag-set happen as a single atomic step; that is what
//! preserves "at most one fetch in flight" on a multi-threaded runtime.
//! The lock is never held across an await point.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::cache::ReportCache;
use crate::config::THROTTLE_DELAY;
use crate::errors::{ClientError, ClientResult};
use crate::fetcher::ReportFetcher;
use crate::types::RiskReport;

/// Receiver half of a pending lookup. Fulfilled exactly once.
pub type PendingReport = oneshot::Receiver<ClientResult<Option<RiskReport>>>;

/// A queued lookup: the mint to fetch plus the caller's continuation.
struct QueueItem {
    mint: String,
    tx: oneshot::Sender<ClientResult<Option<RiskReport>>>,
}

struct QueueState {
    items: VecDeque<QueueItem>,
    worker_active: bool,
}

/// Single-worker scheduler draining queued lookups through the fetcher.
#[derive(Clone)]
pub struct ThrottledScheduler {
    state: Arc<Mutex<QueueState>>,
    fetcher: Arc<dyn ReportFetcher>,
    cache: ReportCache,
    throttle_delay: Duration,
}

impl ThrottledScheduler {
    pub fn new(fetcher: Arc<dyn ReportFetcher>, cache: ReportCache) -> Self {
        Self::with_throttle_delay(fetcher, cache, THROTTLE_DELAY)
    }

    pub fn with_throttle_delay(
        fetcher: Arc<dyn ReportFetcher>,
        cache: ReportCache,
        throttle_delay: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(QueueState {
                items: VecDeque::new(),
                worker_active: false,
            })),
            fetcher,
            cache,
            throttle_delay,
        }
    }

    /// Queue a lookup and return its pending result without blocking.
    ///
    /// Priority requests jump to the front of the queue; normal requests
    /// join the back. If the worker is idle it is started here, under the
    /// same lock that inserted the item.
    pub fn enqueue(&self, mint: &str, priority: bool) -> PendingReport {
        let (tx, rx) = oneshot::channel();
        let item = QueueItem {
            mint: mint.to_string(),
            tx,
        };

        let start_worker = {
            let mut state = lock_state(&self.state);
            if priority {
                state.items.push_front(item);
            } else {
                state.items.push_back(item);
            }
            info!(
                "📥 Queued {} ({}, {} pending)",
                mint,
                if priority { "priority" } else { "normal" },
                state.items.len()
            );

            if state.worker_active {
                false
            } else {
                state.worker_active = true;
                true
            }
        };

        if start_worker {
            let scheduler = self.clone();
            tokio::spawn(async move { scheduler.drain().await });
        }

        rx
    }

    /// Worker loop: pop, fetch, resolve, wait, repeat.
    ///
    /// Runs until a pop finds the queue empty; the active flag is cleared
    /// under the same lock as that pop, so a concurrent `enqueue` either
    /// sees the flag still set (item handled by this drain) or spawns a
    /// fresh worker.
    async fn drain(&self) {
        loop {
            let item = {
                let mut state = lock_state(&self.state);
                match state.items.pop_front() {
                    Some(item) => item,
                    None => {
                        state.worker_active = false;
                        return;
                    }
                }
            };

            info!("⚙️ Processing queued request for {}", item.mint);

            match self.fetcher.fetch(&item.mint).await {
                Ok(Some(report)) => {
                    // Cache only successful, non-empty results
                    self.cache.put(&item.mint, report.clone());
                    let _ = item.tx.send(Ok(Some(report)));
                }
                Ok(None) => {
                    // Upstream's "no data" convention; resolve, never cache
                    let _ = item.tx.send(Ok(None));
                }
                Err(e) => {
                    warn!("⚠️ Fetcher fault for {}: {}", item.mint, e);
                    let _ = item.tx.send(Err(ClientError::worker_fault(e.to_string())));
                }
            }

            // Minimum gap between completions, measured from here
            tokio::time::sleep(self.throttle_delay).await;
        }
    }

    /// Number of requests still waiting (excludes the one in flight).
    pub fn pending(&self) -> usize {
        lock_state(&self.state).items.len()
    }
}

/// Lock the queue state, recovering from a poisoned mutex.
///
/// A panic while holding this lock can only come from the trivial
/// push/pop sections, which leave the deque consistent, so carrying on
/// with the inner state is safe.
fn lock_state(state: &Mutex<QueueState>) -> MutexGuard<'_, QueueState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
