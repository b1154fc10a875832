//! Rugwatch Library
//!
//! Rate-limited, cache-backed client for RugCheck token risk reports:
//! - TTL cache so fresh reports never hit the network twice
//! - Single-worker priority queue so the rate-limited upstream sees at
//!   most one request in flight, 500ms apart
//! - Pure score -> risk level / display color classification
//! - One-shot token verification submission

pub mod cache;
pub mod classify;
pub mod client;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod scheduler;
pub mod types;

pub use cache::{CacheStats, ReportCache};
pub use classify::{clamp_score, risk_level, risk_score_color, RiskLevel, NEUTRAL_COLOR};
pub use client::RugwatchClient;
pub use config::ClientConfig;
pub use errors::{ClientError, ClientResult, ErrorCode};
pub use fetcher::{ReportFetcher, RugcheckApi};
pub use scheduler::{PendingReport, ThrottledScheduler};
pub use types::{Risk, RiskReport, TokenMeta, TopHolder, VerifyData, VerifyResponse, VerifyTokenParams};
