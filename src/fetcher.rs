//! RugCheck API Client - the upstream I/O boundary
//!
//! The [`ReportFetcher`] trait is the only seam through which the
//! scheduler performs I/O; tests inject fakes, production injects
//! [`RugcheckApi`].
//!
//! Upstream contract: transport errors, non-2xx responses, and malformed
//! bodies are all converted to `Ok(None)` ("no usable data") inside this
//! client. They never propagate as errors. An `Err` crossing this
//! boundary means a broken fetcher implementation and is treated by the
//! scheduler as an orchestration fault.
//!
//! API: GET {base}/tokens/{mint}/report
//! Free tier, rate limited upstream - hence the throttled scheduler.

use async_trait::async_trait;
use eyre::Result;
use tracing::{error, info, warn};

use crate::config::ClientConfig;
use crate::types::{RiskReport, VerifyResponse, VerifyTokenParams};

/// The injected upstream dependency of the scheduler.
#[async_trait]
pub trait ReportFetcher: Send + Sync {
    /// Fetch the risk report for a mint.
    ///
    /// `Ok(None)` means "upstream has no usable data" (including any
    /// transport/HTTP failure). `Err` is reserved for fetcher
    /// implementations that violate the null-on-error convention.
    async fn fetch(&self, mint: &str) -> Result<Option<RiskReport>>;
}

/// HTTP client for the RugCheck API.
pub struct RugcheckApi {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: std::time::Duration,
}

impl RugcheckApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.http_timeout,
        }
    }

    /// Raw report fetch. Every failure path collapses to `None`.
    pub async fn fetch_report(&self, mint: &str) -> Option<RiskReport> {
        let url = format!("{}/tokens/{}/report", self.base_url, mint);

        info!("🔍 RugCheck: Fetching risk report for {}", mint);

        let response = match self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("⚠️ RugCheck request failed for {}: {}", mint, e);
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!("❌ RugCheck API error for {}: {} {}", mint, status, detail);
            return None;
        }

        match response.json::<RiskReport>().await {
            Ok(report) => {
                info!("📊 RugCheck: Got report for {} (score: {:.1})", mint, report.score_normalised);
                Some(report)
            }
            Err(e) => {
                warn!("⚠️ RugCheck: Malformed report body for {}: {}", mint, e);
                None
            }
        }
    }

    /// Submit a token for verification.
    ///
    /// One-shot call, independent of the cache/queue and not throttled.
    /// Rejected locally, with no network call, unless all required fields
    /// are present and both acceptance flags are true.
    pub async fn verify_token(&self, params: &VerifyTokenParams) -> Option<VerifyResponse> {
        if params.mint.is_empty() || params.payer.is_empty() || params.signature.is_empty() {
            error!("❌ RugCheck: Missing required verification parameters");
            return None;
        }

        if !params.data.data_integrity_accepted || !params.data.terms_accepted {
            error!("❌ RugCheck: Terms not accepted for verification of {}", params.mint);
            return None;
        }

        let url = format!("{}/tokens/verify", self.base_url);

        info!("📝 RugCheck: Submitting {} for verification", params.mint);

        let response = match self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .json(params)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("⚠️ RugCheck verification request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            error!("❌ RugCheck verification API error: {} {}", status, detail);
            return None;
        }

        match response.json::<VerifyResponse>().await {
            Ok(result) => {
                info!("✅ RugCheck: Verification submitted for {} (ok: {})", params.mint, result.ok);
                Some(result)
            }
            Err(e) => {
                warn!("⚠️ RugCheck: Malformed verification response: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl ReportFetcher for RugcheckApi {
    async fn fetch(&self, mint: &str) -> Result<Option<RiskReport>> {
        Ok(self.fetch_report(mint).await)
    }
}
