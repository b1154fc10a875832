//! RugCheck API data model
//!
//! Wire types for the `/tokens/{mint}/report` and `/tokens/verify`
//! endpoints. The cache and scheduler treat `RiskReport` as an opaque
//! payload; only the classification layer looks inside.
//!
//! Field naming follows the upstream JSON exactly: most fields are
//! camelCase but `score_normalised` is snake_case, so renames are
//! per-field instead of a blanket `rename_all`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full risk report for a token mint, as returned by RugCheck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Raw (unnormalised) risk score
    #[serde(default)]
    pub score: f64,
    /// Normalised risk score in [0, 100]
    #[serde(rename = "score_normalised", default)]
    pub score_normalised: f64,
    /// Individual risk findings, ordered by severity upstream
    #[serde(default)]
    pub risks: Vec<Risk>,
    /// True when the token has been flagged as rugged; overrides
    /// category display regardless of score
    #[serde(default)]
    pub rugged: bool,
    /// Token mint address this report describes
    #[serde(default)]
    pub mint: String,
    /// Token name/symbol metadata, when known upstream
    #[serde(rename = "tokenMeta", default, skip_serializing_if = "Option::is_none")]
    pub token_meta: Option<TokenMeta>,
    /// Largest holders with ownership percentages
    #[serde(rename = "topHolders", default, skip_serializing_if = "Option::is_none")]
    pub top_holders: Option<Vec<TopHolder>>,
    #[serde(rename = "totalHolders", default, skip_serializing_if = "Option::is_none")]
    pub total_holders: Option<u64>,
    #[serde(
        rename = "totalMarketLiquidity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_market_liquidity: Option<f64>,
}

/// A single risk finding inside a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Severity label as reported upstream ("warn", "danger", ...)
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub value: String,
}

/// Token name/symbol metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Holder-distribution entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHolder {
    pub address: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub insider: bool,
    #[serde(default)]
    pub owner: String,
    /// Percentage of supply held
    #[serde(default)]
    pub pct: f64,
    #[serde(default)]
    pub ui_amount: f64,
    #[serde(default)]
    pub ui_amount_string: String,
}

/// Parameters for submitting a token for verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyTokenParams {
    /// Token mint address
    pub mint: String,
    /// Wallet address paying for verification
    pub payer: String,
    /// Signature from the payer wallet
    pub signature: String,
    pub data: VerifyData,
}

/// User-supplied verification payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyData {
    pub description: String,
    /// Must be true or the submission is rejected locally
    pub data_integrity_accepted: bool,
    /// Must be true or the submission is rejected locally
    pub terms_accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sol_domain: Option<String>,
    /// Social links, websites, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
}

/// Response from the verification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub ok: bool,
}
