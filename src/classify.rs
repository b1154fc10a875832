//! Risk Classification Module
//!
//! Pure mappings from a normalised score (0-100) to a risk category and
//! display color. No state, no I/O; safe to call from any context.
//!
//! Thresholds match the upstream scoring convention:
//! - 0-29:  low
//! - 30-59: medium
//! - 60-79: high
//! - 80+:   critical
//!
//! Boundary values belong to the higher bucket (30 is medium, not low).

use serde::{Deserialize, Serialize};

/// Risk category derived from the normalised score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Display color (hex) for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",      // green
            Self::Medium => "#FFC107",   // yellow
            Self::High => "#FF9800",     // orange
            Self::Critical => "#F44336", // red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Neutral color used when no category applies (e.g. no report yet).
pub const NEUTRAL_COLOR: &str = "#999999";

/// Map a normalised score to its risk category.
pub fn risk_level(score_normalised: f64) -> RiskLevel {
    if score_normalised < 30.0 {
        RiskLevel::Low
    } else if score_normalised < 60.0 {
        RiskLevel::Medium
    } else if score_normalised < 80.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Display color (hex) for a normalised score.
pub fn risk_score_color(score_normalised: f64) -> &'static str {
    risk_level(score_normalised).color()
}

/// Clamp a score into the displayable [0, 100] range.
///
/// Consumers apply this before rendering; the cache and scheduler never
/// touch payload contents, so out-of-range scores pass through them as-is.
pub fn clamp_score(score_normalised: f64) -> f64 {
    score_normalised.clamp(0.0, 100.0)
}
