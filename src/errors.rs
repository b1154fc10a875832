//! Error types for the report client
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR, one unique code
//! per failure mode so production logs stay greppable.
//!
//! The upstream contract keeps this surface small: transport failures,
//! non-2xx responses, and malformed bodies are all converted to a `None`
//! result inside the fetcher and never show up here. An `Err` from this
//! client means the scheduler's own bookkeeping failed, which indicates a
//! programming defect rather than an external-service condition.

use std::fmt;

/// Client-side error with a unique code for logging/monitoring.
#[derive(Debug)]
pub struct ClientError {
    pub code: ErrorCode,
    pub message: String,
}

impl ClientError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// The pending request's channel was dropped before fulfillment
    pub fn queue_closed(mint: &str) -> Self {
        Self::new(
            ErrorCode::QueueClosed,
            format!("request for {} was dropped before completion", mint),
        )
    }

    /// The worker task hit an unexpected fault while processing an item
    pub fn worker_fault(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::WorkerFault, msg)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ClientError {}

/// Unique error codes for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Oneshot sender dropped without resolving (orchestration fault)
    QueueClosed,
    /// Unexpected failure inside the scheduler worker
    WorkerFault,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueueClosed => "QUEUE_CLOSED",
            Self::WorkerFault => "WORKER_FAULT",
        }
    }
}

/// Client Result type
pub type ClientResult<T> = Result<T, ClientError>;
