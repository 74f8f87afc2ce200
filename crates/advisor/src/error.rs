use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the completion service. None of them are retried.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("completion service returned no advice")]
    EmptyResponse,
    #[error("advice service is not configured")]
    NotConfigured,
}
