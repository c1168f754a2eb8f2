//! Error types for the roleta workspace

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum RoletaError {
    #[error("no eligible candidates to spin")]
    NoCandidates,

    #[error("a spin is already in progress")]
    SpinInProgress,

    #[error("duplicate candidate id: {0}")]
    DuplicateCandidate(String),

    #[error("no settled winner to act on")]
    NoProposal,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type RoletaResult<T> = Result<T, RoletaError>;
