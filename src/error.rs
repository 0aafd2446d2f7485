//! Error taxonomy for the recommendation engine.

use thiserror::Error;

/// Errors surfaced by the recommendation pipeline.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The friendship-graph store is unreachable or timed out. Never retried
    /// inside the engine; the caller decides retry versus degraded response.
    #[error("adjacency retrieval failed: {0}")]
    Retrieval(String),

    /// Union-find operation on a member outside the initialized universe, or
    /// before initialization. A contract violation, not a runtime condition.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type for the recommendation engine.
pub type Result<T> = std::result::Result<T, RecommendError>;
