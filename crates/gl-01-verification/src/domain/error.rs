//! Error types for the Verification subsystem

/// Verification error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("No agent results to aggregate")]
    NoAgentResults,

    #[error("Agent weights sum to {total}, expected 1.0")]
    InvalidWeights { total: f64 },

    #[error("Invalid claimed reduction: {0}")]
    InvalidClaimedReduction(f64),

    #[error("Project {0} has no recorded verification to replay")]
    NotVerified(String),

    #[error("Attestation payload encoding failed: {0}")]
    Encoding(String),
}

/// Result type for verification operations
pub type VerificationResult<T> = Result<T, VerificationError>;
