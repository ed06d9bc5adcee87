//! Error types for the Registry subsystem

use gl_01_verification::VerificationError;
use shared_types::ProjectStatus;

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Registry error types
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("Project {id} is {status} and cannot be verified again")]
    AlreadyVerified { id: String, status: ProjectStatus },

    #[error("Project {id} is {status} and cannot be traded")]
    NotTradeable { id: String, status: ProjectStatus },

    #[error("Requested {requested} credits but only {available} are available")]
    InsufficientSupply { requested: f64, available: f64 },

    #[error("Requested to retire {requested} credits but only {owned} are owned")]
    InsufficientCredits { requested: f64, owned: f64 },

    #[error("Verification failed: {0}")]
    Verification(#[from] VerificationError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
