//! Error types for the MRV pipeline

/// Pipeline error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    /// A stage ran before the stage whose output it needs.
    #[error("Stage {stage} requires the {missing} output")]
    MissingStageOutput {
        stage: &'static str,
        missing: &'static str,
    },

    #[error("Invalid pipeline parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),

    #[error("Stage {stage} failed: {reason}")]
    StageFailed { stage: &'static str, reason: String },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
