use thiserror::Error;

/// Main error type for rankeval
#[derive(Error, Debug)]
pub enum RankevalError {
    /// Invalid evaluation parameters (threshold, cutoff, beta)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed evaluation input (mismatched vectors, empty dataset)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenient Result type using RankevalError
pub type Result<T> = std::result::Result<T, RankevalError>;
