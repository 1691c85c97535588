//! Error types for the aquarium monitor

/// Errors that can occur in the aquarium monitor
#[derive(Debug, thiserror::Error)]
pub enum AquariumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot source error: {0}")]
    Source(String),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for aquarium monitor operations
pub type Result<T> = std::result::Result<T, AquariumError>;
