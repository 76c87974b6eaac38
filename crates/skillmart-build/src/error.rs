//! Error types for the marketplace build
//!
//! Only shared-setup failures live here; problems local to a single skill
//! are reported through the scan outcome and never abort the batch.

use thiserror::Error;

/// Fatal build errors
#[derive(Debug, Error)]
pub enum BuildError {
    /// Output directory creation or artifact write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unreadable skills root (per-skill failures are not errors)
    #[error(transparent)]
    Scan(#[from] anyhow::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, BuildError>;
