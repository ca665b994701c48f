//! Error types for fenced.
//!
//! Chunking itself never fails. Errors only come out of configuration.

/// Errors that can occur while configuring a chunker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Desired size is above the hard maximum.
    #[error(transparent)]
    Capacity(#[from] crate::ChunkCapacityError),
}

/// Result type for fenced operations.
pub type Result<T> = std::result::Result<T, Error>;
