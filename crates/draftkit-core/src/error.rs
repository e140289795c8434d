//! Error handling for DraftKit
//!
//! The engine itself never fails: out-of-range input is clamped and
//! degenerate geometry is accepted. Errors only arise at the edges:
//! - Store errors (an intent or a read that does not resolve)
//! - Configuration errors (surfaced by the settings crate)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Object store error type
///
/// Raised by the object store collaborator when an intent or a read-side join
/// cannot be satisfied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A segment references a point id that is not in the point table
    #[error("Segment {segment_id} references unknown point {point_id}")]
    UnresolvedPoint {
        /// The segment holding the dangling reference.
        segment_id: String,
        /// The point id that did not resolve.
        point_id: String,
    },

    /// A new point reuses an id that already exists
    #[error("Point {id} already exists")]
    DuplicatePoint {
        /// The conflicting point id.
        id: String,
    },

    /// A new segment reuses an id that already exists
    #[error("Segment {id} already exists")]
    DuplicateSegment {
        /// The conflicting segment id.
        id: String,
    },
}

/// Main error type for DraftKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Object store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a store error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
