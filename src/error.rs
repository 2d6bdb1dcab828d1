//! Error types for chaintable
//!
//! Construction is the only fallible operation; lookups and removals report
//! absence through their return values instead of through errors.

use thiserror::Error;

/// Result type alias using [`TableError`]
pub type Result<T> = std::result::Result<T, TableError>;

/// Error type for table construction
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The requested bucket count cannot index any key.
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),
}
