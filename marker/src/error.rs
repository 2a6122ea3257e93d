//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum. The grading functions themselves never fail:
//! malformed answers degrade to `false`, `0` or empty selections. Errors only arise when a
//! quiz definition is validated or when the orchestration layer loads quiz data from disk.
//!
//! # Example
//!
//! ```rust
//! use quiz_marker::error::MarkerError;
//!
//! fn check_points(points: u32) -> Result<(), MarkerError> {
//!     if points == 0 {
//!         return Err(MarkerError::InvalidQuestion("points must be positive".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_points(0).is_err());
//! ```

use std::fmt;

/// Represents all error types that can occur while preparing quiz data for grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// A question definition breaks a structural rule (empty id, zero points, too many options).
    InvalidQuestion(String),
    /// Two questions in one quiz share an identifier.
    DuplicateQuestion(String),
    /// I/O error (file not found, unreadable, too large).
    IoError(String),
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerError::InvalidQuestion(msg) => write!(f, "invalid question: {}", msg),
            MarkerError::DuplicateQuestion(id) => write!(f, "duplicate question id: {}", id),
            MarkerError::IoError(msg) => write!(f, "io error: {}", msg),
            MarkerError::InvalidJson(msg) => write!(f, "invalid json: {}", msg),
        }
    }
}

impl std::error::Error for MarkerError {}
