//! Errors raised when reading a request back off the wire

use thiserror::Error;

/// A step output query that cannot be turned into a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A required parameter was absent
    #[error("missing query parameter '{0}'")]
    MissingParam(&'static str),
}
