//! Errors raised while building parsers

use thiserror::Error;

/// A token pattern failed to compile.
///
/// Patterns are static, so this only surfaces when a grammar is constructed.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("invalid token pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
