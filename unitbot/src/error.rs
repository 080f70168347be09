//! Errors surfaced to chat users
//!
//! Every variant renders as the one-line reply sent back for a failed
//! command.

use thiserror::Error;
use unitbot_parser::PatternError;
use unitbot_units::{ConversionError, USAGE};

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    /// Input is not `<quantity> to <unit>`
    #[error("{}", USAGE)]
    GrammarMismatch,

    /// Unknown unit, dimension mismatch or unavailable currency service
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A built-in token pattern failed to compile
    #[error("invalid grammar pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BotError::GrammarMismatch.to_string(),
            "Usage: !conv [amount][from-unit] to [to-unit]"
        );
        let err: BotError = ConversionError::UnknownUnit("parsec".into()).into();
        assert_eq!(err.to_string(), "Invalid unit parsec");
        let err: BotError = ConversionError::CurrencyServiceUnavailable.into();
        assert_eq!(err.to_string(), "currency conversion not available right now");
    }
}
