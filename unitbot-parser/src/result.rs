//! Parse result type

/// Outcome of running a parser.
///
/// A failed parse carries no value and consumes nothing, so callers can
/// never observe a half-built value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    /// The parser matched `consumed` bytes and produced `value`
    Match { value: T, consumed: usize },
    /// The parser did not match
    NoMatch,
}

impl<T> ParseResult<T> {
    pub fn matched(value: T, consumed: usize) -> Self {
        ParseResult::Match { value, consumed }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, ParseResult::Match { .. })
    }

    /// Bytes consumed; always 0 for `NoMatch`
    pub fn consumed(&self) -> usize {
        match self {
            ParseResult::Match { consumed, .. } => *consumed,
            ParseResult::NoMatch => 0,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Match { value, .. } => Some(value),
            ParseResult::NoMatch => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Match { value, .. } => Some(value),
            ParseResult::NoMatch => None,
        }
    }

    /// Map the value of a successful result, keeping the consumed count
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Match { value, consumed } => {
                ParseResult::Match { value: f(value), consumed }
            }
            ParseResult::NoMatch => ParseResult::NoMatch,
        }
    }
}

impl<T> From<ParseResult<T>> for Option<(T, usize)> {
    fn from(result: ParseResult<T>) -> Self {
        match result {
            ParseResult::Match { value, consumed } => Some((value, consumed)),
            ParseResult::NoMatch => None,
        }
    }
}
