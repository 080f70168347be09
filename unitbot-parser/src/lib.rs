//! Unitbot Parser - small parser combinator library
//!
//! Parsers are pure values: they never mutate their input, can be re-run on
//! any input, and report failure through [`ParseResult::NoMatch`] instead of
//! panicking. Grammars are built by composing primitives:
//!
//! - Primitives: `token`, `token_raw`, `literal`, `literal_raw`, `one_of`,
//!   `float`, `float_raw`, `int`
//! - Combinators: `sequence`, `first_of`, `optional`, `with_default`,
//!   `map`, `try_map`
//!
//! ```ignore
//! use unitbot_parser::prelude::*;
//!
//! let quantity = sequence((float()?, token("[A-Za-z]+")?));
//! let parsed = quantity.parse("6.4cm");
//! assert_eq!(parsed.into_value(), Some((6.4, "cm".to_string())));
//! ```

mod combinators;
mod error;
mod primitives;
mod result;

pub use combinators::{
    first_of, map, optional, sequence, try_map, with_default,
    BoxedParser, FirstOf, Map, Optional, Sequence, TryMap, WithDefault,
};
pub use error::PatternError;
pub use primitives::{
    float, float_raw, int, literal, literal_raw, one_of, token, token_raw,
    FloatParser, IntParser, Literal, OneOf, Token, FLOAT_PATTERN, INT_PATTERN,
};
pub use result::ParseResult;

/// A parser scans `input` starting at byte `offset`.
///
/// Implementations must be referentially transparent: the same input and
/// offset always give the same result, and nothing outside the parser is
/// touched. `consumed` in a successful result counts bytes from `offset`.
pub trait Parser {
    type Output;

    /// Parse `input` starting at byte `offset`.
    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<Self::Output>;

    /// Parse from the beginning of `input`.
    fn parse(&self, input: &str) -> ParseResult<Self::Output> {
        self.parse_at(input, 0)
    }

    /// Never fails; yields `None` without consuming input when `self` fails.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        optional(self)
    }

    /// Never fails; yields `default` without consuming input when `self` fails.
    fn or_default(self, default: Self::Output) -> WithDefault<Self>
    where
        Self: Sized,
        Self::Output: Clone,
    {
        with_default(self, default)
    }

    /// Transform a successful result.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        map(self, f)
    }

    /// Transform a successful result, failing the parse when `f` rejects it.
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<U>,
    {
        try_map(self, f)
    }

    /// Erase the concrete parser type.
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

/// Prelude for grammar authors
pub mod prelude {
    pub use crate::{
        first_of, float, float_raw, int, literal, literal_raw, one_of, optional,
        sequence, token, token_raw, with_default,
        BoxedParser, ParseResult, Parser, PatternError,
    };
}
