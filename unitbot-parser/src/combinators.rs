//! Combinators composing parsers into larger parsers

use std::fmt;

use crate::{ParseResult, Parser};

// ============ sequence ============

/// Runs each parser in order, each starting where the previous one stopped.
/// Fails as a whole, consuming nothing, if any part fails.
#[derive(Debug, Clone)]
pub struct Sequence<P>(P);

/// Build a sequence from a tuple of 2 to 4 parsers
pub fn sequence<P>(parsers: P) -> Sequence<P> {
    Sequence(parsers)
}

macro_rules! impl_sequence {
    ($($p:ident : $idx:tt),+) => {
        impl<$($p: Parser),+> Parser for Sequence<($($p,)+)> {
            type Output = ($(<$p as Parser>::Output,)+);

            fn parse_at(&self, input: &str, offset: usize) -> ParseResult<Self::Output> {
                let mut consumed = 0;
                let value = ($(
                    match self.0.$idx.parse_at(input, offset + consumed) {
                        ParseResult::Match { value, consumed: n } => {
                            consumed += n;
                            value
                        }
                        ParseResult::NoMatch => return ParseResult::NoMatch,
                    },
                )+);
                ParseResult::matched(value, consumed)
            }
        }
    };
}

impl_sequence!(A: 0, B: 1);
impl_sequence!(A: 0, B: 1, C: 2);
impl_sequence!(A: 0, B: 1, C: 2, D: 3);

// ============ first_of ============

/// Tries each alternative at the same offset and returns the first match.
/// Earlier alternatives shadow later ones.
#[derive(Debug, Clone)]
pub struct FirstOf<P>(P);

/// Build an ordered choice from a tuple of 2 to 4 parsers with the same output
pub fn first_of<P>(parsers: P) -> FirstOf<P> {
    FirstOf(parsers)
}

macro_rules! impl_first_of {
    ($first:ident : $fidx:tt $(, $p:ident : $idx:tt)+) => {
        impl<$first: Parser $(, $p: Parser<Output = <$first as Parser>::Output>)+> Parser
            for FirstOf<($first, $($p,)+)>
        {
            type Output = <$first as Parser>::Output;

            fn parse_at(&self, input: &str, offset: usize) -> ParseResult<Self::Output> {
                let result = self.0.$fidx.parse_at(input, offset);
                if result.is_match() {
                    return result;
                }
                $(
                    let result = self.0.$idx.parse_at(input, offset);
                    if result.is_match() {
                        return result;
                    }
                )+
                ParseResult::NoMatch
            }
        }
    };
}

impl_first_of!(A: 0, B: 1);
impl_first_of!(A: 0, B: 1, C: 2);
impl_first_of!(A: 0, B: 1, C: 2, D: 3);

// ============ optional ============

#[derive(Debug, Clone)]
pub struct Optional<P>(P);

/// Never fails: `Some(value)` on match, `None` (zero bytes) otherwise
pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional(parser)
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<Self::Output> {
        match self.0.parse_at(input, offset) {
            ParseResult::Match { value, consumed } => ParseResult::matched(Some(value), consumed),
            ParseResult::NoMatch => ParseResult::matched(None, 0),
        }
    }
}

// ============ with_default ============

pub struct WithDefault<P: Parser> {
    parser: P,
    default: P::Output,
}

impl<P> Clone for WithDefault<P>
where
    P: Parser + Clone,
    P::Output: Clone,
{
    fn clone(&self) -> Self {
        WithDefault { parser: self.parser.clone(), default: self.default.clone() }
    }
}

impl<P> fmt::Debug for WithDefault<P>
where
    P: Parser + fmt::Debug,
    P::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithDefault")
            .field("parser", &self.parser)
            .field("default", &self.default)
            .finish()
    }
}

/// Never fails: substitutes `default` (zero bytes) when `parser` fails
pub fn with_default<P>(parser: P, default: P::Output) -> WithDefault<P>
where
    P: Parser,
    P::Output: Clone,
{
    WithDefault { parser, default }
}

impl<P> Parser for WithDefault<P>
where
    P: Parser,
    P::Output: Clone,
{
    type Output = P::Output;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<Self::Output> {
        match self.parser.parse_at(input, offset) {
            ParseResult::NoMatch => ParseResult::matched(self.default.clone(), 0),
            matched => matched,
        }
    }
}

// ============ map / try_map ============

#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

/// Transform the value of a successful parse
pub fn map<P, U, F>(parser: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map { parser, f }
}

impl<P, U, F> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<U> {
        self.parser.parse_at(input, offset).map(&self.f)
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parser", &self.parser).finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    f: F,
}

/// Transform the value of a successful parse. Returning `None` rejects the
/// match: the parse fails and the consumed bytes are given back.
pub fn try_map<P, U, F>(parser: P, f: F) -> TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    TryMap { parser, f }
}

impl<P, U, F> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<U> {
        match self.parser.parse_at(input, offset) {
            ParseResult::Match { value, consumed } => match (self.f)(value) {
                Some(value) => ParseResult::matched(value, consumed),
                None => ParseResult::NoMatch,
            },
            ParseResult::NoMatch => ParseResult::NoMatch,
        }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for TryMap<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap").field("parser", &self.parser).finish_non_exhaustive()
    }
}

// ============ boxed ============

/// Type-erased parser, shareable across threads
pub struct BoxedParser<T> {
    inner: Box<dyn Parser<Output = T> + Send + Sync>,
}

impl<T> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        BoxedParser { inner: Box::new(parser) }
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<T> {
        self.inner.parse_at(input, offset)
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{float, int, literal, one_of, token};

    #[test]
    fn test_sequence() {
        let p = sequence((int().unwrap(), literal("x"), int().unwrap()));
        assert_eq!(p.parse("3 x 4"), ParseResult::matched((3, (), 4), 5));
    }

    #[test]
    fn test_sequence_failure_consumes_nothing() {
        let p = sequence((int().unwrap(), literal("x")));
        let r = p.parse("3 y");
        assert!(!r.is_match());
        assert_eq!(r.consumed(), 0);
    }

    #[test]
    fn test_sequence_at_offset() {
        let p = sequence((int().unwrap(), int().unwrap()));
        assert_eq!(p.parse_at("a 1 2", 1), ParseResult::matched((1, 2), 4));
    }

    #[test]
    fn test_first_of_order() {
        let word = token("[a-z]+").unwrap();
        let to = literal("to").map(|_| "TO".to_string());
        // Earlier alternative shadows the later one
        let p = first_of((word, to));
        assert_eq!(p.parse("to").into_value(), Some("to".to_string()));
    }

    #[test]
    fn test_first_of_falls_through() {
        let p = first_of((
            int().unwrap().map(|i| i as f64),
            float().unwrap(),
        ));
        assert_eq!(p.parse("x"), ParseResult::NoMatch);
        assert_eq!(p.parse("7"), ParseResult::matched(7.0, 1));
    }

    #[test]
    fn test_first_of_restarts_at_same_offset() {
        let a = sequence((int().unwrap(), literal("a"))).map(|(i, _)| i);
        let b = sequence((int().unwrap(), literal("b"))).map(|(i, _)| i * 10);
        let p = first_of((a, b));
        assert_eq!(p.parse("2b"), ParseResult::matched(20, 2));
    }

    #[test]
    fn test_optional() {
        let p = sequence((int().unwrap(), one_of("\"").optional()));
        assert_eq!(p.parse("2\""), ParseResult::matched((2, Some('"')), 2));
        assert_eq!(p.parse("2"), ParseResult::matched((2, None), 1));
    }

    #[test]
    fn test_with_default() {
        let p = int().unwrap().or_default(0);
        assert_eq!(p.parse("x"), ParseResult::matched(0, 0));
        assert_eq!(p.parse("5"), ParseResult::matched(5, 1));
    }

    #[test]
    fn test_try_map_rejects() {
        let even = int().unwrap().try_map(|i| (i % 2 == 0).then_some(i));
        assert!(even.parse("4").is_match());
        let r = even.parse("3");
        assert!(!r.is_match());
        assert_eq!(r.consumed(), 0);
    }

    #[test]
    fn test_try_map_enables_backtracking() {
        let even = int().unwrap().try_map(|i| (i % 2 == 0).then_some("even"));
        let any = int().unwrap().map(|_| "odd");
        let p = first_of((even, any));
        assert_eq!(p.parse("3").into_value(), Some("odd"));
    }

    #[test]
    fn test_boxed_is_reusable() {
        let p: BoxedParser<i64> = int().unwrap().boxed();
        assert_eq!(p.parse("1").into_value(), Some(1));
        assert_eq!(p.parse("22").into_value(), Some(22));
    }
}
