//! Primitive parsers: tokens, literals, character sets and numbers

use regex::Regex;

use crate::{ParseResult, Parser, PatternError, TryMap};

/// Signed decimal with optional fraction (`.` or `,`) and exponent
pub const FLOAT_PATTERN: &str = r"[+-]?\d+([.,]\d*)?([eE][+-]?\d+)?";

/// Signed integer
pub const INT_PATTERN: &str = r"[+-]?\d+";

/// Parser for floating point numbers
pub type FloatParser = TryMap<Token, fn(String) -> Option<f64>>;

/// Parser for integers
pub type IntParser = TryMap<Token, fn(String) -> Option<i64>>;

/// Number of bytes of leading whitespace
fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Remaining input at `offset`, or `None` if `offset` is out of range or not
/// on a char boundary
fn rest(input: &str, offset: usize) -> Option<&str> {
    input.get(offset..)
}

// ============ token ============

/// Matches a regular expression anchored at the current position
#[derive(Debug, Clone)]
pub struct Token {
    regex: Regex,
    skip_whitespace: bool,
}

impl Token {
    fn compile(pattern: &str, skip_whitespace: bool) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{})", pattern.strip_prefix('^').unwrap_or(pattern));
        let regex = Regex::new(&anchored).map_err(|source| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Token { regex, skip_whitespace })
    }
}

impl Parser for Token {
    type Output = String;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<String> {
        let Some(s) = rest(input, offset) else {
            return ParseResult::NoMatch;
        };
        let ws = if self.skip_whitespace { leading_whitespace(s) } else { 0 };
        match self.regex.find(&s[ws..]) {
            Some(m) => ParseResult::matched(m.as_str().to_string(), ws + m.end()),
            None => ParseResult::NoMatch,
        }
    }
}

/// Match `pattern` after skipping leading whitespace
pub fn token(pattern: &str) -> Result<Token, PatternError> {
    Token::compile(pattern, true)
}

/// Match `pattern` exactly at the current position
pub fn token_raw(pattern: &str) -> Result<Token, PatternError> {
    Token::compile(pattern, false)
}

// ============ literal ============

/// Matches an exact string
#[derive(Debug, Clone)]
pub struct Literal {
    text: String,
    skip_whitespace: bool,
}

impl Parser for Literal {
    type Output = ();

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<()> {
        let Some(s) = rest(input, offset) else {
            return ParseResult::NoMatch;
        };
        let ws = if self.skip_whitespace { leading_whitespace(s) } else { 0 };
        if s[ws..].starts_with(&self.text) {
            ParseResult::matched((), ws + self.text.len())
        } else {
            ParseResult::NoMatch
        }
    }
}

/// Match `text` after skipping leading whitespace
pub fn literal(text: &str) -> Literal {
    Literal { text: text.to_string(), skip_whitespace: true }
}

/// Match `text` exactly at the current position
pub fn literal_raw(text: &str) -> Literal {
    Literal { text: text.to_string(), skip_whitespace: false }
}

// ============ one_of ============

/// Matches a single character from a set, after skipping whitespace
#[derive(Debug, Clone)]
pub struct OneOf {
    set: String,
}

impl Parser for OneOf {
    type Output = char;

    fn parse_at(&self, input: &str, offset: usize) -> ParseResult<char> {
        let Some(s) = rest(input, offset) else {
            return ParseResult::NoMatch;
        };
        let ws = leading_whitespace(s);
        match s[ws..].chars().next() {
            Some(c) if self.set.contains(c) => ParseResult::matched(c, ws + c.len_utf8()),
            _ => ParseResult::NoMatch,
        }
    }
}

/// Match one character of `set`. Multi-byte characters are supported.
pub fn one_of(set: &str) -> OneOf {
    OneOf { set: set.to_string() }
}

// ============ numbers ============

fn parse_float(text: String) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}

fn parse_int(text: String) -> Option<i64> {
    // Out-of-range integers are rejected rather than treated as a fault
    text.parse().ok()
}

/// Floating point number, skipping leading whitespace. Accepts `5.` and `5,25`.
pub fn float() -> Result<FloatParser, PatternError> {
    Ok(token(FLOAT_PATTERN)?.try_map(parse_float as fn(String) -> Option<f64>))
}

/// Floating point number that must start at the current position
pub fn float_raw() -> Result<FloatParser, PatternError> {
    Ok(token_raw(FLOAT_PATTERN)?.try_map(parse_float as fn(String) -> Option<f64>))
}

/// Integer, skipping leading whitespace
pub fn int() -> Result<IntParser, PatternError> {
    Ok(token(INT_PATTERN)?.try_map(parse_int as fn(String) -> Option<i64>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_skips_whitespace() {
        let t = token("[a-z]+").unwrap();
        assert_eq!(t.parse("  abc1"), ParseResult::matched("abc".to_string(), 5));
    }

    #[test]
    fn test_token_is_anchored() {
        let t = token("[a-z]+").unwrap();
        assert!(!t.parse("1abc").is_match());
    }

    #[test]
    fn test_token_raw_rejects_whitespace() {
        let t = token_raw("[a-z]+").unwrap();
        assert!(!t.parse(" abc").is_match());
        assert!(t.parse("abc").is_match());
    }

    #[test]
    fn test_token_with_caret() {
        let t = token("^x").unwrap();
        assert_eq!(t.parse("x").consumed(), 1);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(token("[a-"), Err(PatternError::InvalidPattern { .. })));
    }

    #[test]
    fn test_parse_at_offset() {
        let t = token("[0-9]+").unwrap();
        assert_eq!(t.parse_at("ab 12", 2), ParseResult::matched("12".to_string(), 3));
    }

    #[test]
    fn test_offset_out_of_range() {
        let t = token("a").unwrap();
        assert!(!t.parse_at("a", 5).is_match());
        // Inside a multi-byte character
        assert!(!t.parse_at("€a", 1).is_match());
    }

    #[test]
    fn test_literal() {
        assert_eq!(literal("to").parse(" to m").consumed(), 3);
        assert!(!literal_raw("to").parse(" to").is_match());
        assert_eq!(literal_raw("to").parse("to").consumed(), 2);
    }

    #[test]
    fn test_one_of_multibyte() {
        let p = one_of("$€¥£");
        assert_eq!(p.parse("€5"), ParseResult::matched('€', 3));
        assert_eq!(p.parse(" $5"), ParseResult::matched('$', 2));
        assert!(!p.parse("x").is_match());
        assert!(!p.parse("").is_match());
    }

    #[test]
    fn test_float() {
        let f = float().unwrap();
        assert_eq!(f.parse("6.4cm"), ParseResult::matched(6.4, 3));
        assert_eq!(f.parse("5."), ParseResult::matched(5.0, 2));
        assert_eq!(f.parse("-1.5e3"), ParseResult::matched(-1500.0, 6));
        assert_eq!(f.parse("+2"), ParseResult::matched(2.0, 2));
        assert_eq!(f.parse("2,5"), ParseResult::matched(2.5, 3));
        assert!(!f.parse(".5").is_match());
    }

    #[test]
    fn test_float_raw() {
        let f = float_raw().unwrap();
        assert!(!f.parse(" 5").is_match());
        assert_eq!(f.parse("5"), ParseResult::matched(5.0, 1));
    }

    #[test]
    fn test_int() {
        let i = int().unwrap();
        assert_eq!(i.parse(" 6'"), ParseResult::matched(6, 2));
        assert!(!i.parse("x").is_match());
    }

    #[test]
    fn test_int_overflow_is_no_match() {
        let i = int().unwrap();
        assert!(!i.parse("99999999999999999999999").is_match());
    }
}
