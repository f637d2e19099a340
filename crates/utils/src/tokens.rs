//! Whitespace token reader with typed parsers

// crate modules
use crate::error::{Error, Result};

// nom parser combinators
use nom::character::complete;
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// Sequential reader over whitespace separated tokens
///
/// Line breaks carry no meaning, exactly like reading the file with `>>` on an
/// input stream. Every value must be a complete token though, so `12abc` is an
/// error rather than `12`.
///
/// ```rust
/// # use femtools_utils::Tokens;
/// let mut tokens = Tokens::new("3\n 1.0 2.5e3\n");
/// assert_eq!(tokens.next_u32("iteration").unwrap(), 3);
/// assert_eq!(tokens.next_f64("x").unwrap(), 1.0);
/// assert_eq!(tokens.next_f64("y").unwrap(), 2500.0);
/// assert!(tokens.next_f64("z").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    /// Start reading from the beginning of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Next raw token, an error naming `expected` if there are none left
    pub fn next_token(&mut self, expected: &str) -> Result<&'a str> {
        self.position += 1;
        self.inner.next().ok_or_else(|| Error::UnexpectedEndOfInput {
            expected: expected.to_string(),
            position: self.position,
        })
    }

    /// Next token as an unsigned 32-bit integer
    pub fn next_u32(&mut self, expected: &str) -> Result<u32> {
        self.parse_with(expected, complete::u32)
    }

    /// Next token as a signed 64-bit integer
    pub fn next_i64(&mut self, expected: &str) -> Result<i64> {
        self.parse_with(expected, complete::i64)
    }

    /// Next token as an unsigned size
    pub fn next_usize(&mut self, expected: &str) -> Result<usize> {
        let value = self.parse_with(expected, complete::u64)?;
        usize::try_from(value).map_err(|_| self.invalid(expected, &value.to_string()))
    }

    /// Next token as a finite floating point value
    ///
    /// `nan` and `inf` are accepted by the nom parser but never make sense for
    /// anything FEMTIC writes, so they are rejected here.
    pub fn next_f64(&mut self, expected: &str) -> Result<f64> {
        let value = self.parse_with(expected, double)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.invalid(expected, &value.to_string()))
        }
    }

    /// Consume the rest of the input, returning how many tokens were left
    pub fn skip_remaining(&mut self) -> usize {
        let n = self.inner.by_ref().count();
        self.position += n;
        n
    }

    /// Run a nom parser that must consume the whole token
    fn parse_with<T, F>(&mut self, expected: &str, parser: F) -> Result<T>
    where
        F: FnMut(&'a str) -> IResult<&'a str, T>,
    {
        let token = self.next_token(expected)?;
        all_consuming(parser)(token)
            .map(|(_, value)| value)
            .map_err(|_| self.invalid(expected, token))
    }

    fn invalid(&self, expected: &str, found: &str) -> Error {
        Error::InvalidToken {
            expected: expected.to_string(),
            found: found.to_string(),
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_line_structure() {
        let mut tokens = Tokens::new("  1\t2\r\n\n3 ");
        assert_eq!(tokens.next_u32("a"), Ok(1));
        assert_eq!(tokens.next_usize("b"), Ok(2));
        assert_eq!(tokens.next_f64("c"), Ok(3.0));
        assert_eq!(tokens.position(), 3);
    }

    #[test]
    fn partial_tokens_are_rejected() {
        let mut tokens = Tokens::new("12abc");
        assert_eq!(
            tokens.next_u32("count"),
            Err(Error::InvalidToken {
                expected: "count".into(),
                found: "12abc".into(),
                position: 1
            })
        );
    }

    #[test]
    fn negative_unsigned_is_rejected() {
        let mut tokens = Tokens::new("-1 -1");
        assert!(tokens.next_u32("iteration").is_err());
        assert_eq!(tokens.next_i64("neighbour"), Ok(-1));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Tokens::new("nan").next_f64("x").is_err());
        assert!(Tokens::new("inf").next_f64("x").is_err());
        assert_eq!(Tokens::new("-1.5E-3").next_f64("x"), Ok(-0.0015));
    }

    #[test]
    fn end_of_input_names_expected_value() {
        let mut tokens = Tokens::new("7");
        tokens.next_u32("first").unwrap();
        let error = tokens.next_f64("origin y").unwrap_err();
        assert_eq!(
            error,
            Error::UnexpectedEndOfInput {
                expected: "origin y".into(),
                position: 2
            }
        );
        assert_eq!(error.to_string(), "missing origin y (token 2)");
    }

    #[test]
    fn remaining_tokens_are_counted() {
        let mut tokens = Tokens::new("1 2 3 4");
        tokens.next_u32("a").unwrap();
        assert_eq!(tokens.skip_remaining(), 3);
        assert_eq!(tokens.position(), 4);
    }
}
