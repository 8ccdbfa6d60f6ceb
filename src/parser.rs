use crate::error::{ParseError, excerpt, offset_of};
use crate::result::ParseResult;
use log::debug;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from input text to a [`ParseResult`]. It holds no
/// mutable state, so one parser value can be applied to any number of inputs,
/// including from several threads at once.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// On success the remainder is the unconsumed suffix of `input`. Primitive
    /// parsers consume nothing on failure; combinators report the remainder of the
    /// sub-parser that actually failed.
    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output>;

    /// Parse all of `input`, treating leftover text as an error
    ///
    /// ```
    /// use strcomb::{Parser, ParseError, integer};
    ///
    /// assert_eq!(integer().parse_complete("42"), Ok(42));
    /// assert!(matches!(
    ///     integer().parse_complete("42abc"),
    ///     Err(ParseError::TrailingInput { offset: 2, .. })
    /// ));
    /// ```
    fn parse_complete(&self, input: &'code str) -> Result<Self::Output, ParseError> {
        let outcome = self
            .apply(input)
            .into_result(input)
            .and_then(|(value, remainder)| {
                if remainder.is_empty() {
                    Ok(value)
                } else {
                    Err(ParseError::TrailingInput {
                        offset: offset_of(input, remainder),
                        found: excerpt(remainder),
                    })
                }
            });

        if let Err(error) = &outcome {
            debug!("rejected {} byte input: {}", input.len(), error);
        }
        outcome
    }
}

/// Any function from input to result is a parser
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    type Output = T;

    fn apply(&self, input: &'code str) -> ParseResult<'code, T> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::literal;

    fn first_char(input: &str) -> ParseResult<'_, char> {
        match input.chars().next() {
            Some(c) => ParseResult::success(c, &input[c.len_utf8()..]),
            None => ParseResult::failure("Expected: any character", input),
        }
    }

    #[test]
    fn test_function_as_parser() {
        assert_eq!(first_char.apply("abc"), ParseResult::success('a', "bc"));
        assert_eq!(
            first_char.apply(""),
            ParseResult::failure("Expected: any character", "")
        );
    }

    #[test]
    fn test_closure_as_parser() {
        let twice = |input| literal("ab").apply(input).map(|s: &str| s.repeat(2));
        assert_eq!(twice.apply("abc"), ParseResult::success("abab".to_string(), "c"));
    }

    #[test]
    fn test_parser_is_reusable_across_inputs() {
        let parser = literal("x");
        assert!(parser.apply("xy").is_success());
        assert!(parser.apply("yx").is_failure());
        assert!(parser.apply("xx").is_success());
    }

    #[test]
    fn test_parse_complete_accepts_full_input() {
        assert_eq!(literal("abc").parse_complete("abc"), Ok("abc"));
    }

    #[test]
    fn test_parse_complete_rejects_trailing_input() {
        let error = literal("ab").parse_complete("abcdef").unwrap_err();
        assert_eq!(
            error,
            ParseError::TrailingInput {
                offset: 2,
                found: "\"cdef\"".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_complete_reports_mismatch() {
        let error = literal("ab").parse_complete("xyz").unwrap_err();
        assert_eq!(
            error,
            ParseError::Mismatch {
                expected: "Expected: \"ab\" prefix".to_string(),
                offset: 0,
                found: "\"xyz\"".to_string(),
            }
        );
    }
}
