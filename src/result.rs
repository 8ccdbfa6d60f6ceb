use crate::error::{ParseError, excerpt, offset_of};
use std::borrow::Cow;

/// Outcome of applying a parser to some input
///
/// Both variants carry the remainder as a slice of the input the parser was given,
/// so "what is left" is always a suffix of the original text.
///
/// - `Success` holds the produced value and the unconsumed tail.
/// - `Failure` holds a human-readable expectation and the input at the point where
///   the failing parser gave up. Primitives never consume on failure, so for them
///   this is exactly the input they received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'code, T> {
    Success {
        value: T,
        remainder: &'code str,
    },
    Failure {
        expected: Cow<'static, str>,
        remainder: &'code str,
    },
}

impl<'code, T> ParseResult<'code, T> {
    pub fn success(value: T, remainder: &'code str) -> Self {
        ParseResult::Success { value, remainder }
    }

    pub fn failure(expected: impl Into<Cow<'static, str>>, remainder: &'code str) -> Self {
        ParseResult::Failure {
            expected: expected.into(),
            remainder,
        }
    }

    /// Transform the value of a success; failures short-circuit unchanged
    pub fn map<U, F>(self, f: F) -> ParseResult<'code, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseResult::Success { value, remainder } => ParseResult::Success {
                value: f(value),
                remainder,
            },
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected,
                remainder,
            },
        }
    }

    /// Continue with the value and the unconsumed input of a success
    ///
    /// This is how "what's left to parse" is threaded into the next step.
    ///
    /// ```
    /// use strcomb::{Parser, ParseResult, integer, literal};
    ///
    /// let result = literal("-")
    ///     .apply("-12rest")
    ///     .flat_map(|_, rest| integer().apply(rest).map(|n| -n));
    /// assert_eq!(result, ParseResult::success(-12, "rest"));
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> ParseResult<'code, U>
    where
        F: FnOnce(T, &'code str) -> ParseResult<'code, U>,
    {
        match self {
            ParseResult::Success { value, remainder } => f(value, remainder),
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected,
                remainder,
            },
        }
    }

    /// Rewrite the expectation message of a failure, leaving successes untouched
    pub fn map_expected<F, S>(self, f: F) -> Self
    where
        F: FnOnce(Cow<'static, str>) -> S,
        S: Into<Cow<'static, str>>,
    {
        match self {
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected: f(expected).into(),
                remainder,
            },
            success => success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn remainder(&self) -> &'code str {
        match self {
            ParseResult::Success { remainder, .. } | ParseResult::Failure { remainder, .. } => {
                *remainder
            }
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { expected, .. } => Some(expected.as_ref()),
        }
    }

    /// Convert into a standard `Result`, locating a failure within `input`
    ///
    /// `input` should be the text the top-level parser was applied to; the error offset
    /// is its length minus the length of the failure's remainder.
    pub fn into_result(self, input: &str) -> Result<(T, &'code str), ParseError> {
        match self {
            ParseResult::Success { value, remainder } => Ok((value, remainder)),
            ParseResult::Failure {
                expected,
                remainder,
            } => Err(ParseError::Mismatch {
                expected: expected.into_owned(),
                offset: offset_of(input, remainder),
                found: excerpt(remainder),
            }),
        }
    }
}
