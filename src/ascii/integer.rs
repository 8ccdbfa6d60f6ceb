use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches a run of ASCII digits as an `i64`
///
/// There is no sign handling; callers compose `literal("-")` in front when needed.
/// A digit run too large for `i64` is reported as a failure rather than a panic,
/// and like every other primitive failure it consumes nothing.
pub fn integer() -> IntegerParser {
    IntegerParser
}

pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = i64;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let end = input
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(input.len());

        if end == 0 {
            return ParseResult::failure("Expected: integer value", input);
        }

        // Only ASCII digits remain, so the only possible error is overflow
        let (digits, remainder) = input.split_at(end);
        match digits.parse::<i64>() {
            Ok(value) => ParseResult::success(value, remainder),
            Err(_) => ParseResult::failure("Expected: integer value within i64 range", input),
        }
    }
}
