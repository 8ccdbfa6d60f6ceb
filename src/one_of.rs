use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator for ordered choice between two parsers of the same output type
///
/// The first parser wins whenever it succeeds; the second is only tried, on the same
/// input, after the first has failed. When both fail the expectations are joined
/// with `", "` in the order they were tried and the second parser's remainder is kept.
pub struct OneOf<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OneOf<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        OneOf { first, second }
    }
}

impl<'code, P1, P2, O> Parser<'code> for OneOf<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.first.apply(input) {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure { expected, .. } => self
                .second
                .apply(input)
                .map_expected(|second| format!("{}, {}", expected, second)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OneOfExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> OneOf<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OneOf::new(self, other)
    }
}

/// Implement OneOfExt for all parsers
impl<'code, P> OneOfExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, P1, P2, O>(first: P1, second: P2) -> OneOf<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    OneOf::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::map::MapExt;
    use crate::sequence::SequenceExt;
    use crate::text::literal;

    #[test]
    fn test_one_of_first_succeeds() {
        let parser = one_of(literal("a"), literal("b"));
        assert_eq!(parser.apply("ab"), ParseResult::success("a", "b"));
    }

    #[test]
    fn test_one_of_second_succeeds() {
        let parser = one_of(literal("a"), literal("b"));
        assert_eq!(parser.apply("bc"), ParseResult::success("b", "c"));
    }

    #[test]
    fn test_one_of_both_fail_joins_expectations() {
        let parser = one_of(literal("a"), literal("b"));
        assert_eq!(
            parser.apply("cd"),
            ParseResult::failure("Expected: \"a\" prefix, Expected: \"b\" prefix", "cd")
        );
    }

    #[test]
    fn test_one_of_is_left_biased() {
        // Both alternatives match; the longer second one is never consulted
        let parser = literal("a").or(literal("ab"));
        assert_eq!(parser.apply("abc"), ParseResult::success("a", "bc"));
    }

    #[test]
    fn test_one_of_retries_second_on_original_input() {
        // The first branch fails after consuming "let"; the second starts from scratch
        let keyword_then_number = literal("let").then(integer()).map(|(_, n)| n);
        let parser = keyword_then_number.or(literal("let").map(|_| -1));
        assert_eq!(parser.apply("let x"), ParseResult::success(-1, " x"));
    }

    #[test]
    fn test_one_of_keeps_second_failure_remainder() {
        let first = literal("x");
        let second = literal("a").then(literal("b")).map(|(a, _)| a);
        assert_eq!(
            first.or(second).apply("ac"),
            ParseResult::failure("Expected: \"x\" prefix, Expected: \"b\" prefix", "c")
        );
    }

    #[test]
    fn test_or_method_chain_accumulates_in_order() {
        let parser = literal("a").or(literal("b")).or(literal("c"));
        assert_eq!(parser.apply("c"), ParseResult::success("c", ""));
        assert_eq!(
            parser.apply("d"),
            ParseResult::failure(
                "Expected: \"a\" prefix, Expected: \"b\" prefix, Expected: \"c\" prefix",
                "d"
            )
        );
    }
}
