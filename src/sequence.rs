use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two parsers in order and returns both results as a tuple
///
/// The second parser starts where the first one stopped. If the second parser fails,
/// its failure is returned as-is, so the failure's remainder points just past what
/// the first parser consumed.
///
/// Note: Chaining `.then()` produces nested tuples like `((a, b), c)`.
///
/// Example:
/// ```
/// use strcomb::{Parser, ParseResult, SequenceExt, integer, literal};
///
/// let parser = literal("-").then(integer()).then(literal(";"));
/// assert_eq!(
///     parser.apply("-123;jan"),
///     ParseResult::success((("-", 123), ";"), "jan")
/// );
/// ```
pub struct Sequence<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Sequence { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Sequence<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.first.apply(input).flat_map(|first, remainder| {
            self.second
                .apply(remainder)
                .map(|second| (first, second))
        })
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P1, P2>(first: P1, second: P2) -> Sequence<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Sequence::new(first, second)
}

/// Extension trait to add .then() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, next: P) -> Sequence<Self, P>
    where
        P: Parser<'code>,
    {
        Sequence::new(self, next)
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
