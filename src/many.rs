use crate::parser::Parser;
use crate::result::ParseResult;
use log::trace;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// `Many` never fails: the first failure of the inner parser ends the repetition and
/// everything matched so far is returned together with the input at that point.
/// Repetition is a loop, so arbitrarily long runs do not grow the call stack.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut remainder = input;

        while let ParseResult::Success {
            value,
            remainder: next,
        } = self.parser.apply(remainder)
        {
            results.push(value);

            // A match that consumed nothing would match again forever
            if next.len() == remainder.len() {
                trace!("many: stopping on zero-width match at {} bytes left", next.len());
                break;
            }
            remainder = next;
        }

        ParseResult::success(results, remainder)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
