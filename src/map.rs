use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parser.apply(input).map(&self.mapper)
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
