use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that rewrites the expectation message of a failing parser
///
/// Successes and failure remainders are left untouched; only the message changes.
pub struct MapExpected<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapExpected<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapExpected { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapExpected<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapExpected")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, S> Parser<'code> for MapExpected<P, F>
where
    P: Parser<'code>,
    F: Fn(Cow<'static, str>) -> S,
    S: Into<Cow<'static, str>>,
{
    type Output = P::Output;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parser.apply(input).map_expected(&self.mapper)
    }
}

/// Extension trait to add .map_expected() method support for parsers
pub trait MapExpectedExt<'code>: Parser<'code> + Sized {
    fn map_expected<F, S>(self, mapper: F) -> MapExpected<Self, F>
    where
        F: Fn(Cow<'static, str>) -> S,
        S: Into<Cow<'static, str>>,
    {
        MapExpected::new(self, mapper)
    }
}

/// Implement MapExpectedExt for all parsers
impl<'code, P> MapExpectedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapExpected parser
pub fn map_expected<'code, P, F, S>(parser: P, mapper: F) -> MapExpected<P, F>
where
    P: Parser<'code>,
    F: Fn(Cow<'static, str>) -> S,
    S: Into<Cow<'static, str>>,
{
    MapExpected::new(parser, mapper)
}
