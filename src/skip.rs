use crate::parser::Parser;
use crate::result::ParseResult;

/// Sequence of two parsers that keeps only the right-hand value
pub struct SkipLeft<L, R> {
    left: L,
    right: R,
}

impl<L, R> SkipLeft<L, R> {
    pub fn new(left: L, right: R) -> Self {
        SkipLeft { left, right }
    }
}

impl<'code, L, R> Parser<'code> for SkipLeft<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    type Output = R::Output;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.left
            .apply(input)
            .flat_map(|_, remainder| self.right.apply(remainder))
    }
}

/// Sequence of two parsers that keeps only the left-hand value
pub struct SkipRight<L, R> {
    left: L,
    right: R,
}

impl<L, R> SkipRight<L, R> {
    pub fn new(left: L, right: R) -> Self {
        SkipRight { left, right }
    }
}

impl<'code, L, R> Parser<'code> for SkipRight<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    type Output = L::Output;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.left.apply(input).flat_map(|value, remainder| {
            self.right.apply(remainder).map(|_| value)
        })
    }
}

/// Run `left` then `right`, discarding what `left` produced
///
/// Used to consume keywords and opening delimiters.
pub fn skip_left<'code, L, R>(left: L, right: R) -> SkipLeft<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    SkipLeft::new(left, right)
}

/// Run `left` then `right`, discarding what `right` produced
///
/// Used to consume trailing delimiters and padding.
pub fn skip_right<'code, L, R>(left: L, right: R) -> SkipRight<L, R>
where
    L: Parser<'code>,
    R: Parser<'code>,
{
    SkipRight::new(left, right)
}

/// Extension trait to add .skip_left() and .skip_right() method support for parsers
///
/// `a.skip_left(b)` keeps `b`'s value and `a.skip_right(b)` keeps `a`'s value; the
/// name says which side is thrown away.
pub trait SkipExt<'code>: Parser<'code> + Sized {
    fn skip_left<P>(self, right: P) -> SkipLeft<Self, P>
    where
        P: Parser<'code>,
    {
        skip_left(self, right)
    }

    fn skip_right<P>(self, right: P) -> SkipRight<Self, P>
    where
        P: Parser<'code>,
    {
        skip_right(self, right)
    }
}

/// Implement SkipExt for all parsers
impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}
