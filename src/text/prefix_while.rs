use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that consumes the longest non-empty run of characters satisfying a predicate
pub struct PrefixWhile<F> {
    predicate: F,
    expected: Cow<'static, str>,
}

impl<F> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            expected: expected.into(),
        }
    }
}

impl<'code, F> Parser<'code> for PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let end = input
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(input.len(), |(index, _)| index);

        if end == 0 {
            return ParseResult::failure(self.expected.clone(), input);
        }

        let (run, remainder) = input.split_at(end);
        ParseResult::success(run, remainder)
    }
}

/// Parser for the longest non-empty prefix whose characters all satisfy `predicate`
pub fn prefix_while<F>(predicate: F) -> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    PrefixWhile::new(predicate, "Expected: prefix matching predicate")
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// One or more letters
///
/// Letter-numbers such as roman numerals (U+2160..U+2188) are rejected. Combining
/// marks that carry the Alphabetic property (e.g. U+0345) are still accepted, since
/// `char` exposes no general-category query to tell them apart from letters.
pub fn letters() -> impl for<'code> Parser<'code, Output = &'code str> {
    prefix_while(is_letter)
}

/// One or more ASCII digits, as text
pub fn digits() -> impl for<'code> Parser<'code, Output = &'code str> {
    prefix_while(|c| c.is_ascii_digit())
}
