use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact string prefix
pub struct Literal {
    text: Cow<'static, str>,
}

impl Literal {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match input.strip_prefix(self.text.as_ref()) {
            Some(remainder) => ParseResult::success(&input[..self.text.len()], remainder),
            None => ParseResult::failure(format!("Expected: \"{}\" prefix", self.text), input),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(text)
}
