use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// Whichever of the three fails first determines the failure.
///
/// # Examples
/// - `"[1,2]"` → `vec![1, 2]`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.open
            .apply(input)
            .flat_map(|_, rest| self.content.apply(rest))
            .flat_map(|content, rest| self.close.apply(rest).map(|_| content))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::separated_by::separated_by;
    use crate::text::{letters, literal};

    #[test]
    fn test_brackets_list() {
        let parser = between(
            literal("["),
            separated_by(integer(), literal(",")),
            literal("]"),
        );
        assert_eq!(parser.apply("[1,2]"), ParseResult::success(vec![1, 2], ""));
        assert_eq!(parser.apply("[]"), ParseResult::success(vec![], ""));
    }

    #[test]
    fn test_parentheses_word() {
        let parser = between(literal("("), letters(), literal(")"));
        assert_eq!(parser.apply("(value) rest"), ParseResult::success("value", " rest"));
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(literal("["), integer(), literal("]"));
        assert_eq!(
            parser.apply("42]"),
            ParseResult::failure("Expected: \"[\" prefix", "42]")
        );
    }

    #[test]
    fn test_missing_content_fails_after_open() {
        let parser = between(literal("["), integer(), literal("]"));
        assert_eq!(
            parser.apply("[x]"),
            ParseResult::failure("Expected: integer value", "x]")
        );
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(literal("["), integer(), literal("]"));
        assert_eq!(
            parser.apply("[42"),
            ParseResult::failure("Expected: \"]\" prefix", "")
        );
    }
}
