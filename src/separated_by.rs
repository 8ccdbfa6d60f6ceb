use crate::parser::Parser;
use crate::result::ParseResult;
use log::trace;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses zero or more items, each after the first preceded by a
/// separator. It returns a vector of all items.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `vec![1, 2, 3]`
/// - `"a"` with an integer item → `vec![]`, input untouched
///
/// # Note
/// - A list that cannot start is an empty list, not a failure
/// - Once a separator matched, an item is required; its failure is returned
/// - Trailing separators therefore cause an error
/// - Does not handle whitespace automatically
pub struct SeparatedBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedBy { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (first, mut remainder) = match self.parser.apply(input) {
            ParseResult::Success { value, remainder } => (value, remainder),
            ParseResult::Failure { .. } => return ParseResult::success(Vec::new(), input),
        };
        let mut results = vec![first];

        loop {
            let after_separator = match self.separator.apply(remainder) {
                ParseResult::Success { remainder, .. } => remainder,
                ParseResult::Failure { .. } => break,
            };

            match self.parser.apply(after_separator) {
                ParseResult::Success { value, remainder: next } => {
                    results.push(value);

                    // Separator and item together consumed nothing; stop instead of looping
                    if next.len() == remainder.len() {
                        trace!(
                            "separated_by: stopping on zero-width match at {} bytes left",
                            next.len()
                        );
                        break;
                    }
                    remainder = next;
                }
                ParseResult::Failure {
                    expected,
                    remainder,
                } => {
                    return ParseResult::Failure {
                        expected,
                        remainder,
                    };
                }
            }
        }

        ParseResult::success(results, remainder)
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedBy::new(parser, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::one_of::OneOfExt;
    use crate::sequence::SequenceExt;
    use crate::text::{literal, whitespace};

    #[test]
    fn test_multiple_elements() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("1,2,3"),
            ParseResult::success(vec![1, 2, 3], "")
        );
    }

    #[test]
    fn test_single_element() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("42"),
            ParseResult::success(vec![42], "")
        );
    }

    #[test]
    fn test_empty_list_succeeds_without_consuming() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("a"),
            ParseResult::success(vec![], "a")
        );
        assert_eq!(
            separated_by(integer(), literal(",")).apply(""),
            ParseResult::success(vec![], "")
        );
    }

    #[test]
    fn test_trailing_separator_causes_error() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("1,2,"),
            ParseResult::failure("Expected: integer value", "")
        );
    }

    #[test]
    fn test_missing_element_after_separator_points_past_separator() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("1,2,x]"),
            ParseResult::failure("Expected: integer value", "x]")
        );
    }

    #[test]
    fn test_non_matching_separator() {
        assert_eq!(
            separated_by(integer(), literal(",")).apply("1;2;3"),
            ParseResult::success(vec![1], ";2;3")
        );
    }

    #[test]
    fn test_compound_separator() {
        let parser = separated_by(integer(), literal(",").then(whitespace()));
        assert_eq!(
            parser.apply("1, 2,  3]"),
            ParseResult::success(vec![1, 2, 3], "]")
        );
    }

    #[test]
    fn test_string_items() {
        let fruit = literal("apple").or(literal("banana")).or(literal("cherry"));
        let parser = separated_by(fruit, literal("::"));
        assert_eq!(
            parser.apply("apple::banana::cherry"),
            ParseResult::success(vec!["apple", "banana", "cherry"], "")
        );
    }

    #[test]
    fn test_long_list_does_not_overflow_stack() {
        let input = vec!["7"; 200_000].join(",");
        let result = separated_by(integer(), literal(",")).apply(&input);
        assert_eq!(result.value().map(Vec::len), Some(200_000));
        assert_eq!(result.remainder(), "");
    }

    #[test]
    fn test_zero_width_separator_and_item_terminates() {
        let parser = separated_by(literal(""), literal(""));
        assert_eq!(parser.apply("x"), ParseResult::success(vec!["", ""], "x"));
    }
}
