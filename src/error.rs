use thiserror::Error;

/// Maximum number of characters of unconsumed input quoted in an error
const EXCERPT_CHARS: usize = 16;

/// Owned, position-resolved form of a parse failure
///
/// `ParseResult::Failure` only knows the remainder it stopped at; once the caller
/// supplies the original input the failure can be turned into one of these and
/// propagated with `?` like any other error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A parser did not find what it expected
    #[error("{expected} at byte offset {offset}, found {found}")]
    Mismatch {
        expected: String,
        offset: usize,
        found: String,
    },

    /// Parsing succeeded but did not consume the whole input
    #[error("Expected: end of input at byte offset {offset}, found {found}")]
    TrailingInput { offset: usize, found: String },
}

impl ParseError {
    /// Byte offset into the original input where parsing stopped
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Mismatch { offset, .. } | ParseError::TrailingInput { offset, .. } => {
                *offset
            }
        }
    }
}

/// Byte offset of `remainder` within `input`
///
/// Remainders are suffixes of the input, so this is the difference in lengths.
pub(crate) fn offset_of(input: &str, remainder: &str) -> usize {
    input.len().saturating_sub(remainder.len())
}

/// Short quoted preview of unconsumed input for error messages
pub(crate) fn excerpt(remainder: &str) -> String {
    if remainder.is_empty() {
        return "end of input".to_string();
    }

    match remainder.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{:?}...", &remainder[..cut]),
        None => format!("{:?}", remainder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let error = ParseError::Mismatch {
            expected: "Expected: integer value".to_string(),
            offset: 4,
            found: excerpt("jan"),
        };

        assert_eq!(
            error.to_string(),
            "Expected: integer value at byte offset 4, found \"jan\""
        );
        assert_eq!(error.offset(), 4);
    }

    #[test]
    fn test_trailing_input_display() {
        let error = ParseError::TrailingInput {
            offset: 3,
            found: excerpt(" tail"),
        };

        assert_eq!(
            error.to_string(),
            "Expected: end of input at byte offset 3, found \" tail\""
        );
        assert_eq!(error.offset(), 3);
    }

    #[test]
    fn test_excerpt_end_of_input() {
        assert_eq!(excerpt(""), "end of input");
    }

    #[test]
    fn test_excerpt_truncates_long_input() {
        let preview = excerpt("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(preview, "\"abcdefghijklmnop\"...");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        // 17 multi-byte chars: the cut must land between characters, not inside one
        let input = "ééééééééééééééééé";
        let preview = excerpt(input);
        assert_eq!(preview, format!("{:?}...", "é".repeat(16)));
    }

    #[test]
    fn test_offset_of_suffix() {
        let input = "let x = [1]";
        assert_eq!(offset_of(input, &input[4..]), 4);
        assert_eq!(offset_of(input, ""), input.len());
        assert_eq!(offset_of(input, input), 0);
    }
}
