use crate::parser::Parser;
use crate::text::prefix_while::PrefixWhile;

/// Breaking whitespace: ASCII controls and Unicode spaces, but not the no-break spaces
fn is_breaking_space(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Parser for a non-empty run of whitespace characters
///
/// No-break spaces (U+00A0, U+2007, U+202F) and NEL are not whitespace here; the
/// file/group/record/unit separators U+001C..U+001F are.
pub fn whitespace() -> impl for<'code> Parser<'code, Output = &'code str> {
    PrefixWhile::new(is_breaking_space, "Expected: one or more whitespace")
}
