//! # strcomb - String Parser Combinators
//!
//! A small parser combinator library over `&str`.
//!
//! Parsers are pure values built once by composing primitives, then applied to any
//! number of inputs. The library emphasizes:
//!
//! - **Errors are data**: every mismatch is a [`ParseResult::Failure`] carrying what
//!   was expected and where parsing stopped; nothing panics on bad input
//! - **Zero-copy**: text values and remainders are slices of the input
//! - **Composability**: small parsers combine into larger ones using combinators
//! - **Bounded stack**: repetition combinators loop instead of recursing

pub mod ascii;
pub mod between;
pub mod error;
pub mod grammar;
pub mod many;
pub mod map;
pub mod map_expected;
pub mod one_of;
pub mod parser;
pub mod result;
pub mod separated_by;
pub mod sequence;
pub mod skip;
pub mod text;

pub use ascii::integer;
pub use between::between;
pub use error::ParseError;
pub use grammar::{VariableAssignment, int_array, key_value, spaces, variable_assignment};
pub use many::many;
pub use map::{MapExt, map};
pub use map_expected::{MapExpectedExt, map_expected};
pub use one_of::{OneOfExt, one_of};
pub use parser::Parser;
pub use result::ParseResult;
pub use separated_by::separated_by;
pub use sequence::{SequenceExt, sequence};
pub use skip::{SkipExt, skip_left, skip_right};
pub use text::{digits, letters, literal, prefix_while, whitespace};
