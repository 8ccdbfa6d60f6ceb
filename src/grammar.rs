//! A small assignment language built only from the library's combinators
//!
//! ```text
//! let <name> = [<int>(, <int>)*]
//! ```
//!
//! `let` must be followed by at least one whitespace character; everywhere else
//! whitespace after a token is optional.

use crate::ascii::integer;
use crate::between::between;
use crate::error::ParseError;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::separated_by::separated_by;
use crate::sequence::SequenceExt;
use crate::skip::SkipExt;
use crate::text::{letters, literal, whitespace};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAssignment {
    pub name: String,
    pub values: Vec<i64>,
}

impl VariableAssignment {
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl fmt::Display for VariableAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = [", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl FromStr for VariableAssignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        variable_assignment().parse_complete(s)
    }
}

fn join(runs: Vec<&str>) -> String {
    runs.concat()
}

fn assignment((name, values): (&str, Vec<i64>)) -> VariableAssignment {
    VariableAssignment::new(name, values)
}

/// Zero or more whitespace characters, collected into one string
pub fn spaces() -> impl for<'code> Parser<'code, Output = String> {
    many(whitespace()).map(join)
}

/// Parser for `let <name> = [<int>, ...]`
///
/// ```
/// use strcomb::{Parser, ParseResult, VariableAssignment, variable_assignment};
///
/// assert_eq!(
///     variable_assignment().apply("let  ab = [1, 2, 3,  4]"),
///     ParseResult::success(VariableAssignment::new("ab", vec![1, 2, 3, 4]), "")
/// );
/// ```
pub fn variable_assignment() -> impl for<'code> Parser<'code, Output = VariableAssignment> {
    let let_keyword = literal("let").then(whitespace());
    let name = letters().skip_right(spaces());
    let assign = literal("=").skip_right(spaces());
    let numbers = separated_by(integer(), literal(",").then(spaces()));
    let array = between(literal("["), numbers, literal("]"));

    let_keyword
        .skip_left(name)
        .skip_right(assign)
        .then(array)
        .map(assignment)
}

/// JSON-like integer array where every comma is followed by whitespace: `[1, 2, 3]`
pub fn int_array() -> impl for<'code> Parser<'code, Output = Vec<i64>> {
    between(
        literal("["),
        separated_by(integer(), literal(",").then(whitespace())),
        literal("]"),
    )
}

/// `key:value` pair of two letter runs, e.g. `firstName:Jan`
pub fn key_value() -> impl for<'code> Parser<'code, Output = (&'code str, &'code str)> {
    letters().skip_right(literal(":")).then(letters())
}
