pub mod integer;

pub use integer::{IntegerParser, integer};
