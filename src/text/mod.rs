pub mod literal;
pub mod prefix_while;
pub mod whitespace;

pub use literal::literal;
pub use prefix_while::{digits, letters, prefix_while};
pub use whitespace::whitespace;
