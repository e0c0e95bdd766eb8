pub mod error;
pub mod parser;
pub mod statement;

pub use parser::{CommandParser, prepare};
