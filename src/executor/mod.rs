pub mod cursor;
pub mod execute;

pub use execute::{ExecuteOutcome, execute};
