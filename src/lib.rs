pub mod art;
pub mod executor;
pub mod planner;
pub mod repl;
pub mod storage;
pub mod types;
pub mod utils;
