#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Empty statement")]
    EmptyStatement,
    #[error("Unrecognized keyword at start of '{0}'")]
    UnrecognizedStatement(String),
    #[error("Syntax error: {0}")]
    SyntaxError(String),
    #[error("Invalid id '{0}': expected a 32-bit signed integer")]
    InvalidId(String),
    #[error("Unrecognized command: {0}")]
    UnrecognizedMetaCommand(String),
}
