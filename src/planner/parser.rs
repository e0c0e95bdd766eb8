use crate::{
    planner::{
        error::PlannerError,
        statement::{MetaCommand, Statement},
    },
    types::row::Row,
};

pub const META_COMMAND_PREFIX: char = '$';

/// Keyword-based parser for the shell's statements and meta commands.
pub struct CommandParser;

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn is_meta_command(&self, input: &str) -> bool {
        input.trim_start().starts_with(META_COMMAND_PREFIX)
    }

    pub fn parse_meta_command(&self, input: &str) -> Result<MetaCommand, PlannerError> {
        match input.trim() {
            "$exit" | "$quit" => Ok(MetaCommand::Exit),
            "$print" => Ok(MetaCommand::Print),
            other => Err(PlannerError::UnrecognizedMetaCommand(other.to_string())),
        }
    }

    pub fn prepare(&self, input: &str) -> Result<Statement, PlannerError> {
        let mut tokens = input.split_whitespace();
        let keyword = tokens.next().ok_or(PlannerError::EmptyStatement)?;
        let args: Vec<&str> = tokens.collect();

        match keyword.to_lowercase().as_str() {
            "insert" => self.prepare_insert(&args),
            "select" => {
                if !args.is_empty() {
                    return Err(PlannerError::SyntaxError(
                        "select takes no arguments".to_string(),
                    ));
                }
                Ok(Statement::Select)
            }
            "update" => Ok(Statement::Update),
            "delete" => Ok(Statement::Delete),
            _ => Err(PlannerError::UnrecognizedStatement(input.trim().to_string())),
        }
    }

    fn prepare_insert(&self, args: &[&str]) -> Result<Statement, PlannerError> {
        let [id, username, email] = args else {
            return Err(PlannerError::SyntaxError(format!(
                "insert expects <id> <username> <email>, got {} argument(s)",
                args.len()
            )));
        };
        let id: i32 = id
            .parse()
            .map_err(|_| PlannerError::InvalidId(id.to_string()))?;
        Ok(Statement::Insert(Row::new(id, username, email)))
    }
}

/// Parse one line of input into a statement.
pub fn prepare(input: &str) -> Result<Statement, PlannerError> {
    CommandParser::new().prepare(input)
}
