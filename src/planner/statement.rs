use crate::types::row::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Append one row.
    Insert(Row),
    /// Print every row in append order.
    Select,
    /// Recognized but deliberately performs no storage mutation.
    Update,
    /// Recognized but deliberately performs no storage mutation.
    Delete,
}

impl Statement {
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Insert(_) => "insert",
            Statement::Select => "select",
            Statement::Update => "update",
            Statement::Delete => "delete",
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }
}

/// Commands prefixed with `$` that drive the shell rather than the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Print,
}
