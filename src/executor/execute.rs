use std::io::Write;

use log::debug;

use crate::{
    executor::cursor::ScanIterator,
    planner::statement::Statement,
    storage::table::Table,
    types::{RowIndex, error::DatabaseError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Inserted { row_index: RowIndex },
    Selected { row_count: usize },
    /// Update and delete are accepted but leave the table as it was.
    Unchanged,
}

/// Run one statement against the table, writing any result rows to `out`.
pub fn execute<W: Write>(
    statement: &Statement,
    table: &mut Table,
    out: &mut W,
) -> Result<ExecuteOutcome, DatabaseError> {
    if !statement.is_mutation() {
        debug!("Running read-only {} statement", statement.keyword());
    }
    match statement {
        Statement::Insert(row) => {
            let row_index = table.append(row)?;
            debug!("Inserted row {} at index {}", row.id, row_index);
            Ok(ExecuteOutcome::Inserted { row_index })
        }
        Statement::Select => {
            let mut row_count = 0;
            for row in ScanIterator::new(table) {
                writeln!(out, "{}", row?)?;
                row_count += 1;
            }
            Ok(ExecuteOutcome::Selected { row_count })
        }
        Statement::Update | Statement::Delete => Ok(ExecuteOutcome::Unchanged),
    }
}
