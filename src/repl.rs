use std::io::Write;

use log::warn;

use crate::{
    executor::execute,
    planner::{CommandParser, statement::MetaCommand},
    storage::table::Table,
    types::{ROW_SIZE, error::DatabaseError},
};

pub const PROMPT: &str = "charvelDB > ";
pub const CONTINUATION_PROMPT: &str = "         -> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Handle one line of shell input.
///
/// Parse errors and a full table are reported on `out` and the loop continues;
/// any other storage error is returned to the caller.
pub fn process_command<W: Write>(
    command: &str,
    table: &mut Table,
    out: &mut W,
) -> Result<LoopControl, DatabaseError> {
    let parser = CommandParser::new();
    let command = command.trim();
    if command.is_empty() {
        return Ok(LoopControl::Continue);
    }

    if parser.is_meta_command(command) {
        return match parser.parse_meta_command(command) {
            Ok(MetaCommand::Exit) => Ok(LoopControl::Exit),
            Ok(MetaCommand::Print) => {
                print_constants(table, out)?;
                Ok(LoopControl::Continue)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(LoopControl::Continue)
            }
        };
    }

    let statement = match parser.prepare(command) {
        Ok(statement) => statement,
        Err(err) => {
            writeln!(out, "Error in statement construction: {}", err)?;
            return Ok(LoopControl::Continue);
        }
    };

    match execute(&statement, table, out) {
        Ok(_) => {}
        Err(err @ DatabaseError::CapacityExceeded { .. }) => {
            writeln!(out, "Error: {}", err)?;
        }
        Err(err) => return Err(err),
    }
    Ok(LoopControl::Continue)
}

pub fn print_constants<W: Write>(table: &Table, out: &mut W) -> Result<(), DatabaseError> {
    let config = table.config();
    writeln!(out, "Constants:")?;
    writeln!(out, "ROW_SIZE: {}", ROW_SIZE)?;
    writeln!(out, "PAGE_SIZE: {}", config.page_size)?;
    writeln!(out, "ROWS_PER_PAGE: {}", config.rows_per_page())?;
    writeln!(out, "MAX_PAGES: {}", config.max_pages)?;
    writeln!(out, "TABLE_MAX_ROWS: {}", config.max_rows())?;
    writeln!(out, "ROW_COUNT: {}", table.row_count())?;
    Ok(())
}

/// Close the table once the shell loop is over, whether it ended cleanly or not.
///
/// A failure of the loop takes precedence over a failure to close.
pub fn finish_session<E: From<DatabaseError>>(
    table: Table,
    outcome: Result<(), E>,
) -> Result<(), E> {
    let closed = table.close();
    match outcome {
        Ok(()) => closed.map_err(E::from),
        Err(err) => {
            if let Err(close_err) = closed {
                warn!("Failed to close table after error: {}", close_err);
            }
            Err(err)
        }
    }
}
