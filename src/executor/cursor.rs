use crate::{
    storage::{TableAddress, table::Table},
    types::{error::DatabaseError, row::Row},
};

/// A forward-only position over a table's rows.
///
/// The row count is read from the table on every check, so rows appended
/// through `table_mut` while the cursor is alive become reachable.
pub struct Cursor<'a> {
    table: &'a mut Table,
    position: i64,
}

impl<'a> Cursor<'a> {
    /// Positioned on the first row.
    pub fn start(table: &'a mut Table) -> Self {
        Self { table, position: 0 }
    }

    /// Positioned on the last row; exhausted when the table is empty.
    pub fn end(table: &'a mut Table) -> Self {
        let position = table.row_count() as i64 - 1;
        Self { table, position }
    }

    /// Positioned before the first row; call `advance` before reading.
    pub fn iter(table: &'a mut Table) -> Self {
        Self {
            table,
            position: -1,
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position < 0 || self.position >= self.table.row_count() as i64
    }

    /// Step forward one row; returns whether the new position holds a row.
    pub fn advance(&mut self) -> bool {
        self.position += 1;
        !self.is_exhausted()
    }

    fn exhausted_error(&self) -> DatabaseError {
        DatabaseError::CursorExhausted {
            position: self.position,
            row_count: self.table.row_count(),
        }
    }

    pub fn address(&self) -> Result<TableAddress, DatabaseError> {
        if self.is_exhausted() {
            return Err(self.exhausted_error());
        }
        Ok(self.table.address_of(self.position as usize))
    }

    pub fn value(&mut self) -> Result<Row, DatabaseError> {
        let address = self.address()?;
        self.table.fetch(address)
    }

    pub fn table(&self) -> &Table {
        &*self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut *self.table
    }
}

/// Iterator over every row of a table, in append order.
pub struct ScanIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> ScanIterator<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self {
            cursor: Cursor::iter(table),
        }
    }
}

impl Iterator for ScanIterator<'_> {
    type Item = Result<Row, DatabaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.advance() {
            return None;
        }
        Some(self.cursor.value())
    }
}
