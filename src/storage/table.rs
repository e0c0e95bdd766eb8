use std::path::Path;

use log::{info, warn};

use crate::{
    storage::{TableAddress, config::StorageConfig, pager::Pager},
    types::{ROW_SIZE, RowIndex, error::DatabaseError, row::Row},
};

/// The single table of a store: a row counter over a pager.
///
/// Rows are only ever appended, so `row_count` never decreases.
pub struct Table {
    pager: Pager,
    row_count: RowIndex,
}

impl Table {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        Self::open_with_config(path, StorageConfig::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: StorageConfig,
    ) -> Result<Self, DatabaseError> {
        let pager = Pager::open(path, config)?;
        let file_length = pager.file_length();
        let row_count = (file_length / ROW_SIZE as u64) as RowIndex;
        let trailing = file_length % ROW_SIZE as u64;
        if trailing != 0 {
            warn!(
                "Ignoring {} trailing byte(s) of a partial row in {}",
                trailing,
                pager.path().display()
            );
        }
        if row_count > config.max_rows() {
            return Err(DatabaseError::CapacityExceeded {
                row_count,
                max_rows: config.max_rows(),
            });
        }
        info!(
            "Opened table at {} with {} row(s)",
            pager.path().display(),
            row_count
        );
        Ok(Self { pager, row_count })
    }

    pub fn row_count(&self) -> RowIndex {
        self.row_count
    }

    pub fn rows_per_page(&self) -> RowIndex {
        self.pager.config().rows_per_page()
    }

    pub fn max_rows(&self) -> RowIndex {
        self.pager.config().max_rows()
    }

    pub fn config(&self) -> &StorageConfig {
        self.pager.config()
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Translate a row index into its page and byte offset.
    ///
    /// Not checked against `row_count`: the address of the next unwritten row is valid.
    pub fn address_of(&self, row_index: RowIndex) -> TableAddress {
        let rows_per_page = self.rows_per_page();
        TableAddress::new(
            row_index / rows_per_page,
            (row_index % rows_per_page) * ROW_SIZE,
        )
    }

    pub fn is_full(&self) -> bool {
        self.row_count >= self.max_rows()
    }

    /// Append a row after the last one. On error `row_count` is left untouched.
    pub fn append(&mut self, row: &Row) -> Result<RowIndex, DatabaseError> {
        if self.is_full() {
            return Err(DatabaseError::CapacityExceeded {
                row_count: self.row_count,
                max_rows: self.max_rows(),
            });
        }
        let row_index = self.row_count;
        let address = self.address_of(row_index);
        self.pager.write(address, &row.to_bytes())?;
        self.row_count += 1;
        Ok(row_index)
    }

    /// Read and decode the row at `address`. Callers must only pass addresses of existing rows.
    pub fn fetch(&mut self, address: TableAddress) -> Result<Row, DatabaseError> {
        let bytes = self.pager.read(address)?;
        Row::from_bytes(&bytes)
    }

    /// Flush every populated page and release the backing file.
    pub fn close(mut self) -> Result<(), DatabaseError> {
        let rows_per_page = self.rows_per_page();
        let full_pages = self.row_count / rows_per_page;
        let page_capacity = self.pager.page_capacity();
        for page_id in 0..full_pages {
            self.pager.flush(page_id, page_capacity)?;
        }
        let remaining_rows = self.row_count % rows_per_page;
        self.pager.flush(full_pages, remaining_rows * ROW_SIZE)?;
        info!(
            "Closing table at {} with {} row(s)",
            self.pager.path().display(),
            self.row_count
        );
        self.pager.close()
    }
}
