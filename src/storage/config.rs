use crate::types::{MAX_PAGES, PAGE_SIZE, ROW_SIZE, RowIndex, error::DatabaseError};

/// Page geometry for a table's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageConfig {
    pub page_size: usize,
    pub max_pages: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}

impl StorageConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn validate(&self) -> Result<(), DatabaseError> {
        if self.page_size < ROW_SIZE {
            return Err(DatabaseError::InvalidConfig {
                reason: format!(
                    "page size {} cannot hold a single {}-byte row",
                    self.page_size, ROW_SIZE
                ),
            });
        }
        if self.max_pages == 0 {
            return Err(DatabaseError::InvalidConfig {
                reason: "max pages must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn rows_per_page(&self) -> RowIndex {
        self.page_size / ROW_SIZE
    }

    /// Bytes of a page actually used by rows; no row straddles a page boundary.
    pub fn page_capacity(&self) -> usize {
        self.rows_per_page() * ROW_SIZE
    }

    pub fn max_rows(&self) -> RowIndex {
        self.rows_per_page() * self.max_pages
    }
}
