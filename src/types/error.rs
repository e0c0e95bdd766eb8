use thiserror::Error;

use crate::types::{PageId, RowIndex};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table is full ({row_count} rows, max: {max_rows})")]
    CapacityExceeded { row_count: RowIndex, max_rows: RowIndex },

    #[error("Invalid buffer: expected {expected} bytes, got {actual} bytes")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("Page {page_id} out of bounds (max pages: {max_pages})")]
    PageOutOfBounds { page_id: PageId, max_pages: usize },

    #[error(
        "Access of {length} bytes at offset {byte_offset} of page {page_id} exceeds page capacity {page_capacity}"
    )]
    AddressOutOfRange {
        page_id: PageId,
        byte_offset: usize,
        length: usize,
        page_capacity: usize,
    },

    #[error("Flush of {byte_count} bytes exceeds page capacity {page_capacity}")]
    FlushOutOfRange {
        byte_count: usize,
        page_capacity: usize,
    },

    #[error("Cursor at position {position} is outside the table ({row_count} rows)")]
    CursorExhausted { position: i64, row_count: RowIndex },

    #[error("Invalid storage configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
