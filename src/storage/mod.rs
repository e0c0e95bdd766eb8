pub mod config;
pub mod pager;
pub mod table;

use crate::types::PageId;

/// Physical location of a row: a page and a byte offset inside it.
///
/// Always derived from a row index via `Table::address_of`; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableAddress {
    pub page_id: PageId,
    pub byte_offset: usize,
}

impl TableAddress {
    pub fn new(page_id: PageId, byte_offset: usize) -> Self {
        Self {
            page_id,
            byte_offset,
        }
    }
}
