use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    storage::{TableAddress, config::StorageConfig},
    types::{PageId, ROW_SIZE, error::DatabaseError},
};

/// In-memory copy of one page.
pub struct CachedPage {
    pub data: Box<[u8]>,
    pub is_dirty: bool,
}

/// A page slot is loaded at most once; after that memory is authoritative and
/// the file is never consulted again for this page.
pub enum PageSlot {
    Unloaded,
    Loaded(CachedPage),
}

impl PageSlot {
    fn get_or_load<F>(&mut self, load: F) -> Result<&mut CachedPage, DatabaseError>
    where
        F: FnOnce() -> Result<CachedPage, DatabaseError>,
    {
        if let PageSlot::Unloaded = self {
            *self = PageSlot::Loaded(load()?);
        }
        match self {
            PageSlot::Loaded(page) => Ok(page),
            PageSlot::Unloaded => unreachable!("page slot populated above"),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PageSlot::Loaded(_))
    }
}

pub struct Pager {
    path: PathBuf,
    file: File,
    file_length: u64,
    config: StorageConfig,
    slots: Vec<PageSlot>,
}

impl Pager {
    pub fn open<P: AsRef<Path>>(path: P, config: StorageConfig) -> Result<Self, DatabaseError> {
        config.validate()?;
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let file_length = file.metadata()?.len();
        info!(
            "Opened pager at {} ({} bytes, page capacity {} bytes, {} page slots)",
            path.display(),
            file_length,
            config.page_capacity(),
            config.max_pages
        );
        let slots = (0..config.max_pages).map(|_| PageSlot::Unloaded).collect();
        Ok(Self {
            path: path.to_path_buf(),
            file,
            file_length,
            config,
            slots,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the backing file when the pager was opened.
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn page_capacity(&self) -> usize {
        self.config.page_capacity()
    }

    pub fn max_pages(&self) -> usize {
        self.config.max_pages
    }

    fn page_offset(&self, page_id: PageId) -> u64 {
        page_id as u64 * self.page_capacity() as u64
    }

    pub fn is_loaded(&self, page_id: PageId) -> bool {
        self.slots.get(page_id).is_some_and(PageSlot::is_loaded)
    }

    pub fn is_dirty(&self, page_id: PageId) -> bool {
        matches!(
            self.slots.get(page_id),
            Some(PageSlot::Loaded(CachedPage { is_dirty: true, .. }))
        )
    }

    pub fn loaded_page_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_loaded()).count()
    }

    fn check_page_id(&self, page_id: PageId) -> Result<(), DatabaseError> {
        if page_id >= self.slots.len() {
            return Err(DatabaseError::PageOutOfBounds {
                page_id,
                max_pages: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Returns the end offset of the accessed range within the page.
    fn check_range(&self, address: TableAddress, length: usize) -> Result<usize, DatabaseError> {
        self.check_page_id(address.page_id)?;
        match address.byte_offset.checked_add(length) {
            Some(end) if end <= self.page_capacity() => Ok(end),
            _ => Err(DatabaseError::AddressOutOfRange {
                page_id: address.page_id,
                byte_offset: address.byte_offset,
                length,
                page_capacity: self.page_capacity(),
            }),
        }
    }

    /// Load a page on first touch. Bytes past the end of the file stay zero.
    fn page_mut(&mut self, page_id: PageId) -> Result<&mut CachedPage, DatabaseError> {
        self.check_page_id(page_id)?;
        let offset = self.page_offset(page_id);
        let capacity = self.page_capacity();
        let Self { file, slots, .. } = self;
        slots[page_id].get_or_load(|| {
            let mut data = Vec::with_capacity(capacity);
            file.seek(SeekFrom::Start(offset))?;
            Read::by_ref(file)
                .take(capacity as u64)
                .read_to_end(&mut data)?;
            debug!(
                "Loaded page {} from offset {} ({} of {} bytes on disk)",
                page_id,
                offset,
                data.len(),
                capacity
            );
            data.resize(capacity, 0);
            Ok(CachedPage {
                data: data.into_boxed_slice(),
                is_dirty: false,
            })
        })
    }

    /// Copy out the `ROW_SIZE` bytes stored at `address`.
    pub fn read(&mut self, address: TableAddress) -> Result<Vec<u8>, DatabaseError> {
        let end = self.check_range(address, ROW_SIZE)?;
        let page = self.page_mut(address.page_id)?;
        Ok(page.data[address.byte_offset..end].to_vec())
    }

    /// Overwrite bytes at `address` in memory only; nothing reaches the file until `flush`.
    pub fn write(&mut self, address: TableAddress, bytes: &[u8]) -> Result<(), DatabaseError> {
        let end = self.check_range(address, bytes.len())?;
        let page = self.page_mut(address.page_id)?;
        page.data[address.byte_offset..end].copy_from_slice(bytes);
        page.is_dirty = true;
        Ok(())
    }

    /// Write the first `byte_count` bytes of a cached page to its place in the file.
    ///
    /// A page that was never loaded has nothing newer than the file, so it is skipped.
    pub fn flush(&mut self, page_id: PageId, byte_count: usize) -> Result<(), DatabaseError> {
        if byte_count > self.page_capacity() {
            return Err(DatabaseError::FlushOutOfRange {
                byte_count,
                page_capacity: self.page_capacity(),
            });
        }
        if byte_count == 0 {
            return Ok(());
        }
        self.check_page_id(page_id)?;
        let offset = self.page_offset(page_id);
        let Self { file, slots, .. } = self;
        match &mut slots[page_id] {
            PageSlot::Unloaded => {
                debug!("Skipping flush of unloaded page {}", page_id);
            }
            PageSlot::Loaded(page) => {
                file.seek(SeekFrom::Start(offset))?;
                file.write_all(&page.data[..byte_count])?;
                file.flush()?;
                page.is_dirty = false;
                debug!(
                    "Flushed page {} ({} bytes at offset {})",
                    page_id, byte_count, offset
                );
            }
        }
        Ok(())
    }

    /// Release the file handle. Cached pages are not flushed.
    pub fn close(self) -> Result<(), DatabaseError> {
        let unflushed = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, PageSlot::Loaded(CachedPage { is_dirty: true, .. })))
            .count();
        if unflushed > 0 {
            warn!(
                "Closing {} with {} unflushed page(s)",
                self.path.display(),
                unflushed
            );
        }
        self.file.sync_all()?;
        info!("Closed pager at {}", self.path.display());
        Ok(())
    }
}
