use std::path::PathBuf;

use tempfile::{Builder, TempDir};

use crate::{
    storage::{config::StorageConfig, pager::Pager, table::Table},
    types::{DEFAULT_DB_PATH, error::DatabaseError, row::Row},
};

/// A backing file inside a private temporary directory, removed on drop.
pub struct TempDatabase {
    pub path: PathBuf,
    pub config: StorageConfig,
    _dir: TempDir,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self::with_prefix("charvel_test")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let dir = Builder::new()
            .prefix(prefix)
            .tempdir()
            .expect("Failed to create temporary directory");
        Self {
            path: dir.path().join(DEFAULT_DB_PATH),
            config: StorageConfig::default(),
            _dir: dir,
        }
    }

    pub fn with_config(mut self, config: StorageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open_table(&self) -> Result<Table, DatabaseError> {
        Table::open_with_config(&self.path, self.config)
    }

    pub fn open_pager(&self) -> Result<Pager, DatabaseError> {
        Pager::open(&self.path, self.config)
    }

    pub fn file_len(&self) -> u64 {
        std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_user_row(id: i32) -> Row {
    Row::new(id, &format!("user{}", id), &format!("person{}@example.com", id))
}
