pub mod error;
pub mod row;

// Common type aliases
pub type PageId = usize;
pub type RowIndex = usize;

// Row layout: id | username | email
pub const ID_SIZE: usize = std::mem::size_of::<i32>();
pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

// Default storage geometry
pub const PAGE_SIZE: usize = 4096;
pub const MAX_PAGES: usize = 100;

pub const DEFAULT_DB_PATH: &str = "charvel.db";
