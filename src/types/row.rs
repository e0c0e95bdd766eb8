use std::fmt;

use crate::types::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
    error::DatabaseError,
};

/*
 * Row Layout on Disk (291 bytes, fixed)
 * ┌────────────┬──────────────────────┬──────────────────────────────┐
 * │ id (4, BE) │ username (32, zero-  │ email (255, zero-padded)     │
 * │            │ padded)              │                              │
 * └────────────┴──────────────────────┴──────────────────────────────┘
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    username: [u8; USERNAME_SIZE],
    email: [u8; EMAIL_SIZE],
}

impl Row {
    /// Build a row, truncating text that exceeds the field capacity.
    pub fn new(id: i32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: Self::pad_field(username.as_bytes()),
            email: Self::pad_field(email.as_bytes()),
        }
    }

    fn pad_field<const N: usize>(input: &[u8]) -> [u8; N] {
        let mut field = [0u8; N];
        let len = input.len().min(N);
        field[..len].copy_from_slice(&input[..len]);
        field
    }

    /// Stored username bytes, padding included.
    pub fn username_bytes(&self) -> &[u8; USERNAME_SIZE] {
        &self.username
    }

    /// Stored email bytes, padding included.
    pub fn email_bytes(&self) -> &[u8; EMAIL_SIZE] {
        &self.email
    }

    /// Username with trailing NUL/space padding stripped, for display.
    pub fn username(&self) -> String {
        Self::display_field(&self.username)
    }

    /// Email with trailing NUL/space padding stripped, for display.
    pub fn email(&self) -> String {
        Self::display_field(&self.email)
    }

    fn display_field(field: &[u8]) -> String {
        let end = field
            .iter()
            .rposition(|&b| b != 0 && b != b' ')
            .map_or(0, |pos| pos + 1);
        String::from_utf8_lossy(&field[..end]).into_owned()
    }

    pub fn to_bytes(&self) -> [u8; ROW_SIZE] {
        let mut buffer = [0u8; ROW_SIZE];
        buffer[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_be_bytes());
        buffer[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE].copy_from_slice(&self.username);
        buffer[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE].copy_from_slice(&self.email);
        buffer
    }

    /// Decode a row from the first `ROW_SIZE` bytes of `bytes`.
    ///
    /// Padding is kept as stored; a buffer shorter than `ROW_SIZE` is a caller bug
    /// and reported as `InvalidBuffer`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DatabaseError> {
        if bytes.len() < ROW_SIZE {
            return Err(DatabaseError::InvalidBuffer {
                expected: ROW_SIZE,
                actual: bytes.len(),
            });
        }

        let id = i32::from_be_bytes([
            bytes[ID_OFFSET],
            bytes[ID_OFFSET + 1],
            bytes[ID_OFFSET + 2],
            bytes[ID_OFFSET + 3],
        ]);

        let mut username = [0u8; USERNAME_SIZE];
        username.copy_from_slice(&bytes[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);

        let mut email = [0u8; EMAIL_SIZE];
        email.copy_from_slice(&bytes[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);

        Ok(Row {
            id,
            username,
            email,
        })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}
