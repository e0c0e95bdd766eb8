use charvel::types::{EMAIL_SIZE, USERNAME_SIZE, row::Row};

#[derive(Debug, Clone, Copy)]
pub enum RowType {
    /// Short text, mostly padding on disk.
    Small,
    /// Both text fields filled to capacity.
    Full,
}

pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_row(&self, id: i32, row_type: RowType) -> Row {
        match row_type {
            RowType::Small => Row::new(id, &format!("u{}", id), &format!("u{}@x.io", id)),
            RowType::Full => {
                let username = format!("{:x<width$}", id, width = USERNAME_SIZE);
                let email = format!("{:_<width$}", id, width = EMAIL_SIZE);
                Row::new(id, &username, &email)
            }
        }
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
