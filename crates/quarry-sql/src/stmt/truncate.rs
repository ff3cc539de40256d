/// Removes every row of a table.
#[derive(Debug, Clone, Default)]
pub struct Truncate {
    pub table: String,
}

impl Truncate {
    pub fn new(table: impl Into<String>) -> Truncate {
        Truncate {
            table: table.into(),
        }
    }
}
