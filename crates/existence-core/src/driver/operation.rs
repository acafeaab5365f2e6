mod delete;
pub use delete::Delete;

mod exists;
pub use exists::Exists;

mod insert;
pub use insert::Insert;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Check whether a row with the given key exists
    Exists(Exists),

    /// Store a key-only row
    Insert(Insert),

    /// Remove a row by key
    Delete(Delete),
}

impl Operation {
    pub fn is_exists(&self) -> bool {
        matches!(self, Self::Exists(_))
    }

    pub fn as_exists(&self) -> Option<&Exists> {
        match self {
            Self::Exists(op) => Some(op),
            _ => None,
        }
    }
}
