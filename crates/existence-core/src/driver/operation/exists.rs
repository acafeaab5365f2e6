use super::Operation;
use crate::{schema::ModelId, stmt::Value};

/// Existence query by primary key. Drivers answer it without loading the
/// row.
#[derive(Debug, Clone)]
pub struct Exists {
    /// Model whose storage is queried
    pub model: ModelId,

    /// Primary key, already cast to the model's key type
    pub key: Value,
}

impl From<Exists> for Operation {
    fn from(value: Exists) -> Self {
        Self::Exists(value)
    }
}
