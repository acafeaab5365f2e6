use super::Operation;
use crate::{schema::ModelId, stmt::Value};

#[derive(Debug, Clone)]
pub struct Insert {
    pub model: ModelId,

    pub key: Value,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
