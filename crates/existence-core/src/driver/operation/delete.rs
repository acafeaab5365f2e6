use super::Operation;
use crate::{schema::ModelId, stmt::Value};

#[derive(Debug, Clone)]
pub struct Delete {
    pub model: ModelId,

    pub key: Value,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
