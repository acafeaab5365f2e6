use crate::schema::{FieldTy, Model, ModelId, Schema};

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: ModelId,
}

impl HasOne {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<HasOne> for FieldTy {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
