use super::{Association, Errors, Record};
use crate::{
    schema::ModelId,
    stmt::Value,
};

use indexmap::IndexMap;

/// A record whose fields are held in a map.
///
/// Used where no typed model exists, such as fixtures and ad-hoc data.
#[derive(Debug, Clone)]
pub struct Entity {
    model: ModelId,
    new: bool,
    values: IndexMap<String, Value>,
    associations: IndexMap<String, Association>,
    errors: Errors,
}

impl Entity {
    /// A new, not yet persisted, instance of `model`.
    pub fn new(model: impl Into<ModelId>) -> Self {
        Self {
            model: model.into(),
            new: true,
            values: IndexMap::new(),
            associations: IndexMap::new(),
            errors: Errors::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_association(mut self, name: impl Into<String>, association: Association) -> Self {
        self.set_association(name, association);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn set_association(
        &mut self,
        name: impl Into<String>,
        association: Association,
    ) -> &mut Self {
        self.associations.insert(name.into(), association);
        self
    }

    /// Marks the record as persisted.
    pub fn mark_persisted(&mut self) -> &mut Self {
        self.new = false;
        self
    }
}

impl Record for Entity {
    fn model(&self) -> ModelId {
        self.model
    }

    fn is_new(&self) -> bool {
        self.new
    }

    fn get(&self, field: &str) -> Value {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn association(&self, name: &str) -> Association {
        self.associations.get(name).cloned().unwrap_or_default()
    }

    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }
}
