mod builder;
pub use builder::{Builder, ModelDef};

mod field;
pub use field::{Field, FieldId, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

mod relation;
pub use relation::{BelongsTo, BelongsToTarget, HasMany, HasOne};

use indexmap::IndexMap;

/// Application schema: every registered model with its fields and
/// relations.
///
/// Built once at startup by [`Builder`] and read-only afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,

    /// Type name (as stored in polymorphic type fields) to model.
    type_names: IndexMap<String, ModelId>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a model by ID, `None` if the schema does not contain it
    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    /// Resolve a type name, as stored in a polymorphic `*_type` field, to its
    /// model.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.type_names.get(name).map(|id| self.model(*id))
    }

    /// Find a relation field of `model` by name. Returns `None` when the
    /// name is unknown or denotes a primitive field.
    pub fn relation(&self, model: impl Into<ModelId>, name: &str) -> Option<&Field> {
        self.model(model)
            .field_by_name(name)
            .filter(|field| field.is_relation())
    }
}
