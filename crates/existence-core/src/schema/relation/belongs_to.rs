use crate::schema::{Field, FieldId, FieldTy, Model, ModelId, Schema};

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model (or, when polymorphic, the field naming the model) the relation
    /// points at.
    pub target: BelongsToTarget,

    /// Field on the source model holding the referenced primary key.
    pub foreign_key: FieldId,
}

#[derive(Debug, Clone)]
pub enum BelongsToTarget {
    /// The relation always references rows of one model.
    Model(ModelId),

    /// The referenced model's type name is stored next to the foreign key.
    Polymorphic {
        /// Field holding the type name, e.g. `commentable_type`.
        foreign_type: FieldId,
    },
}

impl BelongsTo {
    pub fn is_polymorphic(&self) -> bool {
        matches!(self.target, BelongsToTarget::Polymorphic { .. })
    }

    /// The statically declared target, `None` for polymorphic relations.
    pub fn target<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        match self.target {
            BelongsToTarget::Model(id) => Some(schema.model(id)),
            BelongsToTarget::Polymorphic { .. } => None,
        }
    }

    pub fn foreign_key<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.foreign_key)
    }

    pub fn foreign_type<'a>(&self, schema: &'a Schema) -> Option<&'a Field> {
        match self.target {
            BelongsToTarget::Polymorphic { foreign_type } => Some(schema.field(foreign_type)),
            BelongsToTarget::Model(_) => None,
        }
    }
}

impl From<BelongsTo> for FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
