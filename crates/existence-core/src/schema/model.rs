use super::{Field, FieldId, FieldTy, Name};
use crate::stmt;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// The name the model was declared with, as stored in polymorphic type
    /// fields
    pub(crate) type_name: String,

    /// Fields contained by the model
    pub fields: Vec<Field>,

    /// The field holding the model's primary key
    pub primary_key: FieldId,

    /// Table (or key space) the driver stores the model's rows in
    pub table_name: String,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn primary_key_field(&self) -> &Field {
        self.field(self.primary_key)
    }

    /// Type of the primary key. Foreign keys pointing at this model are cast
    /// to this type before an existence query.
    pub fn primary_key_ty(&self) -> &stmt::Type {
        match &self.primary_key_field().ty {
            FieldTy::Primitive(ty) => ty,
            ty => panic!("primary key must be a primitive field; ty={ty:?}"),
        }
    }

    /// Name stored in polymorphic type fields that reference this model.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
