use super::{
    BelongsTo, BelongsToTarget, Field, FieldTy, HasMany, HasOne, Model, ModelId, Name, Schema,
};
use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// Collects model definitions and resolves them into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<ModelDef>,
}

/// Declaration of one model. Relations reference other models by name and
/// are resolved when the schema is built.
#[derive(Debug, Clone)]
pub struct ModelDef {
    name: String,
    table_name: Option<String>,
    fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
enum FieldDef {
    Key {
        name: String,
        ty: stmt::Type,
    },
    Primitive {
        name: String,
        ty: stmt::Type,
    },
    BelongsTo {
        name: String,
        target: String,
        foreign_key: Option<String>,
    },
    BelongsToPolymorphic {
        name: String,
        key_ty: stmt::Type,
        foreign_key: Option<String>,
        foreign_type: Option<String>,
    },
    HasMany {
        name: String,
        target: String,
    },
    HasOne {
        name: String,
        target: String,
    },
}

/// A `belongs_to` whose key fields are resolved after every declared field
/// has been placed.
struct PendingBelongsTo {
    index: usize,
    target: PendingTarget,
    foreign_key: String,
    key_ty: stmt::Type,
}

enum PendingTarget {
    Model(ModelId),
    Polymorphic { foreign_type: String },
}

impl Builder {
    pub fn model(&mut self, model: ModelDef) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut type_names = IndexMap::new();
        let mut table_names = IndexMap::new();

        for (index, def) in self.models.iter().enumerate() {
            if type_names.insert(def.name.clone(), ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    def.name
                )));
            }

            if let Some(other) = table_names.insert(def.resolved_table_name(), &def.name) {
                return Err(Error::invalid_schema(format!(
                    "models `{other}` and `{}` share table `{}`",
                    def.name,
                    def.resolved_table_name()
                )));
            }
        }

        // Primary key types are needed up front to type foreign keys that
        // point at models declared later.
        let key_tys = self
            .models
            .iter()
            .map(ModelDef::key_ty)
            .collect::<Result<Vec<_>>>()?;

        let mut models = IndexMap::new();

        for (index, def) in self.models.iter().enumerate() {
            let model = def.build(ModelId(index), &type_names, &key_tys)?;
            models.insert(model.id, model);
        }

        Ok(Schema { models, type_names })
    }
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    /// Overrides the default (pluralized snake case) table name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Declares the primary key field.
    pub fn key(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.fields.push(FieldDef::Key {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.fields.push(FieldDef::Primitive {
            name: name.into(),
            ty,
        });
        self
    }

    /// Declares `name` as a reference to `target`. The foreign key is
    /// `<name>_id` and takes the type of the target's primary key.
    pub fn belongs_to(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(FieldDef::BelongsTo {
            name: name.into(),
            target: target.into(),
            foreign_key: None,
        });
        self
    }

    /// Same as [`ModelDef::belongs_to`] with an explicit foreign key field.
    pub fn belongs_to_with_key(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldDef::BelongsTo {
            name: name.into(),
            target: target.into(),
            foreign_key: Some(foreign_key.into()),
        });
        self
    }

    /// Declares a polymorphic reference. The foreign key is `<name>_id`
    /// (typed `key_ty`) and the referenced model's type name is stored in
    /// `<name>_type`.
    pub fn belongs_to_polymorphic(mut self, name: impl Into<String>, key_ty: stmt::Type) -> Self {
        self.fields.push(FieldDef::BelongsToPolymorphic {
            name: name.into(),
            key_ty,
            foreign_key: None,
            foreign_type: None,
        });
        self
    }

    /// Same as [`ModelDef::belongs_to_polymorphic`] with explicit key and
    /// type fields.
    pub fn belongs_to_polymorphic_with(
        mut self,
        name: impl Into<String>,
        key_ty: stmt::Type,
        foreign_key: impl Into<String>,
        foreign_type: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldDef::BelongsToPolymorphic {
            name: name.into(),
            key_ty,
            foreign_key: Some(foreign_key.into()),
            foreign_type: Some(foreign_type.into()),
        });
        self
    }

    pub fn has_many(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(FieldDef::HasMany {
            name: name.into(),
            target: target.into(),
        });
        self
    }

    pub fn has_one(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(FieldDef::HasOne {
            name: name.into(),
            target: target.into(),
        });
        self
    }

    fn resolved_table_name(&self) -> String {
        self.table_name
            .clone()
            .unwrap_or_else(|| Name::new(&self.name).table_name())
    }

    fn key_ty(&self) -> Result<stmt::Type> {
        let mut keys = self.fields.iter().filter_map(|field| match field {
            FieldDef::Key { ty, .. } => Some(*ty),
            _ => None,
        });

        match (keys.next(), keys.next()) {
            (Some(ty), None) => Ok(ty),
            (None, _) => Err(Error::invalid_schema(format!(
                "model `{}` does not declare a primary key",
                self.name
            ))),
            (Some(_), Some(_)) => Err(Error::invalid_schema(format!(
                "model `{}` declares more than one primary key; composite keys are not supported",
                self.name
            ))),
        }
    }

    fn build(
        &self,
        id: ModelId,
        type_names: &IndexMap<String, ModelId>,
        key_tys: &[stmt::Type],
    ) -> Result<Model> {
        let mut fields: Vec<Field> = vec![];
        let mut primary_key = None;
        let mut pending = vec![];

        let resolve = |relation: &str, target: &str| -> Result<ModelId> {
            type_names.get(target).copied().ok_or_else(|| {
                Error::invalid_schema(format!(
                    "relation `{}::{relation}` targets model `{target}`, which is not registered",
                    self.name,
                ))
            })
        };

        for def in &self.fields {
            let index = fields.len();
            let (field_name, ty, nullable) = match def {
                FieldDef::Key { name, ty } => {
                    primary_key = Some(id.field(index));
                    (name, FieldTy::Primitive(*ty), false)
                }
                FieldDef::Primitive { name, ty } => (name, FieldTy::Primitive(*ty), false),
                FieldDef::BelongsTo {
                    name,
                    target,
                    foreign_key,
                } => {
                    let target = resolve(name, target)?;
                    pending.push(PendingBelongsTo {
                        index,
                        target: PendingTarget::Model(target),
                        foreign_key: foreign_key.clone().unwrap_or_else(|| format!("{name}_id")),
                        key_ty: key_tys[target.0],
                    });
                    (name, placeholder_belongs_to(id), true)
                }
                FieldDef::BelongsToPolymorphic {
                    name,
                    key_ty,
                    foreign_key,
                    foreign_type,
                } => {
                    pending.push(PendingBelongsTo {
                        index,
                        target: PendingTarget::Polymorphic {
                            foreign_type: foreign_type
                                .clone()
                                .unwrap_or_else(|| format!("{name}_type")),
                        },
                        foreign_key: foreign_key.clone().unwrap_or_else(|| format!("{name}_id")),
                        key_ty: *key_ty,
                    });
                    (name, placeholder_belongs_to(id), true)
                }
                FieldDef::HasMany { name, target } => {
                    let target = resolve(name, target)?;
                    (name, HasMany { target }.into(), true)
                }
                FieldDef::HasOne { name, target } => {
                    let target = resolve(name, target)?;
                    (name, HasOne { target }.into(), true)
                }
            };

            if fields.iter().any(|field| field.name == *field_name) {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{field_name}` is declared more than once",
                    self.name
                )));
            }

            fields.push(Field {
                id: id.field(index),
                name: field_name.clone(),
                ty,
                nullable,
                primary_key: primary_key == Some(id.field(index)),
            });
        }

        for belongs_to in pending {
            let foreign_key = key_field(
                &mut fields,
                id,
                &self.name,
                &belongs_to.foreign_key,
                belongs_to.key_ty,
            )?;

            let target = match belongs_to.target {
                PendingTarget::Model(target) => BelongsToTarget::Model(target),
                PendingTarget::Polymorphic { foreign_type } => BelongsToTarget::Polymorphic {
                    foreign_type: key_field(
                        &mut fields,
                        id,
                        &self.name,
                        &foreign_type,
                        stmt::Type::String,
                    )?,
                },
            };

            fields[belongs_to.index].ty = BelongsTo {
                target,
                foreign_key,
            }
            .into();
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::invalid_schema(format!(
                "model `{}` does not declare a primary key",
                self.name
            )));
        };

        Ok(Model {
            id,
            name: Name::new(&self.name),
            type_name: self.name.clone(),
            fields,
            primary_key,
            table_name: self.resolved_table_name(),
        })
    }
}

fn placeholder_belongs_to(model: ModelId) -> FieldTy {
    BelongsTo {
        target: BelongsToTarget::Model(model),
        foreign_key: model.field(usize::MAX),
    }
    .into()
}

/// Finds the primitive field `field_name`, adding it as a nullable field of
/// type `ty` when the model does not declare it.
fn key_field(
    fields: &mut Vec<Field>,
    model: ModelId,
    model_name: &str,
    field_name: &str,
    ty: stmt::Type,
) -> Result<super::FieldId> {
    if let Some(field) = fields.iter().find(|field| field.name == field_name) {
        if !field.ty.is_primitive() {
            return Err(Error::invalid_schema(format!(
                "field `{model_name}::{field_name}` is used as a foreign key but is a {} relation",
                field.ty.kind_name(),
            )));
        }
        return Ok(field.id);
    }

    let id = model.field(fields.len());
    fields.push(Field {
        id,
        name: field_name.to_string(),
        ty: FieldTy::Primitive(ty),
        nullable: true,
        primary_key: false,
    });
    Ok(id)
}
