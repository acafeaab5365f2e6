use super::{Guard, On, ValidatesExistence};
use crate::Db;

use existence_core::{
    driver::operation::Exists,
    record::{ErrorCode, FieldError, Reason},
    schema::{BelongsToTarget, Model, ModelId},
    Error, Record, Result, Schema,
};

/// A registered existence rule with every attribute resolved against the
/// schema.
///
/// Holds no mutable state: checking any number of records, from any number
/// of tasks, only reads it.
#[derive(Debug, Clone)]
pub struct ExistenceValidator {
    model: ModelId,
    attributes: Vec<Attribute>,
    message: String,
    allow_nil: bool,
    allow_blank: bool,
    guard: Guard,
    on: On,
}

/// A `belongs_to` relation, reduced to the field names a check reads.
#[derive(Debug, Clone)]
struct Attribute {
    /// Relation name, errors are recorded under it
    name: String,
    foreign_key: String,
    target: Target,
}

#[derive(Debug, Clone)]
enum Target {
    Model(ModelId),
    Polymorphic { foreign_type: String },
}

impl ExistenceValidator {
    /// Resolves every attribute of `options` on `model`.
    ///
    /// Fails with [`Error::invalid_association`] if `model` is not in the
    /// schema or an attribute is not a `belongs_to` relation of the model.
    pub fn new(
        schema: &Schema,
        model: impl Into<ModelId>,
        options: ValidatesExistence,
    ) -> Result<Self> {
        let model = model.into();
        let Some(model) = schema.get_model(model) else {
            return Err(Error::invalid_association_with(
                format!("{model:?}"),
                "",
                "the model is not registered",
            ));
        };

        if options.attributes.is_empty() {
            return Err(Error::invalid_association_with(
                model.type_name(),
                "",
                "no attributes were given",
            ));
        }

        let attributes = options
            .attributes
            .iter()
            .map(|name| Attribute::resolve(schema, model, name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            model: model.id,
            attributes,
            message: options
                .message
                .unwrap_or_else(|| ErrorCode::DoesNotExist.default_message().to_string()),
            allow_nil: options.allow_nil,
            allow_blank: options.allow_blank,
            guard: options.guard,
            on: options.on,
        })
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn on(&self) -> On {
        self.on
    }

    /// Relation names the rule checks, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.attributes.iter().map(|attribute| attribute.name.as_str())
    }

    /// Checks every attribute of `record`, appending a `does_not_exist`
    /// error for each reference that is not satisfied.
    ///
    /// Errors already on the record are kept. `Err` is returned when the
    /// driver fails or `record` is not an instance of the rule's model.
    pub async fn check(&self, db: &Db, record: &mut dyn Record) -> Result<()> {
        if record.model() != self.model {
            existence_core::bail!(
                "existence rule for {:?} cannot check a record of {:?}",
                self.model,
                record.model()
            );
        }

        if !self.guard.permits(&*record) {
            tracing::debug!(model = ?self.model, "existence check skipped by guard");
            return Ok(());
        }

        for attribute in &self.attributes {
            if let Some(reason) = self.failure(db, &*record, attribute).await? {
                tracing::debug!(
                    attribute = %attribute.name,
                    ?reason,
                    "existence check failed"
                );
                record.errors_mut().add(
                    &attribute.name,
                    FieldError::does_not_exist(reason, &self.message),
                );
            }
        }

        Ok(())
    }

    /// Returns why `attribute` is not satisfied, `None` if it is.
    async fn failure(
        &self,
        db: &Db,
        record: &dyn Record,
        attribute: &Attribute,
    ) -> Result<Option<Reason>> {
        let key = record.get(&attribute.foreign_key);

        if (key.is_null() && self.allow_nil) || (key.is_blank() && self.allow_blank) {
            return Ok(None);
        }

        // An object assigned in memory stands in for a key that has not been
        // written yet.
        if key.is_null() && record.association(&attribute.name).is_satisfied() {
            return Ok(None);
        }

        let target = match attribute.target(db.schema(), record) {
            Ok(target) => target,
            Err(reason) => return Ok(Some(reason)),
        };

        if key.is_null() {
            return Ok(Some(Reason::MissingKey));
        }

        let Some(key) = key.cast(target.primary_key_ty()) else {
            return Ok(Some(Reason::InvalidKey));
        };

        let exists = db
            .exec(Exists {
                model: target.id,
                key,
            })
            .await?
            .into_exists()?;

        Ok((!exists).then_some(Reason::NotFound))
    }
}

impl Attribute {
    fn resolve(schema: &Schema, model: &Model, name: &str) -> Result<Self> {
        let relation = schema.relation(model, name).or_else(|| {
            name.strip_suffix("_id")
                .and_then(|name| schema.relation(model, name))
        });

        let Some((field, belongs_to)) =
            relation.and_then(|field| Some((field, field.ty.as_belongs_to()?)))
        else {
            return Err(Error::invalid_association(
                model.type_name(),
                name.strip_suffix("_id").unwrap_or(name),
            ));
        };

        let target = match belongs_to.target {
            BelongsToTarget::Model(target) => Target::Model(target),
            BelongsToTarget::Polymorphic { foreign_type } => Target::Polymorphic {
                foreign_type: schema.field(foreign_type).name.clone(),
            },
        };

        Ok(Self {
            name: field.name.clone(),
            foreign_key: belongs_to.foreign_key(schema).name.clone(),
            target,
        })
    }

    /// The model the foreign key points into for this record.
    fn target<'a>(
        &self,
        schema: &'a Schema,
        record: &dyn Record,
    ) -> core::result::Result<&'a Model, Reason> {
        match &self.target {
            Target::Model(id) => Ok(schema.model(*id)),
            Target::Polymorphic { foreign_type } => {
                let type_name = record.get(foreign_type);
                if type_name.is_blank() {
                    return Err(Reason::MissingType);
                }

                let Some(name) = type_name.as_str() else {
                    return Err(Reason::UnknownType(format!("{type_name:?}")));
                };

                schema
                    .model_by_name(name)
                    .ok_or_else(|| Reason::UnknownType(name.to_string()))
            }
        }
    }
}
