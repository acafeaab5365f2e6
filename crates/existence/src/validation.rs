mod existence;
pub use existence::ExistenceValidator;

mod guard;
pub use guard::{Guard, Predicate};

mod on;
pub use on::On;

mod options;
pub use options::ValidatesExistence;

#[cfg(feature = "serde")]
pub use options::ExistenceOptions;

use crate::Db;

use existence_core::{schema::ModelId, Error, Record, Result, Schema};

use std::sync::Arc;

/// The rules registered for one model, run as a record is validated.
#[derive(Debug, Clone)]
pub struct Validations {
    schema: Arc<Schema>,
    model: ModelId,
    rules: Vec<ExistenceValidator>,
}

impl Validations {
    /// Starts an empty rule set for the model registered as `model`.
    pub fn new(schema: &Arc<Schema>, model: &str) -> Result<Self> {
        let Some(model) = schema.model_by_name(model) else {
            return Err(Error::invalid_association_with(
                model,
                "",
                "the model is not registered",
            ));
        };

        Ok(Self {
            schema: schema.clone(),
            model: model.id,
            rules: vec![],
        })
    }

    /// Registers an existence rule. Attributes are resolved immediately, a
    /// misconfigured rule fails here rather than on the first record.
    pub fn validates_existence_of(mut self, options: ValidatesExistence) -> Result<Self> {
        let rule = ExistenceValidator::new(&self.schema, self.model, options)?;
        self.rules.push(rule);
        Ok(self)
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn rules(&self) -> &[ExistenceValidator] {
        &self.rules
    }

    /// Runs every rule registered for the record's lifecycle phase, in
    /// registration order. Existing errors are kept.
    pub async fn run(&self, db: &Db, record: &mut dyn Record) -> Result<()> {
        if record.model() != self.model {
            existence_core::bail!(
                "validations for {:?} cannot run on a record of {:?}",
                self.model,
                record.model()
            );
        }

        let is_new = record.is_new();

        for rule in self.rules.iter().filter(|rule| rule.on().applies_to(is_new)) {
            rule.check(db, record).await?;
        }

        Ok(())
    }

    /// Clears the record's errors, runs the rules, and returns `true` if no
    /// error was recorded.
    pub async fn valid(&self, db: &Db, record: &mut dyn Record) -> Result<bool> {
        record.errors_mut().clear();
        self.run(db, record).await?;
        Ok(record.errors().is_empty())
    }

    /// Like [`Validations::valid`], returning [`Error::validation_failed`]
    /// when the record is invalid.
    pub async fn validate(&self, db: &Db, record: &mut dyn Record) -> Result<()> {
        if self.valid(db, record).await? {
            Ok(())
        } else {
            Err(Error::validation_failed(record.errors().full_messages()))
        }
    }
}
