mod builder;
pub use builder::Builder;

use existence_core::{
    driver::{
        operation::{Delete, Exists, Insert},
        Driver, Operation, Response,
    },
    schema::{Model, ModelId},
    stmt::Value,
    Error, Result, Schema,
};

use std::{fmt, sync::Arc};

/// Handle to a schema and the driver storing its rows. Cloning is cheap and
/// clones share the driver.
#[derive(Clone)]
pub struct Db {
    schema: Arc<Schema>,
    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Create storage for every model of the schema.
    pub async fn push_schema(&self) -> Result<()> {
        tracing::debug!(models = self.schema.models.len(), "pushing schema");
        self.driver.push_schema(&self.schema).await
    }

    /// Execute a raw driver operation
    pub async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        tracing::trace!(?op, "exec");
        self.driver.exec(&self.schema, op).await
    }

    fn model(&self, id: impl Into<ModelId>) -> Result<&Model> {
        let id = id.into();
        self.schema
            .get_model(id)
            .ok_or_else(|| Error::invalid_schema(format!("{id:?} is not in the schema")))
    }

    /// Returns `true` if `model` has a row keyed by `key`. Keys that do not
    /// convert to the model's key type never match.
    pub async fn exists(&self, model: impl Into<ModelId>, key: impl Into<Value>) -> Result<bool> {
        let model = self.model(model)?;
        match cast_key(model, key.into()) {
            Some(key) => {
                self.exec(Exists {
                    model: model.id,
                    key,
                })
                .await?
                .into_exists()
            }
            None => Ok(false),
        }
    }

    /// Store a key-only row for `model`.
    pub async fn insert(&self, model: impl Into<ModelId>, key: impl Into<Value>) -> Result<()> {
        let model = self.model(model)?;
        let key = key.into();
        let Some(key) = cast_key(model, key.clone()) else {
            existence_core::bail!(
                "cannot use {key:?} as the primary key of `{}`",
                model.type_name()
            );
        };

        self.exec(Insert {
            model: model.id,
            key,
        })
        .await?
        .into_count()?;
        Ok(())
    }

    /// Remove the row keyed by `key`. Returns `true` if a row was removed.
    pub async fn delete(&self, model: impl Into<ModelId>, key: impl Into<Value>) -> Result<bool> {
        let model = self.model(model)?;
        let Some(key) = cast_key(model, key.into()) else {
            return Ok(false);
        };

        let count = self
            .exec(Delete {
                model: model.id,
                key,
            })
            .await?
            .into_count()?;
        Ok(count > 0)
    }
}

/// Null keys identify nothing, so they are rejected along with keys that do
/// not convert to the model's key type.
pub(crate) fn cast_key(model: &Model, key: Value) -> Option<Value> {
    key.cast(model.primary_key_ty()).filter(|key| !key.is_null())
}

impl fmt::Debug for Db {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Db")
            .field("models", &self.schema.models.len())
            .field("driver", &self.driver)
            .finish()
    }
}
