mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::Schema};

use std::fmt::Debug;

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Create key storage for every model in the schema. Must be idempotent.
    async fn push_schema(&self, schema: &Schema) -> crate::Result<()>;

    /// Execute a storage operation
    async fn exec(&self, schema: &Schema, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    async fn push_schema(&self, schema: &Schema) -> crate::Result<()> {
        (**self).push_schema(schema).await
    }

    async fn exec(&self, schema: &Schema, op: Operation) -> crate::Result<Response> {
        (**self).exec(schema, op).await
    }
}
