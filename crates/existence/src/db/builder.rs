use super::Db;

use existence_core::{driver::Driver, Result, Schema};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    schema: Option<Schema>,
}

impl Builder {
    /// Set the schema the database serves.
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let Some(schema) = self.schema.take() else {
            existence_core::bail!("no schema configured; call `Builder::schema` before `build`");
        };

        Ok(Db {
            schema: Arc::new(schema),
            driver: Arc::new(driver),
        })
    }
}
