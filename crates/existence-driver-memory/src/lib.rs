use existence_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::{ModelId, Schema},
    stmt::Value,
    Error, Result,
};

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

/// Driver keeping every model's keys in process memory.
#[derive(Debug, Default)]
pub struct Memory {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    models: HashMap<ModelId, HashSet<Value>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| existence_core::err!("memory store lock poisoned"))
    }
}

#[async_trait]
impl Driver for Memory {
    async fn push_schema(&self, schema: &Schema) -> Result<()> {
        let mut store = self.store()?;

        for model in schema.models() {
            store.models.entry(model.id).or_default();
        }

        Ok(())
    }

    async fn exec(&self, schema: &Schema, op: Operation) -> Result<Response> {
        let mut store = self.store()?;

        let (model, key) = match &op {
            Operation::Exists(op) => (op.model, &op.key),
            Operation::Insert(op) => (op.model, &op.key),
            Operation::Delete(op) => (op.model, &op.key),
        };

        let Some(rows) = store.models.get_mut(&model) else {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no storage; was the schema pushed?",
                schema.model(model).type_name()
            )));
        };

        Ok(match &op {
            Operation::Exists(_) => Response::exists(rows.contains(key)),
            Operation::Insert(_) => {
                if !rows.insert(key.clone()) {
                    existence_core::bail!(
                        "duplicate key {key:?} for `{}`",
                        schema.model(model).type_name()
                    );
                }
                Response::count(1)
            }
            Operation::Delete(_) => Response::count(u64::from(rows.remove(key))),
        })
    }
}
