mod value;
use value::Value;

use existence_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::{Model, Schema},
    Error, Result,
};
use rusqlite::{Connection, OptionalExtension};
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};
use url::Url;

/// Driver storing each model's keys in a SQLite table named after the
/// model.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Open a database from a connection URL: `sqlite::memory:` or
    /// `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| existence_core::err!("sqlite connection lock poisoned"))
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn push_schema(&self, schema: &Schema) -> Result<()> {
        let connection = self.connection()?;

        for model in schema.models() {
            let sql = format!(
                "CREATE TABLE IF NOT EXISTS {} ({} {} PRIMARY KEY NOT NULL)",
                ident(&model.table_name),
                ident(&model.primary_key_field().name),
                value::column_type(model.primary_key_ty()),
            );
            tracing::trace!(%sql, "push schema");
            connection
                .execute(&sql, [])
                .map_err(Error::driver_operation_failed)?;
        }

        Ok(())
    }

    async fn exec(&self, schema: &Schema, op: Operation) -> Result<Response> {
        let connection = self.connection()?;

        let (model, key, sql) = match &op {
            Operation::Exists(op) => {
                let model = schema.model(op.model);
                let sql = format!(
                    "SELECT 1 FROM {} WHERE {} = ?1 LIMIT 1",
                    ident(&model.table_name),
                    pk_ident(model),
                );
                (model, &op.key, sql)
            }
            Operation::Insert(op) => {
                let model = schema.model(op.model);
                let sql = format!(
                    "INSERT INTO {} ({}) VALUES (?1)",
                    ident(&model.table_name),
                    pk_ident(model),
                );
                (model, &op.key, sql)
            }
            Operation::Delete(op) => {
                let model = schema.model(op.model);
                let sql = format!(
                    "DELETE FROM {} WHERE {} = ?1",
                    ident(&model.table_name),
                    pk_ident(model),
                );
                (model, &op.key, sql)
            }
        };

        tracing::trace!(model = %model.type_name(), %sql, "exec");

        let mut stmt = connection
            .prepare_cached(&sql)
            .map_err(Error::driver_operation_failed)?;

        if op.is_exists() {
            let found = stmt
                .query_row([Value(key)], |_| Ok(()))
                .optional()
                .map_err(Error::driver_operation_failed)?;
            Ok(Response::exists(found.is_some()))
        } else {
            let count = stmt
                .execute([Value(key)])
                .map_err(Error::driver_operation_failed)?;
            Ok(Response::count(count as u64))
        }
    }
}

fn pk_ident(model: &Model) -> String {
    ident(&model.primary_key_field().name)
}

/// Quote an identifier for SQLite.
fn ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
