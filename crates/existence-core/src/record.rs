//! The record side of validation: what a rule may read from the entity being
//! validated and where it reports failures.

mod association;
pub use association::Association;

mod entity;
pub use entity::Entity;

mod errors;
pub use errors::{ErrorCode, Errors, FieldError, Reason};

use crate::{schema::ModelId, stmt::Value};

/// An entity being validated.
///
/// Rules only read field values and association state; the one thing they
/// write is the error collection.
pub trait Record: Send + Sync {
    /// Model the record is an instance of.
    fn model(&self) -> ModelId;

    /// `true` until the record has been persisted.
    fn is_new(&self) -> bool;

    /// Reads a primitive field. Unset fields read as [`Value::Null`].
    fn get(&self, field: &str) -> Value;

    /// In-memory state of the relation `name`, independent of the foreign
    /// key column.
    fn association(&self, name: &str) -> Association;

    fn errors(&self) -> &Errors;

    fn errors_mut(&mut self) -> &mut Errors;
}
