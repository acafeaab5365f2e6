//! Schema shared by the integration tests.
//!
//! A `Post` belongs to a `Blog` (integer keys) and to a `User` (UUID keys).
//! A `Comment` belongs to any model through the polymorphic `commentable`
//! relation.

use existence::{schema::ModelId, Db, Entity, Record};

use crate::{ModelDef, Schema, Type};

pub fn schema() -> Schema {
    Schema::builder()
        .model(
            ModelDef::new("Blog")
                .key("id", Type::I64)
                .field("name", Type::String)
                .has_many("posts", "Post"),
        )
        .model(ModelDef::new("User").key("id", Type::Uuid))
        .model(
            ModelDef::new("Post")
                .key("id", Type::I64)
                .field("title", Type::String)
                .belongs_to("blog", "Blog")
                .belongs_to("author", "User"),
        )
        .model(
            ModelDef::new("Comment")
                .key("id", Type::I64)
                .field("body", Type::String)
                .belongs_to_polymorphic("commentable", Type::I64),
        )
        .build()
        .unwrap()
}

pub fn model(db: &Db, name: &str) -> ModelId {
    db.schema()
        .model_by_name(name)
        .unwrap_or_else(|| panic!("model `{name}` is not registered"))
        .id
}

/// A new, unsaved `Post`.
pub fn post(db: &Db) -> Entity {
    Entity::new(model(db, "Post")).with("title", "hello world")
}

/// A new, unsaved `Comment`.
pub fn comment(db: &Db) -> Entity {
    Entity::new(model(db, "Comment")).with("body", "first!")
}

/// Messages recorded on `attribute`, in order.
pub fn messages(record: &dyn Record, attribute: &str) -> Vec<String> {
    record
        .errors()
        .on(attribute)
        .iter()
        .map(|error| error.message.clone())
        .collect()
}

/// Reasons recorded on `attribute`, in order.
pub fn reasons(record: &dyn Record, attribute: &str) -> Vec<crate::Reason> {
    record
        .errors()
        .on(attribute)
        .iter()
        .map(|error| error.reason.clone())
        .collect()
}
