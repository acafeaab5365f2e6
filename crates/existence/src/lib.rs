//! Existence validation for `belongs_to` relations.
//!
//! A rule registered with [`ValidatesExistence`] checks, every time a record
//! is validated, that the row its foreign key points at is present in the
//! store. Polymorphic relations additionally require the stored type name to
//! resolve to a registered model.
//!
//! ```no_run
//! # async fn demo(driver: impl existence::driver::Driver) -> existence::Result<()> {
//! use existence::{
//!     schema::ModelDef, stmt::Type, Db, Entity, Record, Schema, ValidatesExistence, Validations,
//! };
//!
//! let schema = Schema::builder()
//!     .model(ModelDef::new("Blog").key("id", Type::I64))
//!     .model(ModelDef::new("Post").key("id", Type::I64).belongs_to("blog", "Blog"))
//!     .build()?;
//!
//! let db = Db::builder().schema(schema).build(driver)?;
//! let posts = Validations::new(db.schema(), "Post")?
//!     .validates_existence_of(ValidatesExistence::of(["blog"]))?;
//!
//! let post_model = db.schema().model_by_name("Post").unwrap();
//! let mut post = Entity::new(post_model).with("blog_id", 1);
//! if !posts.valid(&db, &mut post).await? {
//!     println!("{:?}", post.errors().full_messages());
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub use db::Db;

pub mod validation;
pub use validation::{ExistenceValidator, Guard, On, ValidatesExistence, Validations};

#[cfg(feature = "serde")]
pub use validation::ExistenceOptions;

pub use existence_core::{
    driver,
    record::{self, Association, Entity, Errors, FieldError, Reason, Record},
    schema::{self, Schema},
    stmt, Error, Result,
};

#[cfg(feature = "memory")]
pub use existence_driver_memory::Memory;

#[cfg(feature = "sqlite")]
pub use existence_driver_sqlite::Sqlite;
