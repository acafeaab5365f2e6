//! Storage failures abort validation and reach the caller unchanged.

#![cfg(feature = "sqlite")]

use tests::{models::*, *};

use existence::Sqlite;

#[tokio::test]
async fn driver_failure_propagates() {
    // The schema is never pushed, so the tables do not exist.
    let db = Db::builder()
        .schema(schema())
        .build(Sqlite::in_memory().unwrap())
        .unwrap();

    let validations = Validations::new(db.schema(), "Post")
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["blog"]))
        .unwrap();

    let mut post = post(&db).with("blog_id", 1);
    let err = validations.valid(&db, &mut post).await.unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert!(post.errors().is_empty());
}

#[tokio::test]
async fn no_query_no_failure() {
    let db = Db::builder()
        .schema(schema())
        .build(Sqlite::in_memory().unwrap())
        .unwrap();

    let validations = Validations::new(db.schema(), "Comment")
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["commentable"]))
        .unwrap();

    // A blank type is rejected before the store is consulted.
    let mut comment = comment(&db).with("commentable_id", 1);
    assert!(!validations.valid(&db, &mut comment).await.unwrap());
}

#[test]
fn sqlite_connection_urls() {
    assert!(Sqlite::new("sqlite::memory:").is_ok());

    let err = Sqlite::new("mysql://localhost/blog").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}
