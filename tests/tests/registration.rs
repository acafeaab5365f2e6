//! Misconfigured rules are rejected when they are registered, before any
//! record is validated.

use tests::{models::schema, *};

use existence::{schema::ModelId, ExistenceValidator};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn post_validations() -> Validations {
    Validations::new(&Arc::new(schema()), "Post").unwrap()
}

#[test]
fn attribute_that_is_not_a_relation() {
    let err = post_validations()
        .validates_existence_of(ValidatesExistence::of(["title"]))
        .unwrap_err();

    assert!(err.is_invalid_association());
    assert_eq!(
        err.to_string(),
        "cannot validate existence of `Post::title` because it is not a belongs_to association"
    );
}

#[test]
fn attribute_that_does_not_exist() {
    let err = post_validations()
        .validates_existence_of(ValidatesExistence::of(["publisher"]))
        .unwrap_err();

    assert!(err.is_invalid_association());
    assert_eq!(
        err.to_string(),
        "cannot validate existence of `Post::publisher` because it is not a belongs_to association"
    );
}

#[test]
fn has_many_is_not_a_belongs_to() {
    let schema = Arc::new(schema());
    let err = Validations::new(&schema, "Blog")
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["posts"]))
        .unwrap_err();

    assert!(err.is_invalid_association());
    assert!(err.to_string().contains("`Blog::posts`"));
}

#[test]
fn one_bad_attribute_rejects_the_rule() {
    let err = post_validations()
        .validates_existence_of(ValidatesExistence::of(["blog", "title"]))
        .unwrap_err();

    assert!(err.is_invalid_association());
}

#[test]
fn foreign_key_names_are_accepted() {
    let validations = post_validations()
        .validates_existence_of(ValidatesExistence::of(["blog_id", "author"]))
        .unwrap();

    let attributes: Vec<_> = validations.rules()[0].attributes().collect();
    assert_eq!(attributes, ["blog", "author"]);
}

#[test]
fn empty_attribute_list() {
    let err = post_validations()
        .validates_existence_of(ValidatesExistence::of(Vec::<String>::new()))
        .unwrap_err();

    assert!(err.is_invalid_association());
    assert_eq!(
        err.to_string(),
        "cannot validate existence on `Post`: no attributes were given"
    );
}

#[test]
fn unknown_model() {
    let err = Validations::new(&Arc::new(schema()), "Publisher").unwrap_err();
    assert!(err.is_invalid_association());
}

#[test]
fn validator_for_unregistered_model_id() {
    let schema = schema();
    let err = ExistenceValidator::new(&schema, ModelId(7), ValidatesExistence::of(["blog"]))
        .unwrap_err();

    assert!(err.is_invalid_association());
    assert!(err.to_string().contains("the model is not registered"));
}

#[test]
fn model_names_are_matched_as_declared() {
    let schema = Arc::new(
        Schema::builder()
            .model(ModelDef::new("HTTPRequest").key("id", Type::I64))
            .model(
                ModelDef::new("Log")
                    .key("id", Type::I64)
                    .belongs_to("request", "HTTPRequest"),
            )
            .build()
            .unwrap(),
    );

    assert!(Validations::new(&schema, "HTTPRequest").is_ok());
    assert!(Validations::new(&schema, "HttpRequest")
        .unwrap_err()
        .is_invalid_association());

    let err = Validations::new(&schema, "HTTPRequest")
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["log"]))
        .unwrap_err();
    assert!(err.to_string().contains("`HTTPRequest::log`"));

    assert!(Validations::new(&schema, "Log")
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["request"]))
        .is_ok());
}

#[test]
fn rules_keep_registration_order() {
    let validations = post_validations()
        .validates_existence_of(ValidatesExistence::of(["author"]))
        .unwrap()
        .validates_existence_of(ValidatesExistence::of(["blog"]).on(On::Create))
        .unwrap();

    let rules: Vec<_> = validations
        .rules()
        .iter()
        .map(|rule| (rule.attributes().collect::<Vec<_>>(), rule.on()))
        .collect();

    assert_eq!(
        rules,
        [(vec!["author"], On::Save), (vec!["blog"], On::Create)]
    );
}
