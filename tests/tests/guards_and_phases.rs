use tests::{models::*, *};

use pretty_assertions::assert_eq;

fn validations(db: &Db, options: ValidatesExistence) -> Validations {
    Validations::new(db.schema(), "Post")
        .unwrap()
        .validates_existence_of(options)
        .unwrap()
}

fn is_draft(record: &dyn Record) -> bool {
    record.get("title").as_str() == Some("draft")
}

async fn when_guard(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(
        &db,
        ValidatesExistence::of(["blog"]).when(|record| !is_draft(record)),
    );

    let mut post = post(&db).with("blog_id", 42);
    assert!(!validations.valid(&db, &mut post).await.unwrap());
    assert_eq!(db.log.exists_queries(), 1);

    post.set("title", "draft");
    assert!(validations.valid(&db, &mut post).await.unwrap());
    assert_eq!(db.log.exists_queries(), 1);
}

async fn unless_guard(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(&db, ValidatesExistence::of(["blog"]).unless(is_draft));

    let mut post = post(&db).with("title", "draft");
    assert!(validations.valid(&db, &mut post).await.unwrap());
    assert!(db.log.is_empty());

    post.set("title", "published");
    assert!(!validations.valid(&db, &mut post).await.unwrap());
    assert_eq!(reasons(&post, "blog"), [Reason::MissingKey]);
}

async fn when_and_unless_combined(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(
        &db,
        ValidatesExistence::of(["blog"])
            .when(|record| !record.get("title").is_blank())
            .unless(is_draft),
    );

    let cases = [
        (Value::Null, true),
        (Value::from("draft"), true),
        (Value::from("published"), false),
    ];

    for (title, valid) in cases {
        let mut post = post(&db).with("title", title.clone());
        assert_eq!(
            validations.valid(&db, &mut post).await.unwrap(),
            valid,
            "title = {title:?}"
        );
    }
}

async fn on_create(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(&db, ValidatesExistence::of(["blog"]).on(On::Create));

    let mut post = post(&db).with("blog_id", 5);
    assert!(!validations.valid(&db, &mut post).await.unwrap());

    post.mark_persisted();
    assert!(validations.valid(&db, &mut post).await.unwrap());
}

async fn on_update(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(&db, ValidatesExistence::of(["blog"]).on(On::Update));

    let mut post = post(&db).with("blog_id", 5);
    assert!(validations.valid(&db, &mut post).await.unwrap());
    assert!(db.log.is_empty());

    post.mark_persisted();
    assert!(!validations.valid(&db, &mut post).await.unwrap());
    assert_eq!(reasons(&post, "blog"), [Reason::NotFound]);
}

async fn on_save_is_the_default(s: impl Setup) {
    let db = s.setup(schema()).await;
    let validations = validations(&db, ValidatesExistence::of(["blog"]));
    assert_eq!(validations.rules()[0].on(), On::Save);

    let mut post = post(&db).with("blog_id", 5);
    assert!(!validations.valid(&db, &mut post).await.unwrap());

    post.mark_persisted();
    assert!(!validations.valid(&db, &mut post).await.unwrap());
}

async fn rules_for_each_phase(s: impl Setup) {
    let db = s.setup(schema()).await;
    db.insert(model(&db, "Blog"), 1).await.unwrap();

    let validations = Validations::new(db.schema(), "Post")
        .unwrap()
        .validates_existence_of(
            ValidatesExistence::of(["blog"])
                .on(On::Create)
                .message("is required on create"),
        )
        .unwrap()
        .validates_existence_of(
            ValidatesExistence::of(["author"])
                .on(On::Update)
                .allow_nil(true),
        )
        .unwrap();

    let mut post = post(&db).with("blog_id", 1).with("author_id", 9);
    // The author rule only runs on update, `9` is not a UUID.
    assert!(validations.valid(&db, &mut post).await.unwrap());

    post.mark_persisted();
    post.set("blog_id", 2);
    assert!(!validations.valid(&db, &mut post).await.unwrap());
    assert!(!post.errors().contains("blog"));
    assert_eq!(reasons(&post, "author"), [Reason::InvalidKey]);
}

tests!(
    when_guard,
    unless_guard,
    when_and_unless_combined,
    on_create,
    on_update,
    on_save_is_the_default,
    rules_for_each_phase,
);
