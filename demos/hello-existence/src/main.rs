use existence::{
    driver::Driver,
    schema::{ModelDef, ModelId},
    stmt::{Type, Value},
    Association, Db, Entity, Error, Memory, Record, Schema, Sqlite, ValidatesExistence,
    Validations,
};

fn model_id(db: &Db, name: &str) -> existence::Result<ModelId> {
    db.schema()
        .model_by_name(name)
        .map(|model| model.id)
        .ok_or_else(|| Error::invalid_schema(format!("model `{name}` is not registered")))
}

fn report(label: &str, valid: bool, record: &dyn Record) {
    if valid {
        println!("  {label}: valid");
    } else {
        println!("  {label}: invalid {:?}", record.errors().full_messages());
    }
}

#[tokio::main]
async fn main() -> existence::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let schema = Schema::builder()
        .model(
            ModelDef::new("Blog")
                .key("id", Type::I64)
                .field("name", Type::String)
                .has_many("posts", "Post"),
        )
        .model(
            ModelDef::new("Post")
                .key("id", Type::I64)
                .field("title", Type::String)
                .belongs_to("blog", "Blog"),
        )
        .model(
            ModelDef::new("Comment")
                .key("id", Type::I64)
                .field("body", Type::String)
                .belongs_to_polymorphic("commentable", Type::I64),
        )
        .build()?;

    // `DATABASE_URL=sqlite:blog.db` stores rows in SQLite, the default is an
    // in-memory store.
    let driver: Box<dyn Driver> = match std::env::var("DATABASE_URL") {
        Ok(url) => Box::new(Sqlite::new(url)?),
        Err(_) => Box::new(Memory::new()),
    };

    let db = Db::builder().schema(schema).build(driver)?;
    db.push_schema().await?;

    let posts = Validations::new(db.schema(), "Post")?
        .validates_existence_of(ValidatesExistence::of(["blog"]))?;
    let drafts = Validations::new(db.schema(), "Post")?
        .validates_existence_of(ValidatesExistence::of(["blog"]).allow_nil(true))?;
    let comments = Validations::new(db.schema(), "Comment")?
        .validates_existence_of(ValidatesExistence::of(["commentable"]))?;

    let blog = model_id(&db, "Blog")?;
    let post = model_id(&db, "Post")?;
    let comment = model_id(&db, "Comment")?;

    println!("==> db.insert(Blog, 1)");
    db.insert(blog, 1).await?;
    println!("==> db.insert(Post, 1)");
    db.insert(post, 1).await?;

    println!("==> validate posts");
    let mut p = Entity::new(post).with("title", "Hello").with("blog_id", 1);
    report("blog_id = 1", posts.valid(&db, &mut p).await?, &p);

    p.set("blog_id", 999);
    report("blog_id = 999", posts.valid(&db, &mut p).await?, &p);

    p.set("blog_id", Value::Null);
    report("blog_id = nil", posts.valid(&db, &mut p).await?, &p);
    report("blog_id = nil, allow_nil", drafts.valid(&db, &mut p).await?, &p);

    p.set_association("blog", Association::New);
    report("blog_id = nil, new blog assigned", posts.valid(&db, &mut p).await?, &p);

    println!("==> validate comments");
    let mut c = Entity::new(comment)
        .with("body", "Nice post")
        .with("commentable_id", 1)
        .with("commentable_type", "Post");
    report("Post#1", comments.valid(&db, &mut c).await?, &c);

    c.set("commentable_type", "");
    report("blank type", comments.valid(&db, &mut c).await?, &c);

    c.set("commentable_type", "Widget");
    report("unknown type", comments.valid(&db, &mut c).await?, &c);

    Ok(())
}
