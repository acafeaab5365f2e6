use crate::{Db, Entity, Record, Validations, Value};

/// Asserts that a model requires existence of a `belongs_to` relation.
///
/// For each relation checked, the record must be valid when the foreign key
/// points at an existing row, invalid (with the expected message) when it is
/// `0`, and the nil case must follow `allow_nil`.
pub struct RequireExistence<'a> {
    db: &'a Db,
    validations: &'a Validations,
    message: String,
    allow_nil: bool,
}

impl<'a> RequireExistence<'a> {
    pub fn new(db: &'a Db, validations: &'a Validations) -> Self {
        Self {
            db,
            validations,
            message: "does not exist".to_string(),
            allow_nil: false,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Expect a nil (or blank) foreign key to be accepted.
    pub fn allow_nil(mut self, allow_nil: bool) -> Self {
        self.allow_nil = allow_nil;
        self
    }

    /// Runs the assertions on a copy of `record`. `existing` must be the key
    /// of a stored row of the relation's target.
    pub async fn assert(&self, record: &Entity, attribute: &str, existing: impl Into<Value>) {
        let schema = self.db.schema();
        let relation = schema
            .relation(self.validations.model(), attribute)
            .and_then(|field| field.ty.as_belongs_to())
            .unwrap_or_else(|| panic!("`{attribute}` is not a belongs_to relation"));
        let foreign_key = &relation.foreign_key(schema).name;

        let mut subject = record.clone();

        subject.set(foreign_key, existing);
        self.validations.valid(self.db, &mut subject).await.unwrap();
        assert!(
            !subject.errors().contains(attribute),
            "there are errors on {attribute} although it exists: {:?}",
            subject.errors().full_messages()
        );

        subject.set(foreign_key, 0);
        assert!(
            !self.validations.valid(self.db, &mut subject).await.unwrap(),
            "record was valid with a non-existent {attribute}"
        );
        self.assert_message(&subject, attribute, "set to 0");

        subject.set(foreign_key, Value::Null);
        self.validations.valid(self.db, &mut subject).await.unwrap();
        if self.allow_nil {
            assert!(
                !subject.errors().contains(attribute),
                "there were errors on {attribute} after being set to nil"
            );
        } else {
            assert!(
                subject.errors().contains(attribute),
                "there are no errors on {attribute} after being set to nil"
            );
            self.assert_message(&subject, attribute, "set to nil");
        }
    }

    fn assert_message(&self, subject: &Entity, attribute: &str, when: &str) {
        let messages: Vec<_> = subject
            .errors()
            .on(attribute)
            .iter()
            .map(|error| error.message.as_str())
            .collect();
        assert!(
            messages.contains(&self.message.as_str()),
            "expected {:?} on {attribute} when {when}, got {messages:?}",
            self.message
        );
    }
}
