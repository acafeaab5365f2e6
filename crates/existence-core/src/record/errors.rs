use indexmap::IndexMap;

use std::fmt;

/// Validation errors of a record, keyed by attribute, in the order they were
/// added.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Errors {
    entries: IndexMap<String, Vec<FieldError>>,
}

/// One failed check on one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Symbolic error key
    pub code: ErrorCode,

    /// Why the check failed
    pub reason: Reason,

    /// Human readable message, without the attribute name
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DoesNotExist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The foreign key is null and nothing is assigned in memory.
    MissingKey,

    /// The polymorphic type field is blank.
    MissingType,

    /// The polymorphic type field names no registered model.
    UnknownType(String),

    /// The foreign key cannot be converted to the target's key type.
    InvalidKey,

    /// The store has no row with the foreign key.
    NotFound,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: impl Into<String>, error: FieldError) {
        self.entries.entry(attribute.into()).or_default().push(error);
    }

    /// Errors recorded on `attribute`, empty when there are none.
    pub fn on(&self, attribute: &str) -> &[FieldError] {
        self.entries
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        !self.on(attribute).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Total number of errors across all attributes.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> + '_ {
        self.entries.iter().flat_map(|(attribute, errors)| {
            errors.iter().map(move |error| (attribute.as_str(), error))
        })
    }

    /// Messages prefixed by their attribute, e.g. `blog does not exist`.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(attribute, error)| format!("{attribute} {}", error.message))
            .collect()
    }
}

impl FieldError {
    pub fn does_not_exist(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::DoesNotExist,
            reason,
            message: message.into(),
        }
    }
}

impl ErrorCode {
    /// The symbol the error is known by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DoesNotExist => "does_not_exist",
        }
    }

    /// Message used when the rule does not configure one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::DoesNotExist => "does not exist",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
