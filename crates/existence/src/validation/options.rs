use super::{Guard, On};
use existence_core::Record;

/// Registration of an existence rule: `validates_existence_of`.
///
/// Built once when models are set up and never changed afterwards.
#[derive(Debug, Clone)]
pub struct ValidatesExistence {
    pub(crate) attributes: Vec<String>,
    pub(crate) message: Option<String>,
    pub(crate) allow_nil: bool,
    pub(crate) allow_blank: bool,
    pub(crate) guard: Guard,
    pub(crate) on: On,
}

/// The serializable part of [`ValidatesExistence`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExistenceOptions {
    pub message: Option<String>,
    pub allow_nil: bool,
    pub allow_blank: bool,
    pub on: On,
}

impl ValidatesExistence {
    /// Rule over the given `belongs_to` relations. A trailing `_id` is
    /// accepted, `blog_id` means `blog`.
    pub fn of<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            message: None,
            allow_nil: false,
            allow_blank: false,
            guard: Guard::default(),
            on: On::default(),
        }
    }

    /// Message recorded on failure instead of `does not exist`.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Accept a null foreign key.
    pub fn allow_nil(mut self, allow_nil: bool) -> Self {
        self.allow_nil = allow_nil;
        self
    }

    /// Accept a blank foreign key: null, empty or whitespace only.
    pub fn allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Run only for records the predicate accepts (`if:`).
    pub fn when(mut self, predicate: impl Fn(&dyn Record) -> bool + Send + Sync + 'static) -> Self {
        self.guard = self.guard.when(predicate);
        self
    }

    /// Skip records the predicate accepts (`unless:`).
    pub fn unless(
        mut self,
        predicate: impl Fn(&dyn Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.guard = self.guard.unless(predicate);
        self
    }

    pub fn on(mut self, on: On) -> Self {
        self.on = on;
        self
    }

    /// Apply options loaded from configuration. Guards are left untouched.
    #[cfg(feature = "serde")]
    pub fn options(mut self, options: ExistenceOptions) -> Self {
        self.message = options.message;
        self.allow_nil = options.allow_nil;
        self.allow_blank = options.allow_blank;
        self.on = options.on;
        self
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}
