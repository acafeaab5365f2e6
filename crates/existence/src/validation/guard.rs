use existence_core::Record;

use std::{fmt, sync::Arc};

/// Predicate over the record being validated.
pub type Predicate = Arc<dyn Fn(&dyn Record) -> bool + Send + Sync>;

/// Decides whether a rule runs for a given record.
///
/// With neither predicate set the rule always runs. `when` must return
/// `true` and `unless` must return `false` for the rule to run.
#[derive(Clone, Default)]
pub struct Guard {
    when: Option<Predicate>,
    unless: Option<Predicate>,
}

impl Guard {
    pub fn when(mut self, predicate: impl Fn(&dyn Record) -> bool + Send + Sync + 'static) -> Self {
        self.when = Some(Arc::new(predicate));
        self
    }

    pub fn unless(
        mut self,
        predicate: impl Fn(&dyn Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.unless = Some(Arc::new(predicate));
        self
    }

    pub fn is_unconditional(&self) -> bool {
        self.when.is_none() && self.unless.is_none()
    }

    pub fn permits(&self, record: &dyn Record) -> bool {
        let when = self.when.as_ref().map_or(true, |when| when(record));
        let unless = self.unless.as_ref().map_or(false, |unless| unless(record));
        when && !unless
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Guard")
            .field("when", &self.when.is_some())
            .field("unless", &self.unless.is_some())
            .finish()
    }
}
