use crate::stmt::Value;

/// The object currently assigned to a relation in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Association {
    /// Nothing assigned.
    #[default]
    Unset,

    /// A newly constructed object that has not been persisted yet.
    New,

    /// A previously persisted object, carrying its primary key.
    Persisted(Value),
}

impl Association {
    /// Returns `true` when the assigned object satisfies the reference on its
    /// own: it is new, or it has an identity. A persisted object whose key is
    /// null does not count.
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Unset => false,
            Self::New => true,
            Self::Persisted(key) => !key.is_null(),
        }
    }
}
