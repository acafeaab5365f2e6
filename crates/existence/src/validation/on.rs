/// Lifecycle phase a rule runs in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum On {
    /// Every validation, for new and persisted records
    #[default]
    Save,

    /// Only while the record has not been persisted
    Create,

    /// Only once the record has been persisted
    Update,
}

impl On {
    /// Returns `true` if a rule registered for this phase runs for a record
    /// whose `is_new()` is `is_new`.
    pub fn applies_to(self, is_new: bool) -> bool {
        match self {
            Self::Save => true,
            Self::Create => is_new,
            Self::Update => !is_new,
        }
    }
}
