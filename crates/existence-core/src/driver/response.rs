use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Answer to an existence query
    Exists(bool),

    /// Number of rows affected
    Count(u64),
}

impl Response {
    pub fn exists(exists: bool) -> Self {
        Self::Exists(exists)
    }

    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn into_exists(self) -> Result<bool> {
        match self {
            Self::Exists(exists) => Ok(exists),
            other => crate::bail!("expected an existence response, got {other:?}"),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            other => crate::bail!("expected a row count response, got {other:?}"),
        }
    }
}
