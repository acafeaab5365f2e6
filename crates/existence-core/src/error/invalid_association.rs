use super::Error;

/// Error when an existence rule is registered against something that is not
/// a `belongs_to` relation.
///
/// This is a programming mistake, raised when the rule is registered and
/// never while validating a record.
#[derive(Debug)]
pub(super) struct InvalidAssociation {
    model: Box<str>,
    attribute: Box<str>,
    reason: Option<Box<str>>,
}

impl std::error::Error for InvalidAssociation {}

impl core::fmt::Display for InvalidAssociation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.reason {
            Some(reason) if self.attribute.is_empty() => write!(
                f,
                "cannot validate existence on `{}`: {}",
                self.model, reason
            ),
            Some(reason) => write!(
                f,
                "cannot validate existence of `{}::{}`: {}",
                self.model, self.attribute, reason
            ),
            None => write!(
                f,
                "cannot validate existence of `{}::{}` because it is not a belongs_to association",
                self.model, self.attribute
            ),
        }
    }
}

impl Error {
    /// Creates an error for an attribute that does not name a `belongs_to`
    /// relation of `model`.
    pub fn invalid_association(model: impl Into<String>, attribute: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidAssociation(InvalidAssociation {
            model: model.into().into(),
            attribute: attribute.into().into(),
            reason: None,
        }))
    }

    /// Same as [`Error::invalid_association`] with an explicit reason. An
    /// empty `attribute` reports the problem against the whole model.
    pub fn invalid_association_with(
        model: impl Into<String>,
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidAssociation(InvalidAssociation {
            model: model.into().into(),
            attribute: attribute.into().into(),
            reason: Some(reason.into().into()),
        }))
    }

    /// Returns `true` if this error is an invalid association error.
    pub fn is_invalid_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidAssociation(_))
    }
}
