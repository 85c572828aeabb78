use thiserror::Error;

/// Precondition failure on a caller-supplied parameter, naming the offending field.
///
/// Raised before any collaborator is touched. Expected absences such as an
/// unknown email are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Missing param: {0}")]
    Missing(String),
    #[error("Invalid param: {0}")]
    Invalid(String),
}

impl ParamError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::Invalid(field.into())
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Missing(field) | Self::Invalid(field) => field,
        }
    }

    /// Fails with `Missing(field)` when `value` is empty.
    pub fn require(field: &str, value: &str) -> Result<(), ParamError> {
        if value.is_empty() {
            return Err(Self::missing(field));
        }
        Ok(())
    }
}
