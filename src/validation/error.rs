//! Validation error taxonomy

use thiserror::Error;

/// The reason a single field failed validation
///
/// Validators return a bare `FieldError` with no context. Callers attach the
/// field path and offending value through [`super::ValidationErrors::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was empty or missing
    #[error("field is required")]
    Required,

    /// A field holds a value that is malformed or conflicts with another field
    #[error("field is invalid")]
    Invalid,

    /// A field holds a string outside the declared set of legal values
    #[error("field value is not one of the allowed values")]
    EnumInvalid,
}

impl FieldError {
    /// Whether this is the enum-membership failure
    #[must_use]
    pub const fn is_enum_invalid(self) -> bool {
        matches!(self, Self::EnumInvalid)
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "FIELD_REQUIRED",
            Self::Invalid => "FIELD_INVALID",
            Self::EnumInvalid => "FIELD_ENUM_INVALID",
        }
    }
}
