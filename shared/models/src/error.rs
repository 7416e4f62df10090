use thiserror::Error;

/// Failure to coerce a raw source value into an entity field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid number in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("expected text in field '{field}', found {value}")]
    InvalidText { field: &'static str, value: String },

    #[error("value out of range in field '{field}': {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("invalid calendar date {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },
}

impl ModelError {
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_text(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidText {
            field,
            value: value.into(),
        }
    }

    /// Name of the raw field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. }
            | Self::InvalidText { field, .. }
            | Self::OutOfRange { field, .. } => *field,
            Self::InvalidTimestamp { .. } => "cd",
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
