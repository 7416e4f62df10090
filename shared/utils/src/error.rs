use serde::{Deserialize, Serialize};
use thiserror::Error;

use neo_models::ModelError;

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NeoError {
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed CSV in {source_name}: {message}")]
    Csv { source_name: String, message: String },

    #[error("Malformed JSON in {source_name}: {message}")]
    Json { source_name: String, message: String },

    #[error("Missing required field '{field}' in {source_name}")]
    MissingField { source_name: String, field: String },

    #[error("Invalid record in {source_name} at row {row}: {field} - {message}")]
    InvalidRecord {
        source_name: String,
        row: usize,
        field: String,
        message: String,
    },

    #[error("Duplicate designation '{designation}' in {source_name} (rows {first_row} and {second_row})")]
    DuplicateDesignation {
        source_name: String,
        designation: String,
        first_row: usize,
        second_row: usize,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl NeoError {
    pub fn io(path: impl Into<String>, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: error.to_string(),
        }
    }

    pub fn csv(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Csv {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn json(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Json {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(source_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            source_name: source_name.into(),
            field: field.into(),
        }
    }

    pub fn invalid_record(
        source_name: impl Into<String>,
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            source_name: source_name.into(),
            row,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attach source and row context to a field coercion failure.
    pub fn from_model(source_name: impl Into<String>, row: usize, error: ModelError) -> Self {
        Self::invalid_record(source_name, row, error.field(), error.to_string())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Csv { .. } => "CSV_ERROR",
            Self::Json { .. } => "JSON_ERROR",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::InvalidRecord { .. } => "INVALID_RECORD",
            Self::DuplicateDesignation { .. } => "DUPLICATE_DESIGNATION",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }
}

pub type NeoResult<T> = Result<T, NeoError>;

impl From<config::ConfigError> for NeoError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
