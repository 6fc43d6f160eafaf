//! Error types for nullguard.
//!
//! Uses thiserror for structured errors. Both validator errors signal caller
//! misuse; an absent field is never an error and is reported through the
//! boolean result instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`PropertyValidator`](crate::validation::PropertyValidator).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatorError {
    /// A field name or handle does not identify a field of the target type.
    #[error("{} cannot be found in type {type_name}", display_name(.name))]
    InvalidArgument {
        /// The rejected name, `None` when no name was given.
        name: Option<String>,
        /// Type the name was looked up on.
        type_name: String,
    },

    /// Every field has been ignored, or the type declares none.
    #[error("Object {type_name} has no properties that can be validated")]
    InvalidOperation {
        /// Type whose validator has nothing left to check.
        type_name: String,
    },
}

/// Errors while loading validation options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config from {path}: {source}")]
    Io {
        /// Path of the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ValidationOptions`](crate::validation::ValidationOptions).
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn display_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("'{}'", name),
        None => "<none>".to_string(),
    }
}

// ============================================================================
// Error Utilities
// ============================================================================

impl ValidatorError {
    /// Create an `InvalidArgument` error for `name` on `type_name`.
    pub fn invalid_argument(name: Option<&str>, type_name: &str) -> Self {
        ValidatorError::InvalidArgument {
            name: name.map(str::to_string),
            type_name: type_name.to_string(),
        }
    }

    /// Create an `InvalidOperation` error for `type_name`.
    pub fn invalid_operation(type_name: &str) -> Self {
        ValidatorError::InvalidOperation {
            type_name: type_name.to_string(),
        }
    }

    /// Name of the target type the error refers to.
    pub fn type_name(&self) -> &str {
        match self {
            ValidatorError::InvalidArgument { type_name, .. }
            | ValidatorError::InvalidOperation { type_name } => type_name,
        }
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            ValidatorError::InvalidArgument { name: None, .. } => {
                Some("Pass the name of the field to ignore".to_string())
            }
            ValidatorError::InvalidArgument {
                name: Some(name),
                type_name,
            } => Some(format!(
                "Check that '{}' is listed in the field table of {}",
                name, type_name
            )),
            ValidatorError::InvalidOperation { .. } => {
                Some("Leave at least one field un-ignored before validating".to_string())
            }
        }
    }
}

/// Result type alias for validator operations.
pub type ValidatorResult<T> = Result<T, ValidatorError>;

/// Result type alias for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
