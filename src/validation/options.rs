//! Validator options and config loading.

use crate::core::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What `ignore` does with a name that is not a field of the target type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Silently do nothing.
    #[default]
    Ignore,
    /// Fail with `ValidatorError::InvalidArgument`.
    Reject,
}

/// Options applied to a validator before any `ignore` call.
///
/// Loadable from TOML; missing keys keep their defaults:
///
/// ```toml
/// value_type_validation = true
/// missing_field_policy = "reject"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Treat value-type fields holding their default as absent.
    pub value_type_validation: bool,
    /// Handling of names that match no declared field.
    pub missing_field_policy: MissingFieldPolicy,
}

impl ValidationOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Enable value-type validation.
    pub fn with_value_type_validation(mut self) -> Self {
        self.value_type_validation = true;
        self
    }

    /// Set the missing field policy.
    pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field_policy = policy;
        self
    }
}
