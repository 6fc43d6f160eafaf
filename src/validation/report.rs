//! Full-pass validation report.

use crate::core::types::ValueKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a field counted as absent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceReason {
    /// The field read as `Null`.
    Null,
    /// A value-type field held its kind's default.
    DefaultValue,
}

/// A field that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsentField {
    /// Field name.
    pub name: String,
    /// Declared kind.
    pub kind: ValueKind,
    /// Why it counted as absent.
    pub reason: AbsenceReason,
}

/// Result of checking every pending field of one object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Name of the validated type.
    pub type_name: String,
    /// Fields that were checked, in pending order.
    pub checked: Vec<String>,
    /// Fields found absent, in pending order.
    pub absent: Vec<AbsentField>,
}

impl ValidationReport {
    /// Create an empty report for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            checked: Vec::new(),
            absent: Vec::new(),
        }
    }

    /// Whether no checked field was absent.
    pub fn is_valid(&self) -> bool {
        self.absent.is_empty()
    }

    /// Names of the absent fields.
    pub fn absent_names(&self) -> Vec<&str> {
        self.absent.iter().map(|f| f.name.as_str()).collect()
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            format!(
                "✓ {}: all {} field(s) present",
                self.type_name,
                self.checked.len()
            )
        } else {
            format!(
                "✗ {}: {} of {} field(s) absent",
                self.type_name,
                self.absent.len(),
                self.checked.len()
            )
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for field in &self.absent {
            let reason = match field.reason {
                AbsenceReason::Null => "null",
                AbsenceReason::DefaultValue => "default value",
            };
            writeln!(f, "  • {} [{}]: {}", field.name, field.kind, reason)?;
        }
        Ok(())
    }
}
