//! # Nullguard - absent-field validation
//!
//! Nullguard checks that the fields of a plain Rust value are present: no
//! field reads as `None`, and optionally no value-type field (numbers, dates,
//! identifiers) still holds its zero value.
//!
//! ## Features
//!
//! - **Field tables**: types opt in through the [`Inspect`] trait, usually
//!   generated with [`inspect!`]
//! - **Fluent exclusions**: strike fields by name or by compile-checked
//!   [`field!`] handle before validating
//! - **Value-type defaults**: optionally treat `0`, the Unix epoch, the nil
//!   uuid and friends as absent
//! - **Reports**: list every absent field instead of a single boolean
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nullguard::prelude::*;
//! use time::OffsetDateTime;
//!
//! struct Person {
//!     full_name: Option<String>,
//!     age: i32,
//!     date_of_birth: OffsetDateTime,
//! }
//!
//! inspect!(Person { full_name, age, date_of_birth });
//!
//! let person = Person {
//!     full_name: Some("Alice".to_string()),
//!     age: 0,
//!     date_of_birth: OffsetDateTime::UNIX_EPOCH,
//! };
//!
//! assert!(check(&person).validate()?);
//! assert!(!check(&person).allow_value_type_validation().validate()?);
//! assert!(check(&person)
//!     .ignore("age")?
//!     .ignore("date_of_birth")?
//!     .allow_value_type_validation()
//!     .validate()?);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: value model, field descriptors, errors
//! - [`validation`]: the validator, its options and reports

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod validation;

pub use crate::core::field::Inspect;
pub use crate::validation::{check, PropertyValidator};

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use nullguard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::convert::{Bytes, IntoValue, Opaque};
    pub use crate::core::field::{FieldDescriptor, Inspect};
    pub use crate::core::types::{Value, ValueKind};

    // Errors
    pub use crate::core::error::{ConfigError, ValidatorError, ValidatorResult};

    // Validation
    pub use crate::validation::options::{MissingFieldPolicy, ValidationOptions};
    pub use crate::validation::report::{AbsenceReason, AbsentField, ValidationReport};
    pub use crate::validation::validator::PropertyValidator;
    pub use crate::validation::check;

    // Macros
    pub use crate::{field, inspect};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    struct Account {
        owner: Option<String>,
        balance: i64,
    }

    inspect!(Account { owner, balance });

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "nullguard");
    }

    #[test]
    fn test_prelude_chain() {
        let account = Account {
            owner: Some("GreenShell".to_string()),
            balance: 0,
        };

        assert!(check(&account).validate().unwrap());
        assert!(!check(&account).allow_value_type_validation().validate().unwrap());
        assert!(check(&account)
            .ignore_field(&field!(Account, balance))
            .unwrap()
            .allow_value_type_validation()
            .validate()
            .unwrap());
    }
}
