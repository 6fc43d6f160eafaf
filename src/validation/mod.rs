//! Validation module: the fluent validator, its options and reports.

pub mod options;
pub mod report;
pub mod validator;

#[cfg(test)]
mod proptest;

pub use options::{MissingFieldPolicy, ValidationOptions};
pub use report::{AbsenceReason, AbsentField, ValidationReport};
pub use validator::PropertyValidator;

use crate::core::field::Inspect;

/// Start validating `target`.
///
/// Shorthand for [`PropertyValidator::for_object`].
pub fn check<T: Inspect>(target: &T) -> PropertyValidator<'_, T> {
    PropertyValidator::for_object(target)
}
