//! Fluent property validator.
//!
//! A validator snapshots the field table of one target object, lets the
//! caller strike fields from the pending set, and then checks the remaining
//! fields for absence.

use crate::core::error::{ValidatorError, ValidatorResult};
use crate::core::field::{FieldDescriptor, Inspect};
use crate::validation::options::{MissingFieldPolicy, ValidationOptions};
use crate::validation::report::{AbsenceReason, AbsentField, ValidationReport};
use indexmap::IndexMap;
use log::{debug, trace};

/// Checks that the fields of a borrowed object are not absent.
///
/// Built with [`PropertyValidator::for_object`] or [`check`](crate::check):
///
/// ```rust,ignore
/// let valid = check(&person)
///     .ignore("nickname")?
///     .allow_value_type_validation()
///     .validate()?;
/// ```
pub struct PropertyValidator<'a, T: Inspect> {
    target: &'a T,
    declared: Vec<FieldDescriptor<T>>,
    pending: IndexMap<&'static str, FieldDescriptor<T>>,
    validate_value_types: bool,
    missing_field_policy: MissingFieldPolicy,
}

impl<'a, T: Inspect> PropertyValidator<'a, T> {
    /// Create a validator over every field `T` declares.
    ///
    /// Never fails, even for a type with no fields; that is reported by
    /// [`validate`](Self::validate).
    pub fn for_object(target: &'a T) -> Self {
        let declared = T::fields();
        let mut pending = IndexMap::with_capacity(declared.len());
        for field in &declared {
            // First occurrence wins if a table repeats a name.
            pending.entry(field.name()).or_insert(*field);
        }

        debug!(
            "Validator for {} created with {} field(s)",
            T::type_name(),
            pending.len()
        );

        Self {
            target,
            declared,
            pending,
            validate_value_types: false,
            missing_field_policy: MissingFieldPolicy::default(),
        }
    }

    /// Apply loaded options.
    ///
    /// Enabling value-type validation here is permanent like
    /// [`allow_value_type_validation`](Self::allow_value_type_validation);
    /// options with the flag off leave an enabled validator enabled.
    pub fn with_options(mut self, options: &ValidationOptions) -> Self {
        if options.value_type_validation {
            self.validate_value_types = true;
        }
        self.missing_field_policy = options.missing_field_policy;
        self
    }

    /// Remove the named field from the pending set, so validation passes
    /// even if it is absent.
    ///
    /// `None` fails with [`ValidatorError::InvalidArgument`]. A name that is
    /// not pending is a no-op, unless the policy is
    /// [`MissingFieldPolicy::Reject`] and `T` does not declare it at all.
    /// Ignoring the same field twice never fails.
    pub fn ignore<'n>(mut self, name: impl Into<Option<&'n str>>) -> ValidatorResult<Self> {
        let Some(name) = name.into() else {
            return Err(ValidatorError::invalid_argument(None, T::type_name()));
        };

        if self.pending.shift_remove(name).is_some() {
            trace!("Ignoring field '{}' of {}", name, T::type_name());
            return Ok(self);
        }

        let declared = self.declared.iter().any(|f| f.name() == name);
        if !declared && self.missing_field_policy == MissingFieldPolicy::Reject {
            return Err(ValidatorError::invalid_argument(Some(name), T::type_name()));
        }

        trace!(
            "Field '{}' of {} is not pending, nothing to ignore",
            name,
            T::type_name()
        );
        Ok(self)
    }

    /// Remove a field by descriptor, usually one built with
    /// [`field!`](crate::field).
    ///
    /// The descriptor must match a declared field of `T` by name and kind,
    /// otherwise this fails with [`ValidatorError::InvalidArgument`]
    /// whatever the policy.
    pub fn ignore_field(self, field: &FieldDescriptor<T>) -> ValidatorResult<Self> {
        if !self.declared.iter().any(|f| f.same_field(field)) {
            return Err(ValidatorError::invalid_argument(
                Some(field.name()),
                T::type_name(),
            ));
        }
        self.ignore(field.name())
    }

    /// Also treat value-type fields that hold their type's default as absent.
    pub fn allow_value_type_validation(mut self) -> Self {
        self.validate_value_types = true;
        self
    }

    /// Check that no pending field is absent.
    ///
    /// Stops at the first absent field. Fails with
    /// [`ValidatorError::InvalidOperation`] if nothing is left to check.
    pub fn validate(&self) -> ValidatorResult<bool> {
        self.ensure_pending()?;

        let first_absent = self
            .pending
            .values()
            .find(|field| self.absence(field).is_some());

        match first_absent {
            Some(field) => {
                debug!(
                    "Validation of {} failed on field '{}'",
                    T::type_name(),
                    field.name()
                );
                Ok(false)
            }
            None => {
                debug!("Validation of {} passed", T::type_name());
                Ok(true)
            }
        }
    }

    /// Check every pending field and list the absent ones.
    ///
    /// Same precondition as [`validate`](Self::validate), and
    /// `report()?.is_valid()` always equals `validate()?`.
    pub fn report(&self) -> ValidatorResult<ValidationReport> {
        self.ensure_pending()?;

        let mut report = ValidationReport::new(T::type_name());
        for field in self.pending.values() {
            report.checked.push(field.name().to_string());
            if let Some(reason) = self.absence(field) {
                report.absent.push(AbsentField {
                    name: field.name().to_string(),
                    kind: field.kind(),
                    reason,
                });
            }
        }

        debug!(
            "Report for {}: {} of {} field(s) absent",
            T::type_name(),
            report.absent.len(),
            report.checked.len()
        );
        Ok(report)
    }

    /// Names of the fields still subject to validation, in order.
    pub fn pending_fields(&self) -> Vec<&'static str> {
        self.pending.keys().copied().collect()
    }

    /// Whether value-type defaults count as absent.
    pub fn is_value_type_validation_enabled(&self) -> bool {
        self.validate_value_types
    }

    /// Policy applied to unknown names.
    pub fn missing_field_policy(&self) -> MissingFieldPolicy {
        self.missing_field_policy
    }

    /// Name of the target type.
    pub fn type_name(&self) -> &'static str {
        T::type_name()
    }

    /// The object under validation.
    pub fn target(&self) -> &'a T {
        self.target
    }

    fn ensure_pending(&self) -> ValidatorResult<()> {
        if self.pending.is_empty() {
            return Err(ValidatorError::invalid_operation(T::type_name()));
        }
        Ok(())
    }

    fn absence(&self, field: &FieldDescriptor<T>) -> Option<AbsenceReason> {
        let value = field.read(self.target);
        if value.is_null() {
            return Some(AbsenceReason::Null);
        }
        // A nullable field's default is `None`, already handled above.
        if self.validate_value_types && field.is_value_type() && field.kind().is_default(&value) {
            return Some(AbsenceReason::DefaultValue);
        }
        None
    }
}

impl<T: Inspect> std::fmt::Debug for PropertyValidator<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyValidator")
            .field("type_name", &T::type_name())
            .field("pending", &self.pending_fields())
            .field("validate_value_types", &self.validate_value_types)
            .field("missing_field_policy", &self.missing_field_policy)
            .finish()
    }
}
