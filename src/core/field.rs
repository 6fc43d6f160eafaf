//! Field descriptors and the `Inspect` trait.
//!
//! Rust has no runtime reflection, so a type opts into validation by
//! publishing a table of its readable fields. Each entry pairs a name and a
//! declared [`ValueKind`] with a plain function pointer that reads the field.
//! The [`inspect!`](crate::inspect) and [`field!`](crate::field) macros build
//! these tables from field names, so the compiler checks every name against the
//! struct.

use crate::core::convert::IntoValue;
use crate::core::types::{Value, ValueKind};
use std::fmt;

/// A type whose fields can be enumerated for validation.
pub trait Inspect: Sized {
    /// Short name used in error messages and reports.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// All readable fields, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;
}

/// One readable field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    kind: ValueKind,
    nullable: bool,
    read: fn(&T) -> Value,
}

impl<T> FieldDescriptor<T> {
    /// Create a descriptor from an explicit name, kind and accessor.
    ///
    /// The field is not nullable; see [`with_nullable`](Self::with_nullable).
    pub fn new(name: &'static str, kind: ValueKind, read: fn(&T) -> Value) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            read,
        }
    }

    /// Mark whether the field's type admits `None`, as `Option<T>` does.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind of the field.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the field's type admits `None`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the field is a non-nullable value type, i.e. one whose
    /// default is a zero value rather than `None`.
    pub fn is_value_type(&self) -> bool {
        !self.nullable && self.kind.is_value_type()
    }

    /// Read the field's current value from `target`.
    pub fn read(&self, target: &T) -> Value {
        (self.read)(target)
    }

    /// Whether `other` names the same field with the same declared type.
    pub fn same_field(&self, other: &FieldDescriptor<T>) -> bool {
        self.name == other.name && self.kind == other.kind && self.nullable == other.nullable
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("nullable", &self.nullable)
            .field("read", &"<fn>")
            .finish()
    }
}

/// Infer the declared kind of a field from a projection closure.
///
/// Used by [`field!`](crate::field); the closure is never called.
#[doc(hidden)]
pub fn kind_of<T, F: IntoValue + ?Sized>(_project: fn(&T) -> &F) -> ValueKind {
    F::KIND
}

/// Infer whether a field admits `None` from a projection closure.
///
/// Used by [`field!`](crate::field); the closure is never called.
#[doc(hidden)]
pub fn nullable_of<T, F: IntoValue + ?Sized>(_project: fn(&T) -> &F) -> bool {
    F::NULLABLE
}

/// Last path segment of `T`'s type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Build a [`FieldDescriptor`] for a named struct field.
///
/// ```rust,ignore
/// let age = field!(Person, age);
/// let full_name = field!(Person, full_name as "FullName");
/// ```
///
/// The field must exist on the type and its type must implement
/// [`IntoValue`]; methods and expressions do not compile.
#[macro_export]
macro_rules! field {
    ($ty:ty, $field:ident) => {
        $crate::field!($ty, $field as stringify!($field))
    };
    ($ty:ty, $field:ident as $name:expr) => {
        $crate::core::field::FieldDescriptor::<$ty>::new(
            $name,
            $crate::core::field::kind_of::<$ty, _>(|target| &target.$field),
            |target| $crate::core::convert::IntoValue::to_value(&target.$field),
        )
        .with_nullable($crate::core::field::nullable_of::<$ty, _>(|target| &target.$field))
    };
}

/// Implement [`Inspect`] for a struct by listing its fields.
///
/// ```rust,ignore
/// struct Person {
///     full_name: Option<String>,
///     age: i32,
/// }
///
/// inspect!(Person { full_name, age });
/// inspect!(Marker {});
/// ```
#[macro_export]
macro_rules! inspect {
    ($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::core::field::Inspect for $ty {
            fn fields() -> ::std::vec::Vec<$crate::core::field::FieldDescriptor<Self>> {
                ::std::vec![$($crate::field!($ty, $field $(as $name)?)),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        label: Option<String>,
        count: u32,
    }

    crate::inspect!(Sample { label, count as "Count" });

    struct Marker;

    crate::inspect!(Marker {});

    #[test]
    fn test_fields_in_declaration_order() {
        let fields = Sample::fields();
        let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["label", "Count"]);
        assert_eq!(fields[0].kind(), ValueKind::String);
        assert_eq!(fields[1].kind(), ValueKind::UInteger);
        assert!(!fields[0].is_value_type());
        assert!(fields[1].is_value_type());
    }

    #[test]
    fn test_optional_value_type_is_nullable() {
        struct Gauge {
            level: Option<f64>,
            peak: f64,
        }
        crate::inspect!(Gauge { level, peak });

        let fields = Gauge::fields();
        assert_eq!(fields[0].kind(), ValueKind::Float);
        assert!(fields[0].is_nullable());
        assert!(!fields[0].is_value_type());
        assert!(!fields[1].is_nullable());
        assert!(fields[1].is_value_type());
        assert!(!fields[0].same_field(&FieldDescriptor::new("level", ValueKind::Float, |_| Value::Null)));
    }

    #[test]
    fn test_read_field_values() {
        let sample = Sample { label: None, count: 3 };
        let fields = Sample::fields();
        assert_eq!(fields[0].read(&sample), Value::Null);
        assert_eq!(fields[1].read(&sample), Value::UInteger(3));
    }

    #[test]
    fn test_type_name_strips_module_path() {
        assert_eq!(Sample::type_name(), "Sample");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
        assert!(Marker::fields().is_empty());
    }

    #[test]
    fn test_same_field_compares_name_and_kind() {
        let count = crate::field!(Sample, count as "Count");
        let fields = Sample::fields();
        assert!(fields[1].same_field(&count));
        assert!(!fields[0].same_field(&count));

        let relabelled = FieldDescriptor::<Sample>::new("Count", ValueKind::Integer, |_| Value::Null);
        assert!(!fields[1].same_field(&relabelled));
    }

    #[test]
    fn test_descriptor_debug_hides_accessor() {
        let debug = format!("{:?}", crate::field!(Sample, label));
        assert!(debug.contains("\"label\""));
        assert!(debug.contains("<fn>"));
    }
}
