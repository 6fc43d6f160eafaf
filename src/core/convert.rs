//! Conversions from Rust field types into [`Value`].

use crate::core::types::{Value, ValueKind};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// A Rust type that can be read as an inspectable field.
///
/// `KIND` is the declared kind used for default-value checks. Wrapping a type
/// in `Option` keeps its kind but makes `None` read as [`Value::Null`], which
/// is how a nullable value type is spelled. The default of a nullable type is
/// `None`, so a nullable field is never compared against its inner zero.
pub trait IntoValue {
    /// Declared kind of fields of this type.
    const KIND: ValueKind;

    /// Whether `None` is a possible value of this type.
    const NULLABLE: bool = false;

    /// Read the current value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_into_value {
    ($kind:ident, $variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl IntoValue for $t {
                const KIND: ValueKind = ValueKind::$kind;

                fn to_value(&self) -> Value {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_into_value!(Integer, Integer as i64: i8, i16, i32, i64, isize);
impl_into_value!(UInteger, UInteger as u64: u8, u16, u32, u64, usize);
impl_into_value!(Float, Float as f64: f32, f64);

impl IntoValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}

impl IntoValue for char {
    const KIND: ValueKind = ValueKind::Char;

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl IntoValue for OffsetDateTime {
    const KIND: ValueKind = ValueKind::DateTime;

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl IntoValue for time::Duration {
    const KIND: ValueKind = ValueKind::Duration;

    fn to_value(&self) -> Value {
        Value::Duration(*self)
    }
}

impl IntoValue for Uuid {
    const KIND: ValueKind = ValueKind::Uuid;

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl IntoValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for str {
    const KIND: ValueKind = ValueKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<T: IntoValue + ?Sized> IntoValue for &T {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    const KIND: ValueKind = ValueKind::Array;

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(IntoValue::to_value).collect())
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    const KIND: ValueKind = ValueKind::Map;

    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

impl<T: IntoValue, S> IntoValue for HashMap<String, T, S> {
    const KIND: ValueKind = ValueKind::Map;

    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Rc<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Arc<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = T::NULLABLE;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Raw byte buffer field.
///
/// `Vec<u8>` already reads as an array of integers; wrap it in `Bytes` to
/// surface it as [`Value::Bytes`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl IntoValue for Bytes {
    const KIND: ValueKind = ValueKind::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.0.clone())
    }
}

/// Opaque field of any `Debug` type.
///
/// Reads as [`Value::Object`], a reference kind: only a surrounding `Option`
/// can make it absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Opaque<T>(pub T);

impl<T: std::fmt::Debug> IntoValue for Opaque<T> {
    const KIND: ValueKind = ValueKind::Object;

    fn to_value(&self) -> Value {
        Value::Object(format!("{:?}", self.0))
    }
}
