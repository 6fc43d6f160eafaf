//! Field value types surfaced by an inspected object.
//!
//! Field values are read into a closed enum rather than through runtime
//! reflection:
//! - Closed set of shapes: the validator only needs to tell "null" from
//!   "default" from "present"
//! - Serialization: serde handles enums natively, so reports can carry values
//! - Exhaustive matching keeps `ValueKind` and `Value` in lockstep

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// A field value read from an inspected object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Absent reference (`None`)
    Null,
    /// Signed integer of any width
    Integer(i64),
    /// Unsigned integer of any width
    UInteger(u64),
    /// Floating point number
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Unicode scalar value
    Char(char),
    /// Point in time
    #[serde(with = "time::serde::rfc3339")]
    DateTime(OffsetDateTime),
    /// Signed span of time
    Duration(time::Duration),
    /// 128-bit identifier
    Uuid(Uuid),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Sequence of values
    Array(Vec<Value>),
    /// String-keyed map of values
    Map(BTreeMap<String, Value>),
    /// Any other present object, carried by its debug rendering
    Object(String),
}

/// Declared kind of an inspectable field.
///
/// Splits kinds into value types, which always hold something and have a
/// well-defined zero, and reference types, whose only absent state is `Null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Signed integer, default 0.
    Integer,
    /// Unsigned integer, default 0.
    UInteger,
    /// Floating point, default 0.0.
    Float,
    /// Boolean, default `false`.
    Boolean,
    /// Character, default `'\0'`.
    Char,
    /// Date-time, default the Unix epoch.
    DateTime,
    /// Duration, default zero.
    Duration,
    /// Identifier, default the nil uuid.
    Uuid,
    /// Text.
    String,
    /// Byte buffer.
    Bytes,
    /// Sequence of values.
    Array,
    /// String-keyed map.
    Map,
    /// Opaque object.
    Object,
}

// ============================================================================
// Value Implementation
// ============================================================================

impl Value {
    /// Check if this value is the absent reference.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the kind of this value, or `None` for `Null`.
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Integer(_) => ValueKind::Integer,
            Value::UInteger(_) => ValueKind::UInteger,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Char(_) => ValueKind::Char,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Duration(_) => ValueKind::Duration,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Object(_) => ValueKind::Object,
        };
        Some(kind)
    }

    /// Try to get this value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Try to get this value as a date-time.
    pub fn as_datetime(&self) -> Option<OffsetDateTime> {
        if let Value::DateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::UInteger(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{:.4}", fl),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c.escape_default()),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::Duration(d) => write!(f, "{}", d),
            Value::Uuid(id) => write!(f, "{}", id),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Bytes(b) => write!(f, "Bytes[{}]", b.len()),
            Value::Array(arr) => write!(f, "Array[{}]", arr.len()),
            Value::Map(map) => write!(f, "Map{{{} entries}}", map.len()),
            Value::Object(repr) => write!(f, "{}", repr),
        }
    }
}

// ============================================================================
// ValueKind Implementation
// ============================================================================

impl ValueKind {
    /// Whether fields of this kind can never be `Null` by themselves and
    /// start out at a concrete zero value.
    pub fn is_value_type(&self) -> bool {
        self.default_value().is_some()
    }

    /// Build a fresh default ("zero") value for this kind.
    ///
    /// Reference kinds have no default other than absence and return `None`.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            ValueKind::Integer => Some(Value::Integer(0)),
            ValueKind::UInteger => Some(Value::UInteger(0)),
            ValueKind::Float => Some(Value::Float(0.0)),
            ValueKind::Boolean => Some(Value::Boolean(false)),
            ValueKind::Char => Some(Value::Char('\0')),
            ValueKind::DateTime => Some(Value::DateTime(OffsetDateTime::UNIX_EPOCH)),
            ValueKind::Duration => Some(Value::Duration(time::Duration::ZERO)),
            ValueKind::Uuid => Some(Value::Uuid(Uuid::nil())),
            ValueKind::String
            | ValueKind::Bytes
            | ValueKind::Array
            | ValueKind::Map
            | ValueKind::Object => None,
        }
    }

    /// Check whether `value` is this kind's default.
    ///
    /// Always false for reference kinds.
    pub fn is_default(&self, value: &Value) -> bool {
        self.default_value().is_some_and(|default| *value == default)
    }

    /// Get a human-readable name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            ValueKind::Integer => "Integer",
            ValueKind::UInteger => "UInteger",
            ValueKind::Float => "Float",
            ValueKind::Boolean => "Boolean",
            ValueKind::Char => "Char",
            ValueKind::DateTime => "DateTime",
            ValueKind::Duration => "Duration",
            ValueKind::Uuid => "Uuid",
            ValueKind::String => "String",
            ValueKind::Bytes => "Bytes",
            ValueKind::Array => "Array",
            ValueKind::Map => "Map",
            ValueKind::Object => "Object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_value_kind_classification() {
        assert!(ValueKind::Integer.is_value_type());
        assert!(ValueKind::DateTime.is_value_type());
        assert!(ValueKind::Uuid.is_value_type());
        assert!(!ValueKind::String.is_value_type());
        assert!(!ValueKind::Array.is_value_type());
        assert!(!ValueKind::Object.is_value_type());
    }

    #[test]
    fn test_default_detection() {
        assert!(ValueKind::Integer.is_default(&Value::Integer(0)));
        assert!(!ValueKind::Integer.is_default(&Value::Integer(99)));
        assert!(ValueKind::Float.is_default(&Value::Float(0.0)));
        assert!(ValueKind::Boolean.is_default(&Value::Boolean(false)));
        assert!(ValueKind::Uuid.is_default(&Value::Uuid(Uuid::nil())));
        assert!(ValueKind::DateTime.is_default(&Value::DateTime(OffsetDateTime::UNIX_EPOCH)));
        assert!(!ValueKind::DateTime.is_default(&Value::DateTime(datetime!(1990-05-17 0:00 UTC))));
        assert!(!ValueKind::String.is_default(&Value::String(String::new())));
    }

    #[test]
    fn test_default_value_round_trips_kind() {
        for kind in [
            ValueKind::Integer,
            ValueKind::UInteger,
            ValueKind::Float,
            ValueKind::Boolean,
            ValueKind::Char,
            ValueKind::DateTime,
            ValueKind::Duration,
            ValueKind::Uuid,
        ] {
            let default = kind.default_value().unwrap();
            assert_eq!(default.kind(), Some(kind));
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::String("Alice".to_string()).to_string(), "\"Alice\"");
        assert_eq!(Value::Array(vec![Value::Null]).to_string(), "Array[1]");
    }

    #[test]
    fn test_value_serializes_tagged() {
        let json = serde_json::to_value(Value::Integer(7)).unwrap();
        assert_eq!(json["type"], "Integer");
        assert_eq!(json["data"], 7);
    }
}
