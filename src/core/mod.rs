//! Core types and traits for nullguard.
//!
//! This module contains the foundational pieces the validator works on:
//! - Field value types (`Value`, `ValueKind`)
//! - Conversions from Rust field types
//! - Field descriptors and the `Inspect` trait
//! - Error types

pub mod types;
pub mod convert;
pub mod field;
pub mod error;

// Re-export commonly used types
pub use types::{Value, ValueKind};
pub use convert::{Bytes, IntoValue, Opaque};
pub use field::{FieldDescriptor, Inspect};
pub use error::{ConfigError, ValidatorError, ValidatorResult};
