//! The compiled-validator runtime.
//!
//! Every validator produced by the compiler is a [`Validate`] trait object.
//! Validators never transform the candidate: on success the resolved value
//! is deep-equal to the input.

mod array;
mod date;
mod enumeration;
mod lazy;
mod modifier;
mod one_of;
mod scalar;
mod shape;

pub use array::Each;
pub use date::DateValue;
pub use enumeration::OneOfValues;
pub use lazy::Lazy;
pub use modifier::{Nullable, Required};
pub use one_of::OneOf;
pub use scalar::Scalar;
pub use shape::Shape;

use serde_json::Value;

use crate::error::{IssueCode, ValidationError};

/// Object-safe validation contract implemented by every compiled validator.
pub trait Validate: Send + Sync + std::fmt::Debug {
    /// Validate a candidate value.
    ///
    /// Returns the resolved value (deep-equal to the input) on success.
    fn validate(&self, value: &Value) -> Result<Value, ValidationError>;

    /// Whether the candidate passes validation.
    fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}

impl dyn Validate {
    /// Serialize a native Rust value through serde, then validate the result.
    ///
    /// This is how native date values are accepted: `chrono` types
    /// serialize to RFC 3339 strings, which date fields recognize.
    pub fn check<T: serde::Serialize>(&self, value: &T) -> Result<Value, ValidationError> {
        let json = serde_json::to_value(value).map_err(|e| {
            ValidationError::single(
                IssueCode::Serialization,
                format!("Failed to serialize value: {}", e),
            )
        })?;
        self.validate(&json)
    }
}
