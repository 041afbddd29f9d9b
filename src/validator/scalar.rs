use serde_json::Value;

use crate::error::{value_type_name, IssueCode, ValidationError};

use super::Validate;

/// Type check for the string, number and boolean primitives.
///
/// `null` is a type mismatch here; optional fields are wrapped in
/// [`Nullable`](super::Nullable) by the field compiler instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Number,
    Boolean,
}

impl Scalar {
    fn expected(self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Number => "number",
            Scalar::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Scalar::String => value.is_string(),
            Scalar::Number => value.is_number(),
            Scalar::Boolean => value.is_boolean(),
        }
    }
}

impl Validate for Scalar {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if self.matches(value) {
            Ok(value.clone())
        } else {
            Err(ValidationError::single(
                IssueCode::InvalidType {
                    expected: self.expected().to_string(),
                    received: value_type_name(value).to_string(),
                },
                format!(
                    "Expected {}, received {}",
                    self.expected(),
                    value_type_name(value)
                ),
            ))
        }
    }
}
