use serde_json::Value;

use crate::error::{IssueCode, ValidationError};

use super::Validate;

/// Enum validator: the value must be one of the declared literals.
///
/// The rejection message enumerates the allowed values in declaration
/// order. `null` skips; requiredness is layered by the consuming field.
#[derive(Debug)]
pub struct OneOfValues {
    name: String,
    values: Vec<String>,
}

impl OneOfValues {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The enum type name this validator was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The allowed values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn rejection(&self) -> ValidationError {
        ValidationError::single(
            IssueCode::NotEnumMember,
            format!(
                "Enum {} must be one of the following values: {}",
                self.name,
                self.values.join(", ")
            ),
        )
    }
}

impl Validate for OneOfValues {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) if self.values.iter().any(|v| v == s) => Ok(value.clone()),
            _ => Err(self.rejection()),
        }
    }
}
