use serde_json::Value;

use crate::error::{value_type_name, IssueCode, PathSegment, ValidationError};

use super::Validate;

/// Element-wise array validator.
///
/// Every element runs through the element validator; failures carry the
/// element index in their path. `null` skips, like shapes.
#[derive(Debug)]
pub struct Each {
    element: Box<dyn Validate>,
}

impl Each {
    pub fn new(element: Box<dyn Validate>) -> Self {
        Self { element }
    }
}

impl Validate for Each {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let items = value.as_array().ok_or_else(|| {
            ValidationError::single(
                IssueCode::InvalidType {
                    expected: "array".to_string(),
                    received: value_type_name(value).to_string(),
                },
                format!("Expected array, received {}", value_type_name(value)),
            )
        })?;

        let mut errors = ValidationError::new();
        for (idx, item) in items.iter().enumerate() {
            if let Err(e) = self.element.validate(item) {
                errors = errors.merge(e.with_prefix(PathSegment::Index(idx)));
            }
        }

        if errors.is_empty() {
            Ok(value.clone())
        } else {
            Err(errors)
        }
    }
}
