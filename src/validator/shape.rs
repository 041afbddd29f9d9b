use serde_json::Value;

use crate::error::{value_type_name, IssueCode, PathSegment, ValidationError};

use super::Validate;

/// Object-shape validator: each declared field is checked by its own
/// validator, with missing fields validated as `null`.
///
/// Field order follows declaration order. Fields not declared in the
/// schema pass through untouched. `null` skips; presence is the
/// enclosing [`Required`](super::Required)'s concern.
#[derive(Debug)]
pub struct Shape {
    name: String,
    fields: Vec<(String, Box<dyn Validate>)>,
}

impl Shape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Add a field with its validator.
    pub fn field(mut self, name: impl Into<String>, validator: Box<dyn Validate>) -> Self {
        self.fields.push((name.into(), validator));
        self
    }

    /// The entity name this shape was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the declared fields, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Validate for Shape {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let obj = value.as_object().ok_or_else(|| {
            ValidationError::single(
                IssueCode::InvalidType {
                    expected: "object".to_string(),
                    received: value_type_name(value).to_string(),
                },
                format!("Expected object, received {}", value_type_name(value)),
            )
        })?;

        let mut errors = ValidationError::new();
        for (name, validator) in &self.fields {
            let field_value = obj.get(name).unwrap_or(&Value::Null);
            if let Err(e) = validator.validate(field_value) {
                errors = errors.merge(e.with_prefix(PathSegment::Field(name.clone())));
            }
        }

        if errors.is_empty() {
            Ok(value.clone())
        } else {
            Err(errors)
        }
    }
}
