use std::sync::Arc;

use serde_json::Value;

use crate::error::{IssueCode, ValidationError};
use crate::registry::Registry;

use super::Validate;

/// Deferred validator: resolves the named entity in the registry at
/// validation time, not at compile time.
///
/// The registry is fully populated before the first validation runs, so
/// forward references (including self-references and mutually recursive
/// types) resolve without any declaration-order requirement.
#[derive(Debug)]
pub struct Lazy {
    name: String,
    registry: Arc<Registry>,
    required: bool,
}

impl Lazy {
    pub fn new(name: impl Into<String>, registry: Arc<Registry>) -> Self {
        Self {
            name: name.into(),
            registry,
            required: false,
        }
    }

    /// Require the resolved value to be non-null. Used for elements of
    /// entity-typed arrays.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Validate for Lazy {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return if self.required {
                Err(ValidationError::single(
                    IssueCode::Required,
                    format!("{} is a required field", self.name),
                ))
            } else {
                Ok(Value::Null)
            };
        }

        let target = self.registry.get(&self.name).ok_or_else(|| {
            ValidationError::single(
                IssueCode::UnknownEntity,
                format!("Unknown entity {}", self.name),
            )
        })?;
        target.validate(value)
    }
}
