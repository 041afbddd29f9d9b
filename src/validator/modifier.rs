use serde_json::Value;

use crate::error::{IssueCode, ValidationError};

use super::Validate;

/// Rejects null or missing values before delegating to the inner validator.
///
/// The label, normally the field name, feeds the failure message
/// `<label> is a required field`.
#[derive(Debug)]
pub struct Required {
    label: String,
    inner: Box<dyn Validate>,
}

impl Required {
    pub fn new(label: impl Into<String>, inner: Box<dyn Validate>) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }
}

impl Validate for Required {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Err(ValidationError::single(
                IssueCode::Required,
                format!("{} is a required field", self.label),
            ));
        }
        self.inner.validate(value)
    }
}

/// Lets null through untouched; everything else goes to the inner validator.
///
/// Applied to non-required scalar fields, whose bare validators would
/// otherwise reject null as a type mismatch.
#[derive(Debug)]
pub struct Nullable {
    inner: Box<dyn Validate>,
}

impl Nullable {
    pub fn new(inner: Box<dyn Validate>) -> Self {
        Self { inner }
    }
}

impl Validate for Nullable {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.inner.validate(value)
    }
}
