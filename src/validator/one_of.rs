use std::sync::Arc;

use serde_json::Value;

use crate::error::{IssueCode, ValidationError};

use super::Validate;

/// Union validator: the value must match at least one member entity.
///
/// Member validators are resolved eagerly when the union is compiled, so
/// unions are compiled after all object types. Each member probe is an
/// independent `Result`; the first acceptance wins, and total rejection
/// produces a single failure listing every member type name.
#[derive(Debug)]
pub struct OneOf {
    name: String,
    members: Vec<(String, Arc<dyn Validate>)>,
}

impl OneOf {
    pub fn new(name: impl Into<String>, members: Vec<(String, Arc<dyn Validate>)>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// The union type name this validator was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn rejection(&self) -> ValidationError {
        let names: Vec<&str> = self.members.iter().map(|(name, _)| name.as_str()).collect();
        ValidationError::single(
            IssueCode::NotOneOf,
            format!("Was not one of {}", names.join(", ")),
        )
    }
}

impl Validate for OneOf {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Err(self.rejection());
        }

        let accepted = self
            .members
            .iter()
            .any(|(_, member)| member.validate(value).is_ok());
        if accepted {
            Ok(value.clone())
        } else {
            Err(self.rejection())
        }
    }
}
