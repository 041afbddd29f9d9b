use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::error::{IssueCode, ValidationError};

use super::Validate;

/// Date scalar validator.
///
/// A string passes if any of the accepted formats parses it: RFC 3339
/// (ISO 8601), RFC 2822, `%Y-%m-%d` or `%m/%d/%Y`. `null` skips;
/// requiredness is layered by [`Required`](super::Required) separately.
/// Everything else, wrong JSON type or unparseable string alike, rejects
/// with the fixed message `Invalid date format`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValue;

impl DateValue {
    pub fn new() -> Self {
        Self
    }

    fn parses(s: &str) -> bool {
        DateTime::parse_from_rfc3339(s).is_ok()
            || DateTime::parse_from_rfc2822(s).is_ok()
            || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
            || NaiveDate::parse_from_str(s, "%m/%d/%Y").is_ok()
    }
}

impl Validate for DateValue {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) if Self::parses(s) => Ok(value.clone()),
            _ => Err(ValidationError::single(
                IssueCode::InvalidDate,
                "Invalid date format",
            )),
        }
    }
}
