use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct a [`Compiler`](crate::Compiler) or look up a
/// compiled entity.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The schema source was not valid SDL. Propagated unchanged from the
    /// schema parser.
    #[error(transparent)]
    Parse(#[from] graphql_parser::schema::ParseError),

    /// The schema file could not be read.
    #[error("failed to read schema from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No entity with this name was compiled from the schema.
    #[error("Unknown entity {0}")]
    UnknownEntity(String),
}

/// A segment in a validation error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Validation issue code — describes what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueCode {
    InvalidType { expected: String, received: String },
    Required,
    InvalidDate,
    NotOneOf,
    NotEnumMember,
    UnknownEntity,
    Serialization,
}

/// A single validation issue with its path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<PathSegment>,
}

/// Collection of validation failures.
///
/// Issues are accumulated (not short-circuited), so all failures in a
/// candidate value are reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// Create an empty error container.
    pub fn new() -> Self {
        Self { issues: vec![] }
    }

    /// Create an error with a single issue.
    pub fn single(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue {
                code,
                message: message.into(),
                path: vec![],
            }],
        }
    }

    /// Push a single issue.
    pub fn push(&mut self, code: IssueCode, message: impl Into<String>) {
        self.issues.push(Issue {
            code,
            message: message.into(),
            path: vec![],
        });
    }

    /// Prepend a path segment to all issues (used by shape/array validators).
    pub fn with_prefix(mut self, segment: PathSegment) -> Self {
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }

    /// Merge another error's issues into this one.
    pub fn merge(mut self, other: ValidationError) -> Self {
        self.issues.extend(other.issues);
        self
    }

    /// Check if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if !issue.path.is_empty() {
                let path: String = issue.path.iter().map(|p| p.to_string()).collect();
                write!(f, "{}: ", path)?;
            }
            write!(f, "{}", issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Returns the JSON type name for a value.
pub fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
