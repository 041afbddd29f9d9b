//! Classification of schema type-reference strings.

/// Primitive validator targets a scalar type name can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Date,
}

impl ScalarKind {
    /// Case-insensitive scalar name lookup.
    ///
    /// `Int`, `Float` and `Number` all map to the numeric primitive;
    /// `Date` and `DateTime` to the date one. Anything else is a
    /// user-defined type and returns `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "int" | "float" | "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "date" | "datetime" => Some(Self::Date),
            _ => None,
        }
    }
}

/// A classified type reference such as `[Foo!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Residual base type name, e.g. `Foo`.
    pub base: String,
    /// The primitive this base name maps to, if any.
    pub scalar: Option<ScalarKind>,
    pub is_array: bool,
    pub is_required: bool,
}

impl TypeRef {
    /// Classify a raw type-reference string.
    ///
    /// One trailing `!` marks the reference required; brackets mark an
    /// array; an inner trailing `!` (element requiredness, as in `[T!]`)
    /// is consumed structurally but not separately tracked.
    ///
    /// Returns `None` for an empty reference; callers must guard.
    pub fn classify(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (rest, is_required) = strip_required_marker(trimmed);
        let (rest, is_array) = match rest
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
        {
            Some(inner) => (inner.trim(), true),
            None => (rest, false),
        };
        let (base, _element_required) = strip_required_marker(rest);
        if base.is_empty() {
            return None;
        }

        Some(Self {
            base: base.to_string(),
            scalar: ScalarKind::from_name(base),
            is_array,
            is_required,
        })
    }

    /// Whether this reference names a user-defined (non-scalar) type.
    pub fn is_custom(&self) -> bool {
        self.scalar.is_none()
    }
}

fn strip_required_marker(s: &str) -> (&str, bool) {
    match s.strip_suffix('!') {
        Some(rest) => (rest.trim_end(), true),
        None => (s, false),
    }
}
