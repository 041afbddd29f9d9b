//! Schema compilation: type graph in, registry of validators out.

use std::collections::HashMap;
use std::sync::Arc;

use graphql_parser::parse_schema;
use graphql_parser::schema::{
    Definition, Document, EnumType, ObjectType, TypeDefinition, UnionType,
};

use crate::error::CompileError;
use crate::input::SchemaInput;
use crate::registry::Registry;
use crate::typeref::{ScalarKind, TypeRef};
use crate::validator::{
    DateValue, Each, Lazy, Nullable, OneOf, OneOfValues, Required, Scalar, Shape, Validate,
};

/// Schema type names that never compile to entities.
const BUILT_IN: [&str; 7] = [
    "Query", "Mutation", "String", "Int", "Float", "DateTime", "Boolean",
];

/// Prefix of introspection types (`__Schema`, `__Type`, ...).
const INTROSPECTION_PREFIX: &str = "__";

/// Compiles a GraphQL schema into a registry of runtime validators, one
/// per named entity.
///
/// Object types are compiled first, then unions (whose members must
/// already exist), then enums. Entity-typed fields defer their registry
/// lookup to validation time, so self-referential and mutually recursive
/// schemas compile without any ordering concerns.
///
/// # Example
/// ```
/// use gql_vld::Compiler;
/// use serde_json::json;
///
/// let compiler = Compiler::new("type User { name: String!  age: Int }")?;
/// let user = compiler.entity("User")?;
/// assert!(user.is_valid(&json!({"name": "Alex", "age": 30})));
/// assert!(!user.is_valid(&json!({"age": 30})));
/// # Ok::<(), gql_vld::CompileError>(())
/// ```
#[derive(Debug)]
pub struct Compiler {
    registry: Arc<Registry>,
}

impl Compiler {
    /// Compile a schema with no exclude rules.
    pub fn new<S: SchemaInput + ?Sized>(source: &S) -> Result<Self, CompileError> {
        Self::with_excludes(source, &[])
    }

    /// Compile a schema, skipping excluded fields.
    ///
    /// An exclude rule is either a bare field name (applies to every
    /// entity) or `Entity.field` (applies to that entity only).
    ///
    /// # Example
    /// ```
    /// use gql_vld::Compiler;
    /// use serde_json::json;
    ///
    /// let compiler = Compiler::with_excludes(
    ///     "type User { name: String!  password: String! }",
    ///     &["password"],
    /// )?;
    /// // The excluded field is absent from the compiled entity entirely.
    /// assert!(compiler.entity("User")?.is_valid(&json!({"name": "Alex"})));
    /// # Ok::<(), gql_vld::CompileError>(())
    /// ```
    pub fn with_excludes<S: SchemaInput + ?Sized>(
        source: &S,
        excludes: &[&str],
    ) -> Result<Self, CompileError> {
        let sdl = source.to_sdl()?;
        let document: Document<'_, String> = parse_schema(&sdl)?;
        let excludes: Vec<String> = excludes.iter().map(|rule| rule.to_string()).collect();

        let registry = Arc::new(Registry::default());
        let mut entries: HashMap<String, Arc<dyn Validate>> = HashMap::new();

        let (objects, unions, enums) = bucket(&document);

        for object in objects {
            entries.insert(
                object.name.clone(),
                compile_object(object, &registry, &excludes),
            );
        }
        for union in unions {
            let one_of = compile_union(union, &entries)?;
            entries.insert(union.name.clone(), one_of);
        }
        for enum_type in enums {
            entries.insert(enum_type.name.clone(), compile_enum(enum_type));
        }

        registry.seal(entries);
        Ok(Self { registry })
    }

    /// Look up the compiled validator for a named entity.
    pub fn entity(&self, name: &str) -> Result<Arc<dyn Validate>, CompileError> {
        self.registry
            .get(name)
            .ok_or_else(|| CompileError::UnknownEntity(name.to_string()))
    }

    /// Names of all compiled entities, sorted.
    pub fn entity_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// The registry backing this compiler.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

type Buckets<'a> = (
    Vec<&'a ObjectType<'a, String>>,
    Vec<&'a UnionType<'a, String>>,
    Vec<&'a EnumType<'a, String>>,
);

/// Bucket the document's type definitions, filtering built-ins and
/// introspection types.
fn bucket<'a>(document: &'a Document<'a, String>) -> Buckets<'a> {
    let mut objects = vec![];
    let mut unions = vec![];
    let mut enums = vec![];

    for definition in &document.definitions {
        let Definition::TypeDefinition(type_definition) = definition else {
            continue;
        };
        match type_definition {
            TypeDefinition::Object(object) if compiles(&object.name) => objects.push(object),
            TypeDefinition::Union(union) if compiles(&union.name) => unions.push(union),
            TypeDefinition::Enum(enum_type) if compiles(&enum_type.name) => enums.push(enum_type),
            _ => {}
        }
    }

    (objects, unions, enums)
}

fn compiles(name: &str) -> bool {
    !BUILT_IN.contains(&name) && !name.starts_with(INTROSPECTION_PREFIX)
}

fn compile_object(
    object: &ObjectType<'_, String>,
    registry: &Arc<Registry>,
    excludes: &[String],
) -> Arc<dyn Validate> {
    let mut shape = Shape::new(object.name.as_str());
    for field in &object.fields {
        if excluded(excludes, &object.name, &field.name) {
            continue;
        }
        if let Some(validator) =
            compile_field(&field.name, &field.field_type.to_string(), registry)
        {
            shape = shape.field(field.name.as_str(), validator);
        }
    }
    Arc::new(shape)
}

fn excluded(excludes: &[String], entity: &str, field: &str) -> bool {
    let qualified = format!("{entity}.{field}");
    excludes
        .iter()
        .any(|rule| rule.as_str() == field || rule.as_str() == qualified)
}

/// Compile one field descriptor into its validator.
fn compile_field(name: &str, raw: &str, registry: &Arc<Registry>) -> Option<Box<dyn Validate>> {
    let type_ref = TypeRef::classify(raw)?;

    let base: Box<dyn Validate> = if type_ref.is_array {
        let element: Box<dyn Validate> = match type_ref.scalar {
            Some(kind) => scalar_validator(kind),
            // Resolved elements must themselves be non-null inside arrays.
            None => {
                Box::new(Lazy::new(type_ref.base.as_str(), Arc::clone(registry)).required())
            }
        };
        Box::new(Each::new(element))
    } else {
        match type_ref.scalar {
            Some(kind) => scalar_validator(kind),
            None => Box::new(Lazy::new(type_ref.base.as_str(), Arc::clone(registry))),
        }
    };

    Some(if type_ref.is_required {
        Box::new(Required::new(name, base))
    } else if !type_ref.is_array && primitive(type_ref.scalar) {
        // Dates, lazies, arrays and shapes already treat null as skip.
        Box::new(Nullable::new(base))
    } else {
        base
    })
}

fn primitive(scalar: Option<ScalarKind>) -> bool {
    matches!(
        scalar,
        Some(ScalarKind::String | ScalarKind::Number | ScalarKind::Boolean)
    )
}

fn scalar_validator(kind: ScalarKind) -> Box<dyn Validate> {
    match kind {
        ScalarKind::String => Box::new(Scalar::String),
        ScalarKind::Number => Box::new(Scalar::Number),
        ScalarKind::Boolean => Box::new(Scalar::Boolean),
        ScalarKind::Date => Box::new(DateValue::new()),
    }
}

/// Union members are resolved eagerly from the entries compiled so far;
/// a member naming no compiled object type is a construction error.
fn compile_union(
    union: &UnionType<'_, String>,
    entries: &HashMap<String, Arc<dyn Validate>>,
) -> Result<Arc<dyn Validate>, CompileError> {
    let mut members = Vec::with_capacity(union.types.len());
    for member in &union.types {
        let validator = entries
            .get(member.as_str())
            .cloned()
            .ok_or_else(|| CompileError::UnknownEntity(member.clone()))?;
        members.push((member.clone(), validator));
    }
    Ok(Arc::new(OneOf::new(union.name.as_str(), members)))
}

fn compile_enum(enum_type: &EnumType<'_, String>) -> Arc<dyn Validate> {
    let values: Vec<String> = enum_type
        .values
        .iter()
        .map(|value| value.name.clone())
        .collect();
    Arc::new(OneOfValues::new(enum_type.name.as_str(), values))
}
