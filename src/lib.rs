//! # gql-vld — runtime validators derived from GraphQL schemas
//!
//! `gql-vld` compiles a GraphQL schema (SDL) into runtime validators over
//! [`serde_json::Value`]. If an application already defines a schema for
//! its API layer, the input validators are derived from it and can never
//! drift out of sync.
//!
//! ## Quick Start
//!
//! ```rust
//! use gql_vld::Compiler;
//! use serde_json::json;
//!
//! let compiler = Compiler::new(
//!     "type Author { name: String!  active: Boolean }
//!      type Post { title: String!  author: Author!  tags: [String!] }",
//! )?;
//!
//! let post = compiler.entity("Post")?;
//! post.validate(&json!({
//!     "title": "Derived validators",
//!     "author": {"name": "Alex", "active": true},
//!     "tags": ["rust", "graphql"],
//! }))?;
//!
//! let err = post.validate(&json!({"author": {"name": "Alex"}})).unwrap_err();
//! assert!(err.to_string().contains("title is a required field"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The schema source may be inline SDL text, a filesystem path (a string
//! starting with `/` or `.`), or an already-parsed
//! [`Document`](graphql_parser::schema::Document). Fields can be excluded
//! from the compiled validators with [`Compiler::with_excludes`].

pub mod compiler;
pub mod error;
pub mod input;
pub mod registry;
pub mod typeref;
pub mod validator;

pub use compiler::Compiler;
pub use error::{CompileError, Issue, IssueCode, PathSegment, ValidationError};
pub use input::SchemaInput;
pub use registry::Registry;
pub use typeref::{ScalarKind, TypeRef};
pub use validator::Validate;

/// Common imports for working with `gql-vld`.
pub mod prelude {
    pub use crate::error::{CompileError, Issue, IssueCode, PathSegment, ValidationError};
    pub use crate::input::SchemaInput;
    pub use crate::typeref::{ScalarKind, TypeRef};
    pub use crate::validator::Validate;
    pub use crate::Compiler;
}
