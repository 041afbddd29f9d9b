use std::path::{Path, PathBuf};

use graphql_parser::schema::Document;

use crate::error::CompileError;

/// Trait for values accepted as a schema source.
///
/// Implemented for inline SDL text (`&str`, `String`), filesystem paths
/// (`Path`, `PathBuf`) and already-parsed documents. A plain string that
/// starts with `/` or `.` is treated as a path to a schema file rather
/// than as schema text.
pub trait SchemaInput {
    /// Resolve this input to SDL text.
    fn to_sdl(&self) -> Result<String, CompileError>;
}

impl SchemaInput for str {
    fn to_sdl(&self) -> Result<String, CompileError> {
        if self.starts_with('/') || self.starts_with('.') {
            Path::new(self).to_sdl()
        } else {
            Ok(self.to_string())
        }
    }
}

impl SchemaInput for String {
    fn to_sdl(&self) -> Result<String, CompileError> {
        self.as_str().to_sdl()
    }
}

impl SchemaInput for Path {
    fn to_sdl(&self) -> Result<String, CompileError> {
        std::fs::read_to_string(self).map_err(|source| CompileError::Io {
            path: self.to_path_buf(),
            source,
        })
    }
}

impl SchemaInput for PathBuf {
    fn to_sdl(&self) -> Result<String, CompileError> {
        self.as_path().to_sdl()
    }
}

/// A pre-parsed document is rendered back to SDL; parsing it again inside
/// the compiler keeps a single construction path for every source kind.
impl<'a> SchemaInput for Document<'a, String> {
    fn to_sdl(&self) -> Result<String, CompileError> {
        Ok(self.to_string())
    }
}
