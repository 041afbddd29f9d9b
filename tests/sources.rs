use gql_vld::{CompileError, Compiler};
use graphql_parser::parse_schema;
use serde_json::json;
use std::path::Path;

const SCHEMA: &str = "type User { name: String! }";

#[test]
fn inline_text_is_parsed_directly() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    assert!(compiler
        .entity("User")
        .unwrap()
        .is_valid(&json!({"name": "Alex"})));
}

#[test]
fn owned_strings_work_like_text() {
    let schema = SCHEMA.to_string();
    let compiler = Compiler::new(&schema).unwrap();
    assert!(compiler.entity("User").is_ok());
}

#[test]
fn leading_slash_strings_are_read_as_paths() {
    let path = std::env::temp_dir().join("gql_vld_sources_test.graphql");
    std::fs::write(&path, SCHEMA).unwrap();

    let path_str = path.to_str().unwrap();
    assert!(path_str.starts_with('/'));

    let compiler = Compiler::new(path_str).unwrap();
    assert!(compiler.entity("User").is_ok());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn explicit_paths_are_always_read_from_disk() {
    let path = std::env::temp_dir().join("gql_vld_sources_explicit.graphql");
    std::fs::write(&path, SCHEMA).unwrap();

    let compiler = Compiler::new(path.as_path()).unwrap();
    assert!(compiler.entity("User").is_ok());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_files_surface_as_io_errors() {
    let err = Compiler::new(Path::new("/definitely/not/here.graphql")).unwrap_err();
    assert!(matches!(err, CompileError::Io { .. }));
}

#[test]
fn parsed_documents_are_accepted() {
    let document = parse_schema::<String>(SCHEMA).unwrap();
    let compiler = Compiler::new(&document).unwrap();
    assert!(compiler.entity("User").is_ok());
}

#[test]
fn malformed_sdl_propagates_the_parser_error() {
    let err = Compiler::new("type {{{").unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}
