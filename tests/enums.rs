use gql_vld::Compiler;
use serde_json::json;

const SCHEMA: &str = "
enum Test {
    value1
    value2
}

type Task {
    state: Test!
}
";

#[test]
fn declared_values_are_accepted() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let test = compiler.entity("Test").unwrap();

    assert_eq!(test.validate(&json!("value1")).unwrap(), json!("value1"));
    assert_eq!(test.validate(&json!("value2")).unwrap(), json!("value2"));
}

#[test]
fn rejection_names_the_enum_and_its_values() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let test = compiler.entity("Test").unwrap();

    let err = test.validate(&json!("wrong")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Enum Test must be one of the following values: value1, value2"
    );
}

#[test]
fn non_string_values_are_rejected() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let test = compiler.entity("Test").unwrap();

    assert!(test.validate(&json!(3)).is_err());
    assert!(test.validate(&json!(true)).is_err());
}

#[test]
fn null_skips_unless_the_field_is_required() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let test = compiler.entity("Test").unwrap();
    assert!(test.validate(&json!(null)).is_ok());

    let task = compiler.entity("Task").unwrap();
    let err = task.validate(&json!({"state": null})).unwrap_err();
    assert!(err.to_string().contains("state is a required field"));
}

#[test]
fn enum_fields_resolve_through_the_registry() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let task = compiler.entity("Task").unwrap();

    assert!(task.is_valid(&json!({"state": "value2"})));
    let err = task.validate(&json!({"state": "wrong"})).unwrap_err();
    assert!(err
        .to_string()
        .contains("Enum Test must be one of the following values"));
}
