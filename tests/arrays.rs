use gql_vld::Compiler;
use serde_json::json;

const SCHEMA: &str = "
type Item {
    sku: String!
}

type Order {
    items: [Item!]!
    notes: [String]
}
";

#[test]
fn entity_arrays_validate_each_element_in_order() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let input = json!({"items": [{"sku": "a"}, {"sku": "b"}, {"sku": "c"}]});
    assert_eq!(order.validate(&input).unwrap(), input);
}

#[test]
fn element_failures_carry_their_index() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let err = order
        .validate(&json!({"items": [{"sku": "a"}, {"sku": 2}]}))
        .unwrap_err();
    assert!(err.to_string().contains(".items[1].sku"));
}

#[test]
fn null_elements_of_entity_arrays_are_rejected() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let err = order
        .validate(&json!({"items": [{"sku": "a"}, null]}))
        .unwrap_err();
    assert!(err.to_string().contains("Item is a required field"));
    assert!(err.to_string().contains("[1]"));
}

#[test]
fn required_array_rejects_null_and_absence() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let err = order.validate(&json!({})).unwrap_err();
    assert!(err.to_string().contains("items is a required field"));

    let err = order.validate(&json!({"items": null})).unwrap_err();
    assert!(err.to_string().contains("items is a required field"));
}

#[test]
fn non_array_input_is_rejected() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let err = order.validate(&json!({"items": "a,b"})).unwrap_err();
    assert!(err.to_string().contains("Expected array, received string"));
}

#[test]
fn primitive_arrays_check_element_types() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let input = json!({"items": [], "notes": ["first", "second"]});
    assert_eq!(order.validate(&input).unwrap(), input);

    let err = order
        .validate(&json!({"items": [], "notes": ["first", 2]}))
        .unwrap_err();
    assert!(err.to_string().contains(".notes[1]"));
}

#[test]
fn optional_array_accepts_null() {
    let compiler = Compiler::new(SCHEMA).unwrap();
    let order = compiler.entity("Order").unwrap();

    let input = json!({"items": [], "notes": null});
    assert_eq!(order.validate(&input).unwrap(), input);
}
