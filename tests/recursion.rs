use gql_vld::Compiler;
use serde_json::json;

#[test]
fn self_referential_types_compile_and_validate() {
    let compiler = Compiler::new(
        "type Node {
            value: Int!
            next: Node
            children: [Node!]
        }",
    )
    .unwrap();
    let node = compiler.entity("Node").unwrap();

    let input = json!({
        "value": 1,
        "next": {"value": 2, "children": [{"value": 3}]},
        "children": [
            {"value": 4},
            {"value": 5, "next": {"value": 6}},
        ],
    });
    assert_eq!(node.validate(&input).unwrap(), input);
}

#[test]
fn deep_failures_carry_the_full_path() {
    let compiler = Compiler::new(
        "type Node {
            value: Int!
            next: Node
        }",
    )
    .unwrap();
    let node = compiler.entity("Node").unwrap();

    let err = node
        .validate(&json!({"value": 1, "next": {"value": 2, "next": {"next": null}}}))
        .unwrap_err();
    assert!(err.to_string().contains(".next.next.value"));
    assert!(err.to_string().contains("value is a required field"));
}

#[test]
fn mutually_recursive_types_compile_and_validate() {
    let compiler = Compiler::new(
        "type Author {
            name: String!
            posts: [Post!]
        }

        type Post {
            title: String!
            author: Author
        }",
    )
    .unwrap();

    let author = compiler.entity("Author").unwrap();
    let input = json!({
        "name": "Alex",
        "posts": [
            {"title": "first", "author": {"name": "Alex"}},
            {"title": "second"},
        ],
    });
    assert_eq!(author.validate(&input).unwrap(), input);
}

#[test]
fn forward_references_do_not_depend_on_declaration_order() {
    // Uses Post before Author is declared.
    let compiler = Compiler::new(
        "type Blog {
            posts: [Post!]!
        }

        type Post {
            title: String!
        }",
    )
    .unwrap();

    let blog = compiler.entity("Blog").unwrap();
    assert!(blog.is_valid(&json!({"posts": [{"title": "hello"}]})));
}
