//! Tests for loading trees from their JSON form.

use jprint_ast::*;

#[test]
fn test_deserialize_compilation_unit() {
    let json = r#"{
        "package": { "name": { "qualifier": { "identifier": "org" }, "identifier": "demo" } },
        "imports": [
            { "name": { "identifier": "List", "qualifier": { "identifier": "util", "qualifier": { "identifier": "java" } } } }
        ],
        "types": [
            {
                "kind": "Class",
                "modifiers": "PUBLIC | FINAL",
                "name": { "identifier": "Point" },
                "members": [
                    {
                        "kind": "Field",
                        "modifiers": "PRIVATE",
                        "variables": [
                            {
                                "ty": { "kind": "Primitive", "primitive": "int" },
                                "name": { "identifier": "x" },
                                "initializer": { "kind": "IntegerLiteral", "value": "0" }
                            }
                        ],
                        "data": { "range": { "pos": 40, "end": 58 } }
                    }
                ]
            }
        ]
    }"#;

    let cu: CompilationUnit = serde_json::from_str(json).unwrap();
    assert_eq!(
        cu.package.as_ref().map(|p| p.name.to_qualified_string()),
        Some("org.demo".to_string())
    );
    assert_eq!(cu.imports[0].name.to_qualified_string(), "java.util.List");
    assert!(!cu.imports[0].is_static);

    let TypeDeclaration::Class(class) = &cu.types[0] else {
        panic!("expected a class");
    };
    assert_eq!(class.modifiers, Modifiers::PUBLIC | Modifiers::FINAL);
    assert!(!class.is_interface);

    let BodyDeclaration::Field(field) = &class.members[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.range(), jprint_core::TextRange::new(40, 58));
    assert!(matches!(
        field.variables[0].initializer,
        Some(Expression::IntegerLiteral(_))
    ));
}

#[test]
fn test_deserialize_comments() {
    let json = r#"{
        "kind": "Block",
        "statements": [],
        "data": {
            "range": { "pos": 0, "end": 30 },
            "comment": { "kind": "doc", "content": " doc ", "range": { "pos": 0, "end": 0 } },
            "orphanComments": [
                { "kind": "line", "content": " inside", "range": { "pos": 5, "end": 14 } }
            ]
        }
    }"#;

    let stmt: Statement = serde_json::from_str(json).unwrap();
    assert_eq!(stmt.kind_name(), "BlockStmt");
    assert_eq!(stmt.comment().map(|c| c.kind), Some(CommentKind::Doc));
    assert_eq!(stmt.orphan_comments()[0].content, " inside");
}

#[test]
fn test_annotation_arguments_default_to_marker() {
    let json = r#"{ "name": { "identifier": "Override" } }"#;
    let annotation: Annotation = serde_json::from_str(json).unwrap();
    assert!(matches!(annotation.arguments, AnnotationArguments::Marker));
}
