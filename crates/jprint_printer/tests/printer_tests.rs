//! Printer integration tests.
//!
//! Builds trees with the factory and checks the exact text each rendering
//! rule produces.

use jprint_ast::factory::*;
use jprint_ast::*;
use jprint_printer::{print_unit, Decorator, PrintError, Printer, PrinterOptions, Role};
use std::sync::Mutex;

/// Helper: print a compilation unit holding the given type declarations.
fn print_types(types: Vec<TypeDeclaration>) -> String {
    let unit = compilation_unit(None, vec![], types);
    print_unit(&unit, PrinterOptions::default()).unwrap()
}

/// Helper: print a class `A` holding the given members.
fn print_members(members: Vec<BodyDeclaration>) -> String {
    print_types(vec![TypeDeclaration::Class(class(Modifiers::empty(), "A", members))])
}

fn print_stmt(stmt: &Statement) -> String {
    Printer::new(PrinterOptions::default())
        .print(NodeRef::from_stmt(stmt))
        .unwrap()
}

fn print_expr(expr: &Expression) -> String {
    Printer::new(PrinterOptions::default())
        .print(NodeRef::from_expr(expr))
        .unwrap()
}

fn call0(name: &str) -> Expression {
    call(None, name, vec![])
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_array_field_unwinding() {
    let out = print_members(vec![field(
        Modifiers::empty(),
        array_type(primitive(Primitive::Int), 3),
        &["f"],
    )]);
    assert_eq!(out, "class A {\n\n    int f[][][];\n}\n");
}

#[test]
fn test_empty_modifiers_have_no_leading_space() {
    let out = print_members(vec![field(Modifiers::empty(), primitive(Primitive::Int), &["x"])]);
    assert!(out.contains("\n    int x;\n"), "{out}");
}

#[test]
fn test_modifiers_in_canonical_order() {
    let out = print_members(vec![field(
        Modifiers::FINAL | Modifiers::STATIC | Modifiers::PRIVATE,
        primitive(Primitive::Long),
        &["a", "b"],
    )]);
    assert!(out.contains("    private static final long a, b;\n"), "{out}");
}

#[test]
fn test_field_initializers() {
    let out = print_members(vec![field_with(
        Modifiers::empty(),
        vec![
            variable(primitive(Primitive::Int), "a", Some(int_literal("1"))),
            variable(array_of(primitive(Primitive::Int)), "b", None),
        ],
    )]);
    assert!(out.contains("    int a = 1, b[];\n"), "{out}");
}

#[test]
fn test_package_and_imports() {
    let unit = compilation_unit(
        Some("com.example"),
        vec![
            import("java.util.List", false, false),
            import("java.util", false, true),
            import("java.lang.Math.max", true, false),
        ],
        vec![TypeDeclaration::Class(class(Modifiers::empty(), "A", vec![]))],
    );
    let out = print_unit(&unit, PrinterOptions::default()).unwrap();
    assert_eq!(
        out,
        "package com.example;\n\nimport java.util.List;\nimport java.util.*;\nimport static java.lang.Math.max;\n\nclass A {\n}\n"
    );
}

#[test]
fn test_type_declarations_separated_by_blank_line() {
    let out = print_types(vec![
        TypeDeclaration::Class(class(Modifiers::empty(), "A", vec![])),
        TypeDeclaration::Class(class(Modifiers::empty(), "B", vec![])),
    ]);
    assert_eq!(out, "class A {\n}\n\nclass B {\n}\n");
}

#[test]
fn test_class_header() {
    let mut decl = class(Modifiers::PUBLIC | Modifiers::ABSTRACT, "Box", vec![]);
    decl.type_parameters = vec![type_parameter("T", vec![class_type("Comparable"), class_type("Cloneable")])];
    decl.extends = vec![class_type("Base")];
    decl.implements = vec![generic_class_type("Iterable", vec![type_ref("T")]), class_type("Serializable")];
    let out = print_types(vec![TypeDeclaration::Class(decl)]);
    assert_eq!(
        out,
        "public abstract class Box<T extends Comparable & Cloneable> extends Base implements Iterable<T>, Serializable {\n}\n"
    );
}

#[test]
fn test_interface_method_without_body() {
    let out = print_types(vec![TypeDeclaration::Class(interface(
        Modifiers::PUBLIC,
        "Shape",
        vec![method(Modifiers::empty(), primitive(Primitive::Double), "area", vec![], None)],
    ))]);
    assert_eq!(out, "public interface Shape {\n\n    double area();\n}\n");
}

#[test]
fn test_method_with_annotation_and_body() {
    let mut m = method(
        Modifiers::PUBLIC,
        type_ref("String"),
        "toString",
        vec![],
        Some(block(vec![return_stmt(Some(string_literal("A")))])),
    );
    if let BodyDeclaration::Method(decl) = &mut m {
        decl.annotations.push(marker_annotation("Override"));
    }
    let out = print_members(vec![m]);
    assert_eq!(
        out,
        "class A {\n\n    @Override\n    public String toString() {\n        return \"A\";\n    }\n}\n"
    );
}

#[test]
fn test_method_parameters_and_throws() {
    let mut params = vec![parameter(primitive(Primitive::Int), "n"), parameter(type_ref("String"), "rest")];
    params[1].is_var_args = true;
    params[0].modifiers = Modifiers::FINAL;
    let mut m = method(Modifiers::empty(), void_type(), "run", params, Some(block(vec![])));
    if let BodyDeclaration::Method(decl) = &mut m {
        decl.thrown = vec![type_ref("IOException")];
    }
    let out = print_members(vec![m]);
    assert!(
        out.contains("    void run(final int n, String... rest) throws IOException {\n    }\n"),
        "{out}"
    );
}

#[test]
fn test_constructor_and_initializer() {
    let out = print_members(vec![
        constructor(
            Modifiers::PUBLIC,
            "A",
            vec![parameter(primitive(Primitive::Int), "x")],
            block(vec![constructor_call(false, vec![name_expr("x")])]),
        ),
        initializer(true, block(vec![])),
    ]);
    assert_eq!(
        out,
        "class A {\n\n    public A(int x) {\n        super(x);\n    }\n\n    static {\n    }\n}\n"
    );
}

#[test]
fn test_enum_with_constants() {
    let out = print_types(vec![TypeDeclaration::Enum(enum_declaration(
        Modifiers::PUBLIC,
        "Color",
        vec![enum_constant("RED", vec![]), enum_constant("GREEN", vec![int_literal("2")])],
        vec![],
    ))]);
    assert_eq!(out, "public enum Color {\n\n    RED, GREEN(2)\n}\n");
}

#[test]
fn test_enum_with_members() {
    let out = print_types(vec![TypeDeclaration::Enum(enum_declaration(
        Modifiers::empty(),
        "E",
        vec![enum_constant("A", vec![])],
        vec![field(Modifiers::PRIVATE, primitive(Primitive::Int), &["n"])],
    ))]);
    assert_eq!(out, "enum E {\n\n    A;\n\n    private int n;\n}\n");
}

#[test]
fn test_annotation_type() {
    let out = print_types(vec![TypeDeclaration::Annotation(annotation_declaration(
        Modifiers::PUBLIC,
        "Tag",
        vec![annotation_member(type_ref("String"), "value", Some(string_literal("")))],
    ))]);
    assert_eq!(out, "public @interface Tag {\n\n    String value() default \"\";\n}\n");
}

#[test]
fn test_annotation_forms() {
    let single = Expression::Annotation(single_member_annotation("SuppressWarnings", string_literal("unchecked")));
    assert_eq!(print_expr(&single), "@SuppressWarnings(\"unchecked\")");

    let normal = Expression::Annotation(normal_annotation(
        "Retention",
        vec![("value", name_expr("RUNTIME")), ("since", int_literal("2"))],
    ));
    assert_eq!(print_expr(&normal), "@Retention(value = RUNTIME, since = 2)");

    let marker = Expression::Annotation(marker_annotation("java.lang.Deprecated"));
    assert_eq!(print_expr(&marker), "@java.lang.Deprecated");
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_conditional_bracing() {
    let stmt = if_stmt(
        name_expr("x"),
        expr_stmt(call0("y")),
        Some(block_stmt(vec![expr_stmt(call0("z"))])),
    );
    assert_eq!(print_stmt(&stmt), "if (x)\n    y();\nelse {\n    z();\n}");
}

#[test]
fn test_if_block_else_if() {
    let stmt = if_stmt(
        name_expr("a"),
        block_stmt(vec![]),
        Some(if_stmt(name_expr("b"), block_stmt(vec![]), Some(return_stmt(None)))),
    );
    assert_eq!(print_stmt(&stmt), "if (a) {\n} else if (b) {\n} else\n    return;");
}

#[test]
fn test_try_with_resources() {
    let resource = |ty: &str, name: &str| {
        variable_declarations(
            Modifiers::empty(),
            vec![variable(type_ref(ty), name, Some(new_object(class_type(ty), vec![])))],
        )
    };
    let stmt = try_stmt(
        vec![resource("A", "a"), resource("B", "b"), resource("C", "c")],
        block(vec![]),
        vec![catch_clause(parameter(type_ref("Exception"), "e"), block(vec![]))],
        Some(block(vec![])),
    );
    assert_eq!(
        print_stmt(&stmt),
        "try (A a = new A();\n    B b = new B();\n    C c = new C()) {\n} catch (Exception e) {\n} finally {\n}"
    );
}

#[test]
fn test_try_without_resources() {
    let stmt = try_stmt(vec![], block(vec![expr_stmt(call0("f"))]), vec![], Some(block(vec![])));
    assert_eq!(print_stmt(&stmt), "try {\n    f();\n} finally {\n}");
}

#[test]
fn test_switch() {
    let stmt = switch_stmt(
        name_expr("k"),
        vec![
            switch_entry(Some(int_literal("1")), vec![break_stmt(None)]),
            switch_entry(None, vec![return_stmt(None)]),
        ],
    );
    assert_eq!(
        print_stmt(&stmt),
        "switch(k) {\n    case 1:\n        break;\n    default:\n        return;\n}"
    );
}

#[test]
fn test_loops() {
    let for_loop = for_stmt(
        vec![local_variable(primitive(Primitive::Int), "i", Some(int_literal("0")))],
        Some(binary(name_expr("i"), BinaryOp::Less, name_expr("n"))),
        vec![unary(UnaryOp::PostIncrement, name_expr("i"))],
        block_stmt(vec![]),
    );
    assert_eq!(print_stmt(&for_loop), "for (int i = 0; i < n; i++) {\n}");

    let foreach = foreach_stmt(
        variable_declarations(Modifiers::FINAL, vec![variable(type_ref("String"), "s", None)]),
        name_expr("items"),
        block_stmt(vec![]),
    );
    assert_eq!(print_stmt(&foreach), "for (final String s : items) {\n}");

    let do_loop = do_stmt(block_stmt(vec![]), bool_literal(true));
    assert_eq!(print_stmt(&do_loop), "do {\n} while (true);");

    let while_loop = while_stmt(name_expr("ok"), expr_stmt(call0("step")));
    assert_eq!(print_stmt(&while_loop), "while (ok) step();");
}

#[test]
fn test_simple_statements() {
    assert_eq!(print_stmt(&break_stmt(Some("outer"))), "break outer;");
    assert_eq!(print_stmt(&continue_stmt(None)), "continue;");
    assert_eq!(print_stmt(&empty_stmt()), ";");
    assert_eq!(print_stmt(&throw_stmt(name_expr("e"))), "throw e;");
    assert_eq!(
        print_stmt(&assert_stmt(name_expr("ok"), Some(string_literal("bad")))),
        "assert ok : \"bad\";"
    );
    assert_eq!(
        print_stmt(&labeled_stmt("outer", while_stmt(bool_literal(true), empty_stmt()))),
        "outer: while (true) ;"
    );
    assert_eq!(
        print_stmt(&synchronized_stmt(this_expr(), block(vec![]))),
        "synchronized (this) {\n}"
    );
    assert_eq!(print_stmt(&constructor_call(true, vec![])), "this();");
}

#[test]
fn test_local_class() {
    let stmt = local_class(class(Modifiers::empty(), "Local", vec![]));
    assert_eq!(print_stmt(&stmt), "class Local {\n}");
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_operators() {
    assert_eq!(print_expr(&binary(name_expr("a"), BinaryOp::Plus, int_literal("1"))), "a + 1");
    assert_eq!(
        print_expr(&assign(name_expr("x"), AssignOp::Plus, long_literal("2L"))),
        "x += 2L"
    );
    assert_eq!(print_expr(&unary(UnaryOp::LogicalComplement, name_expr("ok"))), "!ok");
    assert_eq!(print_expr(&unary(UnaryOp::PostDecrement, name_expr("i"))), "i--");
    assert_eq!(
        print_expr(&conditional(name_expr("c"), name_expr("a"), name_expr("b"))),
        "c ? a : b"
    );
    assert_eq!(
        print_expr(&instance_of(name_expr("o"), type_ref("String"))),
        "o instanceof String"
    );
    assert_eq!(print_expr(&enclosed(name_expr("x"))), "(x)");
    assert_eq!(print_expr(&cast(primitive(Primitive::Int), double_literal("1.5"))), "(int) 1.5");
}

#[test]
fn test_literals() {
    assert_eq!(print_expr(&string_literal("hi")), "\"hi\"");
    assert_eq!(print_expr(&char_literal("c")), "'c'");
    assert_eq!(print_expr(&bool_literal(false)), "false");
    assert_eq!(print_expr(&null_literal()), "null");
    assert_eq!(print_expr(&class_literal(type_ref("A"))), "A.class");
}

#[test]
fn test_access_and_calls() {
    assert_eq!(print_expr(&field_access(this_expr(), "x")), "this.x");
    assert_eq!(print_expr(&array_access(name_expr("a"), int_literal("0"))), "a[0]");
    assert_eq!(print_expr(&call0("run")), "run()");
    assert_eq!(
        print_expr(&call(Some(name_expr("list")), "add", vec![int_literal("1"), int_literal("2")])),
        "list.add(1, 2)"
    );
    assert_eq!(
        print_expr(&method_reference(name_expr("String"), "valueOf")),
        "String::valueOf"
    );
}

#[test]
fn test_object_and_array_creation() {
    assert_eq!(
        print_expr(&new_object(diamond_class_type("ArrayList"), vec![])),
        "new ArrayList<>()"
    );
    assert_eq!(
        print_expr(&new_object(
            generic_class_type("Pair", vec![type_ref("A"), type_ref("B")]),
            vec![null_literal(), null_literal()],
        )),
        "new Pair<A, B>(null, null)"
    );
    assert_eq!(
        print_expr(&new_array(primitive(Primitive::Int), vec![Some(int_literal("3")), None], None)),
        "new int[3][]"
    );
    assert_eq!(
        print_expr(&new_array(
            primitive(Primitive::Int),
            vec![None],
            Some(array_initializer(vec![int_literal("1"), int_literal("2")])),
        )),
        "new int[] { 1, 2 }"
    );
    let empty = Expression::ArrayInitializer(array_initializer(vec![]));
    assert_eq!(print_expr(&empty), "{}");
}

#[test]
fn test_anonymous_class_body() {
    let mut expr = new_object(class_type("Runnable"), vec![]);
    if let Expression::ObjectCreation(creation) = &mut expr {
        creation.anonymous_class_body = Some(vec![method(
            Modifiers::PUBLIC,
            void_type(),
            "run",
            vec![],
            Some(block(vec![])),
        )]);
    }
    assert_eq!(
        print_expr(&expr),
        "new Runnable() {\n\n    public void run() {\n    }\n}"
    );
}

#[test]
fn test_lambdas() {
    let bare = lambda(vec![parameter(unknown_type(), "x")], false, expr_stmt(name_expr("x")));
    assert_eq!(print_expr(&bare), "x -> x");

    let typed = lambda(
        vec![parameter(primitive(Primitive::Int), "a"), parameter(primitive(Primitive::Int), "b")],
        true,
        expr_stmt(binary(name_expr("a"), BinaryOp::Multiply, name_expr("b"))),
    );
    assert_eq!(print_expr(&typed), "(int a, int b) -> a * b");

    let block_body = lambda(vec![], true, block_stmt(vec![return_stmt(None)]));
    assert_eq!(print_expr(&block_body), "() -> {\n    return;\n}");
}

#[test]
fn test_types() {
    let ty = generic_type("Map", vec![type_ref("K"), wildcard(Some(type_ref("V")), None)]);
    assert_eq!(print_expr(&type_expr(ty)), "Map<K, ? extends V>");
    assert_eq!(
        print_expr(&type_expr(wildcard(None, Some(type_ref("T"))))),
        "? super T"
    );
    assert_eq!(
        print_expr(&type_expr(union_type(vec![type_ref("IOException"), type_ref("SQLException")]))),
        "IOException | SQLException"
    );
    assert_eq!(
        print_expr(&type_expr(intersection_type(vec![type_ref("A"), type_ref("B")]))),
        "A & B"
    );
    assert_eq!(
        print_expr(&type_expr(array_type(type_ref("String"), 2))),
        "String[][]"
    );
}

#[test]
fn test_local_variable_declaration() {
    let expr = local_variable(
        generic_type("List", vec![type_ref("String")]),
        "xs",
        Some(null_literal()),
    );
    assert_eq!(print_expr(&expr), "List<String> xs = null");
}

// ============================================================================
// Pass properties
// ============================================================================

fn sample_unit() -> CompilationUnit {
    let body = block(vec![
        expr_stmt(local_variable(type_ref("Builder"), "b", Some(new_object(class_type("Builder"), vec![])))),
        if_stmt(
            binary(name_expr("n"), BinaryOp::Greater, int_literal("0")),
            expr_stmt(call(Some(name_expr("b")), "append", vec![name_expr("n")])),
            None,
        ),
        return_stmt(Some(call(Some(name_expr("b")), "build", vec![]))),
    ]);
    compilation_unit(
        Some("demo"),
        vec![import("java.util.List", false, false)],
        vec![TypeDeclaration::Class(class(
            Modifiers::PUBLIC,
            "Demo",
            vec![
                field(Modifiers::PRIVATE, primitive(Primitive::Int), &["n"]),
                method(Modifiers::PUBLIC, type_ref("Result"), "make", vec![], Some(body)),
            ],
        ))],
    )
}

#[test]
fn test_idempotent_across_passes() {
    let unit = sample_unit();
    let mut printer = Printer::new(PrinterOptions::default());
    let first = printer.print(NodeRef::CompilationUnit(&unit)).unwrap();
    let second = printer.print(NodeRef::CompilationUnit(&unit)).unwrap();
    assert_eq!(first, second);
    assert_eq!(printer.depth(), 0);
    assert!(printer.stats().nodes > 20);
}

#[test]
fn test_indent_option() {
    let unit = sample_unit();
    let out = print_unit(&unit, PrinterOptions::default().with_indent_width(2)).unwrap();
    assert!(out.contains("\n  public Result make() {\n    Builder b = new Builder();\n"), "{out}");
    assert!(out.contains("    if (n > 0)\n      b.append(n);\n"), "{out}");
}

#[test]
fn test_crlf_option() {
    let options = PrinterOptions {
        new_line: "\r\n".to_string(),
        ..PrinterOptions::default()
    };
    let unit = compilation_unit(None, vec![], vec![TypeDeclaration::Class(class(Modifiers::empty(), "A", vec![]))]);
    assert_eq!(print_unit(&unit, options).unwrap(), "class A {\r\n}\r\n");
}

// ============================================================================
// Decoration
// ============================================================================

/// Wraps every decorated node in brackets.
struct Brackets;

impl Decorator for Brackets {
    fn decorate(&self, _role: Role, node: NodeRef<'_>, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        printer.write("[");
        printer.print_node(node)?;
        printer.write("]");
        Ok(())
    }
}

/// Records the role of every decorated node.
#[derive(Default)]
struct Recorder {
    roles: Mutex<Vec<Role>>,
}

impl Decorator for Recorder {
    fn decorate(&self, role: Role, node: NodeRef<'_>, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        if let Ok(mut roles) = self.roles.lock() {
            roles.push(role);
        }
        printer.print_node(node)
    }
}

#[test]
fn test_decoration_call_sites() {
    let unit = sample_unit();
    let out = Printer::with_decorator(PrinterOptions::default(), &Brackets)
        .print(NodeRef::CompilationUnit(&unit))
        .unwrap();
    assert!(out.contains("public class [Demo] {"), "{out}");
    assert!(out.contains("public [Result] [make]() {"), "{out}");
    assert!(out.contains("[Builder] b = new [Builder]();"), "{out}");
    assert!(out.contains("b.[append](n);"), "{out}");
}

#[test]
fn test_every_role_reached() {
    let mut ctor = constructor(
        Modifiers::PUBLIC,
        "A",
        vec![parameter(type_ref("String"), "s")],
        block(vec![]),
    );
    if let BodyDeclaration::Constructor(decl) = &mut ctor {
        decl.annotations.push(marker_annotation("Inject"));
    }
    let m = method(
        Modifiers::empty(),
        void_type(),
        "m",
        vec![],
        Some(block(vec![expr_stmt(call(None, "use", vec![new_object(class_type("B"), vec![])]))])),
    );
    let unit = compilation_unit(
        None,
        vec![],
        vec![TypeDeclaration::Class(class(Modifiers::empty(), "A", vec![ctor, m]))],
    );

    let recorder = Recorder::default();
    Printer::with_decorator(PrinterOptions::default(), &recorder)
        .print(NodeRef::CompilationUnit(&unit))
        .unwrap();
    let roles = recorder.roles.lock().unwrap();
    for role in Role::ALL {
        assert!(roles.contains(&role), "role {role} never decorated");
    }
}

#[test]
fn test_decorator_error_aborts_pass() {
    struct FailOnCall;

    impl Decorator for FailOnCall {
        fn decorate(&self, role: Role, node: NodeRef<'_>, printer: &mut Printer<'_>) -> Result<(), PrintError> {
            if role == Role::MethodCallTarget {
                return Err(PrintError::IndentUnderflow);
            }
            printer.print_node(node)
        }
    }

    let unit = sample_unit();
    let plain = compilation_unit(None, vec![], vec![TypeDeclaration::Class(class(Modifiers::empty(), "A", vec![]))]);
    let decorator = FailOnCall;
    let mut printer = Printer::with_decorator(PrinterOptions::default(), &decorator);
    let err = printer.print(NodeRef::CompilationUnit(&unit)).unwrap_err();
    assert!(matches!(err, PrintError::IndentUnderflow));
    assert_eq!(printer.depth(), 0);
    assert_eq!(printer.contents(), "");

    assert_eq!(printer.print(NodeRef::CompilationUnit(&plain)).unwrap(), "class A {\n}\n");
}
