use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jprint_ast::factory::*;
use jprint_ast::*;
use jprint_printer::{print_unit, PrinterOptions};

/// A class with `methods` methods, each holding a loop, a branch and a few
/// calls, with an orphan comment ahead of every method.
fn build_unit(methods: u32) -> CompilationUnit {
    let mut members = Vec::new();
    let mut orphans = Vec::new();
    for i in 0..methods {
        let base = i * 100;
        let body = block(vec![
            expr_stmt(local_variable(
                generic_type("List", vec![type_ref("String")]),
                "items",
                Some(new_object(diamond_class_type("ArrayList"), vec![])),
            )),
            foreach_stmt(
                variable_declarations(Modifiers::FINAL, vec![variable(type_ref("String"), "s", None)]),
                name_expr("source"),
                block_stmt(vec![if_stmt(
                    call(Some(name_expr("s")), "isEmpty", vec![]),
                    continue_stmt(None),
                    Some(expr_stmt(call(Some(name_expr("items")), "add", vec![name_expr("s")]))),
                )]),
            ),
            return_stmt(Some(call(Some(name_expr("items")), "size", vec![]))),
        ]);
        members.push(
            method(
                Modifiers::PUBLIC,
                primitive(Primitive::Int),
                &format!("collect{i}"),
                vec![parameter(generic_type("Iterable", vec![type_ref("String")]), "source")],
                Some(body),
            )
            .at(base + 50, base + 99),
        );
        orphans.push(line_comment(&format!(" step {i}")).at(base + 10, base + 40));
    }
    let decl = class(Modifiers::PUBLIC, "Collector", members)
        .at(0, methods * 100)
        .with_orphans(orphans);
    compilation_unit(
        Some("bench"),
        vec![import("java.util", false, true)],
        vec![TypeDeclaration::Class(decl)],
    )
}

fn bench_print_unit(c: &mut Criterion) {
    let unit = build_unit(200);
    c.bench_function("print_unit_200_methods", |b| {
        b.iter(|| {
            let out = print_unit(black_box(&unit), PrinterOptions::default()).unwrap();
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_print_unit);
criterion_main!(benches);
