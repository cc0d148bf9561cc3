use crate::utils::build_ast;
use go2rust_ast::nodes::Node;
use go2rust_ast::printer::render;

/// Extracts the initializer expression of the first `var` declaration.
fn first_initializer(source: &str) -> Node {
    let file = build_ast(source);
    let Node::GenDecl(decl) = &file.decls[0] else {
        panic!("expected a declaration group");
    };
    let Node::ValueSpec(spec) = &decl.specs[0] else {
        panic!("expected a value spec");
    };
    spec.values[0].clone()
}

#[test]
fn opaque_expressions_render_byte_for_byte() {
    let value = first_initializer("package p\n\nvar x = foo(Bar, 1) + 2\n");
    assert_eq!(render(&value), "foo(Bar, 1) + 2");
}

#[test]
fn string_literals_keep_their_quotes() {
    let value = first_initializer("package p\n\nvar s = \"hello\"\n");
    assert_eq!(render(&value), "\"hello\"");
}

#[test]
fn function_bodies_keep_interior_formatting() {
    let file = build_ast("package p\n\nfunc f(a int) int {\n\treturn a\n}\n");
    let Node::FuncDecl(decl) = &file.decls[0] else {
        panic!("expected a function declaration");
    };
    let body = decl.body.as_ref().unwrap();
    assert_eq!(render(body), "{\n\treturn a\n}");
}
