use crate::utils::build_ast;
use go2rust_ast::nodes::{Node, SourceFile, TypeExpr, Visibility};
use go2rust_ast::printer::render;
use go2rust_translate::rename::rename_file;

fn renamed(source: &str) -> SourceFile {
    let mut file = build_ast(source);
    rename_file(&mut file).unwrap();
    file
}

#[test]
fn exported_function_becomes_public_snake_case() {
    let file = renamed("package p\n\nfunc ParseSource(Src int) int { return Src }\n");
    let Node::FuncDecl(decl) = &file.decls[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.name.name, "parse_source");
    assert_eq!(decl.name.vis, Visibility::Public);
}

#[test]
fn unexported_function_stays_private() {
    let file = renamed("package p\n\nfunc parseSource(src int) int { return src }\n");
    let Node::FuncDecl(decl) = &file.decls[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.name.name, "parse_source");
    assert_eq!(decl.name.vis, Visibility::Private);
}

#[test]
fn acronyms_split_before_every_capital() {
    let file = renamed("package p\n\nfunc UserID(id int) int { return id }\n");
    let Node::FuncDecl(decl) = &file.decls[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.name.name, "user_i_d");
}

#[test]
fn type_names_are_left_untouched() {
    let file = renamed("package p\n\ntype Point struct {\n\tX MyType\n\ty int\n}\n");
    let Node::GenDecl(decl) = &file.decls[0] else {
        panic!("expected a declaration group");
    };
    let Node::TypeSpec(spec) = &decl.specs[0] else {
        panic!("expected a type spec");
    };
    assert_eq!(spec.name.name, "Point");

    let TypeExpr::Struct(fields) = &spec.ty else {
        panic!("expected a struct type");
    };
    // Field names follow the declaration rule...
    assert_eq!(fields[0].names[0].name, "x");
    assert_eq!(fields[0].names[0].vis, Visibility::Public);
    assert_eq!(fields[1].names[0].name, "y");
    assert_eq!(fields[1].names[0].vis, Visibility::Private);
    // ...while declared types are never renamed.
    assert_eq!(render(&fields[0].ty), "MyType");
}

#[test]
fn identifiers_inside_bodies_are_renamed() {
    let file = renamed("package p\n\nfunc f(a int) int { return a + UserCount }\n");
    let Node::FuncDecl(decl) = &file.decls[0] else {
        panic!("expected a function declaration");
    };
    let body = decl.body.as_ref().unwrap();
    assert_eq!(render(body), "{ return a + user_count }");
}

#[test]
fn ordinary_references_never_become_public() {
    let file = renamed("package p\n\nvar total = UserCount\n");
    let Node::GenDecl(decl) = &file.decls[0] else {
        panic!("expected a declaration group");
    };
    let Node::ValueSpec(spec) = &decl.specs[0] else {
        panic!("expected a value spec");
    };
    let Node::Ident(value) = &spec.values[0] else {
        panic!("expected an identifier initializer");
    };
    assert_eq!(value.name, "user_count");
    assert_eq!(value.vis, Visibility::Private);
}

#[test]
fn value_names_follow_the_declaration_rule() {
    let file = renamed("package p\n\nvar MaxLen = 80\n");
    let Node::GenDecl(decl) = &file.decls[0] else {
        panic!("expected a declaration group");
    };
    let Node::ValueSpec(spec) = &decl.specs[0] else {
        panic!("expected a value spec");
    };
    assert_eq!(spec.names[0].name, "max_len");
    assert_eq!(spec.names[0].vis, Visibility::Public);
}
