use crate::utils::build_ast;
use go2rust_translate::{emit::emit_file, errors::TranslateError, rename::rename_file};

fn translate(source: &str) -> Result<String, TranslateError> {
    let mut file = build_ast(source);
    rename_file(&mut file)?;
    emit_file(&file)
}

#[test]
fn struct_fields_carry_their_visibility() {
    let out = translate("package p\n\ntype Point struct {\n\tX int\n\ty int\n}\n").unwrap();
    assert_eq!(out, "pub struct Point {\n    pub x: i64,\n    y: i64,\n}\n");
}

#[test]
fn field_types_go_through_the_type_mapper() {
    let out = translate(
        "package p\n\ntype Rec struct {\n\tName string\n\tCount uint\n\tOwner Account\n}\n",
    )
    .unwrap();
    assert!(out.contains("pub name: String,"));
    assert!(out.contains("pub count: u64,"));
    // Unknown types pass through verbatim.
    assert!(out.contains("pub owner: Account,"));
}

#[test]
fn exported_function_renders_with_pub() {
    let out = translate("package p\n\nfunc Add(a int, b int) int { return a + b }\n").unwrap();
    assert_eq!(out, "pub fn add(a: i64, b: i64,) -> i64 { return a + b }\n");
}

#[test]
fn unexported_function_renders_without_pub() {
    let out = translate("package p\n\nfunc add(a int, b int) int { return a + b }\n").unwrap();
    assert_eq!(out, "fn add(a: i64, b: i64,) -> i64 { return a + b }\n");
}

#[test]
fn multiple_results_render_as_a_tuple() {
    let out =
        translate("package p\n\nfunc div(a int, b int) (int, string) { return a / b, \"ok\" }\n")
            .unwrap();
    assert!(out.starts_with("fn div(a: i64, b: i64,) -> (i64, String) {"));
}

#[test]
fn alias_type_renders_verbatim() {
    let out = translate("package p\n\ntype Str = string\n").unwrap();
    assert_eq!(out, "pub type Str = string\n");
}

#[test]
fn defined_type_renders_without_assign() {
    let out = translate("package p\n\ntype Celsius float64\n").unwrap();
    assert_eq!(out, "pub type Celsius float64\n");
}

#[test]
fn value_declarations_render_with_type_and_initializer() {
    let out = translate("package p\n\nvar count int = 1\n").unwrap();
    assert_eq!(out, "var count: i64 = 1\n");
}

#[test]
fn exported_value_without_type() {
    let out = translate("package p\n\nvar MaxLen = 80\n").unwrap();
    assert_eq!(out, "pub var max_len = 80\n");
}

#[test]
fn value_without_initializer_has_no_equals_tail() {
    let out = translate("package p\n\nvar buf string\n").unwrap();
    assert_eq!(out, "var buf: String\n");
}

#[test]
fn const_groups_emit_one_declaration_per_spec() {
    let out = translate("package p\n\nconst (\n\ta = 1\n\tB = 2\n)\n").unwrap();
    assert_eq!(out, "var a = 1\n\npub var b = 2\n");
}

#[test]
fn unrecognized_declarations_emit_nothing() {
    let out =
        translate("package p\n\nimport \"fmt\"\n\ntype Point struct {\n\tX int\n}\n").unwrap();
    assert_eq!(out, "pub struct Point {\n    pub x: i64,\n}\n");
}

#[test]
fn declarations_are_separated_by_a_blank_line() {
    let out = translate(
        "package p\n\ntype Point struct {\n\tX int\n}\n\nfunc f(a int) int { return a }\n",
    )
    .unwrap();
    assert_eq!(
        out,
        "pub struct Point {\n    pub x: i64,\n}\n\nfn f(a: i64,) -> i64 { return a }\n"
    );
}

#[test]
fn function_without_results_is_a_structural_error() {
    let err = translate("package p\n\nfunc main() { return }\n").unwrap_err();
    assert!(matches!(err, TranslateError::Structural { .. }));
}

#[test]
fn unnamed_struct_field_is_a_structural_error() {
    let err = translate("package p\n\ntype Wrap struct {\n\tEmbedded\n}\n").unwrap_err();
    assert!(matches!(err, TranslateError::Structural { .. }));
}

#[test]
fn unnamed_parameter_is_a_structural_error() {
    let err = translate("package p\n\nfunc f(int) int { return 0 }\n").unwrap_err();
    assert!(matches!(err, TranslateError::Structural { .. }));
}
