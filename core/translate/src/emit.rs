//! Pass 2: Rust declaration emission.
//!
//! One read-only traversal of the renamed tree. Recognized declarations are
//! rendered to Rust text; unrecognized nodes emit nothing themselves but
//! their children are still visited, so a recognized declaration nested in
//! an unmodeled construct is never silently dropped. Declarations appear in
//! discovery order (= source order), separated by a blank line.

use std::fmt::Write;

use go2rust_ast::nodes::{
    FuncDecl, Ident, Node, Segment, SourceFile, TypeExpr, TypeSpec, ValueSpec, Visibility,
};
use go2rust_ast::printer::render;

use crate::errors::TranslateError;
use crate::types::map_type;

/// Renders every recognized declaration in `file` as Rust text.
///
/// # Errors
///
/// Returns [`TranslateError::Structural`] for a declaration missing a part
/// the emitter requires; no partial output is produced.
pub fn emit_file(file: &SourceFile) -> Result<String, TranslateError> {
    let mut decls = Vec::new();
    for decl in &file.decls {
        emit_node(&mut decls, decl)?;
    }
    let mut out = decls.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}

fn emit_node(out: &mut Vec<String>, node: &Node) -> Result<(), TranslateError> {
    match node {
        Node::GenDecl(decl) => {
            for spec in &decl.specs {
                emit_node(out, spec)?;
            }
        }
        Node::TypeSpec(spec) => out.push(type_spec(spec)?),
        Node::FuncDecl(decl) => out.push(func_decl(decl)?),
        Node::ValueSpec(spec) => out.push(value_spec(spec)?),
        // No text of its own, but nested declarations still count.
        Node::Other(other) => {
            for segment in &other.segments {
                if let Segment::Node(child) = segment {
                    emit_node(out, child)?;
                }
            }
        }
        Node::Ident(_) | Node::BasicLit(_) | Node::Field(_) => {}
    }
    Ok(())
}

fn type_spec(spec: &TypeSpec) -> Result<String, TranslateError> {
    match &spec.ty {
        TypeExpr::Struct(fields) => {
            let mut out = format!("pub struct {} {{\n", spec.name.name);
            for field in fields {
                if field.names.is_empty() {
                    return Err(TranslateError::Structural {
                        kind: "struct field",
                        location: field.location.clone(),
                        reason: "field has no name",
                    });
                }
                let ty = map_type(&render(&field.ty)).to_string();
                for name in &field.names {
                    let _ = writeln!(out, "    {}{}: {},", vis_prefix(name.vis), name.name, ty);
                }
            }
            out.push('}');
            Ok(out)
        }
        TypeExpr::Opaque(ty) => {
            let assign = if spec.assign { "= " } else { "" };
            Ok(format!(
                "pub type {} {}{}",
                spec.name.name,
                assign,
                render(ty)
            ))
        }
    }
}

fn func_decl(decl: &FuncDecl) -> Result<String, TranslateError> {
    let mut out = String::new();
    let _ = write!(out, "{}fn {}(", vis_prefix(decl.name.vis), decl.name.name);

    let mut first = true;
    for param in &decl.params {
        if param.names.is_empty() {
            return Err(TranslateError::Structural {
                kind: "parameter",
                location: param.location.clone(),
                reason: "parameter has no name",
            });
        }
        let ty = map_type(&render(&param.ty)).to_string();
        for name in &param.names {
            if !first {
                out.push(' ');
            }
            first = false;
            let _ = write!(out, "{}: {},", name.name, ty);
        }
    }
    out.push_str(") -> ");

    if decl.results.is_empty() {
        return Err(TranslateError::Structural {
            kind: "function",
            location: decl.location.clone(),
            reason: "function has no result list",
        });
    }
    // Named results flatten to one type per name; a bare type counts once.
    let mut results = Vec::new();
    for field in &decl.results {
        let ty = map_type(&render(&field.ty)).to_string();
        for _ in 0..field.names.len().max(1) {
            results.push(ty.clone());
        }
    }
    if results.len() == 1 {
        out.push_str(&results[0]);
    } else {
        let _ = write!(out, "({})", results.join(", "));
    }

    let Some(body) = &decl.body else {
        return Err(TranslateError::Structural {
            kind: "function",
            location: decl.location.clone(),
            reason: "function has no body",
        });
    };
    out.push(' ');
    out.push_str(&render(body));
    Ok(out)
}

fn value_spec(spec: &ValueSpec) -> Result<String, TranslateError> {
    if spec.names.is_empty() {
        return Err(TranslateError::Structural {
            kind: "value spec",
            location: spec.location.clone(),
            reason: "declaration has no name",
        });
    }
    let ty = spec
        .ty
        .as_deref()
        .map(|ty_node| map_type(&render(ty_node)).to_string());
    let values: Vec<String> = spec.values.iter().map(render).collect();

    if spec.names.len() == values.len() {
        let lines: Vec<String> = spec
            .names
            .iter()
            .zip(&values)
            .map(|(name, value)| one_value(name, ty.as_deref(), Some(value.as_str())))
            .collect();
        Ok(lines.join("\n"))
    } else if values.is_empty() {
        let lines: Vec<String> = spec
            .names
            .iter()
            .map(|name| one_value(name, ty.as_deref(), None))
            .collect();
        Ok(lines.join("\n"))
    } else {
        // Initializer count differs from name count (e.g. a multi-value
        // call): keep one declaration with everything joined verbatim.
        let names: Vec<&str> = spec.names.iter().map(|name| name.name.as_str()).collect();
        let mut out = format!(
            "{}var {}",
            vis_prefix(spec.names[0].vis),
            names.join(", ")
        );
        if let Some(ty) = &ty {
            let _ = write!(out, ": {ty}");
        }
        let _ = write!(out, " = {}", values.join(", "));
        Ok(out)
    }
}

fn one_value(name: &Ident, ty: Option<&str>, value: Option<&str>) -> String {
    let mut out = format!("{}var {}", vis_prefix(name.vis), name.name);
    if let Some(ty) = ty {
        let _ = write!(out, ": {ty}");
    }
    if let Some(value) = value {
        let _ = write!(out, " = {value}");
    }
    out
}

fn vis_prefix(vis: Visibility) -> &'static str {
    match vis {
        Visibility::Public => "pub ",
        Visibility::Private => "",
    }
}
