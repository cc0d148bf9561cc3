//! Verbatim renderer: reproduces a subtree's original Go textual form.
//!
//! The only difference from the source text is identifier spelling, which the
//! renaming pass may already have rewritten in place. Keywords, operators and
//! control structures stay Go syntax; translating them is out of scope, and
//! the opaque `Other` segments make that boundary explicit.

use std::fmt::Write;

use crate::nodes::{Field, FuncDecl, Node, Segment, TypeExpr, ValueSpec};

/// Renders `node` back into Go surface text.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Ident(ident) => out.push_str(&ident.name),
        Node::BasicLit(lit) => out.push_str(&lit.value),
        Node::Other(other) => {
            for segment in &other.segments {
                match segment {
                    Segment::Raw(text) => out.push_str(text),
                    Segment::Node(child) => write_node(out, child),
                }
            }
        }
        // Modeled declarations can occur inside bodies; their Go surface
        // form is reconstructed from parts.
        Node::GenDecl(decl) => {
            let _ = write!(out, "{} ", decl.keyword);
            for (i, spec) in decl.specs.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                write_node(out, spec);
            }
        }
        Node::TypeSpec(spec) => {
            out.push_str(&spec.name.name);
            out.push_str(if spec.assign { " = " } else { " " });
            write_type_expr(out, &spec.ty);
        }
        Node::ValueSpec(spec) => write_value_spec(out, spec),
        Node::Field(field) => write_field(out, field),
        Node::FuncDecl(decl) => write_func_decl(out, decl),
    }
}

fn write_type_expr(out: &mut String, ty: &TypeExpr) {
    match ty {
        TypeExpr::Struct(fields) => {
            out.push_str("struct {\n");
            for field in fields {
                out.push('\t');
                write_field(out, field);
                out.push('\n');
            }
            out.push('}');
        }
        TypeExpr::Opaque(node) => write_node(out, node),
    }
}

fn write_field(out: &mut String, field: &Field) {
    for (i, name) in field.names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&name.name);
    }
    if !field.names.is_empty() {
        out.push(' ');
    }
    write_node(out, &field.ty);
}

fn write_value_spec(out: &mut String, spec: &ValueSpec) {
    for (i, name) in spec.names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&name.name);
    }
    if let Some(ty) = &spec.ty {
        out.push(' ');
        write_node(out, ty);
    }
    if !spec.values.is_empty() {
        out.push_str(" = ");
        for (i, value) in spec.values.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_node(out, value);
        }
    }
}

fn write_func_decl(out: &mut String, decl: &FuncDecl) {
    out.push_str("func ");
    if !decl.recv.is_empty() {
        out.push('(');
        for (i, field) in decl.recv.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_field(out, field);
        }
        out.push_str(") ");
    }
    out.push_str(&decl.name.name);
    out.push('(');
    for (i, field) in decl.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_field(out, field);
    }
    out.push(')');
    match decl.results.len() {
        0 => {}
        1 if decl.results[0].names.is_empty() => {
            out.push(' ');
            write_node(out, &decl.results[0].ty);
        }
        _ => {
            out.push_str(" (");
            for (i, field) in decl.results.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_field(out, field);
            }
            out.push(')');
        }
    }
    if let Some(body) = &decl.body {
        out.push(' ');
        write_node(out, body);
    }
}
