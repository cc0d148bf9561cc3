//! Read-only troubleshooting views over a parsed tree.
//!
//! Both views are written next to the translated output to make it
//! debuggable; neither feeds back into translation.

use std::fmt::Write;

use go2rust_ast::nodes::{BasicLit, Field, Ident, Node, Segment, SourceFile, TypeExpr};

/// Flat listing of every identifier and literal with its source position,
/// one `<line>:<column>:\t<text>` entry per node.
#[must_use]
pub fn list_nodes(file: &SourceFile) -> String {
    let mut out = String::new();
    if let Some(package) = &file.package {
        write_ident(&mut out, package);
    }
    for decl in &file.decls {
        walk(&mut out, decl);
    }
    out
}

/// Full recursive tree dump as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn node_tree(file: &SourceFile) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(file)?)
}

fn walk(out: &mut String, node: &Node) {
    match node {
        Node::Ident(ident) => write_ident(out, ident),
        Node::BasicLit(lit) => write_lit(out, lit),
        Node::GenDecl(decl) => {
            for spec in &decl.specs {
                walk(out, spec);
            }
        }
        Node::TypeSpec(spec) => {
            write_ident(out, &spec.name);
            match &spec.ty {
                TypeExpr::Struct(fields) => {
                    for field in fields {
                        walk_field(out, field);
                    }
                }
                TypeExpr::Opaque(ty) => walk(out, ty),
            }
        }
        Node::FuncDecl(decl) => {
            write_ident(out, &decl.name);
            for field in decl.recv.iter().chain(&decl.params).chain(&decl.results) {
                walk_field(out, field);
            }
            if let Some(body) = &decl.body {
                walk(out, body);
            }
        }
        Node::Field(field) => walk_field(out, field),
        Node::ValueSpec(spec) => {
            for name in &spec.names {
                write_ident(out, name);
            }
            if let Some(ty) = &spec.ty {
                walk(out, ty);
            }
            for value in &spec.values {
                walk(out, value);
            }
        }
        Node::Other(other) => {
            for segment in &other.segments {
                if let Segment::Node(child) = segment {
                    walk(out, child);
                }
            }
        }
    }
}

fn walk_field(out: &mut String, field: &Field) {
    for name in &field.names {
        write_ident(out, name);
    }
    walk(out, &field.ty);
}

fn write_ident(out: &mut String, ident: &Ident) {
    let _ = writeln!(out, "{}:\t{}", ident.location, ident.name);
}

fn write_lit(out: &mut String, lit: &BasicLit) {
    let _ = writeln!(out, "{}:\t{}", lit.location, lit.value);
}
