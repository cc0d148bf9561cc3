//! Pass 1: in-place identifier renaming.
//!
//! One depth-first traversal rewrites every identifier according to the role
//! its syntactic position gives it:
//!
//! - a type declaration's own name keeps its spelling; only its underlying
//!   type is visited
//! - function names, field names and value names are case-converted and
//!   tagged with the visibility derived from Go's export convention
//! - declared types of fields and values are never touched
//! - every other identifier is case-converted without ever becoming public
//!
//! Each identifier is visited exactly once, so the non-idempotent case
//! converter is never applied twice. Sibling order does not affect the
//! result.

use go2rust_ast::nodes::{Field, Ident, Node, Segment, SourceFile, TypeExpr, Visibility};

use crate::case::camel_to_snake;
use crate::errors::TranslateError;

/// Renames every identifier in `file` in place.
///
/// # Errors
///
/// Fails only on a malformed tree (an empty identifier); well-formed parser
/// output cannot fail here.
pub fn rename_file(file: &mut SourceFile) -> Result<(), TranslateError> {
    if let Some(package) = &mut file.package {
        rename_ref(package)?;
    }
    file.decls.iter_mut().try_for_each(rename_node)
}

fn rename_node(node: &mut Node) -> Result<(), TranslateError> {
    match node {
        Node::TypeSpec(spec) => match &mut spec.ty {
            TypeExpr::Struct(fields) => fields.iter_mut().try_for_each(rename_field),
            TypeExpr::Opaque(ty) => rename_node(ty),
        },
        Node::FuncDecl(decl) => {
            rename_decl_name(&mut decl.name)?;
            decl.recv.iter_mut().try_for_each(rename_field)?;
            decl.params.iter_mut().try_for_each(rename_field)?;
            decl.results.iter_mut().try_for_each(rename_field)?;
            match &mut decl.body {
                Some(body) => rename_node(body),
                None => Ok(()),
            }
        }
        Node::Field(field) => rename_field(field),
        Node::ValueSpec(spec) => {
            spec.names.iter_mut().try_for_each(rename_decl_name)?;
            // Declared type untouched; initializers are ordinary expressions.
            spec.values.iter_mut().try_for_each(rename_node)
        }
        Node::Ident(ident) => rename_ref(ident),
        Node::GenDecl(decl) => decl.specs.iter_mut().try_for_each(rename_node),
        Node::Other(other) => other
            .segments
            .iter_mut()
            .try_for_each(|segment| match segment {
                Segment::Node(child) => rename_node(child),
                Segment::Raw(_) => Ok(()),
            }),
        Node::BasicLit(_) => Ok(()),
    }
}

/// Field rule: names are renamed and tagged with their derived visibility;
/// the declared type is never touched.
fn rename_field(field: &mut Field) -> Result<(), TranslateError> {
    field.names.iter_mut().try_for_each(rename_decl_name)
}

/// Declaration-name rule: derive visibility from the original spelling, then
/// convert the case.
fn rename_decl_name(ident: &mut Ident) -> Result<(), TranslateError> {
    if ident.is_exported() {
        ident.vis = Visibility::Public;
    }
    ident.name = camel_to_snake(&ident.name)?;
    Ok(())
}

/// Ordinary references are converted without ever becoming public.
fn rename_ref(ident: &mut Ident) -> Result<(), TranslateError> {
    ident.name = camel_to_snake(&ident.name)?;
    Ok(())
}
