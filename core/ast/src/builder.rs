//! AST builder that converts tree-sitter concrete syntax trees (CST) into typed AST nodes.
//!
//! The `Builder` walks a tree-sitter-go parse tree and constructs the typed
//! Go AST the translation passes operate on. It handles:
//!
//! - Converting declaration CST nodes (`type`/`var`/`const` groups, functions,
//!   methods, fields, value specs) to their dedicated node kinds
//! - Converting identifiers and basic literals to leaf nodes
//! - Wrapping every other construct in an `Other` node whose segments
//!   interleave verbatim source slices with child nodes, so the original
//!   text can be reproduced after identifier renaming
//! - Assigning unique sequential IDs to each node
//! - Collecting syntax errors from malformed trees
//! - Extracting source location information
//!
//! # Example
//!
//! ```ignore
//! use go2rust_ast::builder::Builder;
//! use tree_sitter::Parser;
//!
//! let source = "package p\n\nfunc Add(a int, b int) int { return a + b }\n";
//! let mut parser = Parser::new();
//! parser.set_language(&tree_sitter_go::LANGUAGE.into()).unwrap();
//! let tree = parser.parse(source, None).unwrap();
//!
//! let mut builder = Builder::new(source.as_bytes());
//! let file = builder.build_file(tree.root_node()).unwrap();
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use tree_sitter::Node as CstNode;

use crate::errors::AstError;
use crate::nodes::{
    BasicLit, DeclKeyword, Field, FuncDecl, GenDecl, Ident, Location, Node, Other, Segment,
    SourceFile, TypeExpr, TypeSpec, ValueSpec, Visibility,
};

/// CST kinds that map to [`Ident`] nodes.
const IDENT_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "package_identifier",
];

/// CST kinds that map to [`BasicLit`] nodes (Go's `ast.BasicLit` set).
const LIT_KINDS: &[&str] = &[
    "int_literal",
    "float_literal",
    "imaginary_literal",
    "rune_literal",
    "interpreted_string_literal",
    "raw_string_literal",
];

fn is_modeled(kind: &str) -> bool {
    IDENT_KINDS.contains(&kind)
        || LIT_KINDS.contains(&kind)
        || matches!(
            kind,
            "type_declaration"
                | "var_declaration"
                | "const_declaration"
                | "function_declaration"
                | "method_declaration"
                | "field_declaration"
                | "parameter_declaration"
                | "variadic_parameter_declaration"
                | "type_spec"
                | "type_alias"
                | "var_spec"
                | "const_spec"
        )
}

pub struct Builder<'a> {
    code: &'a [u8],
    errors: Vec<AstError>,
}

impl<'a> Builder<'a> {
    #[must_use]
    pub fn new(code: &'a [u8]) -> Self {
        Self {
            code,
            errors: Vec::new(),
        }
    }

    /// Builds the typed AST for a whole compilation unit.
    ///
    /// # Errors
    ///
    /// Returns the first collected [`AstError`] if the CST contains ERROR or
    /// MISSING nodes, or a declaration lacks a mandatory child.
    pub fn build_file(&mut self, root: CstNode<'_>) -> Result<SourceFile, AstError> {
        debug_assert!(
            root.kind() == "source_file",
            "expected a root node of kind `source_file`"
        );
        let id = next_node_id();
        let location = Self::get_location(&root);
        let mut package = None;
        let mut decls = Vec::new();

        for i in 0..root.child_count() {
            let Some(child) = root.child(i) else {
                continue;
            };
            if child.kind() == "package_clause" {
                package = self.build_package_name(&child);
            } else {
                decls.push(self.build_node(&child));
            }
        }

        // Field-name driven traversal can skip over ERROR tokens the walk
        // never lands on; the tree-wide flag catches those.
        if self.errors.is_empty() && root.has_error() {
            self.record_syntax_error(&root);
        }
        if !self.errors.is_empty() {
            for err in &self.errors {
                eprintln!("AST builder error: {err}");
            }
            return Err(self.errors.remove(0));
        }
        Ok(SourceFile {
            id,
            location,
            package,
            decls,
        })
    }

    fn build_package_name(&mut self, node: &CstNode<'_>) -> Option<Ident> {
        for i in 0..node.named_child_count() {
            let child = node.named_child(i)?;
            if IDENT_KINDS.contains(&child.kind()) {
                return Some(self.build_ident(&child));
            }
        }
        None
    }

    /// Generic dispatch: modeled kinds get dedicated nodes, everything else
    /// becomes an opaque [`Other`] node.
    fn build_node(&mut self, node: &CstNode<'_>) -> Node {
        if node.is_error() || node.is_missing() {
            self.record_syntax_error(node);
        }
        let kind = node.kind();
        if IDENT_KINDS.contains(&kind) {
            return Node::Ident(self.build_ident(node));
        }
        if LIT_KINDS.contains(&kind) {
            return Node::BasicLit(self.build_basic_lit(node));
        }
        match kind {
            "type_declaration" | "var_declaration" | "const_declaration" => {
                Node::GenDecl(self.build_gen_decl(node))
            }
            "function_declaration" | "method_declaration" => {
                Node::FuncDecl(self.build_func_decl(node))
            }
            "field_declaration" | "parameter_declaration" | "variadic_parameter_declaration" => {
                Node::Field(self.build_field(node))
            }
            "type_spec" | "type_alias" => Node::TypeSpec(self.build_type_spec(node)),
            "var_spec" => Node::ValueSpec(self.build_value_spec(node, DeclKeyword::Var)),
            "const_spec" => Node::ValueSpec(self.build_value_spec(node, DeclKeyword::Const)),
            _ => Node::Other(self.build_other(node)),
        }
    }

    fn build_gen_decl(&mut self, node: &CstNode<'_>) -> GenDecl {
        let id = next_node_id();
        let location = Self::get_location(node);
        let keyword = match node.kind() {
            "var_declaration" => DeclKeyword::Var,
            "const_declaration" => DeclKeyword::Const,
            _ => DeclKeyword::Type,
        };
        let mut specs = Vec::new();
        for i in 0..node.named_child_count() {
            let Some(child) = node.named_child(i) else {
                continue;
            };
            if child.kind() == "comment" {
                continue;
            }
            specs.push(self.build_node(&child));
        }
        GenDecl {
            id,
            location,
            keyword,
            specs,
        }
    }

    fn build_type_spec(&mut self, node: &CstNode<'_>) -> TypeSpec {
        let id = next_node_id();
        let location = Self::get_location(node);
        let assign = node.kind() == "type_alias";
        let name = match node.child_by_field_name("name") {
            Some(name_node) => self.build_ident(&name_node),
            None => {
                self.record_malformed(node, "type spec has no name");
                self.placeholder_ident(node)
            }
        };
        let ty = match node.child_by_field_name("type") {
            Some(ty_node) if ty_node.kind() == "struct_type" => {
                TypeExpr::Struct(self.build_struct_fields(&ty_node))
            }
            Some(ty_node) => TypeExpr::Opaque(Box::new(self.build_node(&ty_node))),
            None => {
                self.record_malformed(node, "type spec has no underlying type");
                TypeExpr::Opaque(Box::new(Node::Other(Other {
                    id: next_node_id(),
                    location: Self::get_location(node),
                    kind: node.kind().to_string(),
                    segments: Vec::new(),
                })))
            }
        };
        TypeSpec {
            id,
            location,
            name,
            assign,
            ty,
        }
    }

    fn build_struct_fields(&mut self, struct_node: &CstNode<'_>) -> Vec<Field> {
        let mut fields = Vec::new();
        let Some(list) = struct_node
            .named_child(0)
            .filter(|child| child.kind() == "field_declaration_list")
        else {
            self.record_malformed(struct_node, "struct type has no field list");
            return fields;
        };
        for i in 0..list.named_child_count() {
            let Some(child) = list.named_child(i) else {
                continue;
            };
            if child.kind() == "field_declaration" {
                fields.push(self.build_field(&child));
            }
        }
        fields
    }

    fn build_func_decl(&mut self, node: &CstNode<'_>) -> FuncDecl {
        let id = next_node_id();
        let location = Self::get_location(node);
        let name = match node.child_by_field_name("name") {
            Some(name_node) => self.build_ident(&name_node),
            None => {
                self.record_malformed(node, "function has no name");
                self.placeholder_ident(node)
            }
        };
        let recv = match node.child_by_field_name("receiver") {
            Some(receiver) => self.build_params(&receiver),
            None => Vec::new(),
        };
        let params = match node.child_by_field_name("parameters") {
            Some(list) => self.build_params(&list),
            None => {
                self.record_malformed(node, "function has no parameter list");
                Vec::new()
            }
        };
        let results = match node.child_by_field_name("result") {
            // Named or parenthesized results share the parameter shape.
            Some(result) if result.kind() == "parameter_list" => self.build_params(&result),
            // A single bare result type becomes one nameless field.
            Some(result) => vec![Field {
                id: next_node_id(),
                location: Self::get_location(&result),
                names: Vec::new(),
                ty: Box::new(self.build_node(&result)),
            }],
            None => Vec::new(),
        };
        let body = node
            .child_by_field_name("body")
            .map(|body_node| Box::new(self.build_node(&body_node)));
        FuncDecl {
            id,
            location,
            name,
            recv,
            params,
            results,
            body,
        }
    }

    fn build_params(&mut self, list: &CstNode<'_>) -> Vec<Field> {
        let mut fields = Vec::new();
        for i in 0..list.named_child_count() {
            let Some(child) = list.named_child(i) else {
                continue;
            };
            if matches!(
                child.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            ) {
                fields.push(self.build_field(&child));
            }
        }
        fields
    }

    fn build_field(&mut self, node: &CstNode<'_>) -> Field {
        let id = next_node_id();
        let location = Self::get_location(node);
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for name_node in node.children_by_field_name("name", &mut cursor) {
            names.push(self.build_ident(&name_node));
        }
        let ty = match node.child_by_field_name("type") {
            Some(ty_node) => Box::new(self.build_node(&ty_node)),
            None => {
                self.record_malformed(node, "field has no type");
                Box::new(Node::Other(Other {
                    id: next_node_id(),
                    location: Self::get_location(node),
                    kind: node.kind().to_string(),
                    segments: Vec::new(),
                }))
            }
        };
        Field {
            id,
            location,
            names,
            ty,
        }
    }

    fn build_value_spec(&mut self, node: &CstNode<'_>, keyword: DeclKeyword) -> ValueSpec {
        let id = next_node_id();
        let location = Self::get_location(node);
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for name_node in node.children_by_field_name("name", &mut cursor) {
            names.push(self.build_ident(&name_node));
        }
        if names.is_empty() {
            self.record_malformed(node, "value spec has no name");
        }
        let ty = node
            .child_by_field_name("type")
            .map(|ty_node| Box::new(self.build_node(&ty_node)));
        let values = match node.child_by_field_name("value") {
            Some(list) => {
                let mut values = Vec::new();
                for i in 0..list.named_child_count() {
                    if let Some(child) = list.named_child(i) {
                        values.push(self.build_node(&child));
                    }
                }
                values
            }
            None => Vec::new(),
        };
        ValueSpec {
            id,
            location,
            keyword,
            names,
            ty,
            values,
        }
    }

    fn build_ident(&mut self, node: &CstNode<'_>) -> Ident {
        Ident {
            id: next_node_id(),
            location: Self::get_location(node),
            name: self.text(node).to_string(),
            vis: Visibility::default(),
        }
    }

    fn build_basic_lit(&mut self, node: &CstNode<'_>) -> BasicLit {
        BasicLit {
            id: next_node_id(),
            location: Self::get_location(node),
            value: self.text(node).to_string(),
        }
    }

    /// Builds the opaque passthrough for an unmodeled construct.
    ///
    /// All children (named and anonymous) are visited in source order; the
    /// byte gaps between them, and any leaf tokens that are not identifiers
    /// or literals, are captured as raw slices. The concatenation of the
    /// segments reproduces the node's source text exactly.
    fn build_other(&mut self, node: &CstNode<'_>) -> Other {
        let id = next_node_id();
        let location = Self::get_location(node);
        let kind = node.kind().to_string();
        let mut segments = Vec::new();
        let mut last = node.start_byte();

        for i in 0..node.child_count() {
            let Some(child) = node.child(i) else {
                continue;
            };
            if child.start_byte() > last {
                segments.push(Segment::Raw(self.slice(last, child.start_byte())));
            }
            if child.child_count() == 0 && !is_modeled(child.kind()) {
                // Keyword, operator, or punctuation token.
                if child.is_error() || child.is_missing() {
                    self.record_syntax_error(&child);
                }
                segments.push(Segment::Raw(self.slice(child.start_byte(), child.end_byte())));
            } else {
                segments.push(Segment::Node(self.build_node(&child)));
            }
            last = child.end_byte();
        }
        if node.end_byte() > last {
            segments.push(Segment::Raw(self.slice(last, node.end_byte())));
        }

        Other {
            id,
            location,
            kind,
            segments,
        }
    }

    fn placeholder_ident(&mut self, node: &CstNode<'_>) -> Ident {
        Ident {
            id: next_node_id(),
            location: Self::get_location(node),
            name: "_missing".to_string(),
            vis: Visibility::default(),
        }
    }

    fn record_syntax_error(&mut self, node: &CstNode<'_>) {
        let location = Self::get_location(node);
        let snippet: String = self
            .slice(node.start_byte(), node.end_byte())
            .chars()
            .take(30)
            .collect();
        self.errors.push(AstError::Syntax { location, snippet });
    }

    fn record_malformed(&mut self, node: &CstNode<'_>, reason: &str) {
        self.errors.push(AstError::Malformed {
            kind: node.kind().to_string(),
            location: Self::get_location(node),
            reason: reason.to_string(),
        });
    }

    fn text(&self, node: &CstNode<'_>) -> &str {
        node.utf8_text(self.code).unwrap_or("")
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.code[start..end]).into_owned()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn get_location(node: &CstNode<'_>) -> Location {
        let start = node.start_position();
        let end = node.end_position();
        Location::new(
            node.start_byte() as u32,
            node.end_byte() as u32,
            start.row as u32 + 1,
            start.column as u32 + 1,
            end.row as u32 + 1,
            end.column as u32 + 1,
        )
    }
}

/// Generate a unique node ID using an atomic counter.
///
/// Starting from 1 (0 is reserved as invalid/uninitialized).
fn next_node_id() -> u32 {
    static COUNTER: AtomicU32 = AtomicU32::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
