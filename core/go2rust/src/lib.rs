#![warn(clippy::pedantic)]
//! Core orchestration crate for the go2rust translator.
//!
//! This crate provides the main entry points for the translation pipeline.
//! It turns a single Go compilation unit into a rough Rust equivalent:
//! declarations are rendered as Rust syntax, while statement and expression
//! bodies stay in Go surface syntax with their identifiers renamed.
//!
//! ```text
//! .go source → tree-sitter-go → typed AST → rename (pass 1) → emit (pass 2) → .rs text
//! ```
//!
//! Each phase is exposed as a standalone function, allowing flexible control
//! over which stages to execute:
//!
//! ```rust,no_run
//! fn to_rust(source_code: &str) -> anyhow::Result<String> {
//!     let mut file = go2rust::parse(source_code)?;
//!     go2rust::rename(&mut file)?;
//!     go2rust::emit(&file)
//! }
//! ```
//!
//! or, equivalently, [`translate`] runs all of them.
//!
//! ## Architecture
//!
//! A thin layer over the specialized crates:
//!
//! - `go2rust-ast` — typed AST, tree-sitter CST builder, verbatim printer
//! - `go2rust-translate` — the two translation passes and their lookup tables
//!
//! The engine is single-shot and stateless across runs: the tree is built
//! once, mutated exactly once by the renaming pass, then read exactly once by
//! the emitter. The type-mapping table is the only process-wide state and it
//! is immutable, so independent translations may run in parallel provided
//! each gets its own tree.
//!
//! ## Error Handling
//!
//! All public functions return `anyhow::Result`. Parse failures surface
//! before the engine runs; structural violations abort the translation with
//! no partial output. Unknown type names and unrecognized declarations are
//! not errors — the former pass through the type mapper unchanged, the
//! latter are skipped with their children still visited.

pub mod diagnostics;

use go2rust_ast::{builder::Builder, nodes::SourceFile};

/// Parses Go source code and builds the typed AST.
///
/// Initializes a tree-sitter parser with the Go grammar, parses the source
/// into a CST, and converts it with [`Builder`].
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded, tree-sitter cannot
/// produce a tree, or the tree contains syntax errors.
pub fn parse(source_code: &str) -> anyhow::Result<SourceFile> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| anyhow::anyhow!("Failed to load Go grammar: {e}"))?;
    let tree = parser
        .parse(source_code, None)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse source code"))?;
    let mut builder = Builder::new(source_code.as_bytes());
    Ok(builder.build_file(tree.root_node())?)
}

/// Pass 1: renames every identifier in `file` in place.
///
/// Declaration names get their visibility derived from Go's export
/// convention; all identifier text becomes `snake_case`. Must run before
/// [`emit`] and must not run twice on the same tree (the case conversion is
/// not idempotent).
///
/// # Errors
///
/// Returns an error only for a malformed tree (an empty identifier).
pub fn rename(file: &mut SourceFile) -> anyhow::Result<()> {
    go2rust_translate::rename::rename_file(file)?;
    Ok(())
}

/// Pass 2: renders the renamed tree as Rust declaration text.
///
/// # Errors
///
/// Returns an error for structurally invalid declarations (a field with no
/// name, a function with no result list); no partial output is produced.
pub fn emit(file: &SourceFile) -> anyhow::Result<String> {
    Ok(go2rust_translate::emit::emit_file(file)?)
}

/// Runs the full pipeline: parse, rename, emit.
///
/// Deterministic: the same input always yields byte-identical output.
///
/// # Errors
///
/// Propagates failures from any phase; see [`parse`], [`rename`], [`emit`].
pub fn translate(source_code: &str) -> anyhow::Result<String> {
    let mut file = parse(source_code)?;
    rename(&mut file)?;
    emit(&file)
}
