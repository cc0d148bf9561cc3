#![warn(clippy::pedantic)]
//! Two-pass Go → Rust declaration translation engine.
//!
//! Pass 1 ([`rename::rename_file`]) rewrites identifier text in place and
//! derives declaration visibility from Go's export convention. Pass 2
//! ([`emit::emit_file`]) reads the renamed tree and renders recognized
//! declarations as Rust text, falling back to silent recursion on everything
//! it does not model. Statement and expression bodies are emitted verbatim in
//! Go surface syntax with only their identifiers renamed; that is a
//! documented fidelity limitation, not a defect.

pub mod case;
pub mod emit;
pub mod errors;
pub mod rename;
pub mod types;
