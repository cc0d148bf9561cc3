//! Error types for the translation passes.

use go2rust_ast::nodes::Location;
use thiserror::Error;

/// Errors raised by the renaming and emission passes.
///
/// The input tree is assumed well-formed parser output, so both variants are
/// fatal: the translation aborts and no partial output is produced.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum TranslateError {
    /// The case converter was handed an empty identifier.
    #[error("cannot case-convert an empty identifier")]
    EmptyIdentifier,

    /// A declaration lacks a part the engine requires (a field with no name,
    /// a function with no parameter or result list).
    #[error("malformed {kind} at {location}: {reason}")]
    Structural {
        kind: &'static str,
        location: Location,
        reason: &'static str,
    },
}
