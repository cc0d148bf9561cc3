//! Error types for the AST crate.
//!
//! This module defines structured errors for CST-to-AST construction.

use thiserror::Error;

use crate::nodes::Location;

/// Errors that can occur while building the typed AST from a parse tree.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// The parse tree contains ERROR or MISSING nodes from invalid syntax.
    #[error("invalid syntax at {location} near '{snippet}'")]
    Syntax { location: Location, snippet: String },

    /// A CST node lacks a child the builder requires.
    #[error("malformed {kind} at {location}: {reason}")]
    Malformed {
        kind: String,
        location: Location,
        reason: String,
    },
}
