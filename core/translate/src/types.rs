//! Go → Rust type-name mapping.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Fixed table of well-known Go types. Immutable and process-wide; the only
/// shared state in the engine.
static TYPE_MAP: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("int", "i64"),
        ("uint", "u64"),
        ("string", "String"),
        ("time.Time", "DateTime"),
    ])
});

/// Maps a Go type name to its Rust equivalent.
///
/// Names absent from the table pass through unchanged: they are assumed to be
/// user-defined types and kept verbatim, never an error.
#[must_use]
pub fn map_type(name: &str) -> &str {
    TYPE_MAP.get(name).copied().unwrap_or(name)
}
