//! Identifier case conversion.

use crate::errors::TranslateError;

/// Converts a Go `CamelCase`/`mixedCase` identifier to `snake_case`.
///
/// A separator is inserted before every upper-case character and the whole
/// result is lower-cased; the leading separator is stripped when the original
/// name started upper-case. Consecutive capitals each start their own run, so
/// `"UserID"` becomes `"user_i_d"` — acronyms are not normalized.
///
/// Not idempotent. The caller applies it exactly once per identifier; the
/// renaming pass guarantees that by dispatching on syntactic role instead of
/// revisiting declaration names generically.
///
/// # Errors
///
/// Returns [`TranslateError::EmptyIdentifier`] for the empty string.
pub fn camel_to_snake(name: &str) -> Result<String, TranslateError> {
    let Some(first) = name.chars().next() else {
        return Err(TranslateError::EmptyIdentifier);
    };
    let mut result = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            result.push('_');
        }
        result.extend(ch.to_lowercase());
    }
    if first.is_uppercase() {
        result.remove(0);
    }
    Ok(result)
}
