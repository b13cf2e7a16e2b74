//! Filename sanitization for uploaded images.
//!
//! Reduces a client-supplied filename to a flat ASCII name that cannot
//! address anything outside the upload directory.

use unicode_normalization::UnicodeNormalization;

/// Sanitize a client-supplied filename.
///
/// The name is NFKD-decomposed and non-ASCII characters are dropped, so
/// accented letters keep their base letter; path separators become word breaks,
/// whitespace runs collapse to `_`, anything outside `[A-Za-z0-9_.-]` is
/// removed and leading/trailing `.`/`_` are trimmed. Returns `None` when
/// nothing usable remains.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let ascii: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether `name` can be served from the upload directory as-is.
///
/// Rejects anything that could resolve outside the directory.
pub fn is_servable_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
