//! Location paths for diagnostics.
//!
//! Paths are JSON Pointer fragments (RFC 6901) over the tree's own segment
//! names, e.g. `#/fields/a~1b/inner`.

use std::borrow::Cow;

/// Escape a single path segment per RFC 6901.
///
/// - `~` → `~0`
/// - `/` → `~1`
///
/// Returns `Cow::Borrowed` when no escaping is needed (the common case).
pub fn escape_pointer_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') || segment.contains('/') {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Build a path by appending segments to a parent path.
///
/// # Example
/// ```
/// use schema_simplify_core::build_path;
/// assert_eq!(build_path("#", &["fields", "a/b"]), "#/fields/a~1b");
/// ```
pub fn build_path(parent: &str, segments: &[&str]) -> String {
    let mut path = parent.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&escape_pointer_segment(segment));
    }
    path
}
