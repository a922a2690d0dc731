//! URI string helpers.

/// Strip a single trailing slash so query parameters can be appended
/// without producing `...//?code=`.
pub fn remove_trailing_slash(uri: &str) -> &str {
    uri.strip_suffix('/').unwrap_or(uri)
}
