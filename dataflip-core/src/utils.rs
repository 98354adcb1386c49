//! Identifier utilities shared by the backends.

/// Characters a remote system prefixes parameter names with (`@UserId`).
pub const PREFIX_MARKERS: &[char] = &['@'];

/// Strip remote prefix markers from a parameter name (`@UserId` -> `UserId`).
pub fn strip_prefix_markers(name: &str) -> String {
    name.replace(PREFIX_MARKERS, "")
}

/// Convert a remote name to a client identifier.
///
/// Prefix markers are always removed; when `camel_case` is set the first
/// character is lower-cased (`@UserId` -> `userId`).
pub fn to_client_casing(name: &str, camel_case: bool) -> String {
    let stripped = strip_prefix_markers(name);
    if !camel_case {
        return stripped;
    }
    let mut chars = stripped.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
