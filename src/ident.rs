//! Identifier derivation from icon paths.

/// Derive a camelCase identifier from a `/`-separated path with its
/// extension already stripped.
///
/// Segments are split on `/` and `-`, empty segments are dropped, and every
/// segment but the first gets its first character uppercased.
pub fn derive_id(relative_path: &str) -> String {
    relative_path
        .split(['/', '-'])
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(i, segment)| if i == 0 { segment.to_string() } else { ucfirst(segment) })
        .collect()
}

/// Compose the exported name of an artifact: the derived prefix followed by
/// the capitalized icon id. An empty prefix leaves the id untouched.
pub fn artifact_name(prefix: &str, id: &str) -> String {
    let prefix = derive_id(prefix);
    if prefix.is_empty() {
        id.to_string()
    } else {
        format!("{prefix}{}", ucfirst(id))
    }
}

/// Whether `name` can be used as a JavaScript binding name.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_part = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    (first.is_alphabetic() || first == '_' || first == '$') && chars.all(is_part)
}

/// Uppercase the first character of a string.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
