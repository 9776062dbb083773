//! Namespace derivation rules
//!
//! A fallback namespace is `{template}.{sanitized module name}`, where every
//! character outside `[A-Za-z0-9_]` is replaced by `_`.

/// Default prefix used to synthesize a namespace
pub const DEFAULT_TEMPLATE: &str = "com.hbp";

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
///
/// Character count is preserved.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the fallback namespace for a module
pub fn fallback_namespace(template: &str, module_name: &str) -> String {
    format!("{}.{}", template, sanitize(module_name))
}

/// Absent, empty and whitespace-only namespaces all count as unset
pub fn is_unset(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}
