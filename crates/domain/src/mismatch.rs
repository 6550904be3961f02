//! Extension vs. detected-type reconciliation.

/// Returns `true` when `extension` (the file's own, e.g. `".jpeg"`) disagrees
/// with `detected`, the matched extension of the most likely candidate type.
///
/// `detected` may list alternatives separated by `/` (`"jpg/jpeg"`); any of
/// them, stripped of dots and re-prefixed with a single `.`, is accepted. An
/// empty alternative therefore becomes `"."` and never matches a missing
/// extension. A single value gains a leading `.` only when it is non-empty
/// and lacks one, so `"doc"` and `".doc"` both match `".doc"` while a bare
/// `"."` stays as is.
pub fn extension_mismatch(extension: &str, detected: &str) -> bool {
    if detected.contains('/') {
        let stripped = detected.replace('.', "");
        return !stripped.split('/').any(|alt| format!(".{alt}") == extension);
    }

    dotted(detected) != extension.to_lowercase()
}

fn dotted(value: &str) -> String {
    if value.is_empty() || value.starts_with('.') { value.to_string() } else { format!(".{value}") }
}
