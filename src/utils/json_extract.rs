/// Locate the JSON object embedded in free-form model output.
///
/// Takes the substring from the first `{` to the last `}` inclusive.
/// Deliberately tolerant of leading/trailing prose and markdown fences
/// the model emits despite instructions; it is a heuristic, not a
/// parser, and assumes the real object owns the outermost braces.
///
/// Returns `None` when either brace is missing or the last `}` does not
/// come strictly after the first `{`.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}
