use super::*;

/// Classify an already trimmed line.
pub(super) fn classify(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }
    if let Some(name) = section_name(trimmed) {
        return LineKind::Section(name.to_lowercase());
    }
    match split_entry(trimmed) {
        Some((key, value)) => LineKind::Entry {
            key: key.to_string(),
            value: value.to_string(),
        },
        None => LineKind::Unrecognized,
    }
}

/// Inner text of a `[...]` marker.
fn section_name(trimmed: &str) -> Option<&str> {
    trimmed.strip_prefix('[')?.strip_suffix(']')
}

/// Split on the first colon. A colon in the first position does not count,
/// so `:value` lines are ignored rather than given an empty key.
fn split_entry(trimmed: &str) -> Option<(&str, &str)> {
    match trimmed.find(':') {
        Some(idx) if idx > 0 => Some((trimmed[..idx].trim(), trimmed[idx + 1..].trim())),
        _ => None,
    }
}
