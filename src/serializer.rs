// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Document, Section, SectionMap, Value};

/// Render a document back into canonical chainlexeme text.
///
/// Sections always appear as `[header]`, `[data]`, `[footer]`, separated by
/// one blank line, with keys in insertion order. Raw entries and parse
/// errors are not written.
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::new();

    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(section.as_str());
        out.push_str("]\n");
        write_section(&mut out, doc.section(section));
    }

    out
}

fn write_section(out: &mut String, entries: &SectionMap) {
    for (key, value) in entries {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&format_value(value));
        out.push('\n');
    }
}

/// Format a single value the way it appears after `key: `.
///
/// Strings containing a space or colon are double-quoted without escaping,
/// so a string holding `"` does not survive a round trip.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::String(s) if s.contains(' ') || s.contains(':') => format!("\"{}\"", s),
        Value::String(s) => s.clone(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
    }
}
