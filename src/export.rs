// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{Document, Section, SectionMap, Value};
use crate::validation::ValidationReport;
use crate::LexemeError;

/// Export a chainlexeme document to JSON.
///
/// Produces `{"header": {...}, "data": {...}, "footer": {...}}` with keys in
/// insertion order:
/// - Strings and booleans → direct mapping
/// - Integers and floats → JSON numbers (non-finite floats become `null`)
/// - Arrays → nested JSON arrays
///
/// Raw entries and parse errors are not exported.
///
/// # Examples
/// ```
/// use chainlexeme::{parse_document, export::export_document_to_json};
///
/// let doc = parse_document("[header]\nnonce: 3\n");
/// let json = export_document_to_json(&doc).unwrap();
/// assert!(json.contains("\"nonce\": 3"));
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, LexemeError> {
    let mut top = serde_json::Map::new();
    for section in Section::ALL {
        top.insert(section.as_str().into(), section_to_json(doc.section(section)));
    }

    serde_json::to_string_pretty(&serde_json::Value::Object(top)).map_err(encode_error)
}

/// Export a validation report as JSON for callers that log or forward it.
pub fn export_report_to_json(report: &ValidationReport) -> Result<String, LexemeError> {
    serde_json::to_string_pretty(report).map_err(encode_error)
}

pub(crate) fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::String(s) => json!(s),
        Value::Boolean(b) => json!(b),
        Value::Integer(n) => json!(n),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Array(items) => json!(items.iter().map(value_to_json).collect::<Vec<_>>()),
    }
}

fn section_to_json(entries: &SectionMap) -> serde_json::Value {
    serde_json::Value::Object(
        entries
            .iter()
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect(),
    )
}

fn encode_error(e: serde_json::Error) -> LexemeError {
    LexemeError::ExportError {
        message: format!("Failed to encode JSON: {}", e),
        hint: None,
        code: Some(500),
    }
}
