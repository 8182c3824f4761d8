#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;

const TRANSFER: &str = r#"
# simple transfer
[header]
op_code: transfer
from: aln1abc
to: aln1def
nonce: 0

[data]
amount: "5"
memo: 'hello world'
tags: [a, 2, true]

[footer]
signature: ed25519:00
timestamp: 1700000000
gas_limit: 21000
"#;

#[test]
fn test_parser_basic_document() {
    let doc = parse_document(TRANSFER);

    assert!(doc.errors.is_empty());
    assert_eq!(doc.header.len(), 4);
    assert_eq!(doc.data.len(), 3);
    assert_eq!(doc.footer.len(), 3);

    assert_eq!(doc.header["op_code"], Value::String("transfer".into()));
    assert_eq!(doc.header["nonce"], Value::Integer(0));
    assert_eq!(doc.data["amount"], Value::String("5".into()));
    assert_eq!(doc.data["memo"], Value::String("hello world".into()));
    assert_eq!(
        doc.data["tags"],
        Value::Array(vec![
            Value::String("a".into()),
            Value::Integer(2),
            Value::Boolean(true)
        ])
    );
    // only the first colon splits
    assert_eq!(doc.footer["signature"], Value::String("ed25519:00".into()));
    assert_eq!(doc.footer["timestamp"], Value::Integer(1_700_000_000));
}

#[test]
fn test_parser_keeps_insertion_order() {
    let doc = parse_document(TRANSFER);
    let keys: Vec<&str> = doc.header.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["op_code", "from", "to", "nonce"]);
}

#[test]
fn test_empty_input_fails_fast() {
    let doc = parse_document("");

    assert!(doc.header.is_empty());
    assert!(doc.data.is_empty());
    assert!(doc.footer.is_empty());
    assert!(doc.raw_entries.is_empty());
    assert_eq!(doc.errors.len(), 1);
    assert_eq!(doc.errors[0].code(), Some(101));
    assert!(doc.errors[0].to_string().contains("Invalid input"));
}

#[test]
fn test_whitespace_only_input_is_not_a_parse_error() {
    let doc = parse_document("   \n\n");
    assert!(doc.errors.is_empty());
    assert!(doc.header.is_empty());
}

#[test]
fn test_entries_before_any_section_are_ignored() {
    let doc = parse_document("orphan: 1\n[header]\nnonce: 2\n");

    assert_eq!(doc.header.len(), 1);
    assert_eq!(doc.raw_entries.len(), 1);
    assert_eq!(doc.line_of(Section::Header, "nonce"), Some(3));
}

#[test]
fn test_empty_section_marker_is_not_active() {
    let doc = parse_document("[]\nk: v\n");

    assert_eq!(doc.raw_entries.section("").map(<[_]>::len), Some(0));
    assert!(doc.raw_entries.is_empty());
    assert!(doc.header.is_empty() && doc.data.is_empty() && doc.footer.is_empty());
}

#[test]
fn test_empty_section_marker_ends_previous_section() {
    let mut parser = Parser::new("[header]\nnonce: 1\n[]\nfrom: aln1x\n");
    let doc = parser.parse_document();

    assert_eq!(parser.current_section(), None);
    assert_eq!(doc.header.len(), 1);
    assert!(!doc.header.contains_key("from"));
}

#[test]
fn test_byte_order_mark_before_first_section() {
    let doc = parse_document("\u{feff}[header]\nnonce: 4\n");
    assert_eq!(doc.header["nonce"], Value::Integer(4));
}

#[test]
fn test_section_names_are_case_folded() {
    let doc = parse_document("[HEADER]\nfrom: aln1x\n[Footer]\ntimestamp: 5\n");
    assert_eq!(doc.header["from"], Value::String("aln1x".into()));
    assert_eq!(doc.footer["timestamp"], Value::Integer(5));
}

#[test]
fn test_unknown_section_only_lands_in_raw_entries() {
    let doc = parse_document("[meta]\nversion: 2\n[data]\namount: 1\n");

    assert!(doc.header.is_empty());
    assert_eq!(doc.data.len(), 1);

    let meta = doc.raw_entries.section("meta").expect("meta section recorded");
    assert_eq!(meta.len(), 1);
    assert_eq!(meta[0].key, "version");
    assert_eq!(meta[0].value, "2");
    assert_eq!(meta[0].line, 2);
}

#[test]
fn test_raw_entries_keep_raw_text() {
    let doc = parse_document("[data]\nmemo: \"quoted text\"\n");
    let data = doc.raw_entries.section("data").expect("data recorded");
    assert_eq!(data[0].value, "\"quoted text\"");
    assert_eq!(doc.data["memo"], Value::String("quoted text".into()));
}

#[test]
fn test_duplicate_key_last_write_wins() {
    let doc = parse_document("[header]\nnonce: 1\nfrom: aln1a\nnonce: 7\n");

    assert_eq!(doc.header["nonce"], Value::Integer(7));
    let keys: Vec<&str> = doc.header.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["nonce", "from"]);
    assert_eq!(doc.line_of(Section::Header, "nonce"), Some(4));
}

#[test]
fn test_redeclared_section_resets_raw_entries_but_not_values() {
    let doc = parse_document("[data]\na: 1\n[footer]\nt: 2\n[data]\nb: 3\n");

    assert_eq!(doc.data.len(), 2);
    let data = doc.raw_entries.section("data").expect("data recorded");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].key, "b");
    assert_eq!(doc.raw_entries.line_of("data", "a"), None);
}

#[test]
fn test_raw_entries_iterate_in_section_order() {
    let doc = parse_document("[header]\nx: 1\n[extra]\ny: 2\n");
    let seen: Vec<(&str, &str)> = doc
        .raw_entries
        .iter()
        .map(|(section, entry)| (section, entry.key.as_str()))
        .collect();
    assert_eq!(seen, vec![("header", "x"), ("extra", "y")]);
    let names: Vec<&str> = doc.raw_entries.section_names().collect();
    assert_eq!(names, vec!["header", "extra"]);
}

#[test]
fn test_parser_struct_tracks_current_section() {
    let mut parser = Parser::new("[Data]\namount: 1\n");
    assert_eq!(parser.current_section(), None);
    let doc = parser.parse_document();
    assert_eq!(parser.current_section(), Some("data"));
    assert_eq!(doc.data["amount"], Value::Integer(1));
}

#[test]
fn test_coerce_quotes() {
    assert_eq!(coerce_value("\"a b\""), Value::String("a b".into()));
    assert_eq!(coerce_value("'single'"), Value::String("single".into()));
    assert_eq!(coerce_value("\"\""), Value::String(String::new()));
    assert_eq!(coerce_value("\"42\""), Value::String("42".into()));
    assert_eq!(coerce_value("\"true\""), Value::String("true".into()));
    // no escape handling
    assert_eq!(coerce_value(r#""a\"b""#), Value::String(r#"a\"b"#.into()));
}

#[test]
fn test_coerce_mismatched_quotes_stay_verbatim() {
    assert_eq!(coerce_value("\"abc'"), Value::String("\"abc'".into()));
    assert_eq!(coerce_value("\"open"), Value::String("\"open".into()));
}

#[test]
fn test_coerce_lone_quote_is_empty_string() {
    assert_eq!(coerce_value("\""), Value::String(String::new()));
}

#[test]
fn test_coerce_booleans() {
    assert_eq!(coerce_value("true"), Value::Boolean(true));
    assert_eq!(coerce_value("false"), Value::Boolean(false));
    assert_eq!(coerce_value("True"), Value::String("True".into()));
}

#[test]
fn test_coerce_numbers() {
    assert_eq!(coerce_value("42"), Value::Integer(42));
    assert_eq!(coerce_value("007"), Value::Integer(7));
    assert_eq!(coerce_value("3.14"), Value::Float(3.14));
    assert_eq!(coerce_value("-5"), Value::String("-5".into()));
    assert_eq!(coerce_value("1."), Value::String("1.".into()));
    assert_eq!(coerce_value(".5"), Value::String(".5".into()));
    assert_eq!(coerce_value("1e3"), Value::String("1e3".into()));
    assert_eq!(coerce_value("1.2.3"), Value::String("1.2.3".into()));
}

#[test]
fn test_coerce_integer_overflow_becomes_float() {
    assert_eq!(
        coerce_value("99999999999999999999"),
        Value::Float(99999999999999999999.0)
    );
}

#[test]
fn test_coerce_non_ascii_digits_stay_strings() {
    assert_eq!(coerce_value("٤٢"), Value::String("٤٢".into()));
}

#[test]
fn test_coerce_arrays() {
    assert_eq!(
        coerce_value("[1, 2, 3]"),
        Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
    assert_eq!(
        coerce_value("['x', 1.5, false]"),
        Value::Array(vec![
            Value::String("x".into()),
            Value::Float(1.5),
            Value::Boolean(false)
        ])
    );
}

#[test]
fn test_coerce_array_split_is_naive() {
    assert_eq!(
        coerce_value("[\"a,b\", c]"),
        Value::Array(vec![
            Value::String("\"a".into()),
            Value::String("b\"".into()),
            Value::String("c".into())
        ])
    );
    assert_eq!(
        coerce_value("[[1, 2], 3]"),
        Value::Array(vec![
            Value::String("[1".into()),
            Value::String("2]".into()),
            Value::Integer(3)
        ])
    );
}

#[test]
fn test_coerce_empty_array_has_one_empty_item() {
    assert_eq!(coerce_value("[]"), Value::Array(vec![Value::String(String::new())]));
}

#[test]
fn test_coerce_fallback_string() {
    assert_eq!(coerce_value("aln1abc"), Value::String("aln1abc".into()));
    assert_eq!(coerce_value(""), Value::String(String::new()));
}
