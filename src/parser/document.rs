use super::*;
use crate::ast::RawEntry;

pub(super) fn parse_document(parser: &mut Parser) -> Document {
    if parser.input.is_empty() {
        tracing::debug!("rejecting empty chainlexeme input");
        return Document::invalid_input();
    }

    let mut doc = Document::new();

    while let Some(line) = parser.next_line() {
        match line.kind {
            LineKind::Blank | LineKind::Comment | LineKind::Unrecognized => {}
            LineKind::Section(name) => {
                tracing::trace!(section = %name, line = line.number, "entering section");
                doc.raw_entries.begin_section(&name);
                // `[]` gets a raw list but never becomes the active section
                parser.current_section = (!name.is_empty()).then_some(name);
            }
            LineKind::Entry { key, value } => {
                let Some(section_name) = parser.current_section.as_deref() else {
                    continue;
                };
                assign_entry(&mut doc, section_name, key, value, line.number);
            }
        }
    }

    tracing::debug!(
        lines = parser.line(),
        header = doc.header.len(),
        data = doc.data.len(),
        footer = doc.footer.len(),
        raw_entries = doc.raw_entries.len(),
        "assembled chainlexeme document"
    );

    doc
}

fn assign_entry(doc: &mut Document, section_name: &str, key: String, raw: String, line: usize) {
    let value = coerce_value(&raw);

    match Section::from_name(section_name) {
        // last write wins; the key keeps its first position
        Some(section) => {
            doc.section_mut(section).insert(key.clone(), value);
        }
        None => {
            tracing::trace!(section = section_name, key = %key, line, "entry outside typed sections");
        }
    }

    doc.raw_entries.push(section_name, RawEntry { key, value: raw, line });
}
