// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Document, Section, Value};
use crate::export;
use crate::parser;
use crate::serializer;
use crate::validation::{self, ValidationReport};
use crate::LexemeError;

mod access;
mod conversion;

/// A parsed chainlexeme together with its source text, with typed access to
/// `section.key` paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Chainlexeme {
    document: Document,
    raw_content: String, // kept for error reporting
}

impl Chainlexeme {
    /// Parse chainlexeme text.
    ///
    /// Unlike [`parse_document`](crate::parse_document), the fail-fast parse
    /// error is returned as `Err` rather than inside the document.
    ///
    /// # Example
    /// ```
    /// use chainlexeme::Chainlexeme;
    ///
    /// let lexeme = Chainlexeme::from_str("[header]\nnonce: 3\n").unwrap();
    /// let nonce: u64 = lexeme.get("header.nonce").unwrap();
    /// assert_eq!(nonce, 3);
    /// ```
    pub fn from_str(content: &str) -> Result<Self, LexemeError> {
        let document = parser::parse_document(content);
        if let Some(err) = document.errors.first() {
            return Err(err.clone());
        }

        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    /// Wrap a document that was built programmatically.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            raw_content: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Run the standard validation rules over the document.
    pub fn validate(&self) -> ValidationReport {
        validation::validate_document(&self.document)
    }

    /// Canonical text form of the document.
    pub fn to_text(&self) -> String {
        serializer::serialize_document(&self.document)
    }

    pub fn to_json(&self) -> Result<String, LexemeError> {
        export::export_document_to_json(&self.document)
    }
}

/// Split `section.key` into its parts. Keys may themselves contain dots.
fn split_path(path: &str) -> Result<(Section, Option<&str>), LexemeError> {
    let (section_name, key) = match path.split_once('.') {
        Some((s, k)) => (s, Some(k)),
        None => (path, None),
    };

    let section = Section::from_name(&section_name.trim().to_lowercase()).ok_or_else(|| {
        LexemeError::InvalidPath {
            path: path.to_string(),
            message: format!("unknown section '{}'", section_name),
            hint: Some("Paths start with header, data or footer".into()),
            code: Some(305),
        }
    })?;

    match key {
        Some("") => Err(LexemeError::InvalidPath {
            path: path.to_string(),
            message: "empty key".into(),
            hint: Some("Use section.key, e.g. header.nonce".into()),
            code: Some(305),
        }),
        other => Ok((section, other)),
    }
}
