pub mod ast;
pub mod builder;
pub mod error;
pub mod export;
pub mod lexeme;
pub mod lexer;
pub mod parser;
pub mod serializer;
pub mod validation;

pub use ast::{Document, RawEntries, RawEntry, Section, SectionMap, Value};
pub use builder::DocumentBuilder;
pub use error::LexemeError;
pub use lexeme::Chainlexeme;
pub use parser::{coerce_value, parse_document};
pub use serializer::{format_value, serialize_document};
pub use validation::{validate_document, Diagnostic, Rule, ValidationReport, Validator};
