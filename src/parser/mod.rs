// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Document, Section};
use crate::lexer::{Lexer, Line, LineKind};

mod document;
mod value;

pub use value::coerce_value;

pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current_section: Option<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            current_section: None,
        }
    }

    pub(crate) fn next_line(&mut self) -> Option<Line> {
        self.lexer.next_line()
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Name of the section the next entry would land in, if any.
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    pub fn parse_document(&mut self) -> Document {
        document::parse_document(self)
    }
}

/// Parse chainlexeme text into a [`Document`].
///
/// Never fails: empty input yields a document with empty sections and one
/// entry in [`Document::errors`]; everything else is assembled line by line.
pub fn parse_document(text: &str) -> Document {
    Parser::new(text).parse_document()
}

#[cfg(test)]
mod tests;
