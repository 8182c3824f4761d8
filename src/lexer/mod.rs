// Author: Dustin Pilgrim
// License: MIT

use std::str::Split;

mod scanner;

/// What a single source line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    Comment,
    /// `[name]` marker; the name is already lowercased.
    Section(String),
    /// `key: value` with both sides trimmed. The value is still raw text.
    Entry { key: String, value: String },
    /// Anything else, e.g. a line without a usable colon.
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub kind: LineKind,
}

/// Line-oriented scanner over chainlexeme text.
pub struct Lexer<'a> {
    lines: Split<'a, char>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            lines: input.split('\n'),
            line: 0,
        }
    }

    /// 1-based number of the last line returned, 0 before the first.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Option<Line> {
        let raw = self.lines.next()?;
        self.line += 1;
        Some(Line {
            number: self.line,
            kind: scanner::classify(trim_line(raw)),
        })
    }
}

// A byte order mark counts as surrounding whitespace.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        self.next_line()
    }
}
