// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::LexemeError;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$|^[+-]?Infinity$").unwrap()
});
static RADIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0([xXoObB])([0-9a-fA-F]+)$").unwrap());

/// A typed value decoded from the right-hand side of a `key: value` line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Numeric view used by threshold checks. Strings count when their text
    /// is numeric (see [`numeric_text`]); booleans and arrays never do.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => numeric_text(s),
            Value::Boolean(_) | Value::Array(_) => None,
        }
    }

    /// A value is truthy unless it is the empty string, a numeric zero
    /// (NaN included) or `false`. Arrays are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Array(_) => true,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Array(_) => "array",
        }
    }
}

/// Numeric reading of free text. Blank text reads as 0. Otherwise only
/// signed decimals with an optional exponent, `Infinity`, and `0x`/`0o`/`0b`
/// literals count; spellings such as `inf` or `nan` do not.
pub fn numeric_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if DECIMAL.is_match(trimmed) {
        return trimmed.parse::<f64>().ok();
    }
    let caps = RADIX.captures(trimmed)?;
    let radix = match &caps[1] {
        "x" | "X" => 16,
        "o" | "O" => 8,
        _ => 2,
    };
    u128::from_str_radix(&caps[2], radix).ok().map(|n| n as f64)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

/// The three sections that carry typed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Data,
    Footer,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Header, Section::Data, Section::Footer];

    /// Maps an already lowercased section name onto a typed section.
    pub fn from_name(name: &str) -> Option<Section> {
        match name {
            "header" => Some(Section::Header),
            "data" => Some(Section::Data),
            "footer" => Some(Section::Footer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Data => "data",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered key/value mapping for one section.
pub type SectionMap = IndexMap<String, Value>;

/// One `key: value` line as it appeared in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Diagnostic log of every entry seen under any section name, including
/// sections the validator does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntries {
    sections: IndexMap<String, Vec<RawEntry>>,
}

impl RawEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh list for `name`. Redeclaring a section drops whatever
    /// was recorded under it before.
    pub fn begin_section(&mut self, name: &str) {
        self.sections.insert(name.to_string(), Vec::new());
    }

    pub fn push(&mut self, section: &str, entry: RawEntry) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .push(entry);
    }

    pub fn section(&self, name: &str) -> Option<&[RawEntry]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Every recorded entry in order, paired with its section name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawEntry)> {
        self.sections
            .iter()
            .flat_map(|(name, entries)| entries.iter().map(move |e| (name.as_str(), e)))
    }

    /// Line of the last recorded assignment to `key` under `section`.
    pub fn line_of(&self, section: &str, key: &str) -> Option<usize> {
        self.sections
            .get(section)?
            .iter()
            .rev()
            .find(|e| e.key == key)
            .map(|e| e.line)
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub header: SectionMap,
    pub data: SectionMap,
    pub footer: SectionMap,
    pub raw_entries: RawEntries,
    pub errors: Vec<LexemeError>, // fail-fast parse errors only
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document returned when the input is not usable text: empty sections
    /// and a single parse error.
    pub fn invalid_input() -> Self {
        Self {
            errors: vec![LexemeError::invalid_input()],
            ..Self::default()
        }
    }

    pub fn section(&self, section: Section) -> &SectionMap {
        match section {
            Section::Header => &self.header,
            Section::Data => &self.data,
            Section::Footer => &self.footer,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut SectionMap {
        match section {
            Section::Header => &mut self.header,
            Section::Data => &mut self.data,
            Section::Footer => &mut self.footer,
        }
    }

    pub fn get(&self, section: Section, key: &str) -> Option<&Value> {
        self.section(section).get(key)
    }

    pub fn has_parse_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Source line for `section.key`, when the document came from text.
    pub fn line_of(&self, section: Section, key: &str) -> Option<usize> {
        self.raw_entries.line_of(section.as_str(), key)
    }
}
