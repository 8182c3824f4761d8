// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::ast::{Document, Value};

mod rules;

pub use rules::{
    AddressFormat, GasLimitFloor, NonceType, OpCodeDomain, OpCodePayload, RequiredFooterFields,
    RequiredHeaderFields, RequiredSections, SignaturePrefix, TimestampType,
};

pub const VALID_OP_CODES: [&str; 9] = [
    "transfer",
    "governance_proposal",
    "governance_vote",
    "migration_lock",
    "migration_mint",
    "migration_burn",
    "token_mint",
    "token_transfer",
    "delegation",
];

pub const REQUIRED_HEADER_FIELDS: [&str; 4] = ["op_code", "from", "to", "nonce"];
pub const REQUIRED_FOOTER_FIELDS: [&str; 2] = ["signature", "timestamp"];
pub const GOVERNANCE_PROPOSAL_FIELDS: [&str; 3] = ["proposal_id", "title", "category"];

pub const ADDRESS_PREFIX: &str = "aln1";
pub const SIGNATURE_PREFIX: &str = "ed25519:";
pub const MIN_GAS_LIMIT: f64 = 21000.0;

/// A single finding, optionally pointing at the source line it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: Option<usize>,
}

/// Outcome of one validation pass. Errors make the document invalid;
/// warnings never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    is_valid: bool,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.errors.push(Diagnostic { message: message.into(), line });
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, message: impl Into<String>, line: Option<usize>) {
        self.warnings.push(Diagnostic { message: message.into(), line });
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// One self-contained check. A rule only ever appends to the report, so no
/// rule can hide the findings of another.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, doc: &Document, report: &mut ValidationReport);
}

/// Ordered rule set applied exhaustively to a document.
pub struct Validator {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredSections),
                Box::new(RequiredHeaderFields),
                Box::new(OpCodeDomain),
                Box::new(AddressFormat),
                Box::new(NonceType),
                Box::new(RequiredFooterFields),
                Box::new(SignaturePrefix),
                Box::new(TimestampType),
                Box::new(GasLimitFloor),
                Box::new(OpCodePayload),
            ],
        }
    }
}

impl Validator {
    /// The standard chainlexeme rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator with no rules at all.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after every rule already present.
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, doc: &Document) -> ValidationReport {
        let mut report = ValidationReport::new();
        for rule in &self.rules {
            rule.check(doc, &mut report);
        }

        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated chainlexeme document"
        );

        report
    }
}

static STANDARD: Lazy<Validator> = Lazy::new(Validator::default);

/// Validate a document against the standard rule set.
pub fn validate_document(doc: &Document) -> ValidationReport {
    STANDARD.validate(doc)
}

// Shared helpers for rules.

fn has_string_prefix(value: &Value, prefix: &str) -> bool {
    value.as_str().is_some_and(|s| s.starts_with(prefix))
}
