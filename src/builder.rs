// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::ast::{Document, Section, Value};

pub const DEFAULT_ASSET: &str = "ALN";
pub const DEFAULT_GAS_PRICE: i64 = 100;
pub const GOVERNANCE_ADDRESS: &str = "aln1governance000000000000000000000000000";

pub const TRANSFER_GAS_LIMIT: i64 = 21000;
pub const PROPOSAL_GAS_LIMIT: i64 = 500_000;
pub const PROPOSAL_GAS_PRICE: i64 = 200;
pub const VOTE_GAS_LIMIT: i64 = 100_000;
pub const VOTE_GAS_PRICE: i64 = 150;

/// Builds a [`Document`] without going through text.
///
/// Documents built this way carry no raw entries, so validation findings
/// for them never have line numbers. Run the validator before handing the
/// result to anything that signs or broadcasts it.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, section: Section, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.doc.section_mut(section).insert(key.into(), value.into());
        self
    }

    pub fn header(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Header, key, value)
    }

    pub fn data(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Data, key, value)
    }

    pub fn footer(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(Section::Footer, key, value)
    }

    pub fn op_code(self, op_code: &str) -> Self {
        self.header("op_code", op_code)
    }

    /// Store an already produced signature string verbatim.
    pub fn signature(self, signature: impl Into<String>) -> Self {
        self.footer("signature", Value::String(signature.into()))
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

/// Continue building from an existing document, e.g. to attach a signature.
impl From<Document> for DocumentBuilder {
    fn from(doc: Document) -> Self {
        Self { doc }
    }
}

/// Unsigned transfer. `amount` is kept as a string so large amounts keep
/// their exact digits.
pub fn build_transfer_tx(
    from: &str,
    to: &str,
    amount: &str,
    nonce: i64,
    gas_price: Option<i64>,
    timestamp: i64,
) -> Document {
    DocumentBuilder::new()
        .op_code("transfer")
        .header("from", from)
        .header("to", to)
        .header("nonce", nonce)
        .data("asset", DEFAULT_ASSET)
        .data("amount", amount)
        .data("constraints", Value::Array(Vec::new()))
        .footer("timestamp", timestamp)
        .footer("gas_limit", TRANSFER_GAS_LIMIT)
        .footer("gas_price", gas_price.unwrap_or(DEFAULT_GAS_PRICE))
        .build()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProposalParams {
    pub nonce: i64,
    pub proposal_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub execution_route: String,
    pub quorum: f64,
    pub threshold: f64,
    pub duration_blocks: i64,
    pub constraints: Vec<Value>,
}

impl Default for ProposalParams {
    fn default() -> Self {
        Self {
            nonce: 0,
            proposal_id: String::new(),
            title: String::new(),
            description: String::new(),
            category: String::new(),
            execution_route: String::new(),
            quorum: 0.4,
            threshold: 0.66,
            duration_blocks: 10_000,
            constraints: Vec::new(),
        }
    }
}

/// Unsigned governance proposal addressed to the governance module.
pub fn build_governance_proposal_tx(proposer: &str, params: &ProposalParams, timestamp: i64) -> Document {
    DocumentBuilder::new()
        .op_code("governance_proposal")
        .header("from", proposer)
        .header("to", GOVERNANCE_ADDRESS)
        .header("nonce", params.nonce)
        .data("proposal_id", params.proposal_id.as_str())
        .data("title", params.title.as_str())
        .data("description", params.description.as_str())
        .data("category", params.category.as_str())
        .data("execution_route", params.execution_route.as_str())
        .data("quorum", params.quorum)
        .data("threshold", params.threshold)
        .data("duration_blocks", params.duration_blocks)
        .data("constraints", Value::Array(params.constraints.clone()))
        .footer("timestamp", timestamp)
        .footer("gas_limit", PROPOSAL_GAS_LIMIT)
        .footer("gas_price", PROPOSAL_GAS_PRICE)
        .build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteSupport {
    For,
    Against,
    Abstain,
}

impl VoteSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteSupport::For => "for",
            VoteSupport::Against => "against",
            VoteSupport::Abstain => "abstain",
        }
    }
}

impl fmt::Display for VoteSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn build_governance_vote_tx(
    voter: &str,
    proposal_id: &str,
    support: VoteSupport,
    nonce: i64,
    timestamp: i64,
) -> Document {
    DocumentBuilder::new()
        .op_code("governance_vote")
        .header("from", voter)
        .header("to", GOVERNANCE_ADDRESS)
        .header("nonce", nonce)
        .data("proposal_id", proposal_id)
        .data("support", support.as_str())
        .footer("timestamp", timestamp)
        .footer("gas_limit", VOTE_GAS_LIMIT)
        .footer("gas_price", VOTE_GAS_PRICE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::serializer::serialize_document;
    use crate::validation::validate_document;

    const NOW: i64 = 1_736_870_400;

    #[test]
    fn test_unsigned_transfer_only_lacks_signature() {
        let doc = build_transfer_tx("aln1alice", "aln1bob", "250", 3, None, NOW);
        let report = validate_document(&doc);

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].message, "Missing required footer field: signature");
        assert_eq!(report.errors()[0].line, None);
        assert_eq!(doc.footer["gas_price"], Value::Integer(DEFAULT_GAS_PRICE));
    }

    #[test]
    fn test_signed_transfer_is_valid() {
        let unsigned = build_transfer_tx("aln1alice", "aln1bob", "250", 3, Some(120), NOW);
        let doc = DocumentBuilder::from(unsigned).signature("ed25519:abcd").build();

        let report = validate_document(&doc);
        assert!(report.is_valid(), "{:?}", report.errors());
        assert!(report.warnings().is_empty());
        assert_eq!(doc.footer["gas_price"], Value::Integer(120));
    }

    #[test]
    fn test_transfer_field_order() {
        let doc = build_transfer_tx("aln1a", "aln1b", "1", 0, None, NOW);
        let header: Vec<&str> = doc.header.keys().map(String::as_str).collect();
        let data: Vec<&str> = doc.data.keys().map(String::as_str).collect();
        assert_eq!(header, vec!["op_code", "from", "to", "nonce"]);
        assert_eq!(data, vec!["asset", "amount", "constraints"]);
    }

    #[test]
    fn test_governance_proposal_defaults() {
        let params = ProposalParams {
            nonce: 9,
            proposal_id: "prop-12".into(),
            title: "Raise validator cap".into(),
            category: "parameters".into(),
            ..ProposalParams::default()
        };
        let doc = DocumentBuilder::from(build_governance_proposal_tx("aln1carol", &params, NOW))
            .signature("ed25519:ff")
            .build();

        assert_eq!(doc.header["to"], Value::from(GOVERNANCE_ADDRESS));
        assert_eq!(doc.data["quorum"], Value::Float(0.4));
        assert_eq!(doc.data["threshold"], Value::Float(0.66));
        assert_eq!(doc.data["duration_blocks"], Value::Integer(10_000));
        assert!(validate_document(&doc).is_valid());
    }

    #[test]
    fn test_governance_proposal_without_category_is_flagged() {
        let params = ProposalParams {
            proposal_id: "prop-1".into(),
            title: "Untitled".into(),
            ..ProposalParams::default()
        };
        let doc = build_governance_proposal_tx("aln1carol", &params, NOW);
        let report = validate_document(&doc);

        assert!(report.errors().iter().any(|e| e.message.contains("category")));
        assert!(report.errors().iter().all(|e| !e.message.contains("title")));
    }

    #[test]
    fn test_governance_vote() {
        let doc = build_governance_vote_tx("aln1dave", "prop-12", VoteSupport::Against, 4, NOW);

        assert_eq!(doc.header["op_code"], Value::from("governance_vote"));
        assert_eq!(doc.data["support"], Value::from("against"));
        assert_eq!(doc.footer["gas_limit"], Value::Integer(VOTE_GAS_LIMIT));
        assert_eq!(VoteSupport::Abstain.to_string(), "abstain");
    }

    #[test]
    fn test_built_document_survives_text_roundtrip() {
        let doc = DocumentBuilder::new()
            .op_code("delegation")
            .header("from", "aln1erin")
            .header("to", "aln1frank")
            .header("nonce", 2i64)
            .data("validator", "aln1val")
            .footer("timestamp", NOW)
            .signature("ed25519:01")
            .build();

        let text = serialize_document(&doc);
        let reparsed = parse_document(&text);

        assert_eq!(reparsed.header, doc.header);
        assert_eq!(reparsed.data, doc.data);
        assert_eq!(reparsed.footer, doc.footer);
        assert!(validate_document(&reparsed).is_valid());
    }
}
