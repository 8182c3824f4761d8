use super::*;
use crate::ast::Section;

/// header, data and footer must each hold at least one entry.
pub struct RequiredSections;

impl Rule for RequiredSections {
    fn name(&self) -> &'static str {
        "required_sections"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        for section in Section::ALL {
            if doc.section(section).is_empty() {
                report.add_error(format!("Missing required [{}] section", section), None);
            }
        }
    }
}

pub struct RequiredHeaderFields;

impl Rule for RequiredHeaderFields {
    fn name(&self) -> &'static str {
        "required_header_fields"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        for field in REQUIRED_HEADER_FIELDS {
            if !doc.header.contains_key(field) {
                report.add_error(format!("Missing required header field: {}", field), None);
            }
        }
    }
}

/// op_code must come from the closed set of known operations.
pub struct OpCodeDomain;

impl Rule for OpCodeDomain {
    fn name(&self) -> &'static str {
        "op_code_domain"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        let Some(op_code) = doc.header.get("op_code") else {
            return;
        };
        let known = op_code.as_str().is_some_and(|s| VALID_OP_CODES.contains(&s));
        if !known {
            report.add_error(
                format!("Invalid op_code: {}", op_code),
                doc.line_of(Section::Header, "op_code"),
            );
        }
    }
}

/// from and to must be `aln1` addresses.
pub struct AddressFormat;

impl Rule for AddressFormat {
    fn name(&self) -> &'static str {
        "address_format"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        for field in ["from", "to"] {
            if let Some(address) = doc.header.get(field) {
                if !has_string_prefix(address, ADDRESS_PREFIX) {
                    report.add_error(
                        format!(
                            "Invalid {} address format: must start with '{}'",
                            field, ADDRESS_PREFIX
                        ),
                        doc.line_of(Section::Header, field),
                    );
                }
            }
        }
    }
}

pub struct NonceType;

impl Rule for NonceType {
    fn name(&self) -> &'static str {
        "nonce_type"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        let Some(nonce) = doc.header.get("nonce") else {
            return;
        };
        if !matches!(nonce, Value::Integer(n) if *n >= 0) {
            report.add_error(
                "Nonce must be non-negative integer",
                doc.line_of(Section::Header, "nonce"),
            );
        }
    }
}

pub struct RequiredFooterFields;

impl Rule for RequiredFooterFields {
    fn name(&self) -> &'static str {
        "required_footer_fields"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        for field in REQUIRED_FOOTER_FIELDS {
            if !doc.footer.contains_key(field) {
                report.add_error(format!("Missing required footer field: {}", field), None);
            }
        }
    }
}

/// Advisory only: signatures are expected to carry the `ed25519:` scheme
/// prefix. The signature itself is never verified here.
pub struct SignaturePrefix;

impl Rule for SignaturePrefix {
    fn name(&self) -> &'static str {
        "signature_prefix"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        let Some(signature) = doc.footer.get("signature") else {
            return;
        };
        if !has_string_prefix(signature, SIGNATURE_PREFIX) {
            report.add_warning(
                format!("Signature should use {} prefix", SIGNATURE_PREFIX),
                doc.line_of(Section::Footer, "signature"),
            );
        }
    }
}

pub struct TimestampType;

impl Rule for TimestampType {
    fn name(&self) -> &'static str {
        "timestamp_type"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        let Some(timestamp) = doc.footer.get("timestamp") else {
            return;
        };
        if !matches!(timestamp, Value::Integer(n) if *n > 0) {
            report.add_error(
                "Timestamp must be positive integer (Unix timestamp)",
                doc.line_of(Section::Footer, "timestamp"),
            );
        }
    }
}

/// Advisory only: warns when gas_limit is numerically below the floor.
pub struct GasLimitFloor;

impl Rule for GasLimitFloor {
    fn name(&self) -> &'static str {
        "gas_limit_floor"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        let below = doc
            .footer
            .get("gas_limit")
            .and_then(Value::as_number)
            .is_some_and(|n| n < MIN_GAS_LIMIT);
        if below {
            report.add_warning(
                format!("Gas limit below minimum ({})", MIN_GAS_LIMIT),
                doc.line_of(Section::Footer, "gas_limit"),
            );
        }
    }
}

/// Payload requirements that depend on the operation.
pub struct OpCodePayload;

impl Rule for OpCodePayload {
    fn name(&self) -> &'static str {
        "op_code_payload"
    }

    fn check(&self, doc: &Document, report: &mut ValidationReport) {
        match doc.header.get("op_code").and_then(Value::as_str) {
            Some("transfer") => {
                if !is_present(doc, "amount") {
                    report.add_error(
                        "Transfer requires amount in data section",
                        doc.line_of(Section::Data, "amount"),
                    );
                }
            }
            Some("governance_proposal") => {
                for field in GOVERNANCE_PROPOSAL_FIELDS {
                    if !is_present(doc, field) {
                        report.add_error(
                            format!("Governance proposal requires {} in data section", field),
                            doc.line_of(Section::Data, field),
                        );
                    }
                }
            }
            _ => {}
        }
    }
}

// Absent, "", 0, 0.0 and false all count as missing.
fn is_present(doc: &Document, key: &str) -> bool {
    doc.data.get(key).is_some_and(Value::is_truthy)
}
