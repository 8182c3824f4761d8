use std::fmt;

/// The main error type for chainlexeme parsing, access and export.
///
/// Semantic validation never produces one of these; its findings are
/// returned as data in a [`ValidationReport`](crate::validation::ValidationReport).
#[derive(Debug, Clone, PartialEq)]
pub enum LexemeError {
    /// Raised when the parser is handed something that is not usable text.
    InvalidInput {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an accessor path does not resolve to a value.
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidPath {
        path: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: Option<usize>,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: Option<usize>,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl LexemeError {
    pub(crate) fn invalid_input() -> Self {
        LexemeError::InvalidInput {
            message: "Invalid input: text must be non-empty string".into(),
            hint: Some("Pass the full document text, including section markers".into()),
            code: Some(101),
        }
    }

    /// Error code, if one was assigned.
    pub fn code(&self) -> Option<u32> {
        match self {
            LexemeError::InvalidInput { code, .. }
            | LexemeError::MissingKey { code, .. }
            | LexemeError::InvalidPath { code, .. }
            | LexemeError::TypeError { code, .. }
            | LexemeError::ValidationError { code, .. }
            | LexemeError::ExportError { code, .. } => *code,
        }
    }

    /// Attach a source line to errors that can carry one.
    pub(crate) fn with_line(self, line: Option<usize>) -> Self {
        match self {
            LexemeError::TypeError { message, hint, code, .. } => {
                LexemeError::TypeError { message, line, hint, code }
            }
            LexemeError::ValidationError { message, hint, code, .. } => {
                LexemeError::ValidationError { message, line, hint, code }
            }
            other => other,
        }
    }
}

fn suffix(line: &Option<usize>, hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}{}",
        line.map_or(String::new(), |l| format!(" (line {})", l)),
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for LexemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexemeError::InvalidInput { message, hint, code } =>
                write!(f, "[ALN] {}{}", message, suffix(&None, hint, code)),
            LexemeError::MissingKey { path, hint, code } =>
                write!(f, "[ALN] Key '{}' not found{}", path, suffix(&None, hint, code)),
            LexemeError::InvalidPath { path, message, hint, code } =>
                write!(f, "[ALN] Invalid path '{}': {}{}", path, message, suffix(&None, hint, code)),
            LexemeError::TypeError { message, line, hint, code } =>
                write!(f, "[ALN] Type Error: {}{}", message, suffix(line, hint, code)),
            LexemeError::ValidationError { message, line, hint, code } =>
                write!(f, "[ALN] Validation Error: {}{}", message, suffix(line, hint, code)),
            LexemeError::ExportError { message, hint, code } =>
                write!(f, "[ALN] Export Error: {}{}", message, suffix(&None, hint, code)),
        }
    }
}

impl std::error::Error for LexemeError {}
