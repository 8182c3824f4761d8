use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Value;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());

/// Decode a trimmed raw value string into a typed [`Value`].
///
/// First match wins:
/// 1. matching `'...'` or `"..."` quotes: string with the quotes stripped
/// 2. `true` / `false`
/// 3. digits only: integer
/// 4. digits, `.`, digits: float
/// 5. `[...]`: array, split on every comma with each item decoded again
/// 6. anything else: the text as-is
///
/// Array splitting is naive: commas inside quotes or nested brackets still
/// split.
pub fn coerce_value(raw: &str) -> Value {
    if let Some(inner) = strip_matching_quotes(raw) {
        return Value::String(inner.to_string());
    }

    match raw {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }

    if INTEGER.is_match(raw) {
        return parse_integer(raw);
    }

    if FLOAT.is_match(raw) {
        if let Ok(f) = raw.parse::<f64>() {
            return Value::Float(f);
        }
    }

    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return Value::Array(inner.split(',').map(|item| coerce_value(item.trim())).collect());
    }

    Value::String(raw.to_string())
}

fn strip_matching_quotes(raw: &str) -> Option<&str> {
    let first = raw.chars().next()?;
    if first != '"' && first != '\'' {
        return None;
    }
    if raw.len() == 1 {
        // a lone quote opens and closes itself
        return Some("");
    }
    raw.strip_prefix(first)?.strip_suffix(first)
}

// Digit runs too large for i64 fall back to the nearest float.
fn parse_integer(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(_) => raw
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
    }
}
