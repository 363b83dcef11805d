//! Coercion helpers for loosely typed JSON parameter values.
//!
//! Clients send form data, so numbers and booleans sometimes arrive as
//! strings. Validation and generation both go through these helpers so they
//! agree on what a value means.

use serde_json::Value;

/// Absent, `null`, or the empty string.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// A non-empty string after trimming.
pub fn is_non_empty_text(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// Interprets a JSON bool or the strings `"true"`/`"false"`.
pub fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Interprets a JSON number or a numeric string as a finite `f64`.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Renders a numeric value for literal substitution into Solidity.
///
/// Whole numbers render without a fractional part; integer strings keep their
/// digits so amounts beyond `f64` precision survive unchanged.
pub fn render_amount(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Some(u.to_string());
            }
            if let Some(i) = n.as_i64() {
                return Some(i.to_string());
            }
            as_number(value).map(render_float)
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                // Solidity rejects decimal literals with leading zeros.
                let digits = trimmed.trim_start_matches('0');
                return Some(if digits.is_empty() { "0" } else { digits }.to_string());
            }
            as_number(value).map(render_float)
        }
        _ => None,
    }
}

fn render_float(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Text of a string value; other JSON values render as their JSON text.
pub fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `0x` followed by exactly 40 hex digits.
pub fn is_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// A Solidity identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
