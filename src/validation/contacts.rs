//! Contact payload validation

use super::value_as_text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));

/// Raw contact payload as received from the client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    /// Contact name
    pub name: Option<Value>,
    /// Phone number; digits only
    pub phone: Option<Value>,
}

/// Validate a contact payload, returning `(name, phone)` as text
///
/// Only the first problem is reported.
pub fn validate_contact(payload: &ContactPayload) -> Result<(String, String), String> {
    let (name, phone) = match (&payload.name, &payload.phone) {
        (Some(name), Some(phone)) if !is_missing(name) && !is_missing(phone) => {
            (value_as_text(name), value_as_text(phone))
        }
        _ => return Err("Name and phone are required".to_string()),
    };

    if !PHONE_RE.is_match(&phone) {
        return Err("Phone must contain only numbers".to_string());
    }

    Ok((name, phone))
}

/// Empty string, zero, `false` and `null` all count as not provided
///
/// Whitespace is not trimmed: a blank phone fails the digits check instead.
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
