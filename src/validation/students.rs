//! Student payload validation
//!
//! Checks a create or update payload and produces the normalized fields
//! together with every human-readable error found. Validation never stops at
//! the first problem so clients see the full list in one response.

use super::{is_blank, value_as_text};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Youngest age a student may have
pub const MIN_AGE: f64 = 10.0;

/// Longest accepted local part (before the `@`), in bytes
const MAX_LOCAL_PART_LEN: usize = 64;

/// Longest accepted domain part (after the `@`), in bytes
const MAX_DOMAIN_LEN: usize = 254;

/// Longest accepted domain label, in bytes
const MAX_LABEL_LEN: usize = 63;

// One dot-separated piece of the local part; non-ASCII letters are allowed
static LOCAL_ATOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{00A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+$")
        .expect("valid local part regex")
});

static DOMAIN_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-\x{00A1}-\x{FFFF}]+$").expect("valid domain label regex")
});

// Alphabetic (possibly internationalized) or punycode top-level domain
static TLD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z\x{00A1}-\x{00A8}\x{00AA}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}|[Xx][Nn][A-Za-z0-9\-]{2,})$")
        .expect("valid tld regex")
});

static FULL_WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{FF01}-\x{FF5E}]").expect("valid full-width regex"));

/// Whether validation requires every field or only checks the supplied ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create: name, email and age must all be present
    Full,
    /// Update: absent fields are left untouched
    Partial,
}

/// Raw student payload as received from the client
///
/// Every field is kept as an arbitrary JSON value so that type problems
/// (e.g. `"age": "abc"`) surface as validation messages rather than as
/// body-parsing failures. A field sent as `null` counts as supplied: a null
/// age coerces to 0 and a null email reads as the text `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentPayload {
    /// Student name
    #[serde(deserialize_with = "supplied")]
    pub name: Option<Value>,
    /// Student email address
    #[serde(deserialize_with = "supplied")]
    pub email: Option<Value>,
    /// Student age; numeric strings are accepted
    #[serde(deserialize_with = "supplied")]
    pub age: Option<Value>,
}

/// Keep explicit `null`s as `Some(Value::Null)`; only missing keys become `None`
fn supplied<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Normalized student fields; `None` means "not supplied"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFields {
    /// Name as text
    pub name: Option<String>,
    /// Email as text
    pub email: Option<String>,
    /// Age coerced to a number
    pub age: Option<Number>,
}

/// Outcome of validating a payload
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// Normalized fields (populated even when there are errors)
    pub fields: StudentFields,
    /// Human-readable problems, in the order they were found
    pub errors: Vec<String>,
}

impl Validated {
    /// A payload is valid iff no errors were found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the normalized fields or the error list
    pub fn into_result(self) -> Result<StudentFields, Vec<String>> {
        if self.is_valid() {
            Ok(self.fields)
        } else {
            Err(self.errors)
        }
    }
}

/// Validate a student payload
///
/// Message order: age type, required fields (full mode), email format, age
/// minimum. An age that cannot be coerced does not also report the minimum.
pub fn validate_student(payload: &StudentPayload, mode: Mode) -> Validated {
    let mut errors = Vec::new();

    let mut age: Option<(f64, Number)> = None;
    if let Some(raw) = &payload.age {
        match coerce_age(raw) {
            Some(parsed) => age = Some(parsed),
            None => errors.push("Age must be a number.".to_string()),
        }
    }

    match mode {
        Mode::Full => {
            if payload.name.as_ref().map_or(true, is_blank) {
                errors.push("Name is required.".to_string());
            }
            if payload.email.as_ref().map_or(true, is_blank) {
                errors.push("Email is required.".to_string());
            }
            if payload.age.is_none() {
                errors.push("Age is required.".to_string());
            }
        }
        Mode::Partial => {
            if payload.name.as_ref().is_some_and(is_blank) {
                errors.push("Name is required.".to_string());
            }
        }
    }

    let email = payload.email.as_ref().map(value_as_text);
    if let Some(email) = &email {
        if !is_valid_email(email) {
            errors.push("Invalid email format.".to_string());
        }
    }

    if let Some((value, _)) = &age {
        if *value < MIN_AGE {
            errors.push("Age must be at least 10.".to_string());
        }
    }

    Validated {
        fields: StudentFields {
            name: payload.name.as_ref().map(value_as_text),
            email,
            age: age.map(|(_, number)| number),
        },
        errors,
    }
}

/// Check an address against standard email syntax
///
/// The local part is one or more dot-separated atoms of at most 64 bytes in
/// total and may contain non-ASCII letters. The domain needs at least two
/// labels, none starting or ending with a hyphen, and a top-level label that
/// is alphabetic or punycode (`xn--`).
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    local.split('.').all(|atom| LOCAL_ATOM_RE.is_match(atom)) && is_valid_domain(domain)
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    if labels.len() < 2 || !TLD_RE.is_match(tld) {
        return false;
    }

    labels.iter().all(|label| {
        label.len() <= MAX_LABEL_LEN
            && DOMAIN_LABEL_RE.is_match(label)
            && !FULL_WIDTH_RE.is_match(label)
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Coerce a JSON value to an age
///
/// Numbers pass through, strings are parsed after trimming (empty means 0),
/// booleans become 0 or 1 and `null` becomes 0. Anything else, or a
/// non-finite result, fails.
fn coerce_age(raw: &Value) -> Option<(f64, Number)> {
    let value = match raw {
        Value::Number(n) => return n.as_f64().map(|v| (v, n.clone())),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        _ => return None,
    };

    if !value.is_finite() {
        return None;
    }
    Some((value, number_from_f64(value)?))
}

/// Integral values become JSON integers so `"15"` is stored as `15`, not `15.0`
fn number_from_f64(value: f64) -> Option<Number> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
