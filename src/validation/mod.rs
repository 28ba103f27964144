//! Request payload validation
//!
//! Pure functions that check incoming payloads and normalize their fields.
//! Nothing in here touches the stores.

pub mod contacts;
pub mod students;

pub use contacts::{validate_contact, ContactPayload};
pub use students::{validate_student, Mode, StudentFields, StudentPayload, Validated};

use serde_json::Value;

/// Render a JSON scalar as text, the way it would read when interpolated
///
/// Strings are returned without quotes; every other value uses its JSON text.
pub(crate) fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a value counts as "missing" for a required field
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
