//! Standalone person form
//!
//! Not tied to any entity; exercises the two rule shapes the engine has to
//! support beyond structural checks: a per-field rule and a cross-field
//! rule that holds even when both fields pass individually.

use super::schema::{CleanedData, FieldSpec, FieldType, FieldValue, FormSchema};

fn forbid_bulle(value: &FieldValue) -> Result<(), String> {
    match value.as_text() {
        Some(name) if name.eq_ignore_ascii_case("bulle") => {
            Err("The name \"bulle\" is not allowed.".to_string())
        }
        _ => Ok(()),
    }
}

/// Reject the (name "paul", firstname "jacques") combination. Tolerates
/// missing fields: an earlier per-field failure leaves them out of the
/// cleaned data.
fn forbid_paul_jacques(cleaned: &CleanedData) -> Result<(), String> {
    let name = cleaned.get("name").and_then(FieldValue::as_text);
    let firstname = cleaned.get("firstname").and_then(FieldValue::as_text);
    match (name, firstname) {
        (Some(n), Some(f))
            if n.eq_ignore_ascii_case("paul") && f.eq_ignore_ascii_case("jacques") =>
        {
            Err("The name \"Paul Jacques\" is not allowed.".to_string())
        }
        _ => Ok(()),
    }
}

pub const PERSON_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "name",
            ty: FieldType::Text {
                min_len: 3,
                max_len: 32,
            },
            required: true,
            rule: Some(forbid_bulle),
        },
        FieldSpec {
            name: "firstname",
            ty: FieldType::Text {
                min_len: 3,
                max_len: 32,
            },
            required: true,
            rule: None,
        },
        FieldSpec {
            name: "age",
            ty: FieldType::Integer { min: 15, max: 120 },
            required: true,
            rule: None,
        },
    ],
    form_rules: &[forbid_paul_jacques],
};
