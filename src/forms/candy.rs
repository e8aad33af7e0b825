//! Candy creation form
//!
//! The guarded creation path: every submission goes through this schema
//! before a record is persisted. Direct API construction does not.

use super::schema::{CleanedData, FieldSpec, FieldType, FieldValue, FormSchema};
use crate::db::models::CandyCreate;

/// Valid package weight range, grams (inclusive)
pub const WEIGHT_MIN: i64 = 0;
pub const WEIGHT_MAX: i64 = 10000;

fn weight_in_range(value: &FieldValue) -> Result<(), String> {
    match value.as_integer() {
        Some(w) if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&w) => Err(format!(
            "The weight must be between {WEIGHT_MIN} and {WEIGHT_MAX} grams."
        )),
        _ => Ok(()),
    }
}

pub const CANDY_FORM: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "name",
            ty: FieldType::Text {
                min_len: 1,
                max_len: 64,
            },
            required: true,
            rule: None,
        },
        FieldSpec {
            name: "brand",
            ty: FieldType::Text {
                min_len: 1,
                max_len: 64,
            },
            required: true,
            rule: None,
        },
        FieldSpec {
            name: "flavor",
            ty: FieldType::Text {
                min_len: 1,
                max_len: 32,
            },
            required: true,
            rule: None,
        },
        FieldSpec {
            name: "price",
            ty: FieldType::Float,
            required: true,
            rule: None,
        },
        FieldSpec {
            name: "weight",
            ty: FieldType::Integer {
                min: i64::MIN,
                max: i64::MAX,
            },
            required: true,
            rule: Some(weight_in_range),
        },
        FieldSpec {
            name: "manufacturer",
            ty: FieldType::Integer {
                min: 1,
                max: i64::MAX,
            },
            required: false,
            rule: None,
        },
    ],
    form_rules: &[],
};

/// Turn the cleaned form values into a repository payload.
pub fn to_payload(cleaned: &CleanedData) -> CandyCreate {
    CandyCreate {
        name: cleaned["name"].as_text().unwrap_or_default().to_string(),
        brand: cleaned["brand"].as_text().unwrap_or_default().to_string(),
        flavor: cleaned["flavor"].as_text().unwrap_or_default().to_string(),
        price: cleaned.get("price").and_then(FieldValue::as_float),
        weight: cleaned.get("weight").and_then(FieldValue::as_integer),
        manufacturer: cleaned.get("manufacturer").and_then(FieldValue::as_integer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn submission(weight: &str) -> BTreeMap<String, String> {
        [
            ("name", "Tagada"),
            ("brand", "Haribo"),
            ("flavor", "strawberry"),
            ("price", "2.5"),
            ("weight", weight),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn weight_out_of_range_names_the_valid_range() {
        for weight in ["-1", "10001"] {
            let err = CANDY_FORM.validate(&submission(weight)).unwrap_err();
            let messages = &err["weight"];
            assert!(messages[0].contains('0') && messages[0].contains("10000"), "{messages:?}");
        }
    }

    #[test]
    fn weight_boundaries_are_inclusive() {
        for weight in ["0", "10000"] {
            let cleaned = CANDY_FORM.validate(&submission(weight)).unwrap();
            assert!(cleaned.contains_key("weight"));
        }
    }

    #[test]
    fn every_field_is_required() {
        let err = CANDY_FORM.validate(&BTreeMap::new()).unwrap_err();
        for field in ["name", "brand", "flavor", "price", "weight"] {
            assert_eq!(err[field], vec!["This field is required."], "{field}");
        }
        // the manufacturer link stays optional
        assert!(!err.contains_key("manufacturer"));
    }

    #[test]
    fn valid_submission_maps_to_a_create_payload() {
        let cleaned = CANDY_FORM.validate(&submission("400")).unwrap();
        let payload = to_payload(&cleaned);
        assert_eq!(payload.name, "Tagada");
        assert_eq!(payload.price, Some(2.5));
        assert_eq!(payload.weight, Some(400));
        assert_eq!(payload.manufacturer, None);
    }
}
