//! Declarative form schema engine
//!
//! Validation runs in three stages:
//!
//! 1. presence check + structural coercion (type parse, length/bound limits)
//! 2. per-field custom rule
//! 3. whole-form rules across the coerced values
//!
//! A failure at a stage aborts the later stages for that field; errors are
//! collected per field rather than failing fast, and whole-form failures are
//! keyed under [`FORM_WIDE_KEY`].

use std::collections::BTreeMap;

/// Pseudo field name for errors that concern the form as a whole
pub const FORM_WIDE_KEY: &str = "__all__";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Free text with inclusive length bounds
    Text { min_len: usize, max_len: usize },
    /// Integer with inclusive value bounds
    Integer { min: i64, max: i64 },
    Float,
}

/// A coerced field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

/// Coerced values of a successfully validated form
pub type CleanedData = BTreeMap<String, FieldValue>;

/// Field name (or [`FORM_WIDE_KEY`]) to human-readable messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Custom rule over a single coerced value
pub type FieldRule = fn(&FieldValue) -> Result<(), String>;

/// Rule across the whole set of coerced values
pub type FormRule = fn(&CleanedData) -> Result<(), String>;

/// Statically declared field
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub rule: Option<FieldRule>,
}

/// Statically declared form
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
    pub form_rules: &'static [FormRule],
}

impl FormSchema {
    /// Validate raw submitted values against the schema.
    pub fn validate(&self, input: &BTreeMap<String, String>) -> Result<CleanedData, FieldErrors> {
        let mut cleaned = CleanedData::new();
        let mut errors = FieldErrors::new();

        for field in self.fields {
            let raw = input
                .get(field.name)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty());

            let Some(raw) = raw else {
                if field.required {
                    push_error(&mut errors, field.name, "This field is required.");
                }
                continue;
            };

            // Stage 1: structural coercion
            let value = match coerce(field.ty, raw) {
                Ok(v) => v,
                Err(msg) => {
                    push_error(&mut errors, field.name, &msg);
                    continue;
                }
            };

            // Stage 2: per-field rule
            if let Some(rule) = field.rule
                && let Err(msg) = rule(&value)
            {
                push_error(&mut errors, field.name, &msg);
                continue;
            }

            cleaned.insert(field.name.to_string(), value);
        }

        // Stage 3: whole-form rules over whatever was cleaned. Rules must
        // tolerate fields missing from earlier failures.
        for rule in self.form_rules {
            if let Err(msg) = rule(&cleaned) {
                push_error(&mut errors, FORM_WIDE_KEY, &msg);
            }
        }

        if errors.is_empty() {
            Ok(cleaned)
        } else {
            Err(errors)
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

fn coerce(ty: FieldType, raw: &str) -> Result<FieldValue, String> {
    match ty {
        FieldType::Text { min_len, max_len } => {
            let len = raw.chars().count();
            if len < min_len {
                return Err(format!("Enter at least {min_len} characters."));
            }
            if len > max_len {
                return Err(format!("Enter at most {max_len} characters."));
            }
            Ok(FieldValue::Text(raw.to_string()))
        }
        FieldType::Integer { min, max } => {
            let n: i64 = raw
                .parse()
                .map_err(|_| "Enter a whole number.".to_string())?;
            if n < min || n > max {
                return Err(format!("Enter a value between {min} and {max}."));
            }
            Ok(FieldValue::Integer(n))
        }
        FieldType::Float => raw
            .parse()
            .map(FieldValue::Float)
            .map_err(|_| "Enter a number.".to_string()),
    }
}
