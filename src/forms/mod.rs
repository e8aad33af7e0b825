//! Form schemas and validation
//!
//! Each form is a statically declared [`schema::FormSchema`]: a list of
//! (name, type, required, rule) field specs plus optional whole-form rules,
//! processed by ordinary control flow. Handlers feed the raw submitted
//! key/value pairs in and get either the coerced values or a per-field
//! error map back.

pub mod candy;
pub mod person;
pub mod schema;

pub use schema::{
    CleanedData, FORM_WIDE_KEY, FieldErrors, FieldSpec, FieldType, FieldValue, FormSchema,
};
