//! Manufacturer Model

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use validator::Validate;

pub type ManufacturerId = Thing;

/// Manufacturer model
///
/// `created` is stamped once at creation time and never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ManufacturerId>,
    pub name: String,
    pub website: String,
    pub contact_email: String,
    pub created: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Manufacturer {
    /// Location of the detail page for this record, keyed by its numeric id
    pub fn detail_url(&self) -> String {
        let id = self
            .id
            .as_ref()
            .map(super::super::repository::numeric_id)
            .unwrap_or(0);
        format!("/view_one/{id}")
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Manufacturer: {}", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ManufacturerCreate {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: String,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: String,
    #[validate(email(message = "contact_email must be a valid e-mail address"))]
    pub contact_email: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManufacturerUpdate {
    pub name: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
}
