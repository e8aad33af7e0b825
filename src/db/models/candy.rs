//! Candy Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub type CandyId = Thing;

/// Candy model
///
/// `created` is stamped by the repository on every save (create and field
/// update). The bulk weight reset bypasses the save path and leaves it
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CandyId>,
    pub name: String,
    pub brand: String,
    pub flavor: String,
    /// Price of a full package, in currency units
    #[serde(default)]
    pub price: f64,
    /// Weight of a full package, in grams
    #[serde(default)]
    pub weight: i64,
    pub created: NaiveDate,
    /// Record link to manufacturer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Thing>,
}

impl Candy {
    /// Price per kilogram derived from the package price and weight.
    ///
    /// Returns `None` when the package weight is zero, since no per-kilo
    /// price can be computed. No other guard is applied here; range checks
    /// belong to the creation form.
    pub fn price_per_kilo(&self) -> Option<f64> {
        if self.weight == 0 {
            None
        } else {
            Some(self.price * (1000.0 / self.weight as f64))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandyCreate {
    pub name: String,
    pub brand: String,
    pub flavor: String,
    pub price: Option<f64>,
    pub weight: Option<i64>,
    /// Numeric id of the manufacturer to link, if any
    pub manufacturer: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandyUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub flavor: Option<String>,
    pub price: Option<f64>,
    pub weight: Option<i64>,
    pub manufacturer: Option<i64>,
}
