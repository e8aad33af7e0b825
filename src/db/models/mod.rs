//! Database models
//!
//! Each entity comes with its full model plus Create/Update payload types.

pub mod candy;
pub mod manufacturer;

pub use candy::{Candy, CandyCreate, CandyId, CandyUpdate};
pub use manufacturer::{Manufacturer, ManufacturerCreate, ManufacturerId, ManufacturerUpdate};
