//! JSON API 路由模块
//!
//! - [`candies`] - candy CRUD
//! - [`manufacturers`] - manufacturer CRUD (delete cascades)
//! - [`admin`] - administrative browse/search/filter and bulk edit

pub mod admin;
pub mod candies;
pub mod manufacturers;
