//! Administrative API 模块
//!
//! Tabular browse/search/filter over candy records plus the bulk
//! weight-reset action. Consumes the same repositories as the public
//! surface; nothing here re-applies the creation form's checks.

mod handler;

pub use handler::{BulkUpdateResponse, ResetWeightRequest};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/candies", get(handler::browse))
        .route("/candies/reset-weight", post(handler::reset_weight))
}
