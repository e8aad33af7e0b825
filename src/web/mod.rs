//! HTML presentation layer
//!
//! The catalog pages: list view, detail view and the guarded creation form,
//! rendered with tera templates. Success notifications travel through a
//! one-time flash cookie consumed on the next page load.

mod flash;
mod handler;

pub use flash::FlashData;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view_all))
        .route("/view_all", get(handler::view_all))
        .route("/view_one/{id}", get(handler::view_one))
        .route(
            "/formulaire",
            get(handler::formulaire_page).post(handler::formulaire_submit),
        )
}
