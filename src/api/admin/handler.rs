//! Administrative Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::candies::CandyResponse;
use crate::core::ServerState;
use crate::db::repository::CandyRepository;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    /// Case-insensitive substring match on name or brand
    pub search: Option<String>,
    /// Manufacturer id filter
    pub manufacturer: Option<i64>,
}

/// GET /api/admin/candies - browse with optional search and filter
pub async fn browse(
    State(state): State<ServerState>,
    Query(params): Query<BrowseParams>,
) -> AppResult<Json<Vec<CandyResponse>>> {
    let repo = CandyRepository::new(state.db.clone());
    let candies = repo
        .search(params.search.as_deref(), params.manufacturer)
        .await?;
    Ok(Json(candies.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct ResetWeightRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub updated: usize,
    pub message: String,
}

/// POST /api/admin/candies/reset-weight - set weight to 1000 g on every
/// selected record in one batch, reporting the affected count
pub async fn reset_weight(
    State(state): State<ServerState>,
    Json(request): Json<ResetWeightRequest>,
) -> AppResult<Json<BulkUpdateResponse>> {
    let repo = CandyRepository::new(state.db.clone());
    let updated = repo.reset_weight(&request.ids).await?;

    Ok(Json(BulkUpdateResponse {
        updated,
        message: format!("The weight of {updated} candies has been updated."),
    }))
}
