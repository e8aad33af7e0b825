//! Candy API Handlers
//!
//! Direct construction path: payloads land in the repository as-is, without
//! the creation form's range check.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Candy, CandyCreate, CandyUpdate};
use crate::db::repository::{CandyRepository, Repository, numeric_id};
use crate::utils::{AppError, AppResult};

/// Candy as exposed over the API: numeric ids and the derived
/// price-per-kilo value alongside the stored fields
#[derive(Debug, Serialize)]
pub struct CandyResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub flavor: String,
    pub price: f64,
    pub weight: i64,
    pub created: NaiveDate,
    pub manufacturer: Option<i64>,
    pub price_per_kilo: Option<f64>,
}

impl From<Candy> for CandyResponse {
    fn from(candy: Candy) -> Self {
        Self {
            id: candy.id.as_ref().map(numeric_id).unwrap_or(0),
            price_per_kilo: candy.price_per_kilo(),
            name: candy.name,
            brand: candy.brand,
            flavor: candy.flavor,
            price: candy.price,
            weight: candy.weight,
            created: candy.created,
            manufacturer: candy.manufacturer.as_ref().map(numeric_id),
        }
    }
}

/// GET /api/candies - list all candies
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CandyResponse>>> {
    let repo = CandyRepository::new(state.db.clone());
    let candies = repo.find_all().await?;
    Ok(Json(candies.into_iter().map(Into::into).collect()))
}

/// GET /api/candies/:id - get a single candy
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CandyResponse>> {
    let repo = CandyRepository::new(state.db.clone());
    let candy = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Candy {id} not found")))?;
    Ok(Json(candy.into()))
}

/// POST /api/candies - create a candy
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CandyCreate>,
) -> AppResult<Json<CandyResponse>> {
    let repo = CandyRepository::new(state.db.clone());
    let candy = repo.create(payload).await?;
    let response = CandyResponse::from(candy);
    tracing::info!(id = response.id, "Candy created");
    Ok(Json(response))
}

/// PUT /api/candies/:id - update a candy
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CandyUpdate>,
) -> AppResult<Json<CandyResponse>> {
    let repo = CandyRepository::new(state.db.clone());
    let candy = repo.update(id, payload).await?;
    Ok(Json(candy.into()))
}

/// DELETE /api/candies/:id - delete a candy
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = CandyRepository::new(state.db.clone());
    repo.delete(id).await?;
    Ok(Json(true))
}
