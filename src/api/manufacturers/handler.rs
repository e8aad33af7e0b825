//! Manufacturer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Manufacturer, ManufacturerCreate, ManufacturerUpdate};
use crate::db::repository::{ManufacturerRepository, Repository, numeric_id};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct ManufacturerResponse {
    pub id: i64,
    pub name: String,
    pub website: String,
    pub contact_email: String,
    pub created: NaiveDate,
    pub description: String,
    /// Location of the detail page for this record
    pub url: String,
}

impl From<Manufacturer> for ManufacturerResponse {
    fn from(m: Manufacturer) -> Self {
        Self {
            id: m.id.as_ref().map(numeric_id).unwrap_or(0),
            url: m.detail_url(),
            name: m.name,
            website: m.website,
            contact_email: m.contact_email,
            created: m.created,
            description: m.description,
        }
    }
}

/// GET /api/manufacturers - list all manufacturers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ManufacturerResponse>>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    let manufacturers = repo.find_all().await?;
    Ok(Json(manufacturers.into_iter().map(Into::into).collect()))
}

/// GET /api/manufacturers/:id - get a single manufacturer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ManufacturerResponse>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    let manufacturer = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Manufacturer {id} not found")))?;
    Ok(Json(manufacturer.into()))
}

/// POST /api/manufacturers - create a manufacturer
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ManufacturerCreate>,
) -> AppResult<Json<ManufacturerResponse>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    let manufacturer = repo.create(payload).await?;
    let response = ManufacturerResponse::from(manufacturer);
    tracing::info!(id = response.id, "Manufacturer created");
    Ok(Json(response))
}

/// PUT /api/manufacturers/:id - update a manufacturer
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ManufacturerUpdate>,
) -> AppResult<Json<ManufacturerResponse>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    let manufacturer = repo.update(id, payload).await?;
    Ok(Json(manufacturer.into()))
}

/// DELETE /api/manufacturers/:id - delete a manufacturer and, transitively,
/// its dependent candies
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = ManufacturerRepository::new(state.db.clone());
    repo.delete(id).await?;
    Ok(Json(true))
}
