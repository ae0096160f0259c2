//! Country API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Country, CountryCreate, CountryUpdate};

/// GET /api/countries - all countries
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Country>>> {
    Ok(Json(state.catalog.list_countries()))
}

/// GET /api/countries/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Country>> {
    let country = state
        .catalog
        .get_country(&id)
        .ok_or_else(|| AppError::new(ErrorCode::CountryNotFound).with_detail("id", id))?;
    Ok(Json(country))
}

/// POST /api/countries - create a country
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CountryCreate>,
) -> AppResult<Json<Country>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let country = state.catalog.create_country(payload)?;
    tracing::info!(country_id = %country.id, name = %country.name, "Country created");
    Ok(Json(country))
}

/// PUT /api/countries/:id - partial update (only present fields change)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CountryUpdate>,
) -> AppResult<Json<Country>> {
    let country = state.catalog.update_country(&id, payload)?;
    Ok(Json(country))
}

/// DELETE /api/countries/:id - delete with referential cleanup
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.delete_country(&id)?;
    Ok(Json(true))
}
