//! Snapshot API handlers
//!
//! The computed table is always rebuilt server-side from the live stores
//! at capture time, so a snapshot reflects exactly what the analysis
//! endpoint would have returned at that moment.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use crate::engine::build_table;
use crate::snapshots::search;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::AnalysisSnapshot;

/// Capture payload: which country, under what period name, over what range
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturePayload {
    pub period_name: String,
    pub country_id: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl CapturePayload {
    fn range(&self) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Ok(Some((start, end))),
            (None, None) => Ok(None),
            _ => Err(AppError::new(ErrorCode::InvalidDateRange)),
        }
    }
}

/// Snapshot list filter
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    country: Option<String>,
    q: Option<String>,
}

/// GET /api/snapshots?country=..&q=.. - saved snapshots, insertion order
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<AnalysisSnapshot>>> {
    let all = state.snapshots.list().await?;
    Ok(Json(search(
        &all,
        query.country.as_deref(),
        query.q.as_deref(),
    )))
}

/// POST /api/snapshots - capture the current table as a period snapshot
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CapturePayload>,
) -> AppResult<Json<AnalysisSnapshot>> {
    let range = payload.range()?;
    let table = build_table(
        &state.catalog,
        &state.overrides,
        &state.ads,
        &payload.country_id,
        range,
    )?;
    let snapshot = state.snapshots.create(&payload.period_name, table).await?;
    Ok(Json(snapshot))
}

/// GET /api/snapshots/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AnalysisSnapshot>> {
    Ok(Json(state.snapshots.get(&id).await?))
}

/// Replace payload; the table is rebuilt for the snapshot's own country
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePayload {
    pub period_name: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// PUT /api/snapshots/:id - atomically replace with a fresh capture
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReplacePayload>,
) -> AppResult<Json<AnalysisSnapshot>> {
    let existing = state.snapshots.get(&id).await?;
    let range = match (payload.start, payload.end) {
        (Some(start), Some(end)) if start <= end => Some((start, end)),
        (None, None) => None,
        _ => return Err(AppError::new(ErrorCode::InvalidDateRange)),
    };
    let table = build_table(
        &state.catalog,
        &state.overrides,
        &state.ads,
        &existing.country_id,
        range,
    )?;
    let snapshot = state
        .snapshots
        .update(&id, &payload.period_name, table)
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/snapshots/:id/edit - load the rows back into the overrides
pub async fn load_for_edit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AnalysisSnapshot>> {
    Ok(Json(state.snapshots.load_for_edit(&id).await?))
}

/// DELETE /api/snapshots/:id - idempotent
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.snapshots.delete(&id).await?;
    Ok(Json(true))
}
