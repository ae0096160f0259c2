//! Analysis API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::ServerState;
use crate::engine::{AnalysisTable, build_table};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{AnalysisOverride, DailyAdEntry, OverridePatch};

/// Optional date filter over the daily ad ledger
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRangeQuery {
    /// Both bounds or neither; an inverted range is rejected
    fn resolve(&self) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Ok(Some((start, end))),
            (None, None) => Ok(None),
            _ => Err(AppError::new(ErrorCode::InvalidDateRange)
                .with_detail("start", self.start.map(|d| d.to_string()).unwrap_or_default())
                .with_detail("end", self.end.map(|d| d.to_string()).unwrap_or_default())),
        }
    }
}

/// GET /api/analysis/:country_id?start=..&end=.. - computed table
pub async fn table(
    State(state): State<ServerState>,
    Path(country_id): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<AnalysisTable>> {
    let range = query.resolve()?;
    let table = build_table(&state.catalog, &state.overrides, &state.ads, &country_id, range)?;
    Ok(Json(table))
}

/// PATCH /api/analysis/:country_id/overrides/:product_id - merge cell edits
///
/// Partial merge; only fields present in the payload change. Client-side
/// edit debouncing flushes here.
pub async fn patch_override(
    State(state): State<ServerState>,
    Path((country_id, product_id)): Path<(String, String)>,
    Json(payload): Json<OverridePatch>,
) -> AppResult<Json<AnalysisOverride>> {
    if state.catalog.get_product(&product_id).is_none() {
        return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", product_id));
    }
    let merged = state.overrides.patch(&country_id, &product_id, &payload);
    Ok(Json(merged))
}

/// PUT /api/analysis/ad-spend - record (or replace) one day's ad amount
pub async fn record_ad_spend(
    State(state): State<ServerState>,
    Json(payload): Json<DailyAdEntry>,
) -> AppResult<Json<bool>> {
    if state.catalog.get_product(&payload.product_id).is_none() {
        return Err(
            AppError::new(ErrorCode::ProductNotFound).with_detail("id", payload.product_id)
        );
    }
    state.ads.record(payload)?;
    Ok(Json(true))
}

/// Ad spend listing filter; both bounds required
#[derive(Debug, Deserialize)]
pub struct AdSpendQuery {
    start: NaiveDate,
    end: NaiveDate,
}

/// GET /api/analysis/ad-spend/:product_id?start=..&end=.. - daily entries
pub async fn list_ad_spend(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Query(query): Query<AdSpendQuery>,
) -> AppResult<Json<Vec<DailyAdEntry>>> {
    if query.start > query.end {
        return Err(AppError::new(ErrorCode::InvalidDateRange)
            .with_detail("start", query.start.to_string())
            .with_detail("end", query.end.to_string()));
    }
    Ok(Json(state.ads.entries_for(&product_id, query.start, query.end)))
}
