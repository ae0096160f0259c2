//! History API handlers
//!
//! Read-only rollups over saved snapshots. Snapshot totals blocks are
//! trusted as stored and combined with the weighted rule; rows are never
//! re-derived here.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::snapshots::{
    self, CountryRollup, SortColumn, SortDirection, SortState, search, sort_periods,
};
use crate::utils::AppResult;
use shared::models::{AnalysisSnapshot, AnalysisTotals};

/// Shared filter for all history views
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    country: Option<String>,
    q: Option<String>,
    sort: Option<SortColumn>,
    dir: Option<SortDirection>,
}

impl HistoryQuery {
    /// Sort state; a column without a direction defaults to ascending
    fn sort_state(&self) -> Option<SortState> {
        self.sort.map(|column| SortState {
            column,
            direction: self.dir.unwrap_or(SortDirection::Asc),
        })
    }
}

/// GET /api/history/summary - combined totals over matching snapshots
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<AnalysisTotals>> {
    let all = state.snapshots.list().await?;
    let matching = search(&all, query.country.as_deref(), query.q.as_deref());
    Ok(Json(snapshots::summary(&matching)))
}

/// GET /api/history/by-country - per-country rollups
pub async fn by_country(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<CountryRollup>>> {
    let all = state.snapshots.list().await?;
    let matching = search(&all, query.country.as_deref(), query.q.as_deref());
    Ok(Json(snapshots::by_country(&matching)))
}

/// GET /api/history/periods?sort=profit&dir=desc - the period list
///
/// Without sort parameters the list comes back in insertion order.
pub async fn periods(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<AnalysisSnapshot>>> {
    let all = state.snapshots.list().await?;
    let mut matching = search(&all, query.country.as_deref(), query.q.as_deref());
    sort_periods(&mut matching, query.sort_state());
    Ok(Json(matching))
}
