//! History Rollup
//!
//! Read-side views over saved snapshots. Totals blocks are trusted as
//! stored (the manager guarantees they match their rows at save time) and
//! re-summed with the same weighted rule, never re-derived from rows.

use serde::{Deserialize, Serialize};
use shared::models::{AnalysisSnapshot, AnalysisTotals};

use crate::engine::aggregate::aggregate_totals;

/// Sortable column of the period list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    PeriodName,
    CreatedAt,
    Revenue,
    Profit,
    Margin,
    TotalOrders,
    DeliveredOrders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort of the period list
///
/// Absence of a `SortState` means insertion order. Clicking a column
/// cycles ascending, descending, then back to insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Next sort state after selecting `column` while `current` is active
    pub fn cycle(current: Option<SortState>, column: SortColumn) -> Option<SortState> {
        match current {
            Some(state) if state.column == column => match state.direction {
                SortDirection::Asc => Some(SortState {
                    column,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortState {
                column,
                direction: SortDirection::Asc,
            }),
        }
    }
}

/// Filter snapshots by country and free-text query
///
/// The query matches case-insensitively against period and country names.
pub fn search(
    snapshots: &[AnalysisSnapshot],
    country_id: Option<&str>,
    query: Option<&str>,
) -> Vec<AnalysisSnapshot> {
    let query = query.map(str::to_lowercase);
    snapshots
        .iter()
        .filter(|s| country_id.is_none_or(|c| s.country_id == c))
        .filter(|s| {
            query.as_deref().is_none_or(|q| {
                s.period_name.to_lowercase().contains(q)
                    || s.country_name.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect()
}

/// Combined weighted totals over a set of snapshots
pub fn summary<'a, I>(snapshots: I) -> AnalysisTotals
where
    I: IntoIterator<Item = &'a AnalysisSnapshot>,
{
    aggregate_totals(snapshots.into_iter().map(|s| &s.totals))
}

/// Per-country rollup of snapshot totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRollup {
    pub country_id: String,
    pub country_name: String,
    pub currency: String,
    pub snapshot_count: usize,
    pub totals: AnalysisTotals,
}

/// Group snapshots by country, preserving first-seen country order
pub fn by_country(snapshots: &[AnalysisSnapshot]) -> Vec<CountryRollup> {
    let mut rollups: Vec<CountryRollup> = Vec::new();

    for snapshot in snapshots {
        if !rollups.iter().any(|r| r.country_id == snapshot.country_id) {
            let group: Vec<&AnalysisSnapshot> = snapshots
                .iter()
                .filter(|s| s.country_id == snapshot.country_id)
                .collect();
            rollups.push(CountryRollup {
                country_id: snapshot.country_id.clone(),
                country_name: snapshot.country_name.clone(),
                currency: snapshot.currency.clone(),
                snapshot_count: group.len(),
                totals: aggregate_totals(group.into_iter().map(|s| &s.totals)),
            });
        }
    }

    rollups
}

/// Sort the period list in place; no state means insertion order
pub fn sort_periods(snapshots: &mut [AnalysisSnapshot], state: Option<SortState>) {
    let Some(state) = state else {
        return;
    };

    snapshots.sort_by(|a, b| {
        let ordering = match state.column {
            SortColumn::PeriodName => a.period_name.cmp(&b.period_name),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SortColumn::Revenue => a.totals.total_revenue.total_cmp(&b.totals.total_revenue),
            SortColumn::Profit => a.totals.profit.total_cmp(&b.totals.profit),
            SortColumn::Margin => a.totals.margin.total_cmp(&b.totals.margin),
            SortColumn::TotalOrders => a.totals.total_orders.total_cmp(&b.totals.total_orders),
            SortColumn::DeliveredOrders => a
                .totals
                .delivered_orders
                .total_cmp(&b.totals.delivered_orders),
        };
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
