//! Snapshot Manager
//!
//! Lifecycle of a period snapshot: capture a computed table under a name,
//! load it back for editing, replace it atomically, delete it. Totals are
//! always recomputed from the rows being saved, so a stored snapshot's
//! totals block equals the weighted aggregation of its own rows.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{AnalysisSnapshot, OverridePatch};
use uuid::Uuid;

use crate::engine::AnalysisTable;
use crate::engine::aggregate::aggregate;
use crate::stores::OverrideStore;
use crate::utils::{AppError, AppResult, ErrorCode};

use super::store::SnapshotStore;

/// Snapshot lifecycle service over a [`SnapshotStore`] port
pub struct SnapshotService {
    store: Arc<dyn SnapshotStore>,
    overrides: Arc<OverrideStore>,
}

impl SnapshotService {
    pub fn new(store: Arc<dyn SnapshotStore>, overrides: Arc<OverrideStore>) -> Self {
        Self { store, overrides }
    }

    /// Capture a computed table as a named period snapshot
    pub async fn create(
        &self,
        period_name: &str,
        table: AnalysisTable,
    ) -> AppResult<AnalysisSnapshot> {
        let period_name = period_name.trim();
        if period_name.is_empty() {
            return Err(AppError::new(ErrorCode::PeriodNameRequired));
        }
        if table.rows.is_empty() {
            return Err(AppError::new(ErrorCode::SnapshotRowsEmpty)
                .with_detail("countryId", table.country_id.clone()));
        }

        let totals = aggregate(&table.rows);
        let snapshot = AnalysisSnapshot {
            id: Uuid::new_v4().to_string(),
            period_name: period_name.to_string(),
            country_id: table.country_id,
            country_name: table.country_name,
            currency: table.currency,
            rows: table.rows,
            totals,
            created_at: Utc::now().timestamp_millis(),
        };

        self.store.insert(snapshot.clone()).await?;
        tracing::info!(
            snapshot_id = %snapshot.id,
            period = %snapshot.period_name,
            rows = snapshot.rows.len(),
            "Snapshot created"
        );
        Ok(snapshot)
    }

    pub async fn get(&self, id: &str) -> AppResult<AnalysisSnapshot> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::SnapshotNotFound).with_detail("id", id))
    }

    /// All snapshots in insertion order
    pub async fn list(&self) -> AppResult<Vec<AnalysisSnapshot>> {
        self.store.list().await
    }

    /// Load a snapshot's rows back into the override store for editing
    ///
    /// Each row's editable input fields are merged into the live overrides
    /// for its (country, product) pair. Fields the row does not carry keep
    /// whatever value the override store already holds; values accumulate
    /// across repeated edit loads rather than resetting.
    pub async fn load_for_edit(&self, id: &str) -> AppResult<AnalysisSnapshot> {
        let snapshot = self.get(id).await?;

        for row in &snapshot.rows {
            let patch = OverridePatch {
                revenue: Some(row.revenue),
                ads: Some(row.ads),
                service_fees: Some(row.service_fees),
                product_fees: Some(row.product_fees),
                delivered_orders: Some(row.delivered_orders),
                total_orders: Some(row.total_orders),
                orders_confirmed: Some(row.orders_confirmed),
                quantity_delivery: Some(row.quantity_delivery),
            };
            self.overrides
                .patch(&snapshot.country_id, &row.product_id, &patch);
        }

        tracing::info!(snapshot_id = %id, "Snapshot loaded for editing");
        Ok(snapshot)
    }

    /// Replace a snapshot's contents, keeping its id
    ///
    /// The replacement is built completely before the single store insert
    /// that swaps it in, so readers never observe a half-written snapshot
    /// or a window with neither version. `created_at` is refreshed: an
    /// update is a re-save of the period.
    pub async fn update(
        &self,
        id: &str,
        period_name: &str,
        table: AnalysisTable,
    ) -> AppResult<AnalysisSnapshot> {
        // Existence check up front so a bad id fails before any write.
        self.get(id).await?;

        let period_name = period_name.trim();
        if period_name.is_empty() {
            return Err(AppError::new(ErrorCode::PeriodNameRequired));
        }
        if table.rows.is_empty() {
            return Err(AppError::new(ErrorCode::SnapshotRowsEmpty).with_detail("id", id));
        }

        let totals = aggregate(&table.rows);
        let replacement = AnalysisSnapshot {
            id: id.to_string(),
            period_name: period_name.to_string(),
            country_id: table.country_id,
            country_name: table.country_name,
            currency: table.currency,
            rows: table.rows,
            totals,
            created_at: Utc::now().timestamp_millis(),
        };

        self.store.insert(replacement.clone()).await?;
        tracing::info!(snapshot_id = %id, period = %replacement.period_name, "Snapshot replaced");
        Ok(replacement)
    }

    /// Delete a snapshot; deleting an absent id is a no-op
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.remove(id).await?;
        tracing::info!(snapshot_id = %id, "Snapshot deleted");
        Ok(())
    }
}
