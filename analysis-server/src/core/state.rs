use std::sync::Arc;

use crate::core::Config;
use crate::simulation::ScenarioService;
use crate::snapshots::{MemorySnapshotStore, SnapshotService};
use crate::stores::{AdLedger, CatalogStore, OverrideStore};
use crate::utils::AppResult;

/// Shared application state
///
/// Holds the configuration plus every store and service behind `Arc`, so
/// cloning is cheap and handlers receive the same underlying data. All
/// stores are explicit objects owned here and passed into the engine
/// functions; nothing is a module-level singleton.
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | catalog | CatalogStore | Countries and products |
/// | overrides | OverrideStore | Manual metric overrides |
/// | ads | AdLedger | Daily ad spend entries |
/// | snapshots | SnapshotService | Snapshot lifecycle |
/// | scenarios | ScenarioService | Saved what-if scenarios |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<CatalogStore>,
    pub overrides: Arc<OverrideStore>,
    pub ads: Arc<AdLedger>,
    pub snapshots: Arc<SnapshotService>,
    pub scenarios: Arc<ScenarioService>,
}

impl ServerState {
    /// Initialize application state with in-process stores
    ///
    /// The snapshot service is wired to the in-memory snapshot store; a
    /// deployment backed by an external persistence API plugs a different
    /// [`crate::snapshots::SnapshotStore`] implementation in here.
    pub fn initialize(config: &Config) -> Self {
        let overrides = Arc::new(OverrideStore::new());
        let snapshot_store = Arc::new(MemorySnapshotStore::new());
        let snapshots = Arc::new(SnapshotService::new(snapshot_store, overrides.clone()));

        Self {
            config: config.clone(),
            catalog: Arc::new(CatalogStore::new()),
            overrides,
            ads: Arc::new(AdLedger::new()),
            snapshots,
            scenarios: Arc::new(ScenarioService::new()),
        }
    }

    /// Delete a country with referential cleanup
    ///
    /// Removes the country id from every product's assignment list and
    /// drops the country's overrides. Products themselves and overrides
    /// for other countries are untouched.
    pub fn delete_country(&self, country_id: &str) -> AppResult<()> {
        self.catalog.remove_country(country_id)?;
        self.overrides.remove_country(country_id);
        tracing::info!(country_id, "Country deleted with referential cleanup");
        Ok(())
    }

    /// Delete a product and its analysis inputs
    pub fn delete_product(&self, product_id: &str) -> AppResult<()> {
        self.catalog.remove_product(product_id)?;
        self.overrides.remove_product(product_id);
        self.ads.remove_product(product_id);
        tracing::info!(product_id, "Product deleted with referential cleanup");
        Ok(())
    }
}
