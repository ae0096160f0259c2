//! Snapshot persistence port and its in-memory implementation

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use shared::models::AnalysisSnapshot;

use crate::utils::AppResult;

/// Persistence port for saved snapshots
///
/// Implementations must make `insert` a full replace: after an insert with
/// an existing id, readers see only the new snapshot, never a mix or a gap.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Insert or fully replace a snapshot by id
    async fn insert(&self, snapshot: AnalysisSnapshot) -> AppResult<()>;

    async fn get(&self, id: &str) -> AppResult<Option<AnalysisSnapshot>>;

    /// All snapshots in insertion order
    async fn list(&self) -> AppResult<Vec<AnalysisSnapshot>>;

    /// Remove by id; removing an absent id is not an error
    async fn remove(&self, id: &str) -> AppResult<()>;
}

/// In-process snapshot store
///
/// Insertion order is tracked separately so `list` is stable across map
/// rehashes; a replace keeps the snapshot's original position.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: DashMap<String, AnalysisSnapshot>,
    order: RwLock<Vec<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn insert(&self, snapshot: AnalysisSnapshot) -> AppResult<()> {
        let id = snapshot.id.clone();
        let replaced = self.snapshots.insert(id.clone(), snapshot).is_some();
        if !replaced {
            self.order.write().push(id);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> AppResult<Option<AnalysisSnapshot>> {
        Ok(self.snapshots.get(id).map(|s| s.clone()))
    }

    async fn list(&self) -> AppResult<Vec<AnalysisSnapshot>> {
        let order = self.order.read();
        Ok(order
            .iter()
            .filter_map(|id| self.snapshots.get(id).map(|s| s.clone()))
            .collect())
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        if self.snapshots.remove(id).is_some() {
            self.order.write().retain(|existing| existing != id);
        }
        Ok(())
    }
}
