//! Override Store
//!
//! Two-level mapping keyed by (country, product) holding manually entered
//! metric values. A field that was never set is distinct from a field set
//! to zero: unset falls through the resolver's precedence chain.

use dashmap::DashMap;
use shared::models::{AnalysisOverride, OverridePatch};

/// Keyed store of manual metric overrides
#[derive(Debug, Default)]
pub struct OverrideStore {
    entries: DashMap<(String, String), AnalysisOverride>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get the override for a (country, product) pair
    ///
    /// Returns an empty override when nothing was ever entered, so callers
    /// never need to distinguish "no entry" from "entry with no fields".
    pub fn get(&self, country_id: &str, product_id: &str) -> AnalysisOverride {
        self.entries
            .get(&(country_id.to_string(), product_id.to_string()))
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    /// Merge a partial update into the stored override (last write wins)
    ///
    /// Only fields present in the patch are written; everything else keeps
    /// its prior value. Returns the override after the merge.
    pub fn patch(
        &self,
        country_id: &str,
        product_id: &str,
        patch: &OverridePatch,
    ) -> AnalysisOverride {
        let mut entry = self
            .entries
            .entry((country_id.to_string(), product_id.to_string()))
            .or_default();
        entry.merge(patch);
        entry.clone()
    }

    /// Drop every override belonging to a country
    pub fn remove_country(&self, country_id: &str) {
        self.entries.retain(|(c, _), _| c != country_id);
    }

    /// Drop every override belonging to a product (across all countries)
    pub fn remove_product(&self, product_id: &str) {
        self.entries.retain(|(_, p), _| p != product_id);
    }

    /// Number of stored override entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_returns_empty() {
        let store = OverrideStore::new();
        assert!(store.get("c1", "p1").is_empty());
    }

    #[test]
    fn test_patch_merges_incrementally() {
        let store = OverrideStore::new();
        store.patch(
            "c1",
            "p1",
            &OverridePatch {
                revenue: Some(590.0),
                ..Default::default()
            },
        );
        store.patch(
            "c1",
            "p1",
            &OverridePatch {
                ads: Some(50.0),
                ..Default::default()
            },
        );

        let ov = store.get("c1", "p1");
        assert_eq!(ov.revenue, Some(590.0));
        assert_eq!(ov.ads, Some(50.0));
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let store = OverrideStore::new();
        store.patch(
            "c1",
            "p1",
            &OverridePatch {
                ads: Some(50.0),
                ..Default::default()
            },
        );
        store.patch(
            "c1",
            "p1",
            &OverridePatch {
                ads: Some(75.0),
                ..Default::default()
            },
        );
        assert_eq!(store.get("c1", "p1").ads, Some(75.0));
    }

    #[test]
    fn test_remove_country_keeps_other_countries() {
        let store = OverrideStore::new();
        let patch = OverridePatch {
            revenue: Some(100.0),
            ..Default::default()
        };
        store.patch("c1", "p1", &patch);
        store.patch("c2", "p1", &patch);

        store.remove_country("c1");
        assert!(store.get("c1", "p1").is_empty());
        assert_eq!(store.get("c2", "p1").revenue, Some(100.0));
    }

    #[test]
    fn test_remove_product_across_countries() {
        let store = OverrideStore::new();
        let patch = OverridePatch {
            ads: Some(10.0),
            ..Default::default()
        };
        store.patch("c1", "p1", &patch);
        store.patch("c2", "p1", &patch);
        store.patch("c1", "p2", &patch);

        store.remove_product("p1");
        assert!(store.get("c1", "p1").is_empty());
        assert!(store.get("c2", "p1").is_empty());
        assert_eq!(store.get("c1", "p2").ads, Some(10.0));
    }
}
