//! Daily Ad Spend Ledger
//!
//! Per-product daily ad amounts keyed by (product, date). One amount per
//! key, last write wins; re-entering a day replaces the prior amount
//! rather than adding to it.

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::models::DailyAdEntry;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Keyed store of daily ad spend entries
#[derive(Debug, Default)]
pub struct AdLedger {
    entries: DashMap<(String, NaiveDate), f64>,
}

impl AdLedger {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Record (or replace) the ad amount for a product on a date
    pub fn record(&self, entry: DailyAdEntry) -> AppResult<()> {
        if entry.amount < 0.0 {
            return Err(AppError::new(ErrorCode::NegativeAdAmount)
                .with_detail("amount", entry.amount)
                .with_detail("date", entry.date.to_string()));
        }
        self.entries
            .insert((entry.product_id, entry.date), entry.amount);
        Ok(())
    }

    /// Sum of a product's ad amounts over an inclusive date range
    ///
    /// A range with no entries sums to 0.0, which the resolver treats the
    /// same as unavailable data and falls through to the override.
    pub fn total_for(&self, product_id: &str, start: NaiveDate, end: NaiveDate) -> f64 {
        self.entries
            .iter()
            .filter(|e| {
                let (pid, date) = e.key();
                pid == product_id && *date >= start && *date <= end
            })
            .map(|e| *e.value())
            .sum()
    }

    /// A product's entries within an inclusive range, ordered by date
    pub fn entries_for(
        &self,
        product_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DailyAdEntry> {
        let mut found: Vec<DailyAdEntry> = self
            .entries
            .iter()
            .filter(|e| {
                let (pid, date) = e.key();
                pid == product_id && *date >= start && *date <= end
            })
            .map(|e| {
                let (pid, date) = e.key();
                DailyAdEntry {
                    product_id: pid.clone(),
                    date: *date,
                    amount: *e.value(),
                }
            })
            .collect();
        found.sort_by_key(|e| e.date);
        found
    }

    /// Drop every entry belonging to a product
    pub fn remove_product(&self, product_id: &str) {
        self.entries.retain(|(pid, _), _| pid != product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(product_id: &str, day: &str, amount: f64) -> DailyAdEntry {
        DailyAdEntry {
            product_id: product_id.to_string(),
            date: date(day),
            amount,
        }
    }

    #[test]
    fn test_range_sum_is_inclusive() {
        let ledger = AdLedger::new();
        ledger.record(entry("p1", "2026-03-01", 10.0)).unwrap();
        ledger.record(entry("p1", "2026-03-02", 20.0)).unwrap();
        ledger.record(entry("p1", "2026-03-03", 30.0)).unwrap();

        let total = ledger.total_for("p1", date("2026-03-01"), date("2026-03-02"));
        assert_eq!(total, 30.0);
        let full = ledger.total_for("p1", date("2026-03-01"), date("2026-03-03"));
        assert_eq!(full, 60.0);
    }

    #[test]
    fn test_last_write_wins_per_day() {
        let ledger = AdLedger::new();
        ledger.record(entry("p1", "2026-03-01", 10.0)).unwrap();
        ledger.record(entry("p1", "2026-03-01", 25.0)).unwrap();

        let total = ledger.total_for("p1", date("2026-03-01"), date("2026-03-01"));
        assert_eq!(total, 25.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let ledger = AdLedger::new();
        let err = ledger.record(entry("p1", "2026-03-01", -5.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativeAdAmount);
    }

    #[test]
    fn test_empty_range_sums_to_zero() {
        let ledger = AdLedger::new();
        ledger.record(entry("p1", "2026-03-01", 10.0)).unwrap();
        let total = ledger.total_for("p1", date("2026-04-01"), date("2026-04-30"));
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let ledger = AdLedger::new();
        ledger.record(entry("p1", "2026-03-03", 3.0)).unwrap();
        ledger.record(entry("p1", "2026-03-01", 1.0)).unwrap();
        ledger.record(entry("p1", "2026-03-02", 2.0)).unwrap();
        ledger.record(entry("p2", "2026-03-02", 99.0)).unwrap();

        let entries = ledger.entries_for("p1", date("2026-03-01"), date("2026-03-31"));
        let amounts: Vec<f64> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_remove_product_clears_entries() {
        let ledger = AdLedger::new();
        ledger.record(entry("p1", "2026-03-01", 10.0)).unwrap();
        ledger.record(entry("p2", "2026-03-01", 20.0)).unwrap();

        ledger.remove_product("p1");
        assert_eq!(ledger.total_for("p1", date("2026-03-01"), date("2026-03-01")), 0.0);
        assert_eq!(ledger.total_for("p2", date("2026-03-01"), date("2026-03-01")), 20.0);
    }
}
