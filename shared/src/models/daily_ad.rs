//! Daily Ad Spend Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of ad spend for one product
///
/// The (product, date) pair is the ledger key: recording the same pair
/// again replaces the earlier amount (last write wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAdEntry {
    pub product_id: String,
    /// Calendar day, no time component
    pub date: NaiveDate,
    pub amount: f64,
}
