//! Analysis row building
//!
//! Assembles the per-product rows and totals for one country's analysis
//! table, pulling inputs from the catalog, the override store, and the
//! daily ad ledger. Rows come out in the flat, export-ready shape that is
//! the engine's sole contract with export sinks.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{AnalysisOverride, AnalysisRow, AnalysisTotals, Country, Product};

use crate::stores::{AdLedger, CatalogStore, OverrideStore};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::aggregate::aggregate;
use super::metrics::{derive, ratio};
use super::resolver::resolve;

/// A fully computed analysis table for one country
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTable {
    pub country_id: String,
    pub country_name: String,
    pub currency: String,
    pub rows: Vec<AnalysisRow>,
    pub totals: AnalysisTotals,
}

/// Round a display-money value to 2 decimal places, midpoint away from zero
///
/// Display shaping only; engine math stays unrounded. Non-finite values
/// pass through unchanged.
pub fn round_display(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Build one analysis row: resolve inputs, derive metrics, flatten
pub fn build_row(
    product: &Product,
    country: &Country,
    ov: &AnalysisOverride,
    daily_ad_total: Option<f64>,
) -> AnalysisRow {
    let resolved = resolve(product, country, ov, daily_ad_total);
    let metrics = derive(&resolved);

    AnalysisRow {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        product_sku: product.sku.clone(),
        total_orders: resolved.total_orders,
        orders_confirmed: resolved.orders_confirmed,
        delivered_orders: resolved.delivered_orders,
        quantity_delivery: resolved.quantity_delivery,
        revenue: resolved.revenue,
        ads: resolved.ads,
        service_fees: resolved.service_fees,
        product_fees: resolved.product_fees,
        confirmation_rate: metrics.confirmation_rate,
        delivery_rate: metrics.delivery_rate,
        delivery_rate_per_lead: metrics.delivery_rate_per_lead,
        profit: metrics.profit,
        margin: metrics.margin,
        cpa: ratio(resolved.ads, resolved.total_orders),
        cpad: ratio(resolved.ads, resolved.delivered_orders),
        cpd: ratio(
            resolved.ads + resolved.service_fees + resolved.product_fees,
            resolved.delivered_orders,
        ),
    }
}

/// Build the full analysis table for one country
///
/// When `range` is set, each product's ad spend is summed from the daily
/// ledger over the (inclusive) range and passed to the resolver as the
/// daily ad total; with no range the resolver sees "unavailable" and falls
/// through to the override.
pub fn build_table(
    catalog: &CatalogStore,
    overrides: &OverrideStore,
    ads: &AdLedger,
    country_id: &str,
    range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<AnalysisTable> {
    let country = catalog
        .get_country(country_id)
        .ok_or_else(|| AppError::new(ErrorCode::CountryNotFound).with_detail("id", country_id))?;

    let products = catalog.products_for_country(country_id);

    let rows: Vec<AnalysisRow> = products
        .iter()
        .map(|product| {
            let ov = overrides.get(country_id, &product.id);
            let daily_ad_total = range.map(|(start, end)| ads.total_for(&product.id, start, end));
            build_row(product, &country, &ov, daily_ad_total)
        })
        .collect();

    let totals = aggregate(&rows);

    Ok(AnalysisTable {
        country_id: country.id,
        country_name: country.name,
        currency: country.currency,
        rows,
        totals,
    })
}
