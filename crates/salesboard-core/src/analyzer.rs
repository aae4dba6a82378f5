//! # Sales Analyzer
//!
//! Turns sellers, products and purchase records into the seller report.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        analyze_sales_data                               │
//! │                                                                         │
//! │  1. validate        sellers non-empty, ids/SKUs unique                  │
//! │        │                                                                │
//! │  2. initialize      one zeroed SellerStat per seller                    │
//! │        │                                                                │
//! │  3. index           seller id → stat slot, SKU → &Product               │
//! │        │                                                                │
//! │  4. aggregate       per record: sales_count, revenue                    │
//! │        │            per item:   profit, products_sold                   │
//! │        │                                                                │
//! │  5. rank            stable sort by profit, descending                   │
//! │        │                                                                │
//! │  6. finalize        bonus by rank, top products                         │
//! │        │                                                                │
//! │  7. shape           round money fields → Vec<ReportRow>                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! Every failure is returned to the caller. The analyzer never falls back to
//! an empty report, so `Ok(rows)` always has one row per seller.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::bonus::calculate_bonus_by_profit;
use crate::config::AnalyzeOptions;
use crate::error::{AnalysisError, AnalysisResult};
use crate::revenue::calculate_item_profit;
use crate::types::{Product, ReportRow, SalesData, SellerStat};
use crate::validation::{validate_data_shape, validate_sales_data};

// =============================================================================
// Public Entry Points
// =============================================================================

/// Builds the seller report from typed input.
///
/// Rows are ordered by profit descending; sellers with equal profit keep
/// their input order. `data` and `options` are only borrowed, so repeated
/// calls with the same input return identical rows.
///
/// ## Errors
/// - [`AnalysisError::Validation`] for an empty seller list or duplicate
///   seller ids or SKUs
/// - [`AnalysisError::UnknownSeller`] / [`AnalysisError::UnknownProduct`]
///   when a record or item points at something that doesn't exist
///
/// ## Example
/// ```rust
/// use salesboard_core::{analyze_sales_data, AnalyzeOptions, SalesData};
/// use serde_json::json;
///
/// let data: SalesData = serde_json::from_value(json!({
///     "sellers": [{"id": "seller_1", "first_name": "Anna", "last_name": "Smirnova"}],
///     "products": [{"sku": "SKU_001", "purchase_price": 60.0}],
///     "purchase_records": [{
///         "seller_id": "seller_1",
///         "total_amount": 180.0,
///         "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10}]
///     }]
/// })).unwrap();
///
/// let rows = analyze_sales_data(&data, &AnalyzeOptions::default()).unwrap();
/// assert_eq!(rows[0].profit, 60.0);
/// assert_eq!(rows[0].bonus, 9.0);
/// ```
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalyzeOptions,
) -> AnalysisResult<Vec<ReportRow>> {
    run(data, options).map_err(|e| {
        warn!(error = %e, "Sales analysis failed");
        e
    })
}

/// Builds the seller report from untyped JSON.
///
/// Accepts the same loosely typed contract a JSON caller would send:
/// `data` must be an object with a non-empty `sellers` array, `options`
/// must be an object. Everything else is delegated to
/// [`analyze_sales_data`].
///
/// ## Errors
/// - [`AnalysisError::InvalidInput`] if `data` is not an object, `sellers`
///   is not a non-empty array, or a record has the wrong shape
/// - [`AnalysisError::InvalidOptions`] if `options` is not an object
/// - anything [`analyze_sales_data`] returns
pub fn analyze_sales_value(data: &Value, options: &Value) -> AnalysisResult<Vec<ReportRow>> {
    let (data, options) = parse_value(data, options).map_err(|e| {
        warn!(error = %e, "Rejected sales analysis input");
        e
    })?;
    analyze_sales_data(&data, &options)
}

// =============================================================================
// Pipeline
// =============================================================================

fn parse_value(data: &Value, options: &Value) -> AnalysisResult<(SalesData, AnalyzeOptions)> {
    validate_data_shape(data)?;
    let options = AnalyzeOptions::from_value(options)?;
    let data = SalesData::deserialize(data)
        .map_err(|e| AnalysisError::invalid_input(e.to_string()))?;
    Ok((data, options))
}

fn run(data: &SalesData, options: &AnalyzeOptions) -> AnalysisResult<Vec<ReportRow>> {
    validate_sales_data(data)?;

    let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();

    let seller_index: HashMap<&str, usize> = data
        .sellers
        .iter()
        .enumerate()
        .map(|(slot, seller)| (seller.id.as_str(), slot))
        .collect();
    let product_index: HashMap<&str, &Product> = data
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();
    debug!(
        sellers = seller_index.len(),
        products = product_index.len(),
        records = data.purchase_records.len(),
        "Indexed sales data"
    );

    for (record_index, record) in data.purchase_records.iter().enumerate() {
        let slot = *seller_index
            .get(record.seller_id.as_str())
            .ok_or_else(|| AnalysisError::UnknownSeller {
                seller_id: record.seller_id.clone(),
                record_index,
            })?;
        let stat = &mut stats[slot];
        stat.record_sale(record.total_amount);

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                AnalysisError::UnknownProduct {
                    sku: item.sku.clone(),
                    record_index,
                }
            })?;
            stat.record_item(&item.sku, item.quantity, calculate_item_profit(item, product));
        }
    }

    rank_by_profit(&mut stats);

    let total = stats.len();
    for (rank, stat) in stats.iter_mut().enumerate() {
        let bonus = calculate_bonus_by_profit(rank, total, stat.profit);
        stat.finalize(bonus, options.top_products());
    }

    if let Some(leader) = stats.first() {
        info!(
            sellers = total,
            records = data.purchase_records.len(),
            leader = %leader.id,
            leader_profit = leader.profit,
            "Sales analysis complete"
        );
    }

    Ok(stats.into_iter().map(SellerStat::into_row).collect())
}

/// Stable sort by profit, highest first.
///
/// A NaN profit (e.g. `inf - inf` from overflowing prices) ranks below every
/// number; NaN sellers keep their input order among themselves.
fn rank_by_profit(stats: &mut [SellerStat]) {
    stats.sort_by(|a, b| compare_profit_desc(a.profit, b.profit));
}

/// Total order: numbers descending (`-0.0 == 0.0`), then NaN.
fn compare_profit_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
