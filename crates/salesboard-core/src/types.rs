//! # Domain Types
//!
//! Input records, the per-seller accumulator, and the report rows.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (read-only)                                                      │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Seller       │   │    Product      │   │   PurchaseRecord    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  sku (key)      │   │  seller_id (FK)     │   │
//! │  │  first_name     │   │  purchase_price │   │  total_amount       │   │
//! │  │  last_name      │   └─────────────────┘   │  items[] ──────┐    │   │
//! │  └─────────────────┘                         └────────────────┼────┘   │
//! │                                              ┌────────────────▼────┐   │
//! │                                              │   PurchaseItem      │   │
//! │                                              │  sku (FK), quantity │   │
//! │                                              │  sale_price,discount│   │
//! │                                              └─────────────────────┘   │
//! │                                                                         │
//! │  DERIVED                         OUTPUT                                 │
//! │  ┌─────────────────┐             ┌─────────────────┐                   │
//! │  │   SellerStat    │ ─finalize─► │   ReportRow     │                   │
//! │  │  (mutable)      │             │  (rounded)      │                   │
//! │  └─────────────────┘             └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input types ignore fields they don't use (product names, receipt dates,
//! customer ids), so full catalog exports deserialize as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round_to_cents;

// =============================================================================
// Input Records
// =============================================================================

/// A seller identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    /// Seller id, referenced by `PurchaseRecord::seller_id`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name used in the report: `"{first_name} {last_name}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry. Only the fields the analyzer needs are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - unique key of the catalog.
    pub sku: String,

    /// What the seller paid per unit (cost basis for profit).
    pub purchase_price: f64,
}

/// One line of a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseItem {
    pub sku: String,
    pub quantity: u32,
    /// Unit price before discount.
    pub sale_price: f64,
    /// Discount in percent, expected 0-100.
    pub discount: f64,
}

/// One completed transaction, attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// Receipt total as charged; summed into the seller's revenue.
    pub total_amount: f64,
    pub items: Vec<PurchaseItem>,
}

/// The complete analyzer input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Seller Stat (accumulator)
// =============================================================================

/// Running totals for one seller.
///
/// ## Lifecycle
/// ```text
/// new() ──► record_sale() / record_item() ...  ──► finalize() ──► into_row()
///  zero        mutated once per record/item         bonus +        rounded
///                                                   top products
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    /// Sum of `total_amount` over the seller's records (unrounded).
    pub revenue: f64,
    /// Sum of line revenue minus line cost (unrounded).
    pub profit: f64,
    pub sales_count: u64,
    /// Quantity sold per SKU, in first-seen order.
    products_sold: Vec<(String, u64)>,
    sku_slots: HashMap<String, usize>,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

impl SellerStat {
    /// Creates an empty accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        SellerStat {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    /// Counts one purchase record and adds its receipt total to revenue.
    pub fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Adds one line item's profit and quantity.
    pub fn record_item(&mut self, sku: &str, quantity: u32, profit: f64) {
        self.profit += profit;
        match self.sku_slots.get(sku) {
            Some(&slot) => self.products_sold[slot].1 += u64::from(quantity),
            None => {
                self.sku_slots
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold
                    .push((sku.to_string(), u64::from(quantity)));
            }
        }
    }

    #[cfg(test)]
    fn quantity_sold(&self, sku: &str) -> u64 {
        self.sku_slots
            .get(sku)
            .map(|&slot| self.products_sold[slot].1)
            .unwrap_or(0)
    }

    #[cfg(test)]
    fn products_sold(&self) -> &[(String, u64)] {
        &self.products_sold
    }

    /// Sets the bonus and derives `top_products`.
    ///
    /// Top products are sorted by quantity descending with a stable sort, so
    /// equal quantities keep first-seen SKU order, then cut to `limit`.
    pub fn finalize(&mut self, bonus: f64, limit: usize) {
        self.bonus = bonus;

        let mut top: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top.truncate(limit);

        self.top_products = top;
    }

    /// Converts the finalized accumulator into a rounded report row.
    pub fn into_row(self) -> ReportRow {
        ReportRow {
            seller_id: self.id,
            name: self.name,
            revenue: round_to_cents(self.revenue),
            profit: round_to_cents(self.profit),
            sales_count: self.sales_count,
            top_products: self.top_products,
            bonus: round_to_cents(self.bonus),
        }
    }
}

// =============================================================================
// Report Output
// =============================================================================

/// A SKU and its cumulative quantity for one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    #[ts(type = "number")]
    pub quantity: u64,
}

/// One row of the seller report, ordered by profit descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    /// Rounded to 2 decimal places.
    pub revenue: f64,
    /// Rounded to 2 decimal places.
    pub profit: f64,
    #[ts(type = "number")]
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    /// Rounded to 2 decimal places.
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
