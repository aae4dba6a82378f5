//! # Revenue Module
//!
//! Line-level revenue, cost and profit.
//!
//! ## Line Profit
//! ```text
//! PurchaseItem { sale_price: 100, quantity: 2, discount: 10 }
//! Product      { purchase_price: 60 }
//!      │
//!      ├── revenue = 100 × 2 × (1 - 10/100) = 180
//!      ├── cost    =  60 × 2                = 120
//!      │
//!      ▼
//! profit = 60  ──► SellerStat.profit
//! ```

use crate::types::{Product, PurchaseItem};

/// Discounted revenue of one line: `sale_price × quantity × (1 − discount/100)`.
///
/// Discounts are not clamped. A discount of 100 yields zero, a discount
/// above 100 yields negative revenue, and a negative discount inflates it.
/// NaN inputs propagate.
///
/// ## Example
/// ```rust
/// use salesboard_core::revenue::calculate_revenue;
///
/// assert_eq!(calculate_revenue(100.0, 2, 10.0), 180.0);
/// assert_eq!(calculate_revenue(100.0, 2, 100.0), 0.0);
/// ```
pub fn calculate_revenue(sale_price: f64, quantity: u32, discount_percent: f64) -> f64 {
    let discount = 1.0 - discount_percent / 100.0;
    sale_price * f64::from(quantity) * discount
}

/// [`calculate_revenue`] read straight from a line item.
pub fn calculate_simple_revenue(item: &PurchaseItem) -> f64 {
    calculate_revenue(item.sale_price, item.quantity, item.discount)
}

/// Cost of one line: `purchase_price × quantity`.
pub fn calculate_item_cost(item: &PurchaseItem, product: &Product) -> f64 {
    product.purchase_price * f64::from(item.quantity)
}

/// Profit of one line: discounted revenue minus cost.
///
/// The item carries its own sale price; the product only supplies the
/// purchase price.
pub fn calculate_item_profit(item: &PurchaseItem, product: &Product) -> f64 {
    calculate_simple_revenue(item) - calculate_item_cost(item, product)
}

// =============================================================================
// Unit Tests
// =============================================================================
