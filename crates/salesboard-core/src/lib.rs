//! # salesboard-core: Pure Sales Statistics for Salesboard
//!
//! This crate computes the per-seller report: revenue, profit, bonus and top
//! products, from sellers, a product catalog and purchase records. It is pure
//! business logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Salesboard Data Flow                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Caller (dashboard backend, sample-report binary)        │   │
//! │  │         owns loading sellers / products / purchase records      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ SalesData / serde_json::Value          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ salesboard-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │─►│ analyzer  │─►│  revenue  │  │   bonus   │  │   │
//! │  │   │  shape,   │  │ index,    │  │ line rev, │  │ tier      │  │   │
//! │  │   │  unique   │  │ aggregate,│  │ cost,     │  │ schedule  │  │   │
//! │  │   │  keys     │  │ rank      │  │ profit    │  │           │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘  │   │
//! │  │                        │ money::round_to_cents                  │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └────────────────────────┼────────────────────────────────────────┘   │
//! │                           ▼                                             │
//! │                    Vec<ReportRow>  (profit descending)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input records, SellerStat, ReportRow
//! - [`money`] - 2-decimal rounding of report values
//! - [`revenue`] - Discounted line revenue, cost, profit
//! - [`bonus`] - Rank-based bonus tiers
//! - [`config`] - Analyzer options
//! - [`validation`] - Input and options checks
//! - [`analyzer`] - The report pipeline
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, input is never mutated
//! 2. **No I/O**: callers load data; this crate only computes
//! 3. **Round Once**: money is accumulated raw and rounded when shaping rows
//! 4. **Explicit Errors**: every failure is a typed error returned to the caller
//!
//! ## Example Usage
//!
//! ```rust
//! use salesboard_core::{analyze_sales_value, calculate_revenue};
//! use serde_json::json;
//!
//! // 100 × 2 with a 10% discount
//! assert_eq!(calculate_revenue(100.0, 2, 10.0), 180.0);
//!
//! let data = json!({
//!     "sellers": [{"id": "seller_1", "first_name": "Anna", "last_name": "Smirnova"}],
//!     "products": [{"sku": "SKU_001", "purchase_price": 60.0}],
//!     "purchase_records": [{
//!         "seller_id": "seller_1",
//!         "total_amount": 180.0,
//!         "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10}]
//!     }]
//! });
//! let rows = analyze_sales_value(&data, &json!({})).unwrap();
//!
//! assert_eq!(rows[0].name, "Anna Smirnova");
//! assert_eq!(rows[0].revenue, 180.0);
//! assert_eq!(rows[0].profit, 60.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analyzer;
pub mod bonus;
pub mod config;
pub mod error;
pub mod money;
pub mod revenue;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use salesboard_core::analyze_sales_data` instead of
// `use salesboard_core::analyzer::analyze_sales_data`

pub use analyzer::{analyze_sales_data, analyze_sales_value};
pub use bonus::{calculate_bonus_by_profit, BonusTier};
pub use config::AnalyzeOptions;
pub use error::{AnalysisError, AnalysisResult, ValidationError};
pub use revenue::{
    calculate_item_cost, calculate_item_profit, calculate_revenue, calculate_simple_revenue,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries kept in `ReportRow::top_products` by default.
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Upper bound for `AnalyzeOptions::top_products_limit`.
///
/// ## Business Reason
/// Keeps a misconfigured dashboard from turning every row into a full
/// catalog dump.
pub const MAX_TOP_PRODUCTS: usize = 1000;
