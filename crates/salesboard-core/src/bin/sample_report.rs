//! # Sample Report
//!
//! Builds a deterministic in-memory sales dataset, runs the analyzer and
//! prints the report rows as JSON.
//!
//! ## Usage
//! ```bash
//! # 200 purchase records (default)
//! cargo run -p salesboard-core --bin sample-report
//!
//! # More records, shorter top lists
//! cargo run -p salesboard-core --bin sample-report -- --records 2000 --top 5
//!
//! # See the analyzer's debug events
//! RUST_LOG=salesboard_core=debug cargo run -p salesboard-core --bin sample-report
//! ```
//!
//! Logs go to stderr, the report goes to stdout, so the output can be piped
//! straight into `jq`.

use std::env;

use salesboard_core::{
    analyze_sales_data, AnalyzeOptions, Product, PurchaseItem, PurchaseRecord, SalesData, Seller,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Seller roster for the sample dataset.
const SELLERS: &[(&str, &str)] = &[
    ("Alexey", "Petrov"),
    ("Maria", "Ivanova"),
    ("Oleg", "Sidorov"),
    ("Elena", "Kuznetsova"),
    ("Dmitry", "Smirnov"),
];

/// Catalog: (sku prefix, purchase price).
const CATALOG: &[(&str, f64)] = &[
    ("PEN", 12.5),
    ("NOTEBOOK", 48.0),
    ("STAPLER", 135.9),
    ("MARKER", 22.4),
    ("FOLDER", 31.0),
    ("PAPER", 240.0),
    ("TAPE", 18.75),
    ("CLIPS", 9.99),
    ("RULER", 27.3),
    ("GLUE", 15.6),
    ("ERASER", 6.2),
    ("CALCULATOR", 410.0),
];

/// Discounts applied in rotation, in percent.
const DISCOUNTS: &[f64] = &[0.0, 0.0, 5.0, 10.0, 0.0, 15.0, 3.5];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut records: usize = 200;
    let mut options = AnalyzeOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--records" => {
                if i + 1 < args.len() {
                    records = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "-t" | "--top" => {
                if i + 1 < args.len() {
                    options = options.with_top_products_limit(args[i + 1].parse()?);
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Salesboard Sample Report");
                println!();
                println!("Usage: sample-report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -r, --records <N>  Number of purchase records (default: 200)");
                println!("  -t, --top <N>      Top products per seller (default: 10)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let data = generate_sales_data(records);
    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        records = data.purchase_records.len(),
        "Generated sample dataset"
    );

    let rows = analyze_sales_data(&data, &options)?;
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: `info,salesboard_core=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,salesboard_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Generates sellers, a catalog and `records` purchase records.
///
/// Everything is derived from the record index, so two runs with the same
/// arguments produce the same report.
fn generate_sales_data(records: usize) -> SalesData {
    let sellers = SELLERS
        .iter()
        .enumerate()
        .map(|(idx, (first, last))| Seller {
            id: format!("seller_{}", idx + 1),
            first_name: first.to_string(),
            last_name: last.to_string(),
        })
        .collect();

    let products = CATALOG
        .iter()
        .enumerate()
        .map(|(idx, (prefix, purchase_price))| Product {
            sku: format!("SKU_{:03}_{}", idx + 1, prefix),
            purchase_price: *purchase_price,
        })
        .collect();

    let purchase_records = (0..records).map(generate_record).collect();

    SalesData {
        sellers,
        products,
        purchase_records,
    }
}

/// Generates one receipt with 1-4 lines.
fn generate_record(seed: usize) -> PurchaseRecord {
    // Skewed so sellers end up with clearly different profits
    let seller_idx = (seed * seed + seed / 3) % SELLERS.len();
    let line_count = 1 + (seed * 7) % 4;

    let items: Vec<PurchaseItem> = (0..line_count)
        .map(|line| {
            let product_idx = (seed * 5 + line * 3 + seller_idx) % CATALOG.len();
            let (prefix, purchase_price) = CATALOG[product_idx];

            // Markup 20-59% over purchase price
            let markup = 1.2 + ((seed + line) * 13 % 40) as f64 / 100.0;

            PurchaseItem {
                sku: format!("SKU_{:03}_{}", product_idx + 1, prefix),
                quantity: 1 + ((seed + line * 11) % 6) as u32,
                sale_price: (purchase_price * markup * 100.0).round() / 100.0,
                discount: DISCOUNTS[(seed + line) % DISCOUNTS.len()],
            }
        })
        .collect();

    let total_amount = items
        .iter()
        .map(salesboard_core::calculate_simple_revenue)
        .sum();

    PurchaseRecord {
        seller_id: format!("seller_{}", seller_idx + 1),
        total_amount,
        items,
    }
}
