//! # Validation Module
//!
//! Checks that run before any aggregation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shape (analyze_sales_value only)                              │
//! │  ├── data is an object, sellers is a non-empty array                    │
//! │  └── options is an object                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Deserialization (serde)                                       │
//! │  └── field types, unsigned quantities                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  ├── sellers non-empty                                                  │
//! │  └── seller ids and product SKUs unique                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Aggregation                                                   │
//! │  └── every seller_id / sku resolves (UnknownSeller / UnknownProduct)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult, ValidationError};
use crate::types::{Product, SalesData, Seller};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Shape Validators (untyped input)
// =============================================================================

/// Checks the raw `data` value before deserialization.
///
/// ## Rules
/// - Must be a JSON object
/// - `sellers` must be an array with at least one element
///
/// ## Example
/// ```rust
/// use salesboard_core::validation::validate_data_shape;
/// use serde_json::json;
///
/// assert!(validate_data_shape(&json!({"sellers": [{}]})).is_ok());
/// assert!(validate_data_shape(&json!({"sellers": []})).is_err());
/// assert!(validate_data_shape(&json!(null)).is_err());
/// ```
pub fn validate_data_shape(data: &Value) -> AnalysisResult<()> {
    let object = data
        .as_object()
        .ok_or_else(|| AnalysisError::invalid_input("data must be an object"))?;

    match object.get("sellers").and_then(Value::as_array) {
        Some(sellers) if !sellers.is_empty() => Ok(()),
        _ => Err(AnalysisError::invalid_input(
            "sellers must be a non-empty array",
        )),
    }
}

// =============================================================================
// Typed Validators
// =============================================================================

/// Validates the seller list.
///
/// ## Rules
/// - At least one seller
/// - Seller ids are unique
pub fn validate_sellers(sellers: &[Seller]) -> ValidationResult<()> {
    if sellers.is_empty() {
        return Err(ValidationError::Required {
            field: "sellers".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(sellers.len());
    for seller in sellers {
        if !seen.insert(seller.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "seller id".to_string(),
                value: seller.id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates the product catalog.
///
/// ## Rules
/// - SKUs are unique (the catalog is keyed by SKU)
/// - An empty catalog is allowed; it only fails later if an item needs it
pub fn validate_products(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.sku.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "product sku".to_string(),
                value: product.sku.clone(),
            });
        }
    }

    Ok(())
}

/// Runs every typed check on the analyzer input.
pub fn validate_sales_data(data: &SalesData) -> ValidationResult<()> {
    validate_sellers(&data.sellers)?;
    validate_products(&data.products)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Ivanov".to_string(),
        }
    }

    fn product(sku: &str) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price: 1.0,
        }
    }

    #[test]
    fn test_validate_data_shape() {
        assert!(validate_data_shape(&json!({"sellers": [{"id": "seller_1"}]})).is_ok());

        for bad in [
            json!(null),
            json!(42),
            json!([]),
            json!({}),
            json!({"sellers": null}),
            json!({"sellers": {}}),
            json!({"sellers": []}),
        ] {
            let err = validate_data_shape(&bad).unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidInput { .. }), "{bad}");
        }
    }

    #[test]
    fn test_validate_sellers() {
        assert!(validate_sellers(&[seller("seller_1"), seller("seller_2")]).is_ok());
        assert!(matches!(
            validate_sellers(&[]),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_sellers(&[seller("seller_1"), seller("seller_1")]),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_products() {
        assert!(validate_products(&[]).is_ok());
        assert!(validate_products(&[product("SKU_001"), product("SKU_002")]).is_ok());

        let err = validate_products(&[product("SKU_001"), product("SKU_001")]).unwrap_err();
        assert_eq!(err.to_string(), "product sku 'SKU_001' already exists");
    }

    #[test]
    fn test_validate_sales_data() {
        let data = SalesData {
            sellers: vec![seller("seller_1")],
            products: vec![product("SKU_001")],
            purchase_records: vec![],
        };
        assert!(validate_sales_data(&data).is_ok());

        let empty = SalesData::default();
        assert!(validate_sales_data(&empty).is_err());
    }
}
