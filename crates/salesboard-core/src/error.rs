//! # Error Types
//!
//! Domain-specific error types for salesboard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  AnalysisError        - Everything analyze_* can return                 │
//! │  ├── InvalidInput     - data / sellers missing or malformed             │
//! │  ├── InvalidOptions   - options is not an object                        │
//! │  ├── UnknownSeller    - record points at a seller that doesn't exist    │
//! │  ├── UnknownProduct   - item points at a sku that doesn't exist         │
//! │  └── Validation       - wraps ValidationError                           │
//! │                                                                         │
//! │  ValidationError      - Field-level rule violations                     │
//! │                                                                         │
//! │  Flow: ValidationError → AnalysisError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (seller id, SKU, record index)
//! 3. Errors are enum variants, never String
//! 4. Every error is returned to the caller; nothing is swallowed

use thiserror::Error;

// =============================================================================
// Analysis Error
// =============================================================================

/// Errors produced while analyzing sales data.
///
/// The analyzer propagates every one of these to the caller. An `Ok` report
/// therefore always describes real input, never a masked failure.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input data is missing, not an object, or has no sellers.
    ///
    /// ## When This Occurs
    /// - `data` is `null` or not a JSON object
    /// - `data.sellers` is absent, not an array, or empty
    /// - A record has the wrong shape (e.g. `quantity: "two"`)
    #[error("Invalid input data: {reason}")]
    InvalidInput { reason: String },

    /// Options is not an object.
    #[error("options must be an object")]
    InvalidOptions,

    /// A purchase record references a seller id missing from `sellers`.
    #[error("Seller not found: {seller_id} (purchase record #{record_index})")]
    UnknownSeller {
        seller_id: String,
        record_index: usize,
    },

    /// A line item references a SKU missing from `products`.
    #[error("Product not found: {sku} (purchase record #{record_index})")]
    UnknownProduct { sku: String, record_index: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl AnalysisError {
    /// Shorthand for [`AnalysisError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`crate::validation`] checks that run before aggregation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required collection or field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Duplicate key (e.g., two sellers with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalysisError.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::UnknownProduct {
            sku: "SKU_042".to_string(),
            record_index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Product not found: SKU_042 (purchase record #3)"
        );

        let err = AnalysisError::invalid_input("sellers must be a non-empty array");
        assert_eq!(
            err.to_string(),
            "Invalid input data: sellers must be a non-empty array"
        );

        assert_eq!(
            AnalysisError::InvalidOptions.to_string(),
            "options must be an object"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sellers".to_string(),
        };
        assert_eq!(err.to_string(), "sellers is required");

        let err = ValidationError::Duplicate {
            field: "seller id".to_string(),
            value: "seller_1".to_string(),
        };
        assert_eq!(err.to_string(), "seller id 'seller_1' already exists");
    }

    #[test]
    fn test_validation_converts_to_analysis_error() {
        let validation_err = ValidationError::Required {
            field: "sellers".to_string(),
        };
        let err: AnalysisError = validation_err.into();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
