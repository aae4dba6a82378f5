//! # Analyzer Configuration
//!
//! The `options` argument of the analyzer.
//!
//! ## Options Object
//! ```json
//! {
//!   "top_products_limit": 10
//! }
//! ```
//!
//! Every key is optional and unknown keys are ignored, so `{}` is the
//! canonical "no options" value and callers can pass options meant for newer
//! versions without breaking. A recognized key with an unusable value (wrong
//! type, zero, above [`MAX_TOP_PRODUCTS`]) falls back to its default. The only
//! hard requirement is that options is an object.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{AnalysisError, AnalysisResult};
use crate::{DEFAULT_TOP_PRODUCTS, MAX_TOP_PRODUCTS};

/// Options accepted by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// How many products to keep in each row's `top_products`.
    #[serde(deserialize_with = "lenient_limit")]
    pub top_products_limit: usize,
}

/// Reads `top_products_limit`, falling back to the default for anything
/// that is not an integer in `1..=MAX_TOP_PRODUCTS`.
fn lenient_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .and_then(checked_limit)
        .unwrap_or(DEFAULT_TOP_PRODUCTS))
}

fn checked_limit(limit: usize) -> Option<usize> {
    (1..=MAX_TOP_PRODUCTS).contains(&limit).then_some(limit)
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
        }
    }
}

impl AnalyzeOptions {
    /// Parses an options object.
    ///
    /// ## Errors
    /// - [`AnalysisError::InvalidOptions`] if `value` is not a JSON object
    ///   (`null`, a number, an array, ...)
    ///
    /// ## Example
    /// ```rust
    /// use salesboard_core::config::AnalyzeOptions;
    /// use serde_json::json;
    ///
    /// let opts = AnalyzeOptions::from_value(&json!({})).unwrap();
    /// assert_eq!(opts, AnalyzeOptions::default());
    ///
    /// let opts = AnalyzeOptions::from_value(&json!({"top_products_limit": 0})).unwrap();
    /// assert_eq!(opts.top_products(), 10);
    ///
    /// assert!(AnalyzeOptions::from_value(&json!(null)).is_err());
    /// ```
    pub fn from_value(value: &Value) -> AnalysisResult<Self> {
        if !value.is_object() {
            return Err(AnalysisError::InvalidOptions);
        }

        AnalyzeOptions::deserialize(value)
            .map_err(|e| AnalysisError::invalid_input(format!("options: {e}")))
    }

    /// Sets the top products limit.
    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// The limit the analyzer applies.
    ///
    /// A limit set out of range through the builder or the public field
    /// reads as [`DEFAULT_TOP_PRODUCTS`], same as from JSON.
    pub fn top_products(&self) -> usize {
        checked_limit(self.top_products_limit).unwrap_or(DEFAULT_TOP_PRODUCTS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let opts = AnalyzeOptions::default();
        assert_eq!(opts.top_products_limit, 10);
    }

    #[test]
    fn test_empty_object_is_default() {
        let opts = AnalyzeOptions::from_value(&json!({})).unwrap();
        assert_eq!(opts, AnalyzeOptions::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let opts = AnalyzeOptions::from_value(&json!({
            "calculateRevenue": "custom",
            "currency": "RUB"
        }))
        .unwrap();
        assert_eq!(opts, AnalyzeOptions::default());
    }

    #[test]
    fn test_recognized_key() {
        let opts = AnalyzeOptions::from_value(&json!({"top_products_limit": 3})).unwrap();
        assert_eq!(opts.top_products_limit, 3);
    }

    #[test]
    fn test_non_objects_are_rejected() {
        for value in [json!(null), json!(42), json!("opts"), json!([]), json!(true)] {
            let err = AnalyzeOptions::from_value(&value).unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidOptions), "{value}");
        }
    }

    #[test]
    fn test_unusable_limit_falls_back_to_default() {
        for limit in [
            json!(0),
            json!(-3),
            json!(1001),
            json!(2.5),
            json!("ten"),
            json!(null),
            json!([5]),
            json!({"n": 5}),
        ] {
            let options = json!({ "top_products_limit": limit.clone() });
            let opts = AnalyzeOptions::from_value(&options).unwrap();
            assert_eq!(opts.top_products_limit, DEFAULT_TOP_PRODUCTS, "{limit}");
        }

        let opts = AnalyzeOptions::from_value(&json!({"top_products_limit": 1000})).unwrap();
        assert_eq!(opts.top_products_limit, 1000);
    }

    #[test]
    fn test_top_products_clamps_builder_values() {
        let opts = AnalyzeOptions::default();
        assert_eq!(opts.clone().with_top_products_limit(1).top_products(), 1);
        assert_eq!(opts.clone().with_top_products_limit(0).top_products(), 10);
        assert_eq!(opts.with_top_products_limit(5000).top_products(), 10);
    }

    #[test]
    fn test_builder() {
        let opts = AnalyzeOptions::default().with_top_products_limit(5);
        assert_eq!(opts.top_products_limit, 5);
    }
}
