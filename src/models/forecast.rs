use serde::{Deserialize, Serialize};

/// Single demand forecast produced by the bulk forecast endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub product: i64,
    pub forecast_value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub created_forecasts: Vec<Forecast>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForecastRequest {
    pub product_id_list: Vec<String>,
}

/// The latest forecast batch. A new request replaces the whole batch; the
/// values are never merged with previous results.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ForecastBatch {
    forecasts: Vec<Forecast>,
}

impl ForecastBatch {
    pub fn new(forecasts: Vec<Forecast>) -> Self {
        Self { forecasts }
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// Forecast value for a product, or `None` when the server returned no
    /// forecast for it. Callers render `None` as an explicit "No data"
    /// marker, never as zero.
    pub fn value_for(&self, product_id: i64) -> Option<&str> {
        self.forecasts
            .iter()
            .find(|forecast| forecast.product == product_id)
            .map(|forecast| forecast.forecast_value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_for_finds_matching_product() {
        let batch = ForecastBatch::new(vec![Forecast {
            product: 3,
            forecast_value: "120.5".to_string(),
        }]);
        assert_eq!(batch.value_for(3), Some("120.5"));
    }

    #[test]
    fn missing_product_yields_none_not_zero() {
        // Forecast requested for products 3 and 5, server answered for 3 only.
        let batch = ForecastBatch::new(vec![Forecast {
            product: 3,
            forecast_value: "120.5".to_string(),
        }]);
        assert_eq!(batch.value_for(5), None);
    }

    #[test]
    fn empty_batch_has_no_values() {
        let batch = ForecastBatch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.value_for(1), None);
    }
}
