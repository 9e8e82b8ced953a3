use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market snapshot for one market identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    /// Market identifier, e.g. `ethereum`
    pub id: String,
    /// Current unit price in the quote currency
    pub current_price: Decimal,
    /// Hourly prices over the last 7 days, oldest first
    pub sparkline_in_7d: Vec<f64>,
    pub price_change_percentage_7d_in_currency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketDataPoint {
    pub fn new(id: impl Into<String>, current_price: Decimal) -> Self {
        Self {
            id: id.into(),
            current_price,
            sparkline_in_7d: Vec::new(),
            price_change_percentage_7d_in_currency: 0.0,
            last_updated: None,
        }
    }

    pub fn with_sparkline(mut self, prices: Vec<f64>) -> Self {
        self.sparkline_in_7d = prices;
        self
    }

    pub fn with_price_change_7d(mut self, percentage: f64) -> Self {
        self.price_change_percentage_7d_in_currency = percentage;
        self
    }
}
