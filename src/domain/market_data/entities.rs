use super::value_objects::Price;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of the price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: Price) -> Self {
        Self { date, price }
    }
}

/// A labelled date to be marked on the chart.
///
/// `name` doubles as the marker's identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketEvent {
    pub name: String,
    pub date: NaiveDate,
}

impl MarketEvent {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date }
    }
}
