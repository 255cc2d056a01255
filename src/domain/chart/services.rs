use crate::domain::market_data::{Price, PricePoint};

/// Headline numbers shown above the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub average: Price,
    pub max: Price,
    /// Sample standard deviation of daily log returns, in percent
    pub volatility_pct: Option<f64>,
    pub observations: usize,
}

impl PriceSummary {
    /// `None` for an empty series
    pub fn from_prices(prices: &[PricePoint]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let values: Vec<f64> = prices.iter().map(|p| p.price.value()).collect();
        let average = values.iter().sum::<f64>() / values.len() as f64;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            average: Price::new(average),
            max: Price::new(max),
            volatility_pct: log_return_std(&values).map(|std| std * 100.0),
            observations: values.len(),
        })
    }
}

/// Consecutive log returns in sequence order; pairs with a non-positive
/// price are skipped
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

fn log_return_std(values: &[f64]) -> Option<f64> {
    let returns = log_returns(values);
    if returns.len() < 2 {
        return None;
    }
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}
