use super::entities::{MarketEvent, PricePoint};
use crate::domain::errors::AppError;

/// Source of the two datasets the dashboard plots.
///
/// Each call is a one-shot fetch that returns the full sequence.
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    async fn fetch_prices(&self) -> Result<Vec<PricePoint>, AppError>;

    async fn fetch_events(&self) -> Result<Vec<MarketEvent>, AppError>;
}
