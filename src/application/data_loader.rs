use super::config::DashboardConfig;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    market_data::{MarketDataRepository, MarketEvent, PricePoint},
};
use crate::infrastructure::http::{ApiClient, HttpMarketDataRepository};
use crate::{log_error, log_info};
use leptos::{spawn_local, RwSignal, SignalSet};
use std::rc::Rc;

/// Use Case: fetch both datasets once and publish them to view state.
///
/// Failures never reach the view. They are logged and the affected
/// sequence keeps whatever it held before (initially empty).
pub struct DataLoader<R: MarketDataRepository> {
    repository: R,
}

impl DataLoader<HttpMarketDataRepository> {
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut repository = HttpMarketDataRepository::new(ApiClient::new(&config.api_base_url));
        if let Some(window) = config.price_window {
            repository = repository.with_price_window(window.start, window.end);
        }
        Self::new(repository)
    }
}

impl<R: MarketDataRepository> DataLoader<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn load_prices(&self) -> Result<Vec<PricePoint>, AppError> {
        self.repository.fetch_prices().await
    }

    pub async fn load_events(&self) -> Result<Vec<MarketEvent>, AppError> {
        self.repository.fetch_events().await
    }

    /// Both fetches in flight at once; neither waits on the other
    pub async fn load_all(
        &self,
    ) -> (Result<Vec<PricePoint>, AppError>, Result<Vec<MarketEvent>, AppError>) {
        futures::join!(self.load_prices(), self.load_events())
    }
}

impl<R: MarketDataRepository + 'static> DataLoader<R> {
    /// Run both fetches as independent local tasks. Each one replaces its
    /// signal on success and leaves it untouched on failure.
    pub fn spawn(self, prices: RwSignal<Vec<PricePoint>>, events: RwSignal<Vec<MarketEvent>>) {
        let loader = Rc::new(self);

        let for_prices = Rc::clone(&loader);
        spawn_local(async move {
            let result = for_prices.load_prices().await;
            replace_on_success(result, "prices", |loaded| prices.set(loaded));
        });

        spawn_local(async move {
            let result = loader.load_events().await;
            replace_on_success(result, "events", |loaded| events.set(loaded));
        });
    }
}

/// Hand a successful result to `publish` in full; log and drop a failure.
/// Returns whether anything was published.
pub fn replace_on_success<T>(
    result: Result<Vec<T>, AppError>,
    dataset: &str,
    publish: impl FnOnce(Vec<T>),
) -> bool {
    match result {
        Ok(loaded) => {
            log_info!(
                LogComponent::Application("DataLoader"),
                "✅ Loaded {} {}",
                loaded.len(),
                dataset
            );
            publish(loaded);
            true
        }
        Err(err) => {
            log_error!(
                LogComponent::Application("DataLoader"),
                "❌ Error fetching {}: {}",
                dataset,
                err
            );
            false
        }
    }
}
