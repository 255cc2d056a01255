use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    market_data::{decode_events, decode_prices, MarketDataRepository, MarketEvent, PricePoint},
};
use crate::log_debug;
use chrono::NaiveDate;
use derive_more::Display;
use gloo_net::http::Request;
use strum::{AsRefStr, Display as StrumDisplay};

/// Paths served by the dashboard API
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
pub enum ApiEndpoint {
    #[strum(serialize = "/api/prices")]
    Prices,
    #[strum(serialize = "/api/events")]
    Events,
}

/// Why a GET did not produce a usable body
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "request failed: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {} {}", code, text)]
    Status { code: u16, text: String },
    #[display(fmt = "failed to read body: {}", _0)]
    Body(String),
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// `None` for 2xx, otherwise the matching error
    pub fn from_status(code: u16, text: &str) -> Option<Self> {
        if (200..300).contains(&code) {
            None
        } else {
            Some(FetchError::Status { code, text: text.to_string() })
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Body(msg) => AppError::Decode(msg),
            other => AppError::Network(other.to_string()),
        }
    }
}

/// `base + path`, with `key=value` pairs appended as a query string
pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

/// Thin gloo-net wrapper returning raw response bodies
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: ApiEndpoint, params: &[(&str, String)]) -> String {
        build_url(&self.base_url, endpoint.as_ref(), params)
    }

    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{e:?}")))?;

        if let Some(err) = FetchError::from_status(response.status(), &response.status_text()) {
            return Err(err);
        }

        let text = response.text().await.map_err(|e| FetchError::Body(format!("{e:?}")))?;

        log_debug!(
            LogComponent::Infrastructure("HTTP"),
            "✅ GET response: {} bytes",
            text.len()
        );

        Ok(text)
    }
}

/// Market data served by the dashboard's HTTP API
#[derive(Debug, Clone)]
pub struct HttpMarketDataRepository {
    client: ApiClient,
    price_window: Option<(NaiveDate, NaiveDate)>,
}

impl HttpMarketDataRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client, price_window: None }
    }

    /// Ask the server for prices between `start` and `end` inclusive
    pub fn with_price_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.price_window = Some((start, end));
        self
    }

    pub fn prices_url(&self) -> String {
        let params: Vec<(&str, String)> = match self.price_window {
            Some((start, end)) => vec![
                ("start", start.format("%Y-%m-%d").to_string()),
                ("end", end.format("%Y-%m-%d").to_string()),
            ],
            None => Vec::new(),
        };
        self.client.url_for(ApiEndpoint::Prices, &params)
    }

    pub fn events_url(&self) -> String {
        self.client.url_for(ApiEndpoint::Events, &[])
    }
}

impl MarketDataRepository for HttpMarketDataRepository {
    async fn fetch_prices(&self) -> Result<Vec<PricePoint>, AppError> {
        let body = self.client.get_text(&self.prices_url()).await?;
        decode_prices(&body)
    }

    async fn fetch_events(&self) -> Result<Vec<MarketEvent>, AppError> {
        let body = self.client.get_text(&self.events_url()).await?;
        decode_events(&body)
    }
}
