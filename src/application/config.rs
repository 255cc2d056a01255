use chrono::NaiveDate;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";

/// `<meta>` names the host page can use to configure the dashboard
pub const API_URL_META: &str = "dashboard-api-url";
pub const PRICE_START_META: &str = "dashboard-price-start";
pub const PRICE_END_META: &str = "dashboard-price-end";

/// Inclusive date range for the price request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Both bounds as `YYYY-MM-DD`; anything else yields `None`
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        Self::new(parse(start?)?, parse(end?)?)
    }
}

/// Settings resolved once at mount and handed to the data loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub price_window: Option<DateWindow>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl DashboardConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self { api_base_url: api_base_url.trim_end_matches('/').to_string(), price_window: None }
    }

    pub fn with_price_window(mut self, window: Option<DateWindow>) -> Self {
        self.price_window = window;
        self
    }

    /// Page setting first, then the build-time value, then the default.
    /// Blank values are skipped.
    pub fn resolve_base_url(page_value: Option<&str>, build_value: Option<&str>) -> String {
        [page_value, build_value]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    /// Read `<meta>` tags from the current document, falling back to
    /// `DASHBOARD_API_URL` captured at compile time.
    pub fn from_environment() -> Self {
        let base_url = Self::resolve_base_url(
            read_meta(API_URL_META).as_deref(),
            option_env!("DASHBOARD_API_URL"),
        );
        let window = DateWindow::parse(
            read_meta(PRICE_START_META).as_deref(),
            read_meta(PRICE_END_META).as_deref(),
        );
        Self::new(base_url).with_price_window(window)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    element.get_attribute("content")
}
