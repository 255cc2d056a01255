use super::entities::{MarketEvent, PricePoint};
use super::value_objects::Price;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Value Object - inclusive calendar range picked in the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `None` when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Earliest to latest date of the series, whatever its order
    pub fn spanning(prices: &[PricePoint]) -> Option<Self> {
        let first = prices.first()?.date;
        let (start, end) = prices
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(p.date), hi.max(p.date)));
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Narrow this range so it lies inside `bounds`. `None` when the two
    /// do not overlap.
    pub fn clamp_to(&self, bounds: DateRange) -> Option<Self> {
        Self::new(self.start.max(bounds.start), self.end.min(bounds.end))
    }

    pub fn with_start(&self, start: NaiveDate) -> Option<Self> {
        Self::new(start, self.end)
    }

    pub fn with_end(&self, end: NaiveDate) -> Option<Self> {
        Self::new(self.start, end)
    }
}

/// Prices inside `range`, in their original order. `None` keeps everything.
pub fn filter_prices(prices: &[PricePoint], range: Option<DateRange>) -> Vec<PricePoint> {
    match range {
        Some(range) => prices.iter().filter(|p| range.contains(p.date)).cloned().collect(),
        None => prices.to_vec(),
    }
}

/// Which event names are highlighted on the chart.
///
/// Starts with every loaded event selected. Names are compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSelection {
    selected: HashSet<String>,
}

impl EventSelection {
    pub fn all(events: &[MarketEvent]) -> Self {
        Self { selected: events.iter().map(|e| e.name.clone()).collect() }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn set(&mut self, name: &str, selected: bool) {
        if selected {
            self.selected.insert(name.to_string());
        } else {
            self.selected.remove(name);
        }
    }

    pub fn toggle(&mut self, name: &str) {
        let selected = !self.is_selected(name);
        self.set(name, selected);
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected events in their original order
    pub fn apply(&self, events: &[MarketEvent]) -> Vec<MarketEvent> {
        events.iter().filter(|e| self.is_selected(&e.name)).cloned().collect()
    }
}

/// One line of the filtered data table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub price: Price,
    /// Log return against the previous observation of the full series
    pub log_return: Option<f64>,
}

impl PriceRow {
    /// `$x.xx`
    pub fn price_label(&self) -> String {
        self.price.to_string()
    }

    /// Four decimals, or `n/a` for the first observation
    pub fn log_return_label(&self) -> String {
        self.log_return.map(|r| format!("{r:.4}")).unwrap_or_else(|| "n/a".to_string())
    }
}

/// Table rows for `range`. Returns are taken over the whole series first,
/// so the first visible row still compares against the day before it.
pub fn table_rows(prices: &[PricePoint], range: Option<DateRange>) -> Vec<PriceRow> {
    let mut previous: Option<f64> = None;
    prices
        .iter()
        .map(|p| {
            let value = p.price.value();
            let log_return = previous
                .filter(|prev| *prev > 0.0 && value > 0.0)
                .map(|prev| (value / prev).ln());
            previous = Some(value);
            PriceRow { date: p.date, price: p.price, log_return }
        })
        .filter(|row| range.is_none_or(|r| r.contains(row.date)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(DateRange::new(date(2000, 1, 2), date(2000, 1, 1)).is_none());
    }

    #[test]
    fn clamp_keeps_the_overlap() {
        let bounds = DateRange::new(date(1990, 1, 1), date(2000, 1, 1)).unwrap();
        let wide = DateRange::new(date(1980, 1, 1), date(1995, 1, 1)).unwrap();
        assert_eq!(wide.clamp_to(bounds), DateRange::new(date(1990, 1, 1), date(1995, 1, 1)));
        let outside = DateRange::new(date(2010, 1, 1), date(2011, 1, 1)).unwrap();
        assert_eq!(outside.clamp_to(bounds), None);
    }
}
