use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Upper bound on year labels along the time axis
pub const MAX_YEAR_TICKS: usize = 12;
/// Target number of price labels along the value axis
pub const VALUE_TICK_TARGET: usize = 5;

/// A labelled position along one axis, in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Maps calendar dates onto a horizontal pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    range: (f64, f64),
}

impl TimeScale {
    /// A degenerate single-day domain is widened by one day on each side.
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        if start == end {
            let before = start.pred_opt().unwrap_or(start);
            let after = end.succ_opt().unwrap_or(end);
            return Self { start: before, end: after, range };
        }
        Self { start, end, range }
    }

    /// Scale spanning the earliest and latest of `dates`, whatever their order
    pub fn spanning<I>(dates: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut iter = dates.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self::new(min, max, range))
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        let span = day_number(self.end) - day_number(self.start);
        let t = (day_number(date) - day_number(self.start)) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Year labels at every January 1st inside the domain, thinned to a
    /// whole-year step so no more than [`MAX_YEAR_TICKS`] remain.
    ///
    /// A domain that never crosses a January 1st gets a single label at its
    /// start.
    pub fn year_ticks(&self) -> Vec<AxisTick> {
        let years: Vec<NaiveDate> = (self.start.year()..=self.end.year())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .filter(|jan1| self.contains(*jan1))
            .collect();

        if years.is_empty() {
            return vec![self.tick_at(self.start)];
        }

        let step = years.len().div_ceil(MAX_YEAR_TICKS);
        years.into_iter().step_by(step).map(|jan1| self.tick_at(jan1)).collect()
    }

    fn tick_at(&self, date: NaiveDate) -> AxisTick {
        AxisTick { position: self.map(date), label: date.year().to_string() }
    }
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Maps prices onto a vertical pixel range (`range.0` is the bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    range: (f64, f64),
}

impl LinearScale {
    /// A flat domain is widened by ±1 so it still has a height.
    pub fn new(min: f64, max: f64, range: (f64, f64)) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if (max - min).abs() < f64::EPSILON {
            return Self { min: min - 1.0, max: max + 1.0, range };
        }
        Self { min, max, range }
    }

    pub fn spanning<I>(values: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter().filter(|v| v.is_finite());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self::new(min, max, range))
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.min) / (self.max - self.min);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Round-number labels inside the domain, roughly [`VALUE_TICK_TARGET`] of them
    pub fn ticks(&self) -> Vec<AxisTick> {
        let step = nice_step(self.max - self.min, VALUE_TICK_TARGET);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };

        let first = (self.min / step - 1e-9).ceil() as i64;
        let last = (self.max / step + 1e-9).floor() as i64;
        (first..=last)
            .map(|i| {
                let value = i as f64 * step;
                AxisTick { position: self.map(value), label: format!("{value:.decimals$}") }
            })
            .collect()
    }
}

/// 1, 2 or 5 times a power of ten, closest to `span / count`
fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
