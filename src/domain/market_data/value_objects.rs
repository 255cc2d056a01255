use crate::domain::errors::{AppError, DecodeResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - price per barrel in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "${:.2}", _0)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Naive datetime layouts seen in exported CSVs and JSON dumps
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a calendar date from any of the encodings the API has produced.
///
/// Accepts `1990-08-02`, ISO-8601 datetimes with or without an offset,
/// HTTP dates (`Thu, 02 Aug 1990 00:00:00 GMT`) and the raw dataset
/// layout `02-Aug-90`. Time-of-day is discarded.
pub fn parse_calendar_date(raw: &str) -> DecodeResult<NaiveDate> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%d-%b-%y") {
        return Ok(date);
    }

    Err(AppError::Decode(format!("unrecognised date {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_display_has_two_decimals() {
        assert_eq!(Price::new(20.1).to_string(), "$20.10");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_calendar_date("not a date").is_err());
        assert!(parse_calendar_date("").is_err());
        assert!(parse_calendar_date("1990-13-01").is_err());
    }
}
