//! Wire records for `/api/prices` and `/api/events`.
//!
//! Upstream producers disagree on the event date field name, so both are
//! accepted here and collapsed into `MarketEvent::date` before anything
//! else sees the data.

use super::entities::{MarketEvent, PricePoint};
use super::value_objects::{parse_calendar_date, Price};
use crate::domain::errors::{AppError, DecodeResult};
use serde::Deserialize;

/// `{ "Date": ..., "Price": ... }`; extra columns are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRecordDto {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// `{ "EventName": ..., "Date" | "EventDate": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecordDto {
    #[serde(rename = "EventName")]
    pub name: String,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "EventDate", default)]
    pub event_date: Option<String>,
}

impl EventRecordDto {
    /// `Date` wins over `EventDate`; blank strings count as absent.
    pub fn canonical_date(&self) -> Option<&str> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|value| !value.trim().is_empty())
        }
        present(&self.date).or_else(|| present(&self.event_date))
    }
}

impl TryFrom<PriceRecordDto> for PricePoint {
    type Error = AppError;

    fn try_from(dto: PriceRecordDto) -> Result<Self, Self::Error> {
        let date = parse_calendar_date(&dto.date)?;
        let price = Price::new(dto.price);
        if !price.is_finite() {
            return Err(AppError::Decode(format!("non-finite price on {date}")));
        }
        Ok(PricePoint::new(date, price))
    }
}

impl TryFrom<EventRecordDto> for MarketEvent {
    type Error = AppError;

    fn try_from(dto: EventRecordDto) -> Result<Self, Self::Error> {
        let raw = dto.canonical_date().ok_or_else(|| {
            AppError::Decode(format!("event {:?} has neither Date nor EventDate", dto.name))
        })?;
        let date = parse_calendar_date(raw)?;
        Ok(MarketEvent::new(dto.name, date))
    }
}

/// Decode a `/api/prices` body, preserving record order.
pub fn decode_prices(body: &str) -> DecodeResult<Vec<PricePoint>> {
    decode_array::<PriceRecordDto, PricePoint>(body)
}

/// Decode a `/api/events` body, normalizing the date field.
pub fn decode_events(body: &str) -> DecodeResult<Vec<MarketEvent>> {
    decode_array::<EventRecordDto, MarketEvent>(body)
}

fn decode_array<D, T>(body: &str) -> DecodeResult<Vec<T>>
where
    D: for<'de> Deserialize<'de>,
    T: TryFrom<D, Error = AppError>,
{
    let records: Vec<D> = serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("Failed to parse JSON: {e}")))?;
    records.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_falls_back_to_event_date() {
        let dto = EventRecordDto {
            name: "OPEC+ Cut".into(),
            date: Some("  ".into()),
            event_date: Some("2016-11-30".into()),
        };
        assert_eq!(dto.canonical_date(), Some("2016-11-30"));
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let err = decode_prices(r#"{"Date":"1990-01-01","Price":1.0}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
