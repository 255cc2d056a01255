use brent_event_dashboard::domain::errors::AppError;
use brent_event_dashboard::domain::market_data::{
    decode_events, decode_prices, parse_calendar_date, MarketEvent, Price, PricePoint,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn prices_decode_in_server_order() {
    let body = r#"[
        {"Date": "1991-01-01", "Price": 22.5},
        {"Date": "1990-01-01", "Price": 20.1}
    ]"#;
    let prices = decode_prices(body).unwrap();
    assert_eq!(
        prices,
        vec![
            PricePoint::new(date(1991, 1, 1), Price::new(22.5)),
            PricePoint::new(date(1990, 1, 1), Price::new(20.1)),
        ]
    );
}

#[test]
fn every_known_date_encoding_lands_on_the_same_day() {
    let encodings = [
        "1990-08-02",
        "1990-08-02T00:00:00",
        "1990-08-02T00:00:00.000Z",
        "1990-08-02T13:45:00+02:00",
        "1990-08-02 00:00:00",
        "Thu, 02 Aug 1990 00:00:00 GMT",
        "02-Aug-90",
        "  1990-08-02 ",
    ];
    for raw in encodings {
        assert_eq!(parse_calendar_date(raw).unwrap(), date(1990, 8, 2), "{raw}");
    }
}

#[test]
fn garbage_date_is_a_decode_error() {
    assert!(matches!(parse_calendar_date("yesterday"), Err(AppError::Decode(_))));
}

#[test]
fn event_date_fields_are_interchangeable() {
    let body = r#"[
        {"EventName": "Gulf War", "Date": "1990-08-02"},
        {"EventName": "OPEC cut", "EventDate": "2016-11-30"},
        {"EventName": "Both", "Date": "2008-07-11", "EventDate": "1999-01-01"}
    ]"#;
    let events = decode_events(body).unwrap();
    assert_eq!(
        events,
        vec![
            MarketEvent::new("Gulf War", date(1990, 8, 2)),
            MarketEvent::new("OPEC cut", date(2016, 11, 30)),
            MarketEvent::new("Both", date(2008, 7, 11)),
        ]
    );
}

#[test]
fn blank_date_falls_back_to_event_date() {
    let body = r#"[{"EventName": "Covid", "Date": "", "EventDate": "2020-03-11"}]"#;
    assert_eq!(decode_events(body).unwrap()[0].date, date(2020, 3, 11));
}

#[test]
fn event_without_any_date_rejects_the_response() {
    let body = r#"[
        {"EventName": "Gulf War", "Date": "1990-08-02"},
        {"EventName": "Mystery"}
    ]"#;
    assert!(matches!(decode_events(body), Err(AppError::Decode(_))));
}

#[test]
fn malformed_bodies_are_decode_errors() {
    assert!(matches!(decode_prices("<html>oops</html>"), Err(AppError::Decode(_))));
    assert!(matches!(decode_prices(r#"{"Date": "1990-01-01"}"#), Err(AppError::Decode(_))));
    assert!(matches!(decode_prices(r#"[{"Date": "1990-01-01"}]"#), Err(AppError::Decode(_))));
}

#[test]
fn empty_array_is_valid() {
    assert!(decode_prices("[]").unwrap().is_empty());
    assert!(decode_events("[]").unwrap().is_empty());
}

#[test]
fn price_displays_as_dollars() {
    assert_eq!(Price::new(20.1).to_string(), "$20.10");
    assert!(Price::new(20.1) < Price::new(22.5));
}

#[test]
fn bare_nan_from_the_backend_rejects_the_whole_body() {
    // pandas writes a missing first log_return as a bare NaN token
    let body = r#"[
        {"Date": "1987-05-20", "Price": 18.63, "log_return": NaN},
        {"Date": "1987-05-21", "Price": 18.45, "log_return": -0.0097}
    ]"#;
    assert!(matches!(decode_prices(body), Err(AppError::Decode(_))));

    let cleaned = body.replace("NaN", "null");
    assert_eq!(decode_prices(&cleaned).unwrap().len(), 2);
}
