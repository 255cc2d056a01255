use brent_event_dashboard::domain::chart::{
    ChartDimensions, ChartScene, PathCommand, MAX_YEAR_TICKS,
};
use brent_event_dashboard::domain::market_data::{MarketEvent, Price, PricePoint};
use chrono::{Days, NaiveDate};
use quickcheck_macros::quickcheck;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn price(y: i32, m: u32, d: u32, value: f64) -> PricePoint {
    PricePoint::new(date(y, m, d), Price::new(value))
}

fn two_years() -> Vec<PricePoint> {
    vec![price(1990, 1, 1, 20.1), price(1991, 1, 1, 22.5)]
}

#[test]
fn two_prices_without_events() {
    let scene = ChartScene::build(&two_years(), &[], ChartDimensions::default());

    let year_labels: Vec<&str> = scene.x_ticks.iter().map(|t| t.label.as_str()).collect();
    insta::assert_json_snapshot!(year_labels, @r###"
    [
      "1990",
      "1991"
    ]
    "###);
    assert_eq!(scene.x_ticks[0].position, scene.plot.left);
    assert_eq!(scene.x_ticks[1].position, scene.plot.right());

    assert_eq!(scene.points.len(), 2);
    assert!(matches!(scene.line.as_slice(), [PathCommand::MoveTo(_), PathCommand::LineTo(_)]));
    assert!(scene.markers.is_empty());

    // earliest date on the left, lowest price at the bottom
    let plot = scene.plot;
    assert_eq!(scene.points[0].at.x, plot.left);
    assert_eq!(scene.points[0].at.y, plot.bottom());
    assert_eq!(scene.points[1].at.x, plot.right());
    assert_eq!(scene.points[1].at.y, plot.top);

    let labels: Vec<&str> = scene.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["20.5", "21.0", "21.5", "22.0", "22.5"]);
}

#[test]
fn event_marker_sits_at_its_date() {
    let events = vec![MarketEvent::new("Gulf War", date(1990, 8, 2))];
    let scene = ChartScene::build(&two_years(), &events, ChartDimensions::default());

    assert_eq!(scene.markers.len(), 1);
    let marker = &scene.markers[0];
    assert_eq!(marker.label, "Gulf War");
    assert_eq!(marker.key, "Gulf War");

    let plot = scene.plot;
    let expected = plot.left + 213.0 / 365.0 * plot.width;
    assert!((marker.x - expected).abs() < 1e-9, "{} vs {}", marker.x, expected);
}

#[test]
fn no_prices_means_an_empty_frame() {
    let events = vec![MarketEvent::new("Gulf War", date(1990, 8, 2))];
    let dims = ChartDimensions::default();
    let scene = ChartScene::build(&[], &events, dims);

    assert!(scene.is_empty());
    assert!(scene.line.is_empty());
    assert!(scene.markers.is_empty());
    assert!(scene.x_ticks.is_empty());
    assert_eq!(scene, ChartScene::empty(dims));
}

#[test]
fn duplicate_event_names_keep_the_last_entry() {
    let events = vec![
        MarketEvent::new("Sanctions", date(1990, 3, 1)),
        MarketEvent::new("Gulf War", date(1990, 8, 2)),
        MarketEvent::new("Sanctions", date(1990, 6, 1)),
    ];
    let scene = ChartScene::build(&two_years(), &events, ChartDimensions::default());

    let markers: Vec<(&str, NaiveDate)> =
        scene.markers.iter().map(|m| (m.key.as_str(), m.date)).collect();
    assert_eq!(markers, [("Gulf War", date(1990, 8, 2)), ("Sanctions", date(1990, 6, 1))]);
}

#[test]
fn events_outside_the_price_range_are_skipped() {
    let events = vec![
        MarketEvent::new("Too early", date(1985, 1, 1)),
        MarketEvent::new("Too late", date(2001, 1, 1)),
        MarketEvent::new("Boundary", date(1991, 1, 1)),
    ];
    let scene = ChartScene::build(&two_years(), &events, ChartDimensions::default());
    assert_eq!(scene.markers.len(), 1);
    assert_eq!(scene.markers[0].x, scene.plot.right());
}

#[test]
fn long_history_thins_year_labels() {
    let prices = vec![price(1987, 5, 20, 18.63), price(2022, 11, 14, 93.59)];
    let scene = ChartScene::build(&prices, &[], ChartDimensions::default());

    assert!(scene.x_ticks.len() <= MAX_YEAR_TICKS);
    assert_eq!(scene.x_ticks[0].label, "1988");
    assert_eq!(scene.x_ticks[1].label, "1991");
}

#[test]
fn short_range_still_gets_one_label() {
    let prices = vec![price(2020, 3, 1, 50.0), price(2020, 4, 1, 20.0)];
    let scene = ChartScene::build(&prices, &[], ChartDimensions::default());
    assert_eq!(scene.x_ticks.len(), 1);
    assert_eq!(scene.x_ticks[0].label, "2020");
    assert_eq!(scene.x_ticks[0].position, scene.plot.left);
}

#[test]
fn single_price_is_centred() {
    let prices = vec![price(2008, 7, 3, 143.95)];
    let scene = ChartScene::build(&prices, &[], ChartDimensions::default());
    let plot = scene.plot;
    assert_eq!(scene.line.len(), 1);
    assert!((scene.points[0].at.x - (plot.left + plot.width / 2.0)).abs() < 1e-9);
    assert!((scene.points[0].at.y - (plot.top + plot.height / 2.0)).abs() < 1e-9);
}

#[test]
fn nearest_point_follows_the_cursor() {
    let scene = ChartScene::build(&two_years(), &[], ChartDimensions::default());
    assert_eq!(scene.nearest_point(100.0).unwrap().date, date(1990, 1, 1));
    assert_eq!(scene.nearest_point(700.0).unwrap().date, date(1991, 1, 1));
}

#[test]
fn rebuilding_is_deterministic() {
    let events = vec![MarketEvent::new("Gulf War", date(1990, 8, 2))];
    let dims = ChartDimensions::default();
    assert_eq!(
        ChartScene::build(&two_years(), &events, dims),
        ChartScene::build(&two_years(), &events, dims)
    );
}

fn arbitrary_prices(raw: &[(u16, u16)]) -> Vec<PricePoint> {
    let origin = date(1987, 5, 20);
    raw.iter()
        .map(|&(offset, cents)| {
            let day = origin.checked_add_days(Days::new(u64::from(offset % 13_000))).unwrap();
            PricePoint::new(day, Price::new(f64::from(cents) / 100.0 + 1.0))
        })
        .collect()
}

#[quickcheck]
fn line_visits_prices_in_the_order_received(raw: Vec<(u16, u16)>) -> bool {
    let prices = arbitrary_prices(&raw);
    let scene = ChartScene::build(&prices, &[], ChartDimensions::default());

    let dates_kept = scene.points.iter().map(|p| p.date).eq(prices.iter().map(|p| p.date));
    let line_follows_points =
        scene.line.iter().map(PathCommand::end).eq(scene.points.iter().map(|p| p.at));
    dates_kept && line_follows_points
}

#[quickcheck]
fn year_labels_never_exceed_the_cap(raw: Vec<(u16, u16)>) -> bool {
    let scene = ChartScene::build(&arbitrary_prices(&raw), &[], ChartDimensions::default());
    scene.x_ticks.len() <= MAX_YEAR_TICKS
}

#[quickcheck]
fn points_stay_inside_the_plot(raw: Vec<(u16, u16)>) -> bool {
    let scene = ChartScene::build(&arbitrary_prices(&raw), &[], ChartDimensions::default());
    let plot = scene.plot;
    scene.points.iter().all(|p| {
        p.at.x >= plot.left - 1e-6
            && p.at.x <= plot.right() + 1e-6
            && p.at.y >= plot.top - 1e-6
            && p.at.y <= plot.bottom() + 1e-6
    })
}
