use super::curve::{monotone_x, PathCommand};
use super::scales::{AxisTick, LinearScale, TimeScale};
use super::value_objects::{ChartDimensions, PlotArea, Point};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{MarketEvent, Price, PricePoint};
use crate::log_debug;
use chrono::NaiveDate;
use serde::Serialize;

/// A price observation placed on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePoint {
    pub at: Point,
    pub date: NaiveDate,
    pub price: Price,
}

/// Full-height vertical marker for one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarker {
    /// Identity key, the event name
    pub key: String,
    pub label: String,
    pub date: NaiveDate,
    pub x: f64,
}

/// Everything the chart view draws, computed from the two sequences.
///
/// Building a scene is pure: the same inputs always give the same scene,
/// and empty inputs give an empty frame rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub dimensions: ChartDimensions,
    pub plot: PlotArea,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub points: Vec<ScenePoint>,
    pub line: Vec<PathCommand>,
    pub markers: Vec<EventMarker>,
}

impl ChartScene {
    pub fn empty(dimensions: ChartDimensions) -> Self {
        Self {
            dimensions,
            plot: dimensions.plot_area(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            points: Vec::new(),
            line: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn build(
        prices: &[PricePoint],
        events: &[MarketEvent],
        dimensions: ChartDimensions,
    ) -> Self {
        let plot = dimensions.plot_area();
        let x_range = (plot.left, plot.right());
        let y_range = (plot.bottom(), plot.top);

        let Some(time) = TimeScale::spanning(prices.iter().map(|p| p.date), x_range) else {
            return Self::empty(dimensions);
        };
        let Some(value) = LinearScale::spanning(prices.iter().map(|p| p.price.value()), y_range)
        else {
            return Self::empty(dimensions);
        };

        let points: Vec<ScenePoint> = prices
            .iter()
            .map(|p| ScenePoint {
                at: Point::new(time.map(p.date), value.map(p.price.value())),
                date: p.date,
                price: p.price,
            })
            .collect();
        let line = monotone_x(&points.iter().map(|p| p.at).collect::<Vec<_>>());

        Self {
            dimensions,
            plot,
            x_ticks: time.year_ticks(),
            y_ticks: value.ticks(),
            points,
            line,
            markers: event_markers(events, &time),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point whose x position is closest to `x`
    pub fn nearest_point(&self, x: f64) -> Option<&ScenePoint> {
        self.points
            .iter()
            .min_by(|a, b| (a.at.x - x).abs().total_cmp(&(b.at.x - x).abs()))
    }
}

/// One marker per distinct event name (the last occurrence wins), keeping
/// only dates that fall inside the time axis.
fn event_markers(events: &[MarketEvent], time: &TimeScale) -> Vec<EventMarker> {
    let mut unique: Vec<&MarketEvent> = Vec::with_capacity(events.len());
    for event in events {
        if let Some(pos) = unique.iter().position(|e| e.name == event.name) {
            log_debug!(
                LogComponent::Domain("ChartScene"),
                "duplicate event name {:?}, keeping the later entry",
                event.name
            );
            unique.remove(pos);
        }
        unique.push(event);
    }

    unique
        .into_iter()
        .filter(|event| time.contains(event.date))
        .map(|event| EventMarker {
            key: event.name.clone(),
            label: event.name.clone(),
            date: event.date,
            x: time.map(event.date),
        })
        .collect()
}
