use serde::Serialize;

/// Stroke colour of the price line
pub const PRICE_STROKE: &str = "#00bfff";
pub const PRICE_STROKE_WIDTH: f64 = 3.0;
/// Colour shared by event marker lines and their labels
pub const MARKER_STROKE: &str = "#ff1744";
pub const MARKER_FONT_SIZE: f64 = 13.0;
pub const GRID_STROKE: &str = "rgba(255, 255, 255, 0.15)";

const Y_AXIS_WIDTH: f64 = 60.0;
const X_AXIS_HEIGHT: f64 = 30.0;
const LEGEND_HEIGHT: f64 = 24.0;

/// Value Object - outer margins around the plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { top: 5.0, right: 30.0, bottom: 5.0, left: 20.0 }
    }
}

/// Value Object - size of the chart's SVG viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 840.0, height: 500.0, margin: Margin::default() }
    }
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    /// Region left after margins, axes and legend are reserved
    pub fn plot_area(&self) -> PlotArea {
        let left = self.margin.left + Y_AXIS_WIDTH;
        let top = self.margin.top;
        let width = (self.width - left - self.margin.right).max(0.0);
        let height =
            (self.height - top - self.margin.bottom - X_AXIS_HEIGHT - LEGEND_HEIGHT).max(0.0);
        PlotArea { left, top, width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.right()
    }
}

/// Screen-space point, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
