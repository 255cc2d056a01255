use leptos::html::Canvas;
use leptos::*;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::{
    application::{DashboardConfig, DataLoader},
    domain::{
        chart::{
            to_svg_path, ChartDimensions, ChartScene, EventMarker, PlotArea, PriceSummary,
            ScenePoint, GRID_STROKE, MARKER_FONT_SIZE, MARKER_STROKE, PRICE_STROKE,
            PRICE_STROKE_WIDTH,
        },
        logging::LogComponent,
        market_data::{
            filter_prices, table_rows, DateRange, EventSelection, MarketEvent, PricePoint,
        },
    },
    infrastructure::rendering::AnimationLoop,
    log_debug, log_info,
};

const STYLES: &str = r#"
.dashboard-app {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: linear-gradient(120deg, #232526, #414345);
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
}

.background-canvas {
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    z-index: 0;
    pointer-events: none;
}

.dashboard-header {
    position: relative;
    z-index: 2;
    text-align: center;
    padding: 2rem 0;
    color: #fff;
    font-weight: bold;
    font-size: 2.5rem;
    letter-spacing: 2px;
    animation: header-enter 1s ease-out both;
}

.chart-container {
    position: relative;
    z-index: 2;
    margin: 0 auto;
    max-width: 900px;
    background: rgba(255, 255, 255, 0.08);
    border-radius: 20px;
    box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
    padding: 2rem;
    animation: chart-enter 1.2s ease-out both;
}

.metrics {
    display: flex;
    justify-content: center;
    gap: 40px;
    margin-bottom: 1rem;
    color: #fff;
}

.metric { text-align: center; }
.metric-value { font-size: 22px; font-weight: 700; color: #00bfff; }
.metric-label { font-size: 12px; color: #a0a0a0; margin-top: 4px; }

.chart-frame { position: relative; }
.price-chart { display: block; width: 100%; height: auto; }
.price-chart text { fill: #ddd; font-size: 12px; }

.chart-tooltip {
    position: absolute;
    transform: translate(10px, -100%);
    background: rgba(0, 0, 0, 0.85);
    color: #fff;
    padding: 6px 10px;
    border-radius: 6px;
    font-size: 12px;
    white-space: pre-line;
    pointer-events: none;
}

.dashboard-body {
    position: relative;
    z-index: 2;
    display: flex;
    gap: 2rem;
    align-items: flex-start;
    padding: 0 2rem 2rem;
}

.filter-panel {
    flex: 0 0 240px;
    background: rgba(255, 255, 255, 0.08);
    border-radius: 16px;
    padding: 1.25rem;
    color: #fff;
    font-size: 13px;
}

.filter-panel h2 { font-size: 16px; margin: 0 0 1rem; }
.filter-panel label { display: block; margin-bottom: 0.5rem; }
.filter-panel input[type="date"] { width: 100%; margin-top: 4px; }
.filter-panel button { margin: 0.25rem 0 1rem; }
.event-options { max-height: 320px; overflow-y: auto; }

.dashboard-main { flex: 1; min-width: 0; }

.data-table {
    margin: 2rem auto 0;
    max-width: 900px;
    max-height: 360px;
    overflow-y: auto;
    color: #ddd;
    font-size: 12px;
}

.data-table table { width: 100%; border-collapse: collapse; }
.data-table th { position: sticky; top: 0; background: #2d2f31; text-align: right; padding: 6px; }
.data-table td { text-align: right; padding: 4px 6px; border-top: 1px solid rgba(255, 255, 255, 0.08); }
.data-table h2 { color: #fff; font-size: 18px; }

@keyframes header-enter {
    from { transform: translateY(-80px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

@keyframes chart-enter {
    from { transform: scale(0.95); opacity: 0; }
    to { transform: scale(1); opacity: 1; }
}
"#;

/// Root component: owns both sequences and starts the one-shot load.
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_environment();
    log_info!(
        LogComponent::Presentation("App"),
        "📡 API base {} (window {:?})",
        config.api_base_url,
        config.price_window
    );

    let prices = create_rw_signal(Vec::<PricePoint>::new());
    let events = create_rw_signal(Vec::<MarketEvent>::new());
    DataLoader::from_config(&config).spawn(prices, events);

    // None means the full loaded range
    let range = create_rw_signal(None::<DateRange>);
    let selection = create_rw_signal(EventSelection::default());

    // a fresh load resets both filters
    create_effect(move |_| {
        prices.track();
        range.set(None);
    });
    create_effect(move |_| {
        events.with(|loaded| selection.set(EventSelection::all(loaded)));
    });

    let bounds = create_memo(move |_| prices.with(|p| DateRange::spanning(p)));
    let visible_prices = create_memo(move |_| prices.with(|p| filter_prices(p, range.get())));
    let visible_events = create_memo(move |_| events.with(|e| selection.with(|s| s.apply(e))));

    view! {
        <style>{STYLES}</style>
        <div class="dashboard-app">
            <BackgroundCanvas />
            <header class="dashboard-header">"Brent Oil Price Analysis"</header>
            <div class="dashboard-body">
                <FilterPanel
                    bounds=bounds
                    range=range
                    events=events.read_only()
                    selection=selection
                />
                <main class="dashboard-main">
                    <div class="chart-container">
                        <SummaryPanel prices=visible_prices />
                        <PriceChart prices=visible_prices events=visible_events />
                    </div>
                    <FilteredTable prices=prices.read_only() range=range.read_only() />
                </main>
            </div>
        </div>
    }
}

/// Date range inputs and per-event highlight toggles
#[component]
pub fn FilterPanel(
    bounds: Memo<Option<DateRange>>,
    range: RwSignal<Option<DateRange>>,
    events: ReadSignal<Vec<MarketEvent>>,
    selection: RwSignal<EventSelection>,
) -> impl IntoView {
    let current = move || range.get().or_else(|| bounds.get());
    let bound_label = move |pick: fn(DateRange) -> NaiveDate| {
        bounds.get().map(|b| format_input_date(pick(b))).unwrap_or_default()
    };

    let apply = move |next: Option<DateRange>| {
        let Some(next) = next.zip(bounds.get_untracked()).and_then(|(r, b)| r.clamp_to(b)) else {
            return;
        };
        log_debug!(
            LogComponent::Presentation("FilterPanel"),
            "📅 range {} .. {}",
            next.start,
            next.end
        );
        range.set(Some(next));
    };
    let on_start = move |ev: web_sys::Event| {
        if let Some(start) = parse_input_date(&event_target_value(&ev)) {
            apply(current().and_then(|r| r.with_start(start)));
        }
    };
    let on_end = move |ev: web_sys::Event| {
        if let Some(end) = parse_input_date(&event_target_value(&ev)) {
            apply(current().and_then(|r| r.with_end(end)));
        }
    };

    // one toggle per distinct name
    let names = create_memo(move |_| {
        events.with(|loaded| {
            let mut names: Vec<String> = Vec::with_capacity(loaded.len());
            for event in loaded {
                if !names.contains(&event.name) {
                    names.push(event.name.clone());
                }
            }
            names
        })
    });

    view! {
        <aside class="filter-panel">
            <h2>"Dashboard Filters"</h2>
            <label>
                "Start date"
                <input
                    type="date"
                    min=move || bound_label(|b| b.start)
                    max=move || bound_label(|b| b.end)
                    prop:value=move || current().map(|r| format_input_date(r.start)).unwrap_or_default()
                    on:change=on_start
                />
            </label>
            <label>
                "End date"
                <input
                    type="date"
                    min=move || bound_label(|b| b.start)
                    max=move || bound_label(|b| b.end)
                    prop:value=move || current().map(|r| format_input_date(r.end)).unwrap_or_default()
                    on:change=on_end
                />
            </label>
            <button on:click=move |_| range.set(None)>"Full range"</button>

            <h2>"Events to Highlight"</h2>
            <div class="event-options">
                <For
                    each=move || names.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let checked_name = name.clone();
                        let toggled_name = name.clone();
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| s.is_selected(&checked_name))
                                    on:change=move |_| selection.update(|s| s.toggle(&toggled_name))
                                />
                                " "
                                {name}
                            </label>
                        }
                    }
                />
            </div>
        </aside>
    }
}

fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Full-viewport particle canvas behind everything else
#[component]
pub fn BackgroundCanvas() -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let animation: Rc<RefCell<Option<AnimationLoop>>> = Rc::new(RefCell::new(None));

    {
        let animation = Rc::clone(&animation);
        canvas_ref.on_load(move |canvas| {
            let element: &web_sys::HtmlCanvasElement = &canvas;
            *animation.borrow_mut() = AnimationLoop::start(Some(element.clone()));
        });
    }

    on_cleanup(move || {
        if let Some(running) = animation.borrow_mut().take() {
            running.stop();
        }
    });

    view! { <canvas class="background-canvas" node_ref=canvas_ref /> }
}

/// Average price, volatility and peak for the selected range
#[component]
pub fn SummaryPanel(#[prop(into)] prices: Signal<Vec<PricePoint>>) -> impl IntoView {
    let summary = create_memo(move |_| prices.with(|p| PriceSummary::from_prices(p)));

    move || {
        summary.get().map(|s| {
            let volatility = s
                .volatility_pct
                .map(|v| format!("{v:.2}%"))
                .unwrap_or_else(|| "n/a".to_string());
            view! {
                <div class="metrics">
                    <Metric label="Average Price (USD)" value=s.average.to_string() />
                    <Metric label="Avg. Daily Volatility" value=volatility />
                    <Metric label="Max Price in Period" value=s.max.to_string() />
                </div>
            }
        })
    }
}

#[component]
fn Metric(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric">
            <div class="metric-value">{value}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}

/// Line chart of the price series with one vertical marker per event
#[component]
pub fn PriceChart(
    #[prop(into)] prices: Signal<Vec<PricePoint>>,
    #[prop(into)] events: Signal<Vec<MarketEvent>>,
) -> impl IntoView {
    let dimensions = ChartDimensions::default();
    let scene = create_memo(move |_| {
        prices.with(|p| events.with(|e| ChartScene::build(p, e, dimensions)))
    });
    let hover_x = create_rw_signal(None::<f64>);

    let hovered = move || {
        let x = hover_x.get()?;
        scene.with(|s| s.plot.contains_x(x).then(|| s.nearest_point(x).cloned()).flatten())
    };

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        if rect.width() > 0.0 {
            let x = (ev.client_x() as f64 - rect.left()) / rect.width() * dimensions.width;
            hover_x.set(Some(x));
        }
    };

    view! {
        <div class="chart-frame">
            <svg
                class="price-chart"
                viewBox=format!("0 0 {} {}", dimensions.width, dimensions.height)
                on:mousemove=on_move
                on:mouseleave=move |_| hover_x.set(None)
            >
                {move || scene.with(|s| grid(s))}
                {move || scene.with(|s| axes(s))}
                <path
                    class="price-line"
                    d=move || scene.with(|s| to_svg_path(&s.line))
                    fill="none"
                    stroke=PRICE_STROKE
                    stroke-width=PRICE_STROKE_WIDTH
                />
                <For
                    each=move || scene.with(|s| s.markers.clone())
                    key=|marker| marker.key.clone()
                    children=move |marker| {
                        let plot = scene.with_untracked(|s| s.plot);
                        marker_line(&marker, plot)
                    }
                />
                {move || scene.with(|s| legend(s))}
            </svg>
            {move || hovered().map(|point| tooltip(&point, dimensions))}
        </div>
    }
}

/// Price and daily log return for every loaded row inside the range
#[component]
pub fn FilteredTable(
    prices: ReadSignal<Vec<PricePoint>>,
    range: ReadSignal<Option<DateRange>>,
) -> impl IntoView {
    let rows = create_memo(move |_| prices.with(|p| table_rows(p, range.get())));

    view! {
        <section class="data-table">
            <h2>"Filtered Data"</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Price"</th>
                        <th>"log_return"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.with(|rows| {
                            rows.iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{format_input_date(row.date)}</td>
                                            <td>{row.price_label()}</td>
                                            <td>{row.log_return_label()}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </section>
    }
}

fn grid(scene: &ChartScene) -> View {
    let plot = scene.plot;
    let horizontal = scene
        .y_ticks
        .iter()
        .map(|t| {
            view! {
                <line x1=plot.left x2=plot.right() y1=t.position y2=t.position
                    stroke=GRID_STROKE stroke-dasharray="3 3" />
            }
        })
        .collect_view();
    let vertical = scene
        .x_ticks
        .iter()
        .map(|t| {
            view! {
                <line x1=t.position x2=t.position y1=plot.top y2=plot.bottom()
                    stroke=GRID_STROKE stroke-dasharray="3 3" />
            }
        })
        .collect_view();
    view! { <g class="grid">{horizontal}{vertical}</g> }.into_view()
}

fn axes(scene: &ChartScene) -> View {
    let plot = scene.plot;
    let x_labels = scene
        .x_ticks
        .iter()
        .map(|t| {
            view! {
                <text x=t.position y=plot.bottom() + 18.0 text-anchor="middle">
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();
    let y_labels = scene
        .y_ticks
        .iter()
        .map(|t| {
            view! {
                <text x=plot.left - 8.0 y=t.position + 4.0 text-anchor="end">
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();
    view! {
        <g class="axes">
            <line x1=plot.left x2=plot.right() y1=plot.bottom() y2=plot.bottom() stroke="#999" />
            <line x1=plot.left x2=plot.left y1=plot.top y2=plot.bottom() stroke="#999" />
            {x_labels}
            {y_labels}
        </g>
    }
    .into_view()
}

fn marker_line(marker: &EventMarker, plot: PlotArea) -> View {
    let label_x = marker.x - 4.0;
    let label_y = plot.top + 4.0;
    view! {
        <g class="event-marker" data-event=marker.key.clone()>
            <line x1=marker.x x2=marker.x y1=plot.top y2=plot.bottom() stroke=MARKER_STROKE />
            <text
                x=label_x
                y=label_y
                transform=format!("rotate(-90 {label_x} {label_y})")
                text-anchor="end"
                fill=MARKER_STROKE
                font-size=MARKER_FONT_SIZE
                font-weight="bold"
            >
                {marker.label.clone()}
            </text>
        </g>
    }
    .into_view()
}

fn legend(scene: &ChartScene) -> View {
    let y = scene.dimensions.height - scene.dimensions.margin.bottom - 8.0;
    let centre = scene.plot.left + scene.plot.width / 2.0;
    view! {
        <g class="legend">
            <line x1=centre - 40.0 x2=centre - 20.0 y1=y - 4.0 y2=y - 4.0
                stroke=PRICE_STROKE stroke-width=PRICE_STROKE_WIDTH />
            <text x=centre - 14.0 y=y>"Price"</text>
        </g>
    }
    .into_view()
}

fn tooltip(point: &ScenePoint, dimensions: ChartDimensions) -> View {
    let left = point.at.x / dimensions.width * 100.0;
    let top = point.at.y / dimensions.height * 100.0;
    view! {
        <div class="chart-tooltip" style=format!("left: {left:.2}%; top: {top:.2}%;")>
            {format!("{}\nPrice: {}", point.date.format("%Y-%m-%d"), point.price)}
        </div>
    }
    .into_view()
}
