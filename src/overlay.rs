use std::sync::Arc;

use crate::data_types::{Annotation, AnnotationId, Ohlcv, TimeValue};
use crate::theme::{ChartTheme, Rgba};

/// One vertex of an overlay line series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPoint {
    pub time: TimeValue,
    pub value: f64,
}

/// A line series ready for the host chart to plot.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLine {
    pub id: AnnotationId,
    pub color: Rgba,
    pub points: Vec<OverlayPoint>,
}

/// Receives the current annotation set whenever the controller changes
/// state. Implementations must not dispatch pointer events back into
/// the controller from `redraw`.
pub trait RendererBridge {
    fn redraw(&mut self, annotations: &[Annotation], series: &[Ohlcv]);
}

/// Maps each annotation to the line series that plots it.
///
/// Horizontal rays take one point per series bar at or after the
/// anchor, held at the anchor price. Rays get one synthetic terminal
/// point at the last bar's time, holding the second point's price.
pub fn build_overlays(annotations: &[Annotation], series: &[Ohlcv]) -> Vec<OverlayLine> {
    annotations
        .iter()
        .map(|annotation| match annotation {
            Annotation::TrendSegment { id, points, color } => OverlayLine {
                id: *id,
                color: *color,
                points: points
                    .iter()
                    .map(|p| OverlayPoint { time: p.time, value: p.price })
                    .collect(),
            },
            Annotation::HorizontalRay { id, anchor, color } => OverlayLine {
                id: *id,
                color: *color,
                points: series
                    .iter()
                    .filter(|bar| bar.time.at_or_after(&anchor.time))
                    .map(|bar| OverlayPoint { time: bar.time, value: anchor.price })
                    .collect(),
            },
            Annotation::Ray { id, points, color } => {
                let mut line: Vec<OverlayPoint> = points
                    .iter()
                    .map(|p| OverlayPoint { time: p.time, value: p.price })
                    .collect();
                if let Some(last) = series.last() {
                    line.push(OverlayPoint {
                        time: last.time,
                        value: points[1].price,
                    });
                }
                OverlayLine {
                    id: *id,
                    color: *color,
                    points: line,
                }
            }
        })
        .collect()
}

/// Simple moving average of closes, one point per window anchored at
/// the window's last bar. Empty when the series is shorter than
/// `period`.
pub fn sma(series: &[Ohlcv], period: usize) -> Vec<OverlayPoint> {
    if period == 0 || series.len() < period {
        return Vec::new();
    }
    series
        .windows(period)
        .map(|window| {
            let sum: f64 = window.iter().map(|bar| bar.close).sum();
            OverlayPoint {
                time: window[period - 1].time,
                value: sum / period as f64,
            }
        })
        .collect()
}

/// A fixed horizontal level the host draws across the whole pane, with
/// an axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceLine {
    pub price: f64,
    pub color: Rgba,
    pub label: String,
}

impl PriceLine {
    pub fn entry(price: f64, theme: &ChartTheme) -> Self {
        Self {
            price,
            color: theme.entry_marker,
            label: "Entry".into(),
        }
    }

    pub fn exit(price: f64, theme: &ChartTheme) -> Self {
        Self {
            price,
            color: theme.exit_marker,
            label: "Exit".into(),
        }
    }
}

/// A cloneable bridge that keeps the latest built overlays behind a
/// lock, for hosts that render on a separate pass.
#[derive(Clone, Debug, Default)]
pub struct OverlayBuffer {
    overlays: Arc<parking_lot::RwLock<Vec<OverlayLine>>>,
}

impl OverlayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The overlays from the most recent redraw.
    pub fn snapshot(&self) -> Vec<OverlayLine> {
        self.overlays.read().clone()
    }
}

impl RendererBridge for OverlayBuffer {
    fn redraw(&mut self, annotations: &[Annotation], series: &[Ohlcv]) {
        *self.overlays.write() = build_overlays(annotations, series);
    }
}
