//! chart_draw crate for interactive price-chart drawing tools
//!
//! A headless core for placing, selecting, and dragging line
//! annotations (trend segments, horizontal rays, rays) over a
//! candlestick series. The host chart engine supplies pixel events and
//! coordinate conversion, and consumes overlay line series back.

pub mod coordinates;
pub mod data_types;
pub mod interaction;
pub mod overlay;
pub mod store;
pub mod theme;

pub use coordinates::{CoordinateAdapter, LinearCoordinateAdapter};
pub use data_types::{Annotation, AnnotationId, Ohlcv, PixelPosition, Point, TimeValue, ToolMode};
pub use interaction::InteractionController;
pub use overlay::{build_overlays, OverlayBuffer, OverlayLine, OverlayPoint, RendererBridge};
pub use store::{AnnotationStore, StoreError};
pub use theme::{ChartTheme, Rgba};
