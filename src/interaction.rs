use tracing::{debug, error};

use crate::coordinates::CoordinateAdapter;
use crate::data_types::{
    Annotation, DrawTool, Ohlcv, PixelPosition, Point, ToolMode, ToolState, TwoPointTool,
};
use crate::hit_test;
use crate::overlay::RendererBridge;
use crate::store::AnnotationStore;
use crate::theme::Rgba;

/// Resolves raw pointer events against the tool state, hit-tester, and
/// annotation store, and pushes the updated set to the renderer
/// bridge.
///
/// All handlers are synchronous and expect to run on the host's event
/// loop, one event at a time. Events whose coordinates the adapter
/// cannot resolve are dropped without any state change.
pub struct InteractionController<A: CoordinateAdapter, B: RendererBridge> {
    adapter: A,
    bridge: B,
    store: AnnotationStore,
    state: ToolState,
    series: Vec<Ohlcv>,
    line_color: Rgba,
}

impl<A: CoordinateAdapter, B: RendererBridge> InteractionController<A, B> {
    pub fn new(adapter: A, bridge: B, line_color: Rgba) -> Self {
        Self {
            adapter,
            bridge,
            store: AnnotationStore::new(),
            state: ToolState::default(),
            series: Vec::new(),
            line_color,
        }
    }

    /// Replaces the displayed series. Annotations belong to one series
    /// identity, so the store empties and any pending placement or
    /// drag is discarded.
    pub fn set_series(&mut self, series: Vec<Ohlcv>) {
        self.series = series;
        self.store.clear();
        self.state = ToolState::Select;
        self.redraw();
    }

    pub fn set_tool(&mut self, mode: ToolMode) {
        self.state.select_tool(mode);
        debug!(?mode, "tool selected");
        self.redraw();
    }

    /// Empties the store. Valid from any state; the current tool and
    /// placement phase are untouched.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.redraw();
    }

    pub fn on_click(&mut self, position: PixelPosition) {
        let Some(point) = self.resolve(position) else {
            return;
        };
        match self.state {
            ToolState::Select => {
                if let Some(hit) = hit_test::find(&point, self.store.list(), &self.series) {
                    let id = hit.id();
                    debug!(?id, "drag started");
                    self.state = ToolState::Dragging { id, last_point: point };
                }
            }
            ToolState::AwaitingFirstPoint(DrawTool::HorizontalRay) => {
                // One-shot placement; the tool reverts to select.
                self.insert(|id, color| Annotation::HorizontalRay { id, anchor: point, color });
                self.state = ToolState::Select;
            }
            ToolState::AwaitingFirstPoint(DrawTool::Trend) => {
                self.state = ToolState::AwaitingSecondPoint {
                    tool: TwoPointTool::Trend,
                    first: point,
                };
            }
            ToolState::AwaitingFirstPoint(DrawTool::Ray) => {
                self.state = ToolState::AwaitingSecondPoint {
                    tool: TwoPointTool::Ray,
                    first: point,
                };
            }
            ToolState::AwaitingSecondPoint { tool, first } => {
                let points = [first, point];
                self.insert(|id, color| match tool {
                    TwoPointTool::Trend => Annotation::TrendSegment { id, points, color },
                    TwoPointTool::Ray => Annotation::Ray { id, points, color },
                });
                self.state = ToolState::Select;
            }
            // Drags end on release, never on a click.
            ToolState::Dragging { .. } => return,
        }
        self.redraw();
    }

    /// Applies the incremental drag delta; a no-op outside a drag.
    pub fn on_pointer_move(&mut self, position: PixelPosition) {
        let ToolState::Dragging { id, last_point } = self.state else {
            return;
        };
        let Some(point) = self.resolve(position) else {
            return;
        };
        let delta_time = point.time.delta(&last_point.time).unwrap_or(0.0);
        let delta_price = point.price - last_point.price;
        self.store.translate(id, delta_time, delta_price);
        self.state = ToolState::Dragging { id, last_point: point };
        self.redraw();
    }

    /// Ends an active drag. The host must deliver this globally, even
    /// when the pointer is released outside the chart surface.
    pub fn on_pointer_release(&mut self) {
        if self.state.is_dragging() {
            debug!("drag ended");
            self.state = ToolState::Select;
            self.redraw();
        }
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.state.mode()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn series(&self) -> &[Ohlcv] {
        &self.series
    }

    fn resolve(&self, position: PixelPosition) -> Option<Point> {
        let time = self.adapter.pixel_to_time(position.x)?;
        let price = self.adapter.pixel_to_price(position.y)?;
        Some(Point::new(time, price))
    }

    fn insert(&mut self, build: impl FnOnce(crate::data_types::AnnotationId, Rgba) -> Annotation) {
        let id = self.store.next_id();
        let annotation = build(id, self.line_color);
        if let Err(err) = self.store.add(annotation) {
            // Unreachable with store-generated ids; drop the gesture.
            error!(%err, "failed to place annotation");
        }
    }

    fn redraw(&mut self) {
        self.bridge.redraw(self.store.list(), &self.series);
    }
}
