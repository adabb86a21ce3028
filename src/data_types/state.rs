use serde::{Deserialize, Serialize};

use super::annotations::AnnotationId;
use super::data::Point;

/// The tool the user has selected on the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    #[default]
    Select,
    DrawTrend,
    DrawHorizontalRay,
    DrawRay,
}

/// A drawing tool awaiting its first click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTool {
    Trend,
    HorizontalRay,
    Ray,
}

/// The two-point subset of the drawing tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwoPointTool {
    Trend,
    Ray,
}

/// Tool mode, placement phase, and drag session as one value, so that
/// combinations like "dragging while awaiting a second point" cannot
/// be constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ToolState {
    #[default]
    Select,
    AwaitingFirstPoint(DrawTool),
    AwaitingSecondPoint { tool: TwoPointTool, first: Point },
    Dragging { id: AnnotationId, last_point: Point },
}

impl ToolState {
    /// Applies a toolbar selection. Pending placement points are
    /// discarded; an active drag keeps its state (it only ends on
    /// pointer release).
    pub fn select_tool(&mut self, mode: ToolMode) {
        if matches!(self, Self::Dragging { .. }) {
            return;
        }
        *self = match mode {
            ToolMode::Select => Self::Select,
            ToolMode::DrawTrend => Self::AwaitingFirstPoint(DrawTool::Trend),
            ToolMode::DrawHorizontalRay => Self::AwaitingFirstPoint(DrawTool::HorizontalRay),
            ToolMode::DrawRay => Self::AwaitingFirstPoint(DrawTool::Ray),
        };
    }

    /// The toolbar mode this state presents as. A drag counts as
    /// `Select` since drags only start from the select tool.
    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Select | Self::Dragging { .. } => ToolMode::Select,
            Self::AwaitingFirstPoint(DrawTool::Trend)
            | Self::AwaitingSecondPoint { tool: TwoPointTool::Trend, .. } => ToolMode::DrawTrend,
            Self::AwaitingFirstPoint(DrawTool::HorizontalRay) => ToolMode::DrawHorizontalRay,
            Self::AwaitingFirstPoint(DrawTool::Ray)
            | Self::AwaitingSecondPoint { tool: TwoPointTool::Ray, .. } => ToolMode::DrawRay,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
