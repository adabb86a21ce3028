use serde::{Deserialize, Serialize};

use super::data::Point;
use crate::theme::Rgba;

/// Session-unique annotation identity, generated by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotationId(pub u64);

/// A user-drawn line overlay on the price chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    /// A bounded line between two fixed points.
    TrendSegment {
        id: AnnotationId,
        points: [Point; 2],
        color: Rgba,
    },
    /// A horizontal line at the anchor price, extending forward in
    /// time from the anchor.
    HorizontalRay {
        id: AnnotationId,
        anchor: Point,
        color: Rgba,
    },
    /// A line through two points, continued flat to the chart's right
    /// edge at the second point's price level.
    Ray {
        id: AnnotationId,
        points: [Point; 2],
        color: Rgba,
    },
}

impl Annotation {
    pub fn id(&self) -> AnnotationId {
        match self {
            Self::TrendSegment { id, .. } | Self::HorizontalRay { id, .. } | Self::Ray { id, .. } => {
                *id
            }
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Self::TrendSegment { color, .. }
            | Self::HorizontalRay { color, .. }
            | Self::Ray { color, .. } => *color,
        }
    }

    /// Shifts every point by `delta_price`, and by `delta_time` where
    /// the point's time is numeric.
    pub(crate) fn translate(&mut self, delta_time: f64, delta_price: f64) {
        match self {
            Self::TrendSegment { points, .. } | Self::Ray { points, .. } => {
                for p in points.iter_mut() {
                    p.time = p.time.shifted(delta_time);
                    p.price += delta_price;
                }
            }
            Self::HorizontalRay { anchor, .. } => {
                anchor.time = anchor.time.shifted(delta_time);
                anchor.price += delta_price;
            }
        }
    }
}
