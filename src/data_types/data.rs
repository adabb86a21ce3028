use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time coordinate on the chart's X axis.
///
/// Intraday series key their bars by numeric timestamp; daily and
/// slower series key them by calendar day. The two representations are
/// never mixed within one annotation's point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Timestamp(f64),
    Day(NaiveDate),
}

impl TimeValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Timestamp(t) => Some(*t),
            Self::Day(_) => None,
        }
    }

    /// Shifts a numeric timestamp by `delta`. Calendar days are not
    /// shifted: a drag on a day-keyed annotation moves price only.
    pub fn shifted(&self, delta: f64) -> Self {
        match self {
            Self::Timestamp(t) => Self::Timestamp(t + delta),
            Self::Day(d) => Self::Day(*d),
        }
    }

    /// Numeric difference `self - earlier`, when both are timestamps.
    pub fn delta(&self, earlier: &Self) -> Option<f64> {
        match (self, earlier) {
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a - b),
            _ => None,
        }
    }

    /// Time ordering used by rays: numeric comparison when both sides
    /// are timestamps, `true` otherwise.
    pub fn at_or_after(&self, other: &Self) -> bool {
        match (self.as_numeric(), other.as_numeric()) {
            (Some(a), Some(b)) => a >= b,
            _ => true,
        }
    }
}

/// A (time, price) coordinate in data space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: TimeValue,
    pub price: f64,
}

impl Point {
    pub fn new(time: TimeValue, price: f64) -> Self {
        Self { time, price }
    }
}

/// A raw pointer position in screen pixels, before coordinate
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PixelPosition {
    pub x: f32,
    pub y: f32,
}

impl PixelPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One bar of the host-supplied candlestick series (time-ascending).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    pub time: TimeValue,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
