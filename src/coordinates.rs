use crate::data_types::TimeValue;

/// Pixel-to-data conversion owned by the host chart engine.
///
/// Either method may return `None` near the chart edges; callers treat
/// that as "ignore this event".
pub trait CoordinateAdapter {
    fn pixel_to_price(&self, y: f32) -> Option<f64>;
    fn pixel_to_time(&self, x: f32) -> Option<TimeValue>;
}

/// Linear pixel-to-data mapping over fixed pixel bounds and data
/// domains. The y axis is inverted: the top pixel row maps to the
/// domain maximum.
#[derive(Clone, Debug)]
pub struct LinearCoordinateAdapter {
    x_pixels: (f32, f32),
    y_pixels: (f32, f32),
    time_domain: (f64, f64),
    price_domain: (f64, f64),
}

impl LinearCoordinateAdapter {
    pub fn new(
        x_pixels: (f32, f32),
        y_pixels: (f32, f32),
        time_domain: (f64, f64),
        price_domain: (f64, f64),
    ) -> Self {
        Self {
            x_pixels,
            y_pixels,
            time_domain,
            price_domain,
        }
    }

    fn invert(pixel: f32, pixels: (f32, f32), domain: (f64, f64), flip: bool) -> Option<f64> {
        let total = pixels.1 - pixels.0;
        if total <= 0.0 || pixel < pixels.0 || pixel > pixels.1 {
            return None;
        }
        let pct = ((pixel - pixels.0) / total) as f64;
        let pct = if flip { 1.0 - pct } else { pct };
        Some(domain.0 + (domain.1 - domain.0) * pct)
    }
}

impl CoordinateAdapter for LinearCoordinateAdapter {
    fn pixel_to_price(&self, y: f32) -> Option<f64> {
        Self::invert(y, self.y_pixels, self.price_domain, true)
    }

    fn pixel_to_time(&self, x: f32) -> Option<TimeValue> {
        Self::invert(x, self.x_pixels, self.time_domain, false).map(TimeValue::Timestamp)
    }
}
