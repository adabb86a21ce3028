use chrono::NaiveDate;
use chart_draw::data_types::{Annotation, AnnotationId, Ohlcv, Point, TimeValue};
use chart_draw::hit_test;
use chart_draw::theme::Rgba;

fn bars(closes: &[f64]) -> Vec<Ohlcv> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Ohlcv {
            time: TimeValue::Timestamp(i as f64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
        })
        .collect()
}

fn hray(id: u64, time: f64, price: f64) -> Annotation {
    Annotation::HorizontalRay {
        id: AnnotationId(id),
        anchor: Point::new(TimeValue::Timestamp(time), price),
        color: Rgba::from_hex(0x60a5fa),
    }
}

fn trend(id: u64, (t1, p1): (f64, f64), (t2, p2): (f64, f64)) -> Annotation {
    Annotation::TrendSegment {
        id: AnnotationId(id),
        points: [
            Point::new(TimeValue::Timestamp(t1), p1),
            Point::new(TimeValue::Timestamp(t2), p2),
        ],
        color: Rgba::from_hex(0x60a5fa),
    }
}

fn query(time: f64, price: f64) -> Point {
    Point::new(TimeValue::Timestamp(time), price)
}

#[test]
fn test_hray_tolerance_band() {
    // First close 100 -> 0.5% band = 0.5 around the anchor price
    let series = bars(&[100.0; 10]);
    let set = vec![hray(0, 0.0, 100.0)];

    assert!(hit_test::find(&query(5.0, 100.49), &set, &series).is_some());
    assert!(hit_test::find(&query(5.0, 100.51), &set, &series).is_none());
    // The band is exclusive at exactly 0.5
    assert!(hit_test::find(&query(5.0, 100.5), &set, &series).is_none());
}

#[test]
fn test_hray_only_matches_at_or_after_anchor() {
    let series = bars(&[100.0; 10]);
    let set = vec![hray(0, 5.0, 100.0)];

    assert!(hit_test::find(&query(4.9, 100.0), &set, &series).is_none());
    assert!(hit_test::find(&query(5.0, 100.0), &set, &series).is_some());
    assert!(hit_test::find(&query(9.0, 100.0), &set, &series).is_some());
}

#[test]
fn test_hray_day_anchor_ignores_time_gate() {
    let series = bars(&[100.0; 10]);
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let set = vec![Annotation::HorizontalRay {
        id: AnnotationId(0),
        anchor: Point::new(TimeValue::Day(day), 100.0),
        color: Rgba::from_hex(0x60a5fa),
    }];

    // No numeric anchor time, so any query time is in range
    assert!(hit_test::find(&query(0.0, 100.1), &set, &series).is_some());
}

#[test]
fn test_last_inserted_wins_overlap() {
    let series = bars(&[100.0; 10]);
    let set = vec![hray(0, 0.0, 100.0), hray(1, 0.0, 100.0)];

    let hit = hit_test::find(&query(5.0, 100.0), &set, &series).expect("overlap should match");
    assert_eq!(hit.id(), AnnotationId(1));
}

#[test]
fn test_trend_segment_time_bounds() {
    let series = bars(&[100.0; 20]);
    let set = vec![trend(0, (5.0, 100.0), (15.0, 100.0))];

    assert!(hit_test::find(&query(4.0, 100.0), &set, &series).is_none());
    assert!(hit_test::find(&query(16.0, 100.0), &set, &series).is_none());
    assert!(hit_test::find(&query(10.0, 100.2), &set, &series).is_some());
}

#[test]
fn test_trend_segment_price_band() {
    // Flat segment at 100; 1% band of first close 100 = 1.0
    let series = bars(&[100.0; 20]);
    let set = vec![trend(0, (0.0, 100.0), (10.0, 100.0))];

    // expected = 100 + (q - 100) * 0.5 at the midpoint, so a query
    // 1.5 above the segment sits 0.75 from expected: inside the band
    assert!(hit_test::find(&query(5.0, 101.5), &set, &series).is_some());
    assert!(hit_test::find(&query(5.0, 102.5), &set, &series).is_none());
}

#[test]
fn test_zero_time_span_segment_never_matches() {
    let series = bars(&[100.0; 20]);
    let set = vec![trend(0, (5.0, 100.0), (5.0, 110.0))];

    // Degenerate interpolation must not panic or match
    assert!(hit_test::find(&query(5.0, 105.0), &set, &series).is_none());
}

#[test]
fn test_empty_series_never_matches() {
    let set = vec![hray(0, 0.0, 100.0)];
    assert!(hit_test::find(&query(5.0, 100.0), &set, &[]).is_none());
}

#[test]
fn test_ray_uses_line_band() {
    let series = bars(&[100.0; 20]);
    let set = vec![Annotation::Ray {
        id: AnnotationId(0),
        points: [
            Point::new(TimeValue::Timestamp(0.0), 100.0),
            Point::new(TimeValue::Timestamp(10.0), 100.0),
        ],
        color: Rgba::from_hex(0x60a5fa),
    }];

    assert!(hit_test::find(&query(5.0, 100.2), &set, &series).is_some());
    assert!(hit_test::find(&query(5.0, 103.0), &set, &series).is_none());
}
