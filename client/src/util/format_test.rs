use super::*;

#[test]
fn format_date_renders_long_month() {
    assert_eq!(format_date("2025-03-01T10:00:00+00:00"), "March 01, 2025");
}

#[test]
fn format_date_accepts_fractional_seconds() {
    assert_eq!(format_date("2024-12-24T23:59:59.123456+00:00"), "December 24, 2024");
}

#[test]
fn format_date_accepts_zoneless_timestamps() {
    assert_eq!(format_date("2025-03-01T10:00:00"), "March 01, 2025");
    assert_eq!(format_date("2025-07-04T08:30:15.250"), "July 04, 2025");
}

#[test]
fn format_date_accepts_plain_dates() {
    assert_eq!(format_date("2024-02-29"), "February 29, 2024");
}

#[test]
fn format_date_passes_through_garbage() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

#[test]
fn trend_without_baseline() {
    assert_eq!(calculate_trend(0, 0), Trend { kind: TrendKind::NoChange, percentage: 0.0 });
    assert_eq!(calculate_trend(5, 0), Trend { kind: TrendKind::Increment, percentage: 100.0 });
}

#[test]
fn trend_increase_and_decrease() {
    let up = calculate_trend(15, 10);
    assert_eq!(up.kind, TrendKind::Increment);
    assert!((up.percentage - 50.0).abs() < f64::EPSILON);

    let down = calculate_trend(5, 20);
    assert_eq!(down.kind, TrendKind::Decrement);
    assert!((down.percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn trend_flat() {
    let flat = calculate_trend(7, 7);
    assert_eq!(flat.kind, TrendKind::NoChange);
    assert_eq!(flat.label(), "0%");
}

#[test]
fn trend_label_rounds() {
    assert_eq!(calculate_trend(4, 3).label(), "33%");
}
