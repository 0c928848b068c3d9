//! Display formatting for dates and month-over-month trends.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Format an ISO 8601 timestamp as `"March 01, 2025"`.
///
/// Accepts RFC 3339, zone-less date-times (`timestamp` columns), and plain
/// dates. Unparseable input is returned unchanged so a bad row never blanks
/// a cell.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let Some(date) = parse_date(iso.trim()) else {
        return iso.to_owned();
    };
    date.format(format_description!("[month repr:long] [day], [year]"))
        .unwrap_or_else(|_| iso.to_owned())
}

fn parse_date(raw: &str) -> Option<Date> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).map(PrimitiveDateTime::date))
        .or_else(|_| Date::parse(raw, &Iso8601::DEFAULT))
        .ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendKind {
    Increment,
    Decrement,
    NoChange,
}

/// Month-over-month change shown on a stats card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub kind: TrendKind,
    /// Absolute change relative to last month, in percent.
    pub percentage: f64,
}

impl Trend {
    /// Rounded percentage label, e.g. `"50%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.0}%", self.percentage)
    }
}

/// Compare this month's count with last month's.
///
/// With no baseline, any activity counts as a 100% increase.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_trend(current: u64, last: u64) -> Trend {
    if last == 0 {
        return if current == 0 {
            Trend { kind: TrendKind::NoChange, percentage: 0.0 }
        } else {
            Trend { kind: TrendKind::Increment, percentage: 100.0 }
        };
    }

    let change = current as f64 - last as f64;
    let percentage = (change / last as f64 * 100.0).abs();
    let kind = match current.cmp(&last) {
        std::cmp::Ordering::Greater => TrendKind::Increment,
        std::cmp::Ordering::Less => TrendKind::Decrement,
        std::cmp::Ordering::Equal => TrendKind::NoChange,
    };
    Trend { kind, percentage }
}
